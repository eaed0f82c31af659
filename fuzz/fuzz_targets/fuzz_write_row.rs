#![no_main]

use chrono::NaiveDate;
use datev_extf::core::{DataRow, HeaderMetadataBuilder};
use datev_extf::datev::{TRANSACTION_FIELDS, transaction_writer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let meta = HeaderMetadataBuilder::new()
        .consultant_id(1001)
        .client_id(1)
        .fiscal_year_start(d)
        .account_code_length(4)
        .period(d, d)
        .user_initials("FZ")
        .currency("EUR")
        .build()
        .unwrap();

    // One input line per column; writing must never panic.
    let row: DataRow = s
        .split('\n')
        .zip(TRANSACTION_FIELDS)
        .map(|(value, field)| (field.name.to_string(), value.to_string()))
        .collect();
    let mut writer = transaction_writer(&meta);
    writer.write_header(d.and_hms_opt(0, 0, 0).unwrap());
    writer.write_row(&row).unwrap();
    assert_eq!(writer.rows_written(), 1);
});
