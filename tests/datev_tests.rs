#![cfg(all(feature = "transactions", feature = "partners", feature = "accounts"))]

use chrono::{NaiveDate, NaiveDateTime};
use datev_extf::core::*;
use datev_extf::datev::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn generated_at() -> NaiveDateTime {
    date(2023, 2, 3).and_hms_milli_opt(4, 5, 6, 789).unwrap()
}

fn metadata() -> HeaderMetadata {
    HeaderMetadataBuilder::new()
        .consultant_id(1001)
        .client_id(2002)
        .fiscal_year_start(date(2023, 1, 1))
        .account_code_length(8)
        .period(date(2023, 1, 1), date(2023, 1, 31))
        .user_initials("AB")
        .currency("EUR")
        .build()
        .unwrap()
}

/// Split one output line into `(decoded text, was quoted)` per field.
fn fields(line: &str) -> Vec<(String, bool)> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            ';' if !in_quotes => {
                out.push((std::mem::take(&mut current), quoted));
                quoted = false;
            }
            _ => current.push(ch),
        }
    }
    out.push((current, quoted));
    out
}

fn data_lines(csv: &str) -> Vec<&str> {
    csv.split("\r\n").skip(2).filter(|l| !l.is_empty()).collect()
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

#[test]
fn header_line_for_every_format() {
    let meta = metadata();
    let writers = [
        (transaction_writer(&meta), 21, "Buchungsstapel", 12),
        (partner_writer(&meta), 16, "Debitoren/Kreditoren", 5),
        (account_writer(&meta), 20, "Kontenbeschriftungen", 3),
    ];
    for (mut writer, code, name, version) in writers {
        writer.write_header_now();
        let csv = writer.into_string();
        let first = csv.trim_start_matches(BOM).split("\r\n").next().unwrap();
        let header = fields(first);

        assert_eq!(header.len(), HEADER_FIELD_COUNT, "{name}");
        assert_eq!(header[0], ("EXTF".to_string(), true));
        assert_eq!(header[1], ("700".to_string(), false));
        assert_eq!(header[2], (code.to_string(), false));
        assert_eq!(header[3], (name.to_string(), true));
        assert_eq!(header[4], (version.to_string(), false));

        let stamp = &header[5].0;
        assert_eq!(stamp.len(), 17, "{stamp}");
        assert!(stamp.chars().all(|c| c.is_ascii_digit()), "{stamp}");
    }
}

#[test]
fn header_metadata_positions() {
    let mut writer = transaction_writer(&metadata());
    writer.write_header(generated_at());
    let csv = writer.into_string();
    let first = csv.trim_start_matches(BOM).split("\r\n").next().unwrap();
    let header = fields(first);

    assert_eq!(header[5].0, "20230203040506789");
    assert_eq!(header[10].0, "1001");
    assert_eq!(header[11].0, "2002");
    assert_eq!(header[12], ("20230101".to_string(), false));
    assert_eq!(header[13].0, "8");
    assert_eq!(header[14].0, "20230101");
    assert_eq!(header[15].0, "20230131");
    assert_eq!(header[16], ("Buchungsstapel 2023-01-01".to_string(), true));
    assert_eq!(header[17].0, "AB");
    assert_eq!(header[18].0, "1");
    assert_eq!(header[20].0, "0");
    assert_eq!(header[21].0, "EUR");
    for reserved in [6, 7, 8, 9, 22, 23, 24, 25, 26, 27, 28, 29, 30] {
        assert_eq!(header[reserved], (String::new(), true), "position {}", reserved + 1);
    }
}

#[test]
fn locked_year_end_header() {
    let meta = HeaderMetadataBuilder::new()
        .consultant_id(1001)
        .client_id(2002)
        .fiscal_year_start(date(2023, 1, 1))
        .account_code_length(4)
        .period(date(2023, 12, 1), date(2023, 12, 31))
        .user_initials("")
        .currency("EUR")
        .booking_type(BookingType::YearEnd)
        .locked(true)
        .build()
        .unwrap();
    let writer = transaction_writer(&meta);
    let header = writer.header_record(generated_at());
    assert_eq!(header[17], Value::from(""));
    assert_eq!(header[18], Value::Integer(2));
    assert_eq!(header[20], Value::Integer(1));
}

#[test]
fn output_starts_with_bom() {
    let mut writer = partner_writer(&metadata());
    writer.write_header(generated_at());
    let bytes = writer.into_bytes();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    assert_eq!(bytes[3], b'"');
}

#[test]
fn column_name_row_matches_schema() {
    let mut writer = partner_writer(&metadata());
    writer.write_header(generated_at());
    let csv = writer.into_string();
    let second = csv.split("\r\n").nth(1).unwrap();
    let names: Vec<String> = fields(second).into_iter().map(|(name, _)| name).collect();
    let expected: Vec<String> = PARTNER_FIELDS.iter().map(|f| f.name.to_string()).collect();
    assert_eq!(names, expected);
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

#[test]
fn transaction_row_truncates_contra_account_and_text() {
    let mut writer = transaction_writer(&metadata());
    writer.write_header(generated_at());
    writer
        .write_row(
            &DataRow::new()
                .with("Konto", 12345678)
                .with("Gegenkonto (ohne BU-Schlüssel)", "987654321012")
                .with("Buchungstext", "x".repeat(100)),
        )
        .unwrap();

    let csv = writer.into_string();
    let rows = data_lines(&csv);
    assert_eq!(rows.len(), 1);
    let row = fields(rows[0]);
    assert_eq!(row.len(), TRANSACTION_FIELDS.len());
    assert_eq!(row[6], ("12345678".to_string(), false));
    assert_eq!(row[7], ("987654321".to_string(), true));
    assert_eq!(row[13], ("x".repeat(60), true));
    assert_eq!(row[0], (String::new(), true));
}

#[test]
fn account_row_with_absent_language() {
    let mut writer = account_writer(&metadata());
    writer.write_header(generated_at());
    writer
        .write_row(
            &DataRow::new()
                .with("Konto", 1000)
                .with("Kontobeschriftung", "Kasse")
                .with("SprachId", None::<&str>)
                .with("Kontenbeschriftung lang", None::<&str>),
        )
        .unwrap();

    let csv = writer.into_string();
    let rows = data_lines(&csv);
    assert_eq!(rows, ["\"1000\";\"Kasse\";\"\";\"\""]);
}

#[test]
fn amounts_and_dates_in_transactions() {
    let mut writer = transaction_writer(&metadata());
    writer.write_header(generated_at());
    writer
        .write_row(
            &DataRow::new()
                .with("Umsatz (ohne Soll/Haben-Kz)", dec!(1190.00))
                .with("Soll/Haben-Kennzeichen", "S")
                .with("Kurs", dec!(0))
                .with("Belegdatum", date(2023, 1, 15))
                .with("Leistungsdatum", date(2023, 1, 14))
                .with("Generalumkehr (GU)", true),
        )
        .unwrap();

    let csv = writer.into_string();
    let row = fields(data_lines(&csv)[0]);
    assert_eq!(row[0], ("1190,00".to_string(), false));
    assert_eq!(row[1], ("S".to_string(), true));
    assert_eq!(row[3], (String::new(), true));
    assert_eq!(row[9], ("1501".to_string(), true));
    assert_eq!(row[114], ("14012023".to_string(), true));
    assert_eq!(row[117], ("1".to_string(), false));
}

#[test]
fn partner_row_caps_names() {
    let mut writer = partner_writer(&metadata());
    writer.write_header(generated_at());
    writer
        .write_row(
            &DataRow::new()
                .with("Konto", 10000)
                .with("Name (Adressattyp Unternehmen)", "A".repeat(70))
                .with("Adressattyp", "2")
                .with("Kurzbezeichnung", "Musterfirma GmbH & Co. KG")
                .with("Ort", "München")
                .with("IBAN-Nr. 1", "DE89370400440532013000"),
        )
        .unwrap();

    let csv = writer.into_string();
    let row = fields(data_lines(&csv)[0]);
    assert_eq!(row.len(), PARTNER_FIELDS.len());
    assert_eq!(row[0].0, "10000");
    assert_eq!(row[1].0.chars().count(), 50);
    assert_eq!(row[6].0, "2");
    assert_eq!(row[7].0, "Musterfirma Gmb");
    assert_eq!(row[18], ("München".to_string(), true));
    assert_eq!(row[44].0, "DE89370400440532013000");
}

#[test]
fn rows_keep_caller_order() {
    let mut writer = account_writer(&metadata());
    writer.write_header(generated_at());
    let rows: Vec<DataRow> = [4400, 1000, 4400]
        .into_iter()
        .map(|konto| DataRow::new().with("Konto", konto))
        .collect();
    assert_eq!(writer.write_rows(&rows).unwrap(), 3);

    let csv = writer.into_string();
    let kontos: Vec<String> = data_lines(&csv)
        .into_iter()
        .map(|l| fields(l).remove(0).0)
        .collect();
    assert_eq!(kontos, ["4400", "1000", "4400"]);
}

#[test]
fn unknown_field_is_rejected() {
    let mut writer = account_writer(&metadata());
    let err = writer
        .write_row(&DataRow::new().with("Kontonummer", 1000))
        .unwrap_err();
    assert!(matches!(err, DatevError::UnknownField(ref f) if f == "Kontonummer"));
    assert!(err.to_string().contains("Kontonummer"));
}

#[test]
fn custom_format_through_generic_writer() {
    let schema = FieldSchema::new(vec![
        FieldSpec::new("Konto", Some(9)),
        FieldSpec::new("Bemerkung", None),
    ])
    .unwrap();
    let format = RecordFormat {
        code: 46,
        name: "Zahlungsbedingungen".into(),
        version: 2,
        dataset_name: "Zahlungsbedingungen".into(),
        schema,
    };
    assert_eq!(format.category(), None);

    let mut writer = DatevWriter::new(format, metadata());
    writer.write_header(generated_at());
    writer
        .write_row(&DataRow::new().with("Bemerkung", "netto 30 Tage"))
        .unwrap();
    let csv = writer.into_string();
    assert!(csv.contains(";46;\"Zahlungsbedingungen\";2;"));
    assert_eq!(data_lines(&csv), ["\"\";\"netto 30 Tage\""]);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn metadata_from_json() {
    let json = r#"{
        "consultant_id": 1001,
        "client_id": 2002,
        "fiscal_year_start": "2023-01-01",
        "account_code_length": 8,
        "period_start": "2023-01-01",
        "period_end": "2023-01-31",
        "user_initials": "AB",
        "currency": "EUR"
    }"#;
    let meta: HeaderMetadata = serde_json::from_str(json).unwrap();
    assert_eq!(meta, metadata());
}

#[test]
fn metadata_from_json_with_flags() {
    let json = r#"{
        "consultant_id": 1001,
        "client_id": 2002,
        "fiscal_year_start": "2023-01-01",
        "account_code_length": 8,
        "period_start": "2023-01-01",
        "period_end": "2023-01-31",
        "user_initials": "AB",
        "currency": "EUR",
        "booking_type": "year_end",
        "locked": true
    }"#;
    let meta: HeaderMetadata = serde_json::from_str(json).unwrap();
    assert_eq!(meta.booking_type, BookingType::YearEnd);
    assert!(meta.locked);
}

#[test]
fn builder_reports_first_missing_argument() {
    let err = HeaderMetadataBuilder::new().build().unwrap_err();
    assert!(matches!(err, DatevError::MissingArgument("consultant_id")));

    let err = HeaderMetadataBuilder::new()
        .consultant_id(1001)
        .client_id(2002)
        .fiscal_year_start(date(2023, 1, 1))
        .account_code_length(8)
        .period_start(date(2023, 1, 1))
        .build()
        .unwrap_err();
    assert!(matches!(err, DatevError::MissingArgument("period_end")));
}

#[test]
fn file_stems() {
    assert_eq!(DataCategory::Transactions.file_stem(), "EXTF_Buchungsstapel");
    assert_eq!(DataCategory::Partners.file_stem(), "EXTF_Debitoren_Kreditoren");
    assert_eq!(DataCategory::Accounts.file_stem(), "EXTF_Kontenbeschriftungen");
}

// ---------------------------------------------------------------------------
// Snapshot tests (insta)
// ---------------------------------------------------------------------------

#[test]
fn snapshot_account_file() {
    let mut writer = account_writer(&metadata());
    writer.write_header(generated_at());
    writer
        .write_rows(&[
            DataRow::new().with("Konto", 1000).with("Kontobeschriftung", "Kasse"),
            DataRow::new()
                .with("Konto", 1200)
                .with("Kontobeschriftung", "Bank")
                .with("SprachId", "de-DE")
                .with("Kontenbeschriftung lang", "Bankkonto Sparkasse"),
        ])
        .unwrap();
    let rendered = writer
        .into_string()
        .replace(BOM, "<BOM>")
        .replace("\r\n", "\n");
    insta::assert_snapshot!(rendered, @r#"
<BOM>"EXTF";700;20;"Kontenbeschriftungen";3;"20230203040506789";"";"";"";"";1001;2002;20230101;8;20230101;20230131;"Kontenbeschriftungen";"AB";1;0;0;"EUR";"";"";"";"";"";"";"";"";""
"Konto";"Kontobeschriftung";"SprachId";"Kontenbeschriftung lang"
"1000";"Kasse";"";""
"1200";"Bank";"de-DE";"Bankkonto Sparkasse"
"#);
}
