use chrono::NaiveDate;
use datev_extf::core::*;
use datev_extf::datev::*;
use rust_decimal_macros::dec;

fn main() {
    let meta = HeaderMetadataBuilder::new()
        .consultant_id(12345)
        .client_id(99999)
        .fiscal_year_start(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .account_code_length(4)
        .period(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .user_initials("MM")
        .currency("EUR")
        .build()
        .expect("metadata complete");

    // Buchungsstapel
    let mut postings = transaction_writer(&meta);
    postings.write_header_now();
    postings
        .write_rows(&[
            DataRow::new()
                .with("Umsatz (ohne Soll/Haben-Kz)", dec!(1190.00))
                .with("Soll/Haben-Kennzeichen", "S")
                .with("Konto", 10000)
                .with("Gegenkonto (ohne BU-Schlüssel)", 8400)
                .with("Belegdatum", NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
                .with("Belegfeld 1", "RE-2024-001")
                .with("Buchungstext", "RE-2024-001 Beratung"),
            DataRow::new()
                .with("Umsatz (ohne Soll/Haben-Kz)", dec!(59.38))
                .with("Soll/Haben-Kennzeichen", "S")
                .with("Konto", 10001)
                .with("Gegenkonto (ohne BU-Schlüssel)", 8400)
                .with("Belegdatum", NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
                .with("Belegfeld 1", "RE-2024-002")
                .with("Buchungstext", "RE-2024-002 Hosting"),
        ])
        .expect("rows match schema");

    // Debitoren/Kreditoren
    let mut partners = partner_writer(&meta);
    partners.write_header_now();
    partners
        .write_row(
            &DataRow::new()
                .with("Konto", 10000)
                .with("Name (Adressattyp Unternehmen)", "Kunde AG")
                .with("Adressattyp", "2")
                .with("Ort", "München")
                .with("IBAN-Nr. 1", "DE89370400440532013000"),
        )
        .expect("row matches schema");

    // Kontenbeschriftungen
    let mut labels = account_writer(&meta);
    labels.write_header_now();
    labels
        .write_row(
            &DataRow::new()
                .with("Konto", 8400)
                .with("Kontobeschriftung", "Erlöse 19% USt"),
        )
        .expect("row matches schema");

    for (category, writer) in [
        (DataCategory::Transactions, postings),
        (DataCategory::Partners, partners),
        (DataCategory::Accounts, labels),
    ] {
        let csv = writer.into_string();
        println!("=== {}.csv ({} bytes) ===", category.file_stem(), csv.len());
        for (i, line) in csv.lines().enumerate().take(3) {
            let end = line
                .char_indices()
                .nth(100)
                .map_or(line.len(), |(idx, _)| idx);
            println!("Line {}: {}", i + 1, &line[..end]);
        }
        println!();
    }
}
