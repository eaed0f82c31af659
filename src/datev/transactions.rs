//! Buchungsstapel (format category 21): one row per posting.

use chrono::NaiveDate;

use super::schema::{DataCategory, FieldSchema, FieldSpec, RecordFormat};
use super::writer::DatevWriter;
use crate::core::HeaderMetadata;

/// Buchungsstapel columns in DATEV order.
///
/// `Belegdatum` is capped at 4 characters: a [`Value::Date`](crate::core::Value::Date)
/// renders as `TTMMJJJJ` and is cut to the `TTMM` form DATEV expects.
pub static TRANSACTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::open("Umsatz (ohne Soll/Haben-Kz)"),
    FieldSpec::open("Soll/Haben-Kennzeichen"),
    FieldSpec::open("WKZ Umsatz"),
    FieldSpec::open("Kurs"),
    FieldSpec::open("Basis-Umsatz"),
    FieldSpec::open("WKZ Basis-Umsatz"),
    FieldSpec::open("Konto"),
    FieldSpec::capped("Gegenkonto (ohne BU-Schlüssel)", 9),
    FieldSpec::capped("BU-Schlüssel", 4),
    FieldSpec::capped("Belegdatum", 4),
    FieldSpec::capped("Belegfeld 1", 36),
    FieldSpec::capped("Belegfeld 2", 12),
    FieldSpec::open("Skonto"),
    FieldSpec::capped("Buchungstext", 60),
    FieldSpec::open("Postensperre"),
    FieldSpec::open("Diverse Adressnummer"),
    FieldSpec::open("Geschäftspartnerbank"),
    FieldSpec::open("Sachverhalt"),
    FieldSpec::open("Zinssperre"),
    FieldSpec::open("Beleglink"),
    FieldSpec::open("Beleginfo - Art 1"),
    FieldSpec::open("Beleginfo - Inhalt 1"),
    FieldSpec::open("Beleginfo - Art 2"),
    FieldSpec::open("Beleginfo - Inhalt 2"),
    FieldSpec::open("Beleginfo - Art 3"),
    FieldSpec::open("Beleginfo - Inhalt 3"),
    FieldSpec::open("Beleginfo - Art 4"),
    FieldSpec::open("Beleginfo - Inhalt 4"),
    FieldSpec::open("Beleginfo - Art 5"),
    FieldSpec::open("Beleginfo - Inhalt 5"),
    FieldSpec::open("Beleginfo - Art 6"),
    FieldSpec::open("Beleginfo - Inhalt 6"),
    FieldSpec::open("Beleginfo - Art 7"),
    FieldSpec::open("Beleginfo - Inhalt 7"),
    FieldSpec::open("Beleginfo - Art 8"),
    FieldSpec::open("Beleginfo - Inhalt 8"),
    FieldSpec::capped("KOST1 - Kostenstelle", 36),
    FieldSpec::capped("KOST2 - Kostenstelle", 36),
    FieldSpec::open("Kost-Menge"),
    FieldSpec::open("EU-Land u. UStID (Bestimmung)"),
    FieldSpec::open("EU-Steuersatz (Bestimmung)"),
    FieldSpec::open("Abw. Versteuerungsart"),
    FieldSpec::open("Sachverhalt L+L"),
    FieldSpec::open("Funktionsergänzung L+L"),
    FieldSpec::open("BU 49 Hauptfunktionstyp"),
    FieldSpec::open("BU 49 Hauptfunktionsnummer"),
    FieldSpec::open("BU 49 Funktionsergänzung"),
    FieldSpec::open("Zusatzinformation - Art 1"),
    FieldSpec::open("Zusatzinformation- Inhalt 1"),
    FieldSpec::open("Zusatzinformation - Art 2"),
    FieldSpec::open("Zusatzinformation- Inhalt 2"),
    FieldSpec::open("Zusatzinformation - Art 3"),
    FieldSpec::open("Zusatzinformation- Inhalt 3"),
    FieldSpec::open("Zusatzinformation - Art 4"),
    FieldSpec::open("Zusatzinformation- Inhalt 4"),
    FieldSpec::open("Zusatzinformation - Art 5"),
    FieldSpec::open("Zusatzinformation- Inhalt 5"),
    FieldSpec::open("Zusatzinformation - Art 6"),
    FieldSpec::open("Zusatzinformation- Inhalt 6"),
    FieldSpec::open("Zusatzinformation - Art 7"),
    FieldSpec::open("Zusatzinformation- Inhalt 7"),
    FieldSpec::open("Zusatzinformation - Art 8"),
    FieldSpec::open("Zusatzinformation- Inhalt 8"),
    FieldSpec::open("Zusatzinformation - Art 9"),
    FieldSpec::open("Zusatzinformation- Inhalt 9"),
    FieldSpec::open("Zusatzinformation - Art 10"),
    FieldSpec::open("Zusatzinformation- Inhalt 10"),
    FieldSpec::open("Zusatzinformation - Art 11"),
    FieldSpec::open("Zusatzinformation- Inhalt 11"),
    FieldSpec::open("Zusatzinformation - Art 12"),
    FieldSpec::open("Zusatzinformation- Inhalt 12"),
    FieldSpec::open("Zusatzinformation - Art 13"),
    FieldSpec::open("Zusatzinformation- Inhalt 13"),
    FieldSpec::open("Zusatzinformation - Art 14"),
    FieldSpec::open("Zusatzinformation- Inhalt 14"),
    FieldSpec::open("Zusatzinformation - Art 15"),
    FieldSpec::open("Zusatzinformation- Inhalt 15"),
    FieldSpec::open("Zusatzinformation - Art 16"),
    FieldSpec::open("Zusatzinformation- Inhalt 16"),
    FieldSpec::open("Zusatzinformation - Art 17"),
    FieldSpec::open("Zusatzinformation- Inhalt 17"),
    FieldSpec::open("Zusatzinformation - Art 18"),
    FieldSpec::open("Zusatzinformation- Inhalt 18"),
    FieldSpec::open("Zusatzinformation - Art 19"),
    FieldSpec::open("Zusatzinformation- Inhalt 19"),
    FieldSpec::open("Zusatzinformation - Art 20"),
    FieldSpec::open("Zusatzinformation- Inhalt 20"),
    FieldSpec::open("Stück"),
    FieldSpec::open("Gewicht"),
    FieldSpec::open("Zahlweise"),
    FieldSpec::open("Forderungsart"),
    FieldSpec::open("Veranlagungsjahr"),
    FieldSpec::open("Zugeordnete Fälligkeit"),
    FieldSpec::open("Skontotyp"),
    FieldSpec::open("Auftragsnummer"),
    FieldSpec::open("Buchungstyp"),
    FieldSpec::open("USt-Schlüssel (Anzahlungen)"),
    FieldSpec::open("EU-Land (Anzahlungen)"),
    FieldSpec::open("Sachverhalt L+L (Anzahlungen)"),
    FieldSpec::open("EU-Steuersatz (Anzahlungen)"),
    FieldSpec::open("Erlöskonto (Anzahlungen)"),
    FieldSpec::open("Herkunft-Kz"),
    FieldSpec::open("Buchungs GUID"),
    FieldSpec::open("KOST-Datum"),
    FieldSpec::open("SEPA-Mandatsreferenz"),
    FieldSpec::open("Skontosperre"),
    FieldSpec::open("Gesellschaftername"),
    FieldSpec::open("Beteiligtennummer"),
    FieldSpec::open("Identifikationsnummer"),
    FieldSpec::open("Zeichnernummer"),
    FieldSpec::open("Postensperre bis"),
    FieldSpec::open("Bezeichnung SoBil-Sachverhalt"),
    FieldSpec::open("Kennzeichen SoBil-Buchung"),
    FieldSpec::open("Festschreibung"),
    FieldSpec::open("Leistungsdatum"),
    FieldSpec::open("Datum Zuord. Steuerperiode"),
    FieldSpec::open("Fälligkeit"),
    FieldSpec::open("Generalumkehr (GU)"),
    FieldSpec::open("Steuersatz"),
    FieldSpec::open("Land"),
    FieldSpec::open("Abrechnungsreferenz"),
    FieldSpec::open("BVV-Position"),
    FieldSpec::open("EU-Land u. UStID (Ursprung)"),
    FieldSpec::open("EU-Steuersatz (Ursprung)"),
];

/// Buchungsstapel format. The dataset name is `Buchungsstapel <period start>`.
pub fn transaction_format(period_start: NaiveDate) -> RecordFormat {
    let category = DataCategory::Transactions;
    RecordFormat::for_category(
        category,
        format!("{} {}", category.format_name(), period_start.format("%Y-%m-%d")),
        FieldSchema::from_static(TRANSACTION_FIELDS),
    )
}

/// Writer for a Buchungsstapel file.
pub fn transaction_writer(metadata: &HeaderMetadata) -> DatevWriter {
    DatevWriter::new(transaction_format(metadata.period_start), metadata.clone())
}
