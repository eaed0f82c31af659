//! Debitoren/Kreditoren (format category 16): partner master data.
//!
//! Besides identity and address columns the layout repeats a bank block
//! (code, name, account, country, IBAN, SWIFT, holder, main flag, validity)
//! ten times and ends with dunning and SEPA mandate columns.

use super::schema::{DataCategory, FieldSchema, FieldSpec, RecordFormat};
use super::writer::DatevWriter;
use crate::core::HeaderMetadata;

/// Debitoren/Kreditoren columns in DATEV order.
pub static PARTNER_FIELDS: &[FieldSpec] = &[
    FieldSpec::capped("Konto", 9),
    FieldSpec::capped("Name (Adressattyp Unternehmen)", 50),
    FieldSpec::capped("Unternehmensgegenstand", 50),
    FieldSpec::capped("Name (Adressattyp natürl. Person)", 30),
    FieldSpec::capped("Vorname (Adressattyp natürl. Person)", 30),
    FieldSpec::capped("Name (Adressattyp keine Angabe)", 50),
    FieldSpec::capped("Adressattyp", 1),
    FieldSpec::capped("Kurzbezeichnung", 15),
    FieldSpec::open("EU-Land"),
    FieldSpec::capped("EU-UStID", 13),
    FieldSpec::open("Anrede"),
    FieldSpec::open("Titel/Akad. Grad"),
    FieldSpec::open("Adelstitel"),
    FieldSpec::open("Namensvorsatz"),
    FieldSpec::open("Adressart"),
    FieldSpec::open("Straße"),
    FieldSpec::open("Postfach"),
    FieldSpec::open("Postleitzahl"),
    FieldSpec::open("Ort"),
    FieldSpec::open("Land"),
    FieldSpec::open("Versandzusatz"),
    FieldSpec::open("Adresszusatz"),
    FieldSpec::open("Abweichende Anrede"),
    FieldSpec::open("Abw. Zustellbezeichnung 1"),
    FieldSpec::open("Abw. Zustellbezeichnung 2"),
    FieldSpec::open("Kennz. Korrespondenzadresse"),
    FieldSpec::open("Adresse Gültig von"),
    FieldSpec::open("Adresse Gültig bis"),
    FieldSpec::open("Telefon"),
    FieldSpec::open("Bemerkung (Telefon)"),
    FieldSpec::open("Telefon GL"),
    FieldSpec::open("Bemerkung (Telefon GL)"),
    FieldSpec::open("E-Mail"),
    FieldSpec::open("Bemerkung (E-Mail)"),
    FieldSpec::open("Internet"),
    FieldSpec::open("Bemerkung (Internet)"),
    FieldSpec::open("Fax"),
    FieldSpec::open("Bemerkung (Fax)"),
    FieldSpec::open("Sonstige"),
    FieldSpec::open("Bemerkung (Sonstige)"),
    FieldSpec::open("Bankleitzahl 1"),
    FieldSpec::open("Bankbezeichnung 1"),
    FieldSpec::open("Bank-Kontonummer 1"),
    FieldSpec::open("Länderkennzeichen 1"),
    FieldSpec::open("IBAN-Nr. 1"),
    FieldSpec::open("Leerfeld1"),
    FieldSpec::open("SWIFT-Code 1"),
    FieldSpec::open("Abw. Kontoinhaber 1"),
    FieldSpec::open("Kennz. Hauptbankverb. 1"),
    FieldSpec::open("Bankverb 1 Gültig von"),
    FieldSpec::open("Bankverb 1 Gültig bis"),
    FieldSpec::open("Bankleitzahl 2"),
    FieldSpec::open("Bankbezeichnung 2"),
    FieldSpec::open("Bank-Kontonummer 2"),
    FieldSpec::open("Länderkennzeichen 2"),
    FieldSpec::open("IBAN-Nr. 2"),
    FieldSpec::open("Leerfeld2"),
    FieldSpec::open("SWIFT-Code 2"),
    FieldSpec::open("Abw. Kontoinhaber 2"),
    FieldSpec::open("Kennz. Hauptbankverb. 2"),
    FieldSpec::open("Bankverb 2 Gültig von"),
    FieldSpec::open("Bankverb 2 Gültig bis"),
    FieldSpec::open("Bankleitzahl 3"),
    FieldSpec::open("Bankbezeichnung 3"),
    FieldSpec::open("Bank-Kontonummer 3"),
    FieldSpec::open("Länderkennzeichen 3"),
    FieldSpec::open("IBAN-Nr. 3"),
    FieldSpec::open("Leerfeld3"),
    FieldSpec::open("SWIFT-Code 3"),
    FieldSpec::open("Abw. Kontoinhaber 3"),
    FieldSpec::open("Kennz. Hauptbankverb. 3"),
    FieldSpec::open("Bankverb 3 Gültig von"),
    FieldSpec::open("Bankverb 3 Gültig bis"),
    FieldSpec::open("Bankleitzahl 4"),
    FieldSpec::open("Bankbezeichnung 4"),
    FieldSpec::open("Bank-Kontonummer 4"),
    FieldSpec::open("Länderkennzeichen 4"),
    FieldSpec::open("IBAN-Nr. 4"),
    FieldSpec::open("Leerfeld4"),
    FieldSpec::open("SWIFT-Code 4"),
    FieldSpec::open("Abw. Kontoinhaber 4"),
    FieldSpec::open("Kennz. Hauptbankverb. 4"),
    FieldSpec::open("Bankverb 4 Gültig von"),
    FieldSpec::open("Bankverb 4 Gültig bis"),
    FieldSpec::open("Bankleitzahl 5"),
    FieldSpec::open("Bankbezeichnung 5"),
    FieldSpec::open("Bank-Kontonummer 5"),
    FieldSpec::open("Länderkennzeichen 5"),
    FieldSpec::open("IBAN-Nr. 5"),
    FieldSpec::open("Leerfeld5"),
    FieldSpec::open("SWIFT-Code 5"),
    FieldSpec::open("Abw. Kontoinhaber 5"),
    FieldSpec::open("Kennz. Hauptbankverb. 5"),
    FieldSpec::open("Bankverb 5 Gültig von"),
    FieldSpec::open("Bankverb 5 Gültig bis"),
    FieldSpec::open("Leerfeld6"),
    FieldSpec::open("Briefanrede"),
    FieldSpec::open("Grußformel"),
    FieldSpec::open("Kunden-/Lief.-Nr."),
    FieldSpec::open("Steuernummer"),
    FieldSpec::open("Sprache"),
    FieldSpec::open("Ansprechpartner"),
    FieldSpec::open("Vertreter"),
    FieldSpec::open("Sachbearbeiter"),
    FieldSpec::open("Diverse-Konto"),
    FieldSpec::open("Ausgabeziel"),
    FieldSpec::open("Währungssteuerung"),
    FieldSpec::open("Kreditlimit (Debitor)"),
    FieldSpec::open("Zahlungsbedingung"),
    FieldSpec::open("Fälligkeit in Tagen (Debitor)"),
    FieldSpec::open("Skonto in Prozent (Debitor)"),
    FieldSpec::open("Kreditoren-Ziel 1 Tg."),
    FieldSpec::open("Kreditoren-Skonto 1 %"),
    FieldSpec::open("Kreditoren-Ziel 2 Tg."),
    FieldSpec::open("Kreditoren-Skonto 2 %"),
    FieldSpec::open("Kreditoren-Ziel 3 Brutto Tg."),
    FieldSpec::open("Kreditoren-Ziel 4 Tg."),
    FieldSpec::open("Kreditoren-Skonto 4 %"),
    FieldSpec::open("Kreditoren-Ziel 5 Tg."),
    FieldSpec::open("Kreditoren-Skonto 5 %"),
    FieldSpec::open("Mahnung"),
    FieldSpec::open("Kontoauszug"),
    FieldSpec::open("Mahntext 1"),
    FieldSpec::open("Mahntext 2"),
    FieldSpec::open("Mahntext 3"),
    FieldSpec::open("Kontoauszugstext"),
    FieldSpec::open("Mahnlimit Betrag"),
    FieldSpec::open("Mahnlimit %"),
    FieldSpec::open("Zinsberechnung"),
    FieldSpec::open("Mahnzinssatz 1"),
    FieldSpec::open("Mahnzinssatz 2"),
    FieldSpec::open("Mahnzinssatz 3"),
    FieldSpec::open("Lastschrift"),
    FieldSpec::open("Leerfeld7"),
    FieldSpec::open("Mandantenbank"),
    FieldSpec::open("Zahlungsträger"),
    FieldSpec::open("Indiv. Feld 1"),
    FieldSpec::open("Indiv. Feld 2"),
    FieldSpec::open("Indiv. Feld 3"),
    FieldSpec::open("Indiv. Feld 4"),
    FieldSpec::open("Indiv. Feld 5"),
    FieldSpec::open("Indiv. Feld 6"),
    FieldSpec::open("Indiv. Feld 7"),
    FieldSpec::open("Indiv. Feld 8"),
    FieldSpec::open("Indiv. Feld 9"),
    FieldSpec::open("Indiv. Feld 10"),
    FieldSpec::open("Indiv. Feld 11"),
    FieldSpec::open("Indiv. Feld 12"),
    FieldSpec::open("Indiv. Feld 13"),
    FieldSpec::open("Indiv. Feld 14"),
    FieldSpec::open("Indiv. Feld 15"),
    FieldSpec::open("Abweichende Anrede (Rechnungsadresse)"),
    FieldSpec::open("Adressart (Rechnungsadresse)"),
    FieldSpec::open("Straße (Rechnungsadresse)"),
    FieldSpec::open("Postfach (Rechnungsadresse)"),
    FieldSpec::open("Postleitzahl (Rechnungsadresse)"),
    FieldSpec::open("Ort (Rechnungsadresse)"),
    FieldSpec::open("Land (Rechnungsadresse)"),
    FieldSpec::open("Versandzusatz (Rechnungsadresse)"),
    FieldSpec::open("Adresszusatz (Rechnungsadresse)"),
    FieldSpec::open("Abw. Zustellbezeichnung 1 (Rechnungsadresse)"),
    FieldSpec::open("Abw. Zustellbezeichnung 2 (Rechnungsadresse)"),
    FieldSpec::open("Adresse Gültig von (Rechnungsadresse)"),
    FieldSpec::open("Adresse Gültig bis (Rechnungsadresse)"),
    FieldSpec::open("Bankleitzahl 6"),
    FieldSpec::open("Bankbezeichnung 6"),
    FieldSpec::open("Bank-Kontonummer 6"),
    FieldSpec::open("Länderkennzeichen 6"),
    FieldSpec::open("IBAN-Nr. 6"),
    FieldSpec::open("Leerfeld8"),
    FieldSpec::open("SWIFT-Code 6"),
    FieldSpec::open("Abw. Kontoinhaber 6"),
    FieldSpec::open("Kennz. Hauptbankverb. 6"),
    FieldSpec::open("Bankverb 6 Gültig von"),
    FieldSpec::open("Bankverb 6 Gültig bis"),
    FieldSpec::open("Bankleitzahl 7"),
    FieldSpec::open("Bankbezeichnung 7"),
    FieldSpec::open("Bank-Kontonummer 7"),
    FieldSpec::open("Länderkennzeichen 7"),
    FieldSpec::open("IBAN-Nr. 7"),
    FieldSpec::open("Leerfeld9"),
    FieldSpec::open("SWIFT-Code 7"),
    FieldSpec::open("Abw. Kontoinhaber 7"),
    FieldSpec::open("Kennz. Hauptbankverb. 7"),
    FieldSpec::open("Bankverb 7 Gültig von"),
    FieldSpec::open("Bankverb 7 Gültig bis"),
    FieldSpec::open("Bankleitzahl 8"),
    FieldSpec::open("Bankbezeichnung 8"),
    FieldSpec::open("Bank-Kontonummer 8"),
    FieldSpec::open("Länderkennzeichen 8"),
    FieldSpec::open("IBAN-Nr. 8"),
    FieldSpec::open("Leerfeld10"),
    FieldSpec::open("SWIFT-Code 8"),
    FieldSpec::open("Abw. Kontoinhaber 8"),
    FieldSpec::open("Kennz. Hauptbankverb. 8"),
    FieldSpec::open("Bankverb 8 Gültig von"),
    FieldSpec::open("Bankverb 8 Gültig bis"),
    FieldSpec::open("Bankleitzahl 9"),
    FieldSpec::open("Bankbezeichnung 9"),
    FieldSpec::open("Bank-Kontonummer 9"),
    FieldSpec::open("Länderkennzeichen 9"),
    FieldSpec::open("IBAN-Nr. 9"),
    FieldSpec::open("Leerfeld11"),
    FieldSpec::open("SWIFT-Code 9"),
    FieldSpec::open("Abw. Kontoinhaber 9"),
    FieldSpec::open("Kennz. Hauptbankverb. 9"),
    FieldSpec::open("Bankverb 9 Gültig von"),
    FieldSpec::open("Bankverb 9 Gültig bis"),
    FieldSpec::open("Bankleitzahl 10"),
    FieldSpec::open("Bankbezeichnung 10"),
    FieldSpec::open("Bank-Kontonummer 10"),
    FieldSpec::open("Länderkennzeichen 10"),
    FieldSpec::open("IBAN-Nr. 10"),
    FieldSpec::open("Leerfeld12"),
    FieldSpec::open("SWIFT-Code 10"),
    FieldSpec::open("Abw. Kontoinhaber 10"),
    FieldSpec::open("Kennz. Hauptbankverb. 10"),
    FieldSpec::open("Bankverb 10 Gültig von"),
    FieldSpec::open("Bankverb 10 Gültig bis"),
    FieldSpec::open("Nummer Fremdsystem"),
    FieldSpec::open("Insolvent"),
    FieldSpec::open("SEPA-Mandatsreferenz 1"),
    FieldSpec::open("SEPA-Mandatsreferenz 2"),
    FieldSpec::open("SEPA-Mandatsreferenz 3"),
    FieldSpec::open("SEPA-Mandatsreferenz 4"),
    FieldSpec::open("SEPA-Mandatsreferenz 5"),
    FieldSpec::open("SEPA-Mandatsreferenz 6"),
    FieldSpec::open("SEPA-Mandatsreferenz 7"),
    FieldSpec::open("SEPA-Mandatsreferenz 8"),
    FieldSpec::open("SEPA-Mandatsreferenz 9"),
    FieldSpec::open("SEPA-Mandatsreferenz 10"),
    FieldSpec::open("Verknüpftes OPOS-Konto"),
    FieldSpec::open("Mahnsperre bis"),
    FieldSpec::open("Lastschriftsperre bis"),
    FieldSpec::open("Zahlungssperre bis"),
    FieldSpec::open("Gebührenberechnung"),
    FieldSpec::open("Mahngebühr 1"),
    FieldSpec::open("Mahngebühr 2"),
    FieldSpec::open("Mahngebühr 3"),
    FieldSpec::open("Pauschalenberechnung"),
    FieldSpec::open("Verzugspauschale 1"),
    FieldSpec::open("Verzugspauschale 2"),
    FieldSpec::open("Verzugspauschale 3"),
    FieldSpec::open("Alternativer Suchname"),
    FieldSpec::open("Status"),
    FieldSpec::open("Anschrift manuell geändert (Korrespondenzadresse)"),
    FieldSpec::open("Anschrift individuell (Korrespondenzadresse)"),
    FieldSpec::open("Anschrift manuell geändert (Rechnungsadresse)"),
    FieldSpec::open("Anschrift individuell (Rechnungsadresse)"),
    FieldSpec::open("Fristberechnung bei Debitor"),
    FieldSpec::open("Mahnfrist 1"),
    FieldSpec::open("Mahnfrist 2"),
    FieldSpec::open("Mahnfrist 3"),
    FieldSpec::open("Letzte Frist"),
];

pub fn partner_format() -> RecordFormat {
    let category = DataCategory::Partners;
    RecordFormat::for_category(
        category,
        category.format_name(),
        FieldSchema::from_static(PARTNER_FIELDS),
    )
}

/// Writer for a Debitoren/Kreditoren file.
pub fn partner_writer(metadata: &HeaderMetadata) -> DatevWriter {
    DatevWriter::new(partner_format(), metadata.clone())
}
