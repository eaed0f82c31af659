//! Kontenbeschriftungen (format category 20): account labels.

use super::schema::{DataCategory, FieldSchema, FieldSpec, RecordFormat};
use super::writer::DatevWriter;
use crate::core::HeaderMetadata;

pub static ACCOUNT_FIELDS: &[FieldSpec] = &[
    FieldSpec::capped("Konto", 9),
    FieldSpec::capped("Kontobeschriftung", 40),
    FieldSpec::capped("SprachId", 5),
    FieldSpec::capped("Kontenbeschriftung lang", 300),
];

pub fn account_format() -> RecordFormat {
    let category = DataCategory::Accounts;
    RecordFormat::for_category(
        category,
        category.format_name(),
        FieldSchema::from_static(ACCOUNT_FIELDS),
    )
}

/// Writer for a Kontenbeschriftungen file.
pub fn account_writer(metadata: &HeaderMetadata) -> DatevWriter {
    DatevWriter::new(account_format(), metadata.clone())
}
