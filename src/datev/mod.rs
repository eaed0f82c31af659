//! DATEV EXTF file writers.
//!
//! [`DatevWriter`] knows the header record and the serialization rules; a
//! [`RecordFormat`] tells it which category, version and columns to use.
//! The built-in formats come with a factory each.
//!
//! # Example
//!
//! ```ignore
//! use datev_extf::datev::*;
//!
//! let mut writer = transaction_writer(&metadata);
//! writer.write_header_now();
//! writer.write_rows(&rows)?;
//! std::fs::write(
//!     format!("{}.csv", DataCategory::Transactions.file_stem()),
//!     writer.into_bytes(),
//! )?;
//! ```

mod csv;
mod schema;
mod writer;

#[cfg(feature = "accounts")]
mod accounts;
#[cfg(feature = "partners")]
mod partners;
#[cfg(feature = "transactions")]
mod transactions;

#[cfg(feature = "accounts")]
pub use accounts::{ACCOUNT_FIELDS, account_format, account_writer};
#[cfg(feature = "partners")]
pub use partners::{PARTNER_FIELDS, partner_format, partner_writer};
pub use schema::{DataCategory, FieldSchema, FieldSpec, RecordFormat};
#[cfg(feature = "transactions")]
pub use transactions::{TRANSACTION_FIELDS, transaction_format, transaction_writer};
pub use writer::{BOM, DatevWriter, HEADER_FIELD_COUNT, HEADER_VERSION};
