//! # datev-extf
//!
//! Writer for DATEV EXTF interchange files, the semicolon-delimited format
//! German accounting software imports.
//!
//! The crate knows the EXTF header record, the column layout of three record
//! formats and the serialization quirks DATEV expects: a UTF-8 byte-order
//! marker, non-numeric quoting, silent truncation to field caps and the
//! collapse of zero/empty values to empty fields. It does not decide *which*
//! records to export or how a journal entry maps to a row; callers hand in
//! already-resolved [`core::DataRow`]s.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use datev_extf::core::*;
//! use datev_extf::datev::*;
//!
//! let meta = HeaderMetadataBuilder::new()
//!     .consultant_id(1001)
//!     .client_id(2002)
//!     .fiscal_year_start(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .account_code_length(4)
//!     .period(
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//!     )
//!     .user_initials("AB")
//!     .currency("EUR")
//!     .build()
//!     .unwrap();
//!
//! let mut writer = account_writer(&meta);
//! writer.write_header_now();
//! writer
//!     .write_row(&DataRow::new().with("Konto", 1000).with("Kontobeschriftung", "Kasse"))
//!     .unwrap();
//!
//! let csv = writer.into_string();
//! assert!(csv.starts_with('\u{feff}'));
//! assert_eq!(csv.lines().count(), 3);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `transactions` (default) | Buchungsstapel (format 21) |
//! | `partners` (default) | Debitoren/Kreditoren (format 16) |
//! | `accounts` (default) | Kontenbeschriftungen (format 20) |
//! | `all` | Everything |
//!
//! The generic [`datev::DatevWriter`] is always available and accepts any
//! [`datev::RecordFormat`].

pub mod core;
pub mod datev;
