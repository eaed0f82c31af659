use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::DatevError;

/// Header field 19 (Buchungstyp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingType {
    /// Finanzbuchführung.
    #[default]
    FinancialAccounting,
    /// Jahresabschluss.
    YearEnd,
}

impl BookingType {
    pub fn code(&self) -> i64 {
        match self {
            Self::FinancialAccounting => 1,
            Self::YearEnd => 2,
        }
    }
}

/// Caller-supplied values for the EXTF header record.
///
/// The constant tag, format identifiers and generation timestamp are added
/// by the writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMetadata {
    /// DATEV consultant number (Beraternummer).
    pub consultant_id: u32,
    /// DATEV client number (Mandantennummer).
    pub client_id: u32,
    /// Start of fiscal year (WJ-Beginn).
    pub fiscal_year_start: NaiveDate,
    /// G/L account length (Sachkontenlänge).
    pub account_code_length: u8,
    /// First day covered by the export (Datum vom).
    pub period_start: NaiveDate,
    /// Last day covered by the export (Datum bis).
    pub period_end: NaiveDate,
    /// Dictation initials (Diktatkürzel).
    pub user_initials: String,
    /// ISO 4217 currency code (WKZ).
    pub currency: String,
    #[serde(default)]
    pub booking_type: BookingType,
    /// Festschreibung. Locked postings cannot be edited after import.
    #[serde(default)]
    pub locked: bool,
}

/// Builder for [`HeaderMetadata`].
///
/// Every field except `booking_type` and `locked` is required; `build`
/// names the first one that is missing.
///
/// ```
/// use datev_extf::core::{DatevError, HeaderMetadataBuilder};
///
/// let err = HeaderMetadataBuilder::new()
///     .consultant_id(1001)
///     .build()
///     .unwrap_err();
/// assert!(matches!(err, DatevError::MissingArgument("client_id")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeaderMetadataBuilder {
    consultant_id: Option<u32>,
    client_id: Option<u32>,
    fiscal_year_start: Option<NaiveDate>,
    account_code_length: Option<u8>,
    period_start: Option<NaiveDate>,
    period_end: Option<NaiveDate>,
    user_initials: Option<String>,
    currency: Option<String>,
    booking_type: BookingType,
    locked: bool,
}

impl HeaderMetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn consultant_id(mut self, id: u32) -> Self {
        self.consultant_id = Some(id);
        self
    }

    pub fn client_id(mut self, id: u32) -> Self {
        self.client_id = Some(id);
        self
    }

    pub fn fiscal_year_start(mut self, date: NaiveDate) -> Self {
        self.fiscal_year_start = Some(date);
        self
    }

    pub fn account_code_length(mut self, len: u8) -> Self {
        self.account_code_length = Some(len);
        self
    }

    pub fn period_start(mut self, date: NaiveDate) -> Self {
        self.period_start = Some(date);
        self
    }

    pub fn period_end(mut self, date: NaiveDate) -> Self {
        self.period_end = Some(date);
        self
    }

    /// Set both period bounds at once.
    pub fn period(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.period_start(start).period_end(end)
    }

    pub fn user_initials(mut self, initials: impl Into<String>) -> Self {
        self.user_initials = Some(initials.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }

    pub fn booking_type(mut self, booking_type: BookingType) -> Self {
        self.booking_type = booking_type;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn build(self) -> Result<HeaderMetadata, DatevError> {
        Ok(HeaderMetadata {
            consultant_id: self
                .consultant_id
                .ok_or(DatevError::MissingArgument("consultant_id"))?,
            client_id: self
                .client_id
                .ok_or(DatevError::MissingArgument("client_id"))?,
            fiscal_year_start: self
                .fiscal_year_start
                .ok_or(DatevError::MissingArgument("fiscal_year_start"))?,
            account_code_length: self
                .account_code_length
                .ok_or(DatevError::MissingArgument("account_code_length"))?,
            period_start: self
                .period_start
                .ok_or(DatevError::MissingArgument("period_start"))?,
            period_end: self
                .period_end
                .ok_or(DatevError::MissingArgument("period_end"))?,
            user_initials: self
                .user_initials
                .ok_or(DatevError::MissingArgument("user_initials"))?,
            currency: self
                .currency
                .ok_or(DatevError::MissingArgument("currency"))?,
            booking_type: self.booking_type,
            locked: self.locked,
        })
    }
}
