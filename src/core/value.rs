use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single cell handed to the writer.
///
/// The variant decides quoting: numbers are written bare, everything else is
/// wrapped in double quotes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// No value. Written as `""`.
    #[default]
    Empty,
    /// Free text.
    Text(String),
    /// Whole number (account numbers, counts, keys).
    Integer(i64),
    /// Fixed-point number (amounts, rates). Rendered with a decimal comma.
    Decimal(Decimal),
    /// Calendar date. Rendered as `TTMMJJJJ`.
    Date(NaiveDate),
    /// Boolean marker. `true` is rendered as `1`.
    Flag(bool),
}

impl Value {
    /// Whether the value counts as "nothing" for a data row.
    ///
    /// Zero, the empty string, `false` and [`Value::Empty`] all collapse to an
    /// empty field. A genuine zero amount is therefore indistinguishable from
    /// an absent one; DATEV import tools treat both alike.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            Self::Integer(n) => *n == 0,
            Self::Decimal(d) => d.is_zero(),
            Self::Date(_) => false,
            Self::Flag(b) => !b,
        }
    }

    /// Whether the value is emitted without quotes.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Decimal(_) | Self::Flag(_))
    }

    /// Text form used both for output and for length truncation.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Decimal(d) => d.to_string().replace('.', ","),
            Self::Date(d) => d.format("%d%m%Y").to_string(),
            Self::Flag(b) => String::from(if *b { "1" } else { "0" }),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Empty, Into::into)
    }
}

/// One record to export: field display name to value.
///
/// Keys must be column names of the writer's schema. Columns without a key
/// are written empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataRow {
    values: BTreeMap<String, Value>,
}

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable setter.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for DataRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (k, v) in iter {
            row.set(k, v);
        }
        row
    }
}
