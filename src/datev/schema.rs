//! Column schemas and record format identifiers.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::DatevError;

/// One column of a DATEV record: display name and optional character cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: Cow<'static, str>,
    /// Maximum length in characters. `None` passes values through untouched.
    pub max_len: Option<usize>,
}

impl FieldSpec {
    /// A column whose values are cut to `max_len` characters.
    pub const fn capped(name: &'static str, max_len: usize) -> Self {
        Self {
            name: Cow::Borrowed(name),
            max_len: Some(max_len),
        }
    }

    /// A column without a length cap.
    pub const fn open(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            max_len: None,
        }
    }

    pub fn new(name: impl Into<Cow<'static, str>>, max_len: Option<usize>) -> Self {
        Self {
            name: name.into(),
            max_len,
        }
    }
}

/// Ordered column layout. Order defines output column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Cow<'static, [FieldSpec]>,
}

impl FieldSchema {
    /// Wrap a built-in table. The tables shipped with this crate have unique
    /// names; that is checked by their unit tests rather than at runtime.
    pub const fn from_static(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields: Cow::Borrowed(fields),
        }
    }

    /// Build a custom schema, rejecting duplicate column names.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, DatevError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_ref()) {
                return Err(DatevError::DuplicateField(field.name.to_string()));
            }
        }
        Ok(Self {
            fields: Cow::Owned(fields),
        })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared cap for `name`. Outer `None` means the field is unknown.
    pub fn max_len(&self, name: &str) -> Option<Option<usize>> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.max_len)
    }
}

/// DATEV format category (header field 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DataCategory {
    /// Buchungsstapel.
    Transactions,
    /// Debitoren/Kreditoren.
    Partners,
    /// Kontenbeschriftungen.
    Accounts,
}

impl DataCategory {
    pub fn code(&self) -> u16 {
        match self {
            Self::Transactions => 21,
            Self::Partners => 16,
            Self::Accounts => 20,
        }
    }

    pub fn format_name(&self) -> &'static str {
        match self {
            Self::Transactions => "Buchungsstapel",
            Self::Partners => "Debitoren/Kreditoren",
            Self::Accounts => "Kontenbeschriftungen",
        }
    }

    pub fn format_version(&self) -> u16 {
        match self {
            Self::Transactions => 12,
            Self::Partners => 5,
            Self::Accounts => 3,
        }
    }

    /// File name stem for packaging, e.g. `EXTF_Buchungsstapel`.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Transactions => "EXTF_Buchungsstapel",
            Self::Partners => "EXTF_Debitoren_Kreditoren",
            Self::Accounts => "EXTF_Kontenbeschriftungen",
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            21 => Some(Self::Transactions),
            16 => Some(Self::Partners),
            20 => Some(Self::Accounts),
            _ => None,
        }
    }
}

/// Everything the generic writer needs to know about a record format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFormat {
    /// Header field 3 (Formatkategorie).
    pub code: u16,
    /// Header field 4 (Formatname).
    pub name: Cow<'static, str>,
    /// Header field 5 (Formatversion).
    pub version: u16,
    /// Header field 17 (Bezeichnung).
    pub dataset_name: String,
    pub schema: FieldSchema,
}

impl RecordFormat {
    /// Format for a known category with the category's identifiers.
    pub fn for_category(
        category: DataCategory,
        dataset_name: impl Into<String>,
        schema: FieldSchema,
    ) -> Self {
        Self {
            code: category.code(),
            name: Cow::Borrowed(category.format_name()),
            version: category.format_version(),
            dataset_name: dataset_name.into(),
            schema,
        }
    }

    pub fn category(&self) -> Option<DataCategory> {
        DataCategory::from_code(self.code)
    }
}
