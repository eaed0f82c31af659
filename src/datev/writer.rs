//! Generic EXTF writer, parameterized by a [`RecordFormat`].

use std::borrow::Cow;
use std::collections::HashSet;
use std::io::Write;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::csv;
use super::schema::{FieldSchema, RecordFormat};
use crate::core::{DataRow, DatevError, HeaderMetadata, Value};

/// Leading marker DATEV import tools use to detect UTF-8.
pub const BOM: char = '\u{feff}';

/// EXTF header version (header field 2).
pub const HEADER_VERSION: i64 = 700;

/// Number of positions in the EXTF header record.
pub const HEADER_FIELD_COUNT: usize = 31;

/// Writes one EXTF file into an in-memory buffer.
///
/// Call [`write_header`](Self::write_header) once, then
/// [`write_row`](Self::write_row) per record, then take the buffer. Call order
/// is not enforced; out-of-order calls are logged and carried out anyway.
#[derive(Debug)]
pub struct DatevWriter {
    format: RecordFormat,
    metadata: HeaderMetadata,
    columns: HashSet<String>,
    buffer: String,
    headers_written: usize,
    rows_written: usize,
}

impl DatevWriter {
    pub fn new(format: RecordFormat, metadata: HeaderMetadata) -> Self {
        let columns = format.schema.names().map(str::to_string).collect();
        Self {
            format,
            metadata,
            columns,
            buffer: String::new(),
            headers_written: 0,
            rows_written: 0,
        }
    }

    pub fn format(&self) -> &RecordFormat {
        &self.format
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.format.schema
    }

    pub fn metadata(&self) -> &HeaderMetadata {
        &self.metadata
    }

    /// The 31 header positions for a file generated at `generated_at`.
    pub fn header_record(&self, generated_at: NaiveDateTime) -> Vec<Value> {
        let meta = &self.metadata;
        let mut record = vec![
            Value::from("EXTF"),
            Value::Integer(HEADER_VERSION),
            Value::Integer(i64::from(self.format.code)),
            Value::from(&*self.format.name),
            Value::Integer(i64::from(self.format.version)),
            Value::Text(timestamp(generated_at)),
            // imported, origin, exported by, imported by
            Value::Empty,
            Value::Empty,
            Value::Empty,
            Value::Empty,
            Value::from(meta.consultant_id),
            Value::from(meta.client_id),
            header_date(meta.fiscal_year_start),
            Value::Integer(i64::from(meta.account_code_length)),
            header_date(meta.period_start),
            header_date(meta.period_end),
            Value::from(self.format.dataset_name.as_str()),
            Value::from(meta.user_initials.as_str()),
            Value::Integer(meta.booking_type.code()),
            // accounting purpose
            Value::Integer(0),
            Value::Integer(i64::from(meta.locked)),
            Value::from(meta.currency.as_str()),
        ];
        record.resize(HEADER_FIELD_COUNT, Value::Empty);
        record
    }

    /// Write the byte-order marker, the EXTF header record and the column
    /// name row. `generated_at` becomes header field 6.
    pub fn write_header(&mut self, generated_at: NaiveDateTime) {
        if self.headers_written > 0 {
            tracing::warn!(
                format = %self.format.name,
                "EXTF header written more than once"
            );
        }
        if self.rows_written > 0 {
            tracing::warn!(
                format = %self.format.name,
                rows = self.rows_written,
                "EXTF header written after data rows"
            );
        }
        if self.buffer.is_empty() {
            self.buffer.push(BOM);
        }

        let header = self.header_record(generated_at);
        csv::push_record(&mut self.buffer, &header);

        let names: Vec<Value> = self.format.schema.names().map(Value::from).collect();
        csv::push_record(&mut self.buffer, &names);

        self.headers_written += 1;
        tracing::debug!(
            format = %self.format.name,
            code = self.format.code,
            fields = names.len(),
            "wrote EXTF header"
        );
    }

    /// [`write_header`](Self::write_header) stamped with the local time.
    pub fn write_header_now(&mut self) {
        self.write_header(chrono::Local::now().naive_local());
    }

    /// Append one data row in schema column order.
    ///
    /// Falsy values become empty fields, capped fields are cut to their
    /// length, and columns missing from `row` are written empty. A key that
    /// is not a schema column rejects the whole row before anything is
    /// written.
    pub fn write_row(&mut self, row: &DataRow) -> Result<(), DatevError> {
        if let Some(unknown) = row.keys().find(|k| !self.columns.contains(*k)) {
            return Err(DatevError::UnknownField(unknown.to_string()));
        }
        if self.headers_written == 0 && self.rows_written == 0 {
            tracing::warn!(
                format = %self.format.name,
                "data row written before EXTF header"
            );
        }

        let cells: Vec<Cow<'_, Value>> = self
            .format
            .schema
            .fields()
            .iter()
            .map(|field| match row.get(&field.name) {
                Some(value) => coerce(&field.name, value, field.max_len),
                None => Cow::Owned(Value::Empty),
            })
            .collect();
        csv::push_record(&mut self.buffer, cells.iter().map(|cell| &**cell));

        self.rows_written += 1;
        Ok(())
    }

    /// Write rows in order. Stops at the first rejected row; rows before it
    /// stay written. Returns the number of rows written by this call.
    pub fn write_rows<'a>(
        &mut self,
        rows: impl IntoIterator<Item = &'a DataRow>,
    ) -> Result<usize, DatevError> {
        let mut count = 0;
        for row in rows {
            self.write_row(row)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Output accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    /// UTF-8 bytes of the file, marker included.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.into_bytes()
    }

    /// Copy the output into `sink`.
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<(), DatevError> {
        sink.write_all(self.buffer.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

/// Normalize one row value for its column.
fn coerce<'v>(field: &str, value: &'v Value, max_len: Option<usize>) -> Cow<'v, Value> {
    if value.is_falsy() {
        return Cow::Owned(Value::Empty);
    }
    match max_len {
        Some(max) if max > 0 => {
            let text = value.to_text();
            let len = text.chars().count();
            if len > max {
                tracing::trace!(field, max, len, "truncating value");
            }
            Cow::Owned(Value::Text(truncate(&text, max)))
        }
        _ => Cow::Borrowed(value),
    }
}

/// Cut `s` to at most `max` characters.
fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// `YYYYMMDDHHMMSSmmm`, milliseconds truncated.
fn timestamp(at: NaiveDateTime) -> String {
    at.format("%Y%m%d%H%M%S%3f").to_string()
}

/// Header dates are bare `JJJJMMTT` numbers.
fn header_date(d: NaiveDate) -> Value {
    Value::Integer(i64::from(d.year()) * 10_000 + i64::from(d.month()) * 100 + i64::from(d.day()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HeaderMetadataBuilder;
    use crate::datev::schema::FieldSpec;

    static FIELDS: &[FieldSpec] = &[
        FieldSpec::open("Umsatz"),
        FieldSpec::capped("Konto", 4),
        FieldSpec::open("Text"),
    ];

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn writer() -> DatevWriter {
        let meta = HeaderMetadataBuilder::new()
            .consultant_id(1001)
            .client_id(2002)
            .fiscal_year_start(date(2023, 1, 1))
            .account_code_length(8)
            .period(date(2023, 1, 1), date(2023, 1, 31))
            .user_initials("AB")
            .currency("EUR")
            .build()
            .unwrap();
        let format = RecordFormat {
            code: 99,
            name: "Test".into(),
            version: 1,
            dataset_name: "Testlauf".into(),
            schema: FieldSchema::from_static(FIELDS),
        };
        DatevWriter::new(format, meta)
    }

    fn fixed_time() -> NaiveDateTime {
        date(2023, 2, 3).and_hms_milli_opt(4, 5, 6, 789).unwrap()
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("Größe", 3), "Grö");
    }

    #[test]
    fn timestamp_has_millis() {
        let at = date(2023, 2, 3).and_hms_nano_opt(4, 5, 6, 789_999_999).unwrap();
        assert_eq!(timestamp(at), "20230203040506789");
    }

    #[test]
    fn header_date_is_numeric() {
        assert_eq!(header_date(date(2023, 1, 31)), Value::Integer(20230131));
    }

    #[test]
    fn header_record_layout() {
        let w = writer();
        let header = w.header_record(fixed_time());
        assert_eq!(header.len(), HEADER_FIELD_COUNT);
        assert_eq!(header[0], Value::from("EXTF"));
        assert_eq!(header[2], Value::Integer(99));
        assert_eq!(header[5], Value::from("20230203040506789"));
        assert_eq!(header[10], Value::Integer(1001));
        assert_eq!(header[16], Value::from("Testlauf"));
        assert_eq!(header[20], Value::Integer(0));
        assert_eq!(header[21], Value::from("EUR"));
        assert!(header[22..].iter().all(|v| *v == Value::Empty));
    }

    #[test]
    fn full_output() {
        let mut w = writer();
        w.write_header(fixed_time());
        w.write_row(&DataRow::new().with("Umsatz", 12).with("Konto", 123456).with("Text", "x"))
            .unwrap();
        let out = w.into_string();
        let expected = "\u{feff}\"EXTF\";700;99;\"Test\";1;\"20230203040506789\";\"\";\"\";\"\";\"\";\
            1001;2002;20230101;8;20230101;20230131;\"Testlauf\";\"AB\";1;0;0;\"EUR\";\
            \"\";\"\";\"\";\"\";\"\";\"\";\"\";\"\";\"\"\r\n\
            \"Umsatz\";\"Konto\";\"Text\"\r\n\
            12;\"1234\";\"x\"\r\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn falsy_and_missing_are_empty() {
        let mut w = writer();
        w.write_row(&DataRow::new().with("Umsatz", 0).with("Konto", ""))
            .unwrap();
        assert_eq!(w.as_str(), "\"\";\"\";\"\"\r\n");
    }

    #[test]
    fn unknown_field_rejects_row() {
        let mut w = writer();
        let err = w
            .write_row(&DataRow::new().with("Umsatz", 1).with("Betrag", 1))
            .unwrap_err();
        assert!(matches!(err, DatevError::UnknownField(name) if name == "Betrag"));
        assert!(w.as_str().is_empty());
        assert_eq!(w.rows_written(), 0);
    }

    #[test]
    fn write_rows_keeps_rows_before_failure() {
        let mut w = writer();
        let rows = [
            DataRow::new().with("Umsatz", 1),
            DataRow::new().with("Umsatz", 2),
            DataRow::new().with("Nope", 3),
            DataRow::new().with("Umsatz", 4),
        ];
        assert!(w.write_rows(&rows).is_err());
        assert_eq!(w.rows_written(), 2);
        assert_eq!(w.as_str().lines().count(), 2);
    }

    #[test]
    fn second_header_is_written_without_second_bom() {
        let mut w = writer();
        w.write_header(fixed_time());
        w.write_header(fixed_time());
        let out = w.as_str();
        assert_eq!(out.matches(BOM).count(), 1);
        assert_eq!(out.matches("\"EXTF\"").count(), 2);
    }

    #[test]
    fn write_to_copies_bytes() {
        let mut w = writer();
        w.write_header(fixed_time());
        let mut sink = Vec::new();
        w.write_to(&mut sink).unwrap();
        assert_eq!(sink, w.into_bytes());
    }
}
