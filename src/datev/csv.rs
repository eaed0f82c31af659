//! Record encoding: semicolon separated, quote everything non-numeric.

use crate::core::Value;

pub(crate) const DELIMITER: char = ';';
pub(crate) const LINE_END: &str = "\r\n";

/// Append one record and its line terminator.
pub(crate) fn push_record<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a Value>) {
    for (i, value) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        push_field(out, value);
    }
    out.push_str(LINE_END);
}

fn push_field(out: &mut String, value: &Value) {
    if value.is_numeric() {
        out.push_str(&value.to_text());
    } else {
        push_quoted(out, &value.to_text());
    }
}

fn push_quoted(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}
