//! Best-effort type inference for sample-data values

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use template_types::ValueKind;

lazy_static! {
    /// ISO 8601 prefix: YYYY-MM-DD, optionally followed by THH:MM:SS.
    /// ASCII digit classes keep the byte slice below safe.
    static ref ISO_DATE_PATTERN: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}(T[0-9]{2}:[0-9]{2}:[0-9]{2})?").unwrap();
}

/// Classify a raw JSON value into a catalog type.
///
/// Always returns a classification; ambiguity never fails. Strings of
/// length >= 10 that start with an ISO 8601 date are classified as
/// `Date` when the date part actually parses. The heuristic is known to
/// misclassify date-shaped fixed-length codes (e.g. `"2024-01-99"` is
/// rejected, but a postal code like `"1234-56-78"` is not date-shaped
/// and stays a string); this matches the shipped behavior.
pub fn infer_kind(value: &Value) -> ValueKind {
    match value {
        Value::Array(_) => ValueKind::Array,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Number(_) => ValueKind::Number,
        Value::Object(_) => ValueKind::Object,
        Value::String(s) if is_date_like(s) => ValueKind::Date,
        _ => ValueKind::String,
    }
}

/// Whether a string looks like an ISO 8601 date or datetime.
///
/// The whole matched portion must parse, so `2024-03-15T99:99:99` is
/// not a date even though its date prefix is valid.
pub fn is_date_like(s: &str) -> bool {
    if s.len() < 10 {
        return false;
    }
    let captures = match ISO_DATE_PATTERN.captures(s) {
        Some(captures) => captures,
        None => return false,
    };
    if captures.get(1).is_some() {
        chrono::NaiveDateTime::parse_from_str(&s[..19], "%Y-%m-%dT%H:%M:%S").is_ok()
    } else {
        chrono::NaiveDate::parse_from_str(&s[..10], "%Y-%m-%d").is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn classifies_scalars() {
        assert_eq!(infer_kind(&json!(true)), ValueKind::Boolean);
        assert_eq!(infer_kind(&json!(42)), ValueKind::Number);
        assert_eq!(infer_kind(&json!(3.5)), ValueKind::Number);
        assert_eq!(infer_kind(&json!("hello")), ValueKind::String);
        assert_eq!(infer_kind(&json!(null)), ValueKind::String);
    }

    #[test]
    fn classifies_composites() {
        assert_eq!(infer_kind(&json!([1, 2])), ValueKind::Array);
        assert_eq!(infer_kind(&json!([])), ValueKind::Array);
        assert_eq!(infer_kind(&json!({ "a": 1 })), ValueKind::Object);
    }

    #[test]
    fn detects_iso_dates() {
        assert_eq!(infer_kind(&json!("2024-03-15")), ValueKind::Date);
        assert_eq!(infer_kind(&json!("2024-03-15T10:30:00")), ValueKind::Date);
        assert_eq!(infer_kind(&json!("2024-03-15T10:30:00Z")), ValueKind::Date);
    }

    #[test]
    fn rejects_date_shaped_noise() {
        // Too short
        assert_eq!(infer_kind(&json!("2024-03")), ValueKind::String);
        // Impossible calendar date
        assert_eq!(infer_kind(&json!("2024-13-40")), ValueKind::String);
        // Not date shaped at all
        assert_eq!(infer_kind(&json!("ABC-123-XYZ")), ValueKind::String);
        assert_eq!(infer_kind(&json!("1234567890")), ValueKind::String);
    }

    #[test]
    fn rejects_impossible_time_components() {
        assert_eq!(infer_kind(&json!("2024-03-15T99:99:99")), ValueKind::String);
        assert_eq!(infer_kind(&json!("2024-02-30T10:30:00")), ValueKind::String);
    }
}
