//! Sample-data boundary
//!
//! Sample data arrives as a UTF-8 JSON blob from an external editor
//! surface. Invalid JSON is reported, never swallowed, so callers can
//! keep their last valid state on screen. The only write operation is
//! `add_variable`, which returns a new object and leaves the input
//! alone.

use serde_json::{Map, Value};

use crate::path;
use crate::EngineError;

/// Parse a sample-data blob into an object.
///
/// Syntactically invalid JSON surfaces as [`EngineError::InvalidJson`];
/// a valid-but-non-object root (sample data must bind dot paths) as
/// [`EngineError::MalformedTree`]. Neither outcome disturbs any state
/// the caller holds.
pub fn parse_sample_data(text: &str) -> Result<Map<String, Value>, EngineError> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(EngineError::MalformedTree(format!(
            "sample data root must be an object, got {other}"
        ))),
    }
}

/// Insert an empty-string leaf for a newly created variable.
///
/// Returns a deep-cloned object; the path is created only if absent.
pub fn add_variable(data: &Value, variable_path: &str) -> Value {
    path::set(data, variable_path, Value::String(String::new()))
}
