//! Dot-path access into sample data
//!
//! All three accessors treat a path like `client.address.city` as
//! successive object-member lookups. `get` and `has` never fail; a
//! missing or non-object intermediate simply resolves to nothing.
//! `set` returns a new value and leaves its input untouched.

use serde_json::{Map, Value};

/// Resolve a dot path against a value.
///
/// Returns `None` the moment any segment is absent or the current value
/// is not an object. A present-but-null leaf resolves to `Some(Null)`;
/// callers decide what null means.
pub fn get<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let mut current = data;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Whether every segment of the path exists, up to and including the last.
pub fn has(data: &Value, path: &str) -> bool {
    get(data, path).is_some()
}

/// Write `value` at `path` in a deep clone of `data`.
///
/// Intermediate segments that are missing or scalar are replaced by
/// empty objects. The final segment is written only when the key does
/// not already exist: re-adding a variable must never clobber sample
/// data the user typed in. A path that would cross an array is a no-op
/// clone: arrays have no named keys, and their elements must survive.
pub fn set(data: &Value, path: &str, value: Value) -> Value {
    let mut result = match data {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    let segments: Vec<&str> = path.split('.').collect();
    let (last, parents) = match segments.split_last() {
        Some(split) => split,
        None => return Value::Object(result),
    };
    if crosses_array(data, parents) {
        return Value::Object(result);
    }

    let mut current = &mut result;
    for segment in parents {
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        // slot was just forced to be an object
        current = slot.as_object_mut().expect("slot is an object");
    }

    current.entry(last.to_string()).or_insert(value);
    Value::Object(result)
}

/// Whether walking `parents` from `data` runs into an array. Scalar
/// intermediates stop the walk early; they get replaced, never crossed.
fn crosses_array(data: &Value, parents: &[&str]) -> bool {
    let mut current = data;
    for segment in parents {
        match current.as_object().and_then(|map| map.get(*segment)) {
            Some(Value::Array(_)) => return true,
            Some(next) => current = next,
            None => return false,
        }
    }
    false
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    /// Strategy for dot paths of 1-4 plain segments.
    fn dot_path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z][a-z0-9]{0,7}", 1..=4).prop_map(|segs| segs.join("."))
    }

    /// Strategy for small JSON objects to seed `set` against.
    fn small_object() -> impl Strategy<Value = Value> {
        prop::collection::hash_map("[a-z]{1,5}", "[a-z0-9]{0,5}", 0..4).prop_map(|m| {
            Value::Object(m.into_iter().map(|(k, v)| (k, json!(v))).collect())
        })
    }

    proptest! {
        #[test]
        fn set_is_idempotent(data in small_object(), path in dot_path()) {
            let once = set(&data, &path, json!(""));
            let twice = set(&once, &path, json!(""));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn set_makes_path_resolvable(data in small_object(), path in dot_path()) {
            let updated = set(&data, &path, json!(""));
            prop_assert!(has(&updated, &path));
        }

        #[test]
        fn set_never_mutates_input(data in small_object(), path in dot_path()) {
            let snapshot = data.clone();
            let _ = set(&data, &path, json!("x"));
            prop_assert_eq!(data, snapshot);
        }
    }
}
