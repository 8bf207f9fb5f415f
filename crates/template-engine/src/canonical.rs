//! Canonical serialization for structural equality
//!
//! Two values canonicalize to the same string iff they are deeply equal
//! modulo object-key order. The canonical form exists only for equality
//! and dirty-state checks; it is never stored as document content or
//! shown to users.

use serde_json::Value;

/// Deterministic string form of a JSON value.
///
/// Object keys are sorted lexicographically at every nesting level;
/// array order is preserved; scalars use their standard JSON encoding.
pub fn canonicalize(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_unstable();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Standard JSON string encoding for the key
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(&map[key], out);
            }
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Whether `current` differs structurally from a stored canonical snapshot.
///
/// Callers own snapshot timing: take `stored` with [`canonicalize`] at
/// save time and compare whenever a dirty check is needed.
pub fn is_dirty(current: &Value, stored: &str) -> bool {
    canonicalize(current) != stored
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{Map, Value};

    /// Strategy for arbitrary JSON values of bounded depth.
    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(|n| Value::from(n)),
            "[a-zA-Z0-9 ]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::hash_map("[a-z]{1,4}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    /// Recursively reverse the key order of every object in a value.
    fn reverse_keys(value: &Value) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.iter().map(reverse_keys).collect()),
            Value::Object(map) => {
                let mut reversed = Map::new();
                for (k, v) in map.iter().rev() {
                    reversed.insert(k.clone(), reverse_keys(v));
                }
                Value::Object(reversed)
            }
            scalar => scalar.clone(),
        }
    }

    proptest! {
        #[test]
        fn canonical_form_is_key_order_independent(value in json_value()) {
            let permuted = reverse_keys(&value);
            prop_assert_eq!(canonicalize(&value), canonicalize(&permuted));
        }

        #[test]
        fn canonical_form_parses_back_to_an_equal_value(value in json_value()) {
            let parsed: Value = serde_json::from_str(&canonicalize(&value)).unwrap();
            prop_assert_eq!(parsed, value);
        }
    }
}
