//! Variable catalog built from sample data
//!
//! Walks a sample-data object and flattens every reachable field into a
//! path-addressed [`VariableDefinition`]. The catalog is derived and
//! ephemeral: rebuilt in full whenever sample data changes, never
//! patched in place.

use serde_json::{Map, Value};
use template_types::{ValueKind, VariableDefinition};

use crate::infer::infer_kind;

/// Build the flat variable catalog for a sample-data object.
///
/// Keys are visited in insertion order. A nested field produces both a
/// parent entry (type `object`) and child entries with `parent.key`
/// paths. Arrays contribute a single `array` entry, plus `path[].key`
/// entries inferred from the first element when it is an object.
pub fn build_catalog(data: &Map<String, Value>) -> Vec<VariableDefinition> {
    let mut variables = Vec::new();
    collect(data, "", &mut variables);
    tracing::debug!(count = variables.len(), "built variable catalog");
    variables
}

fn collect(data: &Map<String, Value>, prefix: &str, out: &mut Vec<VariableDefinition>) {
    for (key, value) in data {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        let kind = infer_kind(value);

        out.push(VariableDefinition::new(path.clone(), kind, value.clone()));

        match kind {
            ValueKind::Object => {
                if let Some(map) = value.as_object() {
                    collect(map, &path, out);
                }
            }
            ValueKind::Array => {
                // Only the first element is used to infer the schema
                if let Some(first) = value.as_array().and_then(|items| items.first()) {
                    if let Some(map) = first.as_object() {
                        collect(map, &format!("{path}[]"), out);
                    }
                }
            }
            _ => {}
        }
    }
}
