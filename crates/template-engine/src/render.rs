//! Preview rendering
//!
//! Walks a document tree and substitutes every `variable` node with a
//! `text` node holding the resolved, formatted value. The input tree is
//! never mutated; the walk returns a fresh tree. Missing data is not an
//! error (it renders the fallback or a placeholder); a malformed
//! variable node is.

use serde_json::Value;
use template_types::{AttrKind, DocNode, NodeKind, VariableAttrs};

use crate::path;
use crate::EngineError;

/// Shown when a variable resolves to nothing and has no fallback.
pub const MISSING_PLACEHOLDER: &str = "___";

/// Render a preview tree with all variables resolved against `data`.
///
/// Variable nodes become text nodes with identical marks, so styling
/// survives substitution. Unknown node kinds pass through with their
/// children rendered recursively.
pub fn render_preview(node: &DocNode, data: &Value) -> Result<DocNode, EngineError> {
    match &node.kind {
        NodeKind::Variable => {
            let attrs = variable_attrs(node)?;
            Ok(DocNode {
                kind: NodeKind::Text,
                attrs: None,
                content: None,
                marks: node.marks.clone(),
                text: Some(resolve_text(&attrs, data)),
            })
        }
        NodeKind::Text => Ok(node.clone()),
        NodeKind::Doc | NodeKind::Paragraph | NodeKind::Other(_) => {
            let mut rendered = node.clone();
            if let Some(children) = &node.content {
                rendered.content = Some(
                    children
                        .iter()
                        .map(|child| render_preview(child, data))
                        .collect::<Result<Vec<_>, _>>()?,
                );
            }
            Ok(rendered)
        }
    }
}

/// The editor's plain-text serialization of a tree: text leaves verbatim,
/// variables as `{{label}}`, top-level blocks separated by newlines.
pub fn plain_text(node: &DocNode) -> String {
    match &node.kind {
        NodeKind::Text => node.text.clone().unwrap_or_default(),
        NodeKind::Variable => {
            let label = variable_attrs(node)
                .map(|attrs| attrs.display_label().to_string())
                .unwrap_or_default();
            format!("{{{{{label}}}}}")
        }
        kind => {
            let children = node.content.as_deref().unwrap_or_default();
            let parts: Vec<String> = children.iter().map(plain_text).collect();
            if *kind == NodeKind::Doc {
                parts.join("\n")
            } else {
                parts.concat()
            }
        }
    }
}

fn variable_attrs(node: &DocNode) -> Result<VariableAttrs, EngineError> {
    let attrs = node
        .attrs
        .clone()
        .ok_or_else(|| EngineError::MalformedTree("variable node without attrs".to_string()))?;
    serde_json::from_value(attrs)
        .map_err(|e| EngineError::MalformedTree(format!("invalid variable attrs: {e}")))
}

fn resolve_text(attrs: &VariableAttrs, data: &Value) -> String {
    match path::get(data, &attrs.id) {
        None | Some(Value::Null) => {
            if attrs.fallback.is_empty() {
                MISSING_PLACEHOLDER.to_string()
            } else {
                attrs.fallback.clone()
            }
        }
        Some(value) => format_value(value, &attrs.kind, &attrs.format),
    }
}

/// Format a resolved value according to the variable's declared type.
/// Anything other than a date string or a numeric number, including
/// declared types outside the known set, coerces plainly.
fn format_value(value: &Value, kind: &AttrKind, format: &str) -> String {
    match (kind, value) {
        (AttrKind::Date, Value::String(s)) => format_date(s, format),
        (AttrKind::Number, Value::Number(n)) => format_number(n),
        _ => coerce_string(value),
    }
}

/// Format an ISO 8601 date string, falling back to the raw string when
/// it does not parse. The `format` hint, when non-empty, is a chrono
/// format string; the default is `DD.MM.YYYY`.
fn format_date(s: &str, format: &str) -> String {
    let pattern = if format.is_empty() { "%d.%m.%Y" } else { format };
    let date = chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date())
        })
        .or_else(|_| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format(pattern).to_string(),
        Err(_) => s.to_string(),
    }
}

/// Grouped numeral: NBSP thousands separators, decimal comma, at most
/// three fraction digits.
fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return group_integer(&i.to_string());
    }
    let f = n.as_f64().unwrap_or(0.0);
    let rounded = (f * 1000.0).round() / 1000.0;
    let text = rounded.to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{},{}", group_integer(int_part), frac_part)
        }
        None => group_integer(&text),
    }
}

/// Insert a non-breaking space every three digits, right to left.
fn group_integer(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

/// Plain string coercion: strings verbatim, scalars via JSON encoding,
/// composites as compact JSON.
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
