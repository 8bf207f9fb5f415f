//! Document tree model
//!
//! Mirrors the editor's JSON wire shape exactly: every node carries a
//! `type` discriminant; `attrs`, `content`, `marks`, and `text` appear
//! only where the editor emits them. Unknown node kinds deserialize into
//! [`NodeKind::Other`] so the engine can traverse documents produced by
//! newer editor extensions without failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Discriminant of a document node.
///
/// Closed set of kinds the engine understands, plus a pass-through
/// variant for anything else the editor may emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Doc,
    Paragraph,
    Text,
    Variable,
    Other(String),
}

impl From<String> for NodeKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "doc" => NodeKind::Doc,
            "paragraph" => NodeKind::Paragraph,
            "text" => NodeKind::Text,
            "variable" => NodeKind::Variable,
            _ => NodeKind::Other(s),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> String {
        match kind {
            NodeKind::Doc => "doc".to_string(),
            NodeKind::Paragraph => "paragraph".to_string(),
            NodeKind::Text => "text".to_string(),
            NodeKind::Variable => "variable".to_string(),
            NodeKind::Other(s) => s,
        }
    }
}

/// A style annotation on a leaf node (bold, italic, strike, ...).
///
/// Attrs are opaque to the engine and pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Value>,
}

impl Mark {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: None,
        }
    }
}

/// A node of the document tree.
///
/// Only `text` and `variable` nodes carry `marks`; only leaf kinds omit
/// `content`. The engine reads trees and returns new ones; it never
/// mutates a caller's node in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<DocNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<Mark>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl DocNode {
    /// Top-level document node.
    pub fn doc(content: Vec<DocNode>) -> Self {
        Self {
            kind: NodeKind::Doc,
            attrs: None,
            content: Some(content),
            marks: None,
            text: None,
        }
    }

    pub fn paragraph(content: Vec<DocNode>) -> Self {
        Self {
            kind: NodeKind::Paragraph,
            attrs: None,
            content: Some(content),
            marks: None,
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            attrs: None,
            content: None,
            marks: None,
            text: Some(text.into()),
        }
    }

    /// Text node carrying style marks.
    pub fn styled_text(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            kind: NodeKind::Text,
            attrs: None,
            content: None,
            marks: Some(marks),
            text: Some(text.into()),
        }
    }

    /// Variable node with the given attrs (serialized as the editor does).
    pub fn variable(attrs: Value) -> Self {
        Self {
            kind: NodeKind::Variable,
            attrs: Some(attrs),
            content: None,
            marks: None,
            text: None,
        }
    }

    /// Parse an editor JSON value into a typed tree.
    ///
    /// Fails when the value does not honor the node shape (a node that is
    /// not an object, `content` that is not a sequence, ...).
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Serialize back to the editor's JSON shape.
    pub fn to_value(&self) -> Value {
        // DocNode contains no map keys that can fail to serialize
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Whether this node kind is a leaf (never carries `content`).
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Text | NodeKind::Variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn node_kind_round_trips_known_and_unknown() {
        assert_eq!(NodeKind::from("doc".to_string()), NodeKind::Doc);
        assert_eq!(String::from(NodeKind::Paragraph), "paragraph");
        let custom = NodeKind::from("callout".to_string());
        assert_eq!(custom, NodeKind::Other("callout".to_string()));
        assert_eq!(String::from(custom), "callout");
    }

    #[test]
    fn deserializes_editor_document() {
        let doc = json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [
                    { "type": "text", "text": "Hello, ", "marks": [{ "type": "bold" }] },
                    { "type": "variable", "attrs": { "id": "client.name", "label": "client.name" } }
                ]
            }]
        });

        let tree = DocNode::from_value(doc).unwrap();
        assert_eq!(tree.kind, NodeKind::Doc);
        let para = &tree.content.as_ref().unwrap()[0];
        assert_eq!(para.kind, NodeKind::Paragraph);
        let children = para.content.as_ref().unwrap();
        assert_eq!(children[0].marks.as_ref().unwrap()[0].kind, "bold");
        assert_eq!(children[1].kind, NodeKind::Variable);
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let node = DocNode::text("plain");
        let value = node.to_value();
        assert_eq!(value, json!({ "type": "text", "text": "plain" }));

        let styled = DocNode::styled_text("loud", vec![Mark::new("bold")]);
        assert_eq!(
            styled.to_value(),
            json!({ "type": "text", "text": "loud", "marks": [{ "type": "bold" }] })
        );
    }

    #[test]
    fn leaf_kinds_are_text_and_variable() {
        assert!(DocNode::text("t").is_leaf());
        assert!(DocNode::variable(json!({ "id": "a" })).is_leaf());
        assert!(!DocNode::paragraph(vec![]).is_leaf());
        assert!(!DocNode::doc(vec![]).is_leaf());
    }

    #[test]
    fn unknown_kind_preserves_shape() {
        let raw = json!({
            "type": "horizontalRule"
        });
        let node = DocNode::from_value(raw.clone()).unwrap();
        assert_eq!(node.kind, NodeKind::Other("horizontalRule".to_string()));
        assert_eq!(node.to_value(), raw);
    }

    #[test]
    fn content_must_be_a_sequence() {
        let bad = json!({ "type": "doc", "content": { "type": "paragraph" } });
        assert!(DocNode::from_value(bad).is_err());
    }
}
