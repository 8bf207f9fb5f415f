//! Variable attributes and catalog definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The type a user declares on a variable node.
///
/// The suggestion flow copies a catalog entry's type verbatim into node
/// attrs, so values outside the declared set (`boolean`, `array`, ...)
/// occur in real documents. They deserialize into [`AttrKind::Other`]
/// and render with plain string coercion rather than failing the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum AttrKind {
    #[default]
    String,
    Number,
    Date,
    Image,
    Other(std::string::String),
}

impl From<String> for AttrKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "string" => AttrKind::String,
            "number" => AttrKind::Number,
            "date" => AttrKind::Date,
            "image" => AttrKind::Image,
            _ => AttrKind::Other(s),
        }
    }
}

impl From<AttrKind> for String {
    fn from(kind: AttrKind) -> String {
        match kind {
            AttrKind::String => "string".to_string(),
            AttrKind::Number => "number".to_string(),
            AttrKind::Date => "date".to_string(),
            AttrKind::Image => "image".to_string(),
            AttrKind::Other(s) => s,
        }
    }
}

/// The type inferred for a sample-data value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    String,
    Number,
    Date,
    Boolean,
    Array,
    Object,
}

/// Attributes of a `variable` document node.
///
/// `id` is the dot-separated binding path and the only required field;
/// everything else has the editor's defaults. Attribute updates go
/// through the `with_*` builders (the settings-dialog surface).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableAttrs {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: AttrKind,
    #[serde(default)]
    pub fallback: String,
    #[serde(default)]
    pub format: String,
}

impl VariableAttrs {
    /// New attrs for a binding path; label defaults to the path itself.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            kind: AttrKind::default(),
            fallback: String::new(),
            format: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_kind(mut self, kind: AttrKind) -> Self {
        self.kind = kind;
        self
    }

    /// Text shown when the binding path resolves to nothing.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Type-specific formatting hint (e.g. a date format string).
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// The label if set, otherwise the id.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// One entry of the variable catalog built from sample data.
///
/// `label` mirrors `id` so UI surfaces show the full path
/// (`client.name`, not `name`). For array-element schemas the id uses
/// the `path[].key` convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub value: Value,
}

impl VariableDefinition {
    pub fn new(id: impl Into<String>, kind: ValueKind, value: Value) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            kind,
            value,
        }
    }
}
