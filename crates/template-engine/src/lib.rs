//! Document-template variable engine
//!
//! Binds a rich-text document tree to a JSON sample-data object:
//! - discovers bindable variables from sample data ([`catalog`])
//! - resolves variable nodes into a rendered preview tree ([`render`])
//! - matches autocomplete queries against the catalog ([`suggest`])
//! - detects unsaved changes independent of key order ([`canonical`])
//!
//! Everything is pure and synchronous: each call takes fresh input and
//! returns fresh output. Storage, network, and presentation are the
//! caller's concern.

pub mod canonical;
pub mod catalog;
pub mod infer;
pub mod path;
pub mod render;
pub mod sample;
pub mod suggest;

use serde_json::{Map, Value};
use template_types::{DocNode, VariableDefinition};
use thiserror::Error;

pub use canonical::{canonicalize, is_dirty};
pub use catalog::build_catalog;
pub use infer::infer_kind;
pub use render::{plain_text, render_preview, MISSING_PLACEHOLDER};
pub use sample::{add_variable, parse_sample_data};
pub use suggest::{
    accept_create, create_definition, match_catalog, SuggestionCursor, SuggestionRow, Suggestions,
};

/// Errors the engine can report.
///
/// Unresolved variables and ambiguous types are not errors: missing
/// data renders a fallback and inference always returns a best-effort
/// classification.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Sample-data text failed to parse; callers keep their previous
    /// valid state.
    #[error("invalid sample data JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A document node violated the tree shape. Fatal to the specific
    /// call; a partial preview would silently corrupt a visible
    /// document.
    #[error("malformed document tree: {0}")]
    MalformedTree(String),
}

/// TemplateEngine entry point
pub struct TemplateEngine;

impl TemplateEngine {
    pub fn new() -> Self {
        Self
    }

    /// Parse an editor JSON value into a typed document tree.
    pub fn parse_document(&self, value: Value) -> Result<DocNode, EngineError> {
        DocNode::from_value(value).map_err(|e| EngineError::MalformedTree(e.to_string()))
    }

    /// Parse a sample-data blob; invalid JSON is reported, not fatal.
    pub fn parse_sample_data(&self, text: &str) -> Result<Map<String, Value>, EngineError> {
        sample::parse_sample_data(text)
    }

    /// Build the flat variable catalog for a sample-data object.
    pub fn build_catalog(&self, data: &Map<String, Value>) -> Vec<VariableDefinition> {
        catalog::build_catalog(data)
    }

    /// Render a preview tree with all variables resolved against `data`.
    pub fn render_preview(&self, doc: &DocNode, data: &Value) -> Result<DocNode, EngineError> {
        tracing::debug!("rendering preview");
        render::render_preview(doc, data)
    }

    /// Match an autocomplete query against the catalog.
    pub fn match_catalog<'a>(
        &self,
        catalog: &'a [VariableDefinition],
        query: &str,
    ) -> Suggestions<'a> {
        suggest::match_catalog(catalog, query)
    }

    /// Persist a newly created variable into a fresh sample-data object.
    pub fn add_variable(&self, data: &Value, variable_path: &str) -> Value {
        sample::add_variable(data, variable_path)
    }

    /// Canonical string form of a value, for dirty-state snapshots.
    pub fn canonicalize(&self, value: &Value) -> String {
        canonical::canonicalize(value)
    }

    /// Compare the current value against a stored canonical snapshot.
    pub fn is_dirty(&self, current: &Value, stored: &str) -> bool {
        canonical::is_dirty(current, stored)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
