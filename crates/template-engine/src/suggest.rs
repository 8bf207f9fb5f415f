//! Autocomplete over the variable catalog
//!
//! Filters catalog entries by case-insensitive substring match and
//! offers a "create new variable" affordance when the query names a
//! path no entry matches exactly. [`SuggestionCursor`] models the
//! popup's keyboard navigation: catalog rows first, the create row
//! last, wrapping around in both directions.

use serde::Serialize;
use serde_json::Value;
use template_types::{ValueKind, VariableDefinition};

use crate::path;

/// Result of matching a query against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestions<'a> {
    /// Catalog entries whose id contains the query, in catalog order.
    pub items: Vec<&'a VariableDefinition>,
    /// Whether the query can be accepted as a brand-new variable.
    pub can_create: bool,
}

/// Filter the catalog for a query string.
///
/// `items` keeps catalog order and matches anywhere in the id, not just
/// the prefix. `can_create` is true iff the trimmed query is non-empty
/// and no entry's id equals it case-insensitively; a substring match
/// alone does not suppress creation.
pub fn match_catalog<'a>(catalog: &'a [VariableDefinition], query: &str) -> Suggestions<'a> {
    let needle = query.to_lowercase();
    let items: Vec<&VariableDefinition> = catalog
        .iter()
        .filter(|v| v.id.to_lowercase().contains(&needle))
        .collect();

    // Same Unicode case folding as the filter above, so a differently
    // cased non-ASCII id still suppresses creation
    let trimmed = query.trim().to_lowercase();
    let can_create =
        !trimmed.is_empty() && !catalog.iter().any(|v| v.id.to_lowercase() == trimmed);

    Suggestions { items, can_create }
}

/// The definition synthesized when the user accepts the create row.
pub fn create_definition(query: &str) -> VariableDefinition {
    VariableDefinition::new(query.trim(), ValueKind::String, Value::String(String::new()))
}

/// Persist a newly created variable into sample data.
///
/// Returns a new object with an empty string at the query's path;
/// existing keys (including the target, if it somehow exists) are left
/// untouched.
pub fn accept_create(data: &Value, query: &str) -> Value {
    path::set(data, query.trim(), Value::String(String::new()))
}

/// One row of the suggestion popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionRow {
    /// Index into [`Suggestions::items`].
    Item(usize),
    Create,
}

/// Keyboard-navigation state for the suggestion popup.
///
/// Rows are the matched items in order, then the create row when
/// available. Up/down wrap around; an empty popup has no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionCursor {
    item_count: usize,
    has_create: bool,
    selected: usize,
}

impl SuggestionCursor {
    pub fn new(suggestions: &Suggestions<'_>) -> Self {
        Self {
            item_count: suggestions.items.len(),
            has_create: suggestions.can_create,
            selected: 0,
        }
    }

    fn row_count(&self) -> usize {
        self.item_count + usize::from(self.has_create)
    }

    pub fn move_down(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn move_up(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// The currently selected row, if any rows exist.
    pub fn selected(&self) -> Option<SuggestionRow> {
        if self.row_count() == 0 {
            None
        } else if self.selected < self.item_count {
            Some(SuggestionRow::Item(self.selected))
        } else {
            Some(SuggestionRow::Create)
        }
    }
}
