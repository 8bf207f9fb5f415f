//! Shared data model for the template engine
//!
//! Serde types for the editor's document tree (ProseMirror-style JSON:
//! `type`/`attrs`/`content`/`marks`/`text`) and for the variable catalog
//! derived from sample data. No algorithms live here; the engine crate
//! consumes these types.

pub mod node;
pub mod variable;

pub use node::{DocNode, Mark, NodeKind};
pub use variable::{AttrKind, ValueKind, VariableAttrs, VariableDefinition};
