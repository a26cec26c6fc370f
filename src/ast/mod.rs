//! Generic syntax tree model.
//!
//! The annotator never sees source text. It works on the serialized form of a
//! parsed program: nested [`Node`] values where each syntax node is a mapping
//! tagged by a `_type` field. [`Path`] locates nodes from the root and
//! [`NodeKind`] classifies the tags the annotator dispatches on.

// ============================================================================
// MODULES
// ============================================================================

pub mod kind;
pub mod node;
pub mod path;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use kind::{NodeKind, CALL_FIELDS, CLASS_NAME_KEY, TYPE_KEY};
pub use node::{Mapping, Node};
pub use path::{Key, Path, PathParseError};
