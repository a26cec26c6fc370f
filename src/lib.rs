//! Annotree: flattening of constructor calls in serialized syntax trees.
//!
//! The input is the JSON/YAML form of a parsed Python module, where every
//! syntax node is a mapping tagged by `_type`. [`annotate`] rewrites each
//! call of a capitalized bare name (`Voltage(value=4, unit=U.V)`) into a
//! flat record tagged with `__class_name__`, one field per keyword argument.
//!
//! ```rust
//! use annotree::{annotate, codec, Mode};
//!
//! let tree = codec::decode(r#"{"_type": "Module", "body": [], "type_ignores": []}"#, codec::Format::Json).unwrap();
//! let tree = annotate(tree, Mode::Slim).unwrap();
//! assert_eq!(tree.tag(), Some("Module"));
//! ```

pub use crate::annotate::{
    AnnotateOptions, Annotator, Mode, SkippedArgument, Summary, UnsupportedPolicy,
};
pub use crate::ast::{Key, Mapping, Node, NodeKind, Path};
pub use crate::diagnostics::AnnotateError;

pub mod annotate;
pub mod ast;
pub mod cli;
pub mod codec;
pub mod diagnostics;
pub mod logging;

/// Annotates `tree` in the given output mode and returns it.
pub fn annotate(tree: Node, mode: Mode) -> Result<Node, AnnotateError> {
    Annotator::new(mode).annotate(tree)
}

/// Looks up the node at `path` without modifying anything.
pub fn resolve_path<'a>(tree: &'a Node, path: &Path) -> Result<&'a Node, AnnotateError> {
    path.resolve(tree)
        .ok_or_else(|| AnnotateError::PathNotFound { path: path.clone() })
}

/// Indented JSON of the subtree at `path`.
pub fn dump_path(tree: &Node, path: &Path) -> Result<String, AnnotateError> {
    let node = resolve_path(tree, path)?;
    codec::encode(node, codec::Format::Json, false)
}
