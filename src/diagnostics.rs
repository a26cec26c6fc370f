//! Unified, `miette`-based diagnostics for the annotator.
//!
//! Every failure of a traversal, a path lookup or the codec is an
//! [`AnnotateError`]. Errors are fatal to the operation that raised them:
//! the first malformed node met in post-order aborts the whole traversal.
//!
//! Malformed-shape errors are built with the `malformed!` macro so the
//! offending node kind, location and field are always reported together.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::{Node, NodeKind, Path};
use crate::codec::Format;

/// Boxed cause carried by codec failures.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Diagnostic, Debug)]
pub enum AnnotateError {
    #[error("root node is not a Module (found {found})")]
    #[diagnostic(
        code(annotree::root::not_a_module),
        help("annotation starts at the `Module` node of a parsed program")
    )]
    NotARoot { found: String },

    #[error("malformed {kind} node at {path}: expected `{field}` to be {expected}")]
    #[diagnostic(code(annotree::shape::malformed))]
    MalformedShape {
        kind: NodeKind,
        path: Path,
        field: &'static str,
        expected: &'static str,
    },

    #[error("no node at {path}")]
    #[diagnostic(
        code(annotree::path::not_found),
        help("paths look like $.body[0].value; indices address sequences, names address fields")
    )]
    PathNotFound { path: Path },

    #[error("could not read {format} tree")]
    #[diagnostic(code(annotree::codec::read))]
    Decode {
        format: Format,
        #[source]
        source: BoxedCause,
    },

    #[error("could not write {format} tree")]
    #[diagnostic(code(annotree::codec::write))]
    Encode {
        format: Format,
        #[source]
        source: BoxedCause,
    },

    #[error("could not read {}", .path.display())]
    #[diagnostic(code(annotree::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write output")]
    #[diagnostic(code(annotree::io::write))]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl AnnotateError {
    pub fn not_a_root(found: &Node) -> Self {
        AnnotateError::NotARoot {
            found: describe(found),
        }
    }
}

/// Short description of a node for error messages: the tag for syntax
/// nodes, the type name otherwise.
pub fn describe(node: &Node) -> String {
    match node {
        Node::Mapping(_) => match node.tag() {
            Some(tag) => format!("a `{}` node", tag),
            None => "a Mapping without `_type`".to_string(),
        },
        other => format!("a {}", other.type_name()),
    }
}

/// Builds an [`AnnotateError::MalformedShape`].
///
/// `malformed!(kind, path, field, expected)`
macro_rules! malformed {
    ($kind:expr, $path:expr, $field:expr, $expected:expr) => {
        $crate::diagnostics::AnnotateError::MalformedShape {
            kind: $kind,
            path: ::std::clone::Clone::clone($path),
            field: $field,
            expected: $expected,
        }
    };
}

pub(crate) use malformed;
