//! Constructor-call annotation.
//!
//! The [`Annotator`] walks a `Module` tree once, bottom-up, and turns every
//! call of a capitalized bare name into a flattened instance record:
//!
//! ```text
//! ClassA(a=1, b='b', c=ClassB(d=False), e=A.B)
//! ```
//!
//! becomes (slim mode)
//!
//! ```text
//! {"__class_name__": "ClassA", "a": 1, "b": "b",
//!  "c": {"__class_name__": "ClassB", "d": false}, "e": "A.B"}
//! ```
//!
//! Everything that is not a constructor call is left as it is.

use tracing::{debug, instrument};

use crate::ast::{Node, NodeKind};
use crate::diagnostics::AnnotateError;

pub mod attribute;
pub mod normalize;
pub mod options;
pub mod rewrite;
pub mod walk;

pub use normalize::slim;
pub use options::{AnnotateOptions, Mode, SkippedArgument, Summary, UnsupportedPolicy};

/// A configured annotation pass. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotator {
    options: AnnotateOptions,
}

impl Annotator {
    pub fn new(options: impl Into<AnnotateOptions>) -> Self {
        Self {
            options: options.into(),
        }
    }

    pub fn options(&self) -> &AnnotateOptions {
        &self.options
    }

    /// Annotates `tree` in place.
    ///
    /// Fails with [`AnnotateError::NotARoot`] before touching anything when
    /// the root is not a `Module` node. A malformed node aborts the walk and
    /// leaves the constructors already visited rewritten.
    #[instrument(level = "debug", skip_all, fields(mode = ?self.options.mode))]
    pub fn annotate_in_place(&self, tree: &mut Node) -> Result<Summary, AnnotateError> {
        if NodeKind::of(tree) != Some(NodeKind::Module) {
            return Err(AnnotateError::not_a_root(tree));
        }
        let summary = walk::walk(tree, &self.options)?;
        debug!(
            visited = summary.visited,
            rewritten = summary.rewritten,
            skipped = summary.skipped.len(),
            "annotation finished"
        );
        Ok(summary)
    }

    /// Annotates and returns `tree`.
    pub fn annotate(&self, mut tree: Node) -> Result<Node, AnnotateError> {
        self.annotate_in_place(&mut tree)?;
        Ok(tree)
    }
}
