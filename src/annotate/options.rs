//! Per-traversal configuration and traversal results.

use serde::{Deserialize, Serialize};

use crate::ast::Path;

/// Output mode of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Keep `_type`, `args`, `func` and `keywords` next to the flattened
    /// fields, so the tree can still be turned back into source text.
    Parsable,
    /// Delete the call-structure fields from every flattened node.
    #[default]
    Slim,
}

/// What to write for a keyword argument whose value has no flattened form
/// (a list literal, an arithmetic expression, a function call...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    /// Leave the field out.
    #[default]
    Omit,
    /// Write the field with a `null` value.
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotateOptions {
    pub mode: Mode,
    pub unsupported: UnsupportedPolicy,
}

impl AnnotateOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_unsupported(self, unsupported: UnsupportedPolicy) -> Self {
        Self {
            unsupported,
            ..self
        }
    }
}

impl From<Mode> for AnnotateOptions {
    fn from(mode: Mode) -> Self {
        Self::new(mode)
    }
}

/// A keyword argument left without a flattened value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedArgument {
    /// Location of the `keyword` node.
    pub path: Path,
    /// Parameter name; `None` for a `**mapping` splat.
    pub keyword: Option<String>,
    /// Description of the value that could not be flattened.
    pub found: String,
}

/// Statistics of one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub visited: usize,
    pub rewritten: usize,
    pub skipped: Vec<SkippedArgument>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_slim_notation() {
        let options = AnnotateOptions::default();
        assert_eq!(options.mode, Mode::Slim);
        assert_eq!(options.unsupported, UnsupportedPolicy::Omit);
    }

    #[test]
    fn deserializes_partial_config() {
        let options: AnnotateOptions = serde_json::from_str(r#"{"mode": "parsable"}"#).unwrap();
        assert_eq!(options, AnnotateOptions::new(Mode::Parsable));
        let options: AnnotateOptions = serde_json::from_str(r#"{"unsupported": "null"}"#).unwrap();
        assert_eq!(
            options,
            AnnotateOptions::default().with_unsupported(UnsupportedPolicy::Null)
        );
    }
}
