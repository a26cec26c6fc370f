//! Reading and writing serialized syntax trees.
//!
//! Parsing source text is left to an external serializer (for Python, any
//! `ast`-to-JSON dumper emitting `_type` discriminants). This module only
//! moves such trees in and out of [`Node`], keeping mapping key order.

use std::fmt;
use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use crate::ast::Node;
use crate::diagnostics::{AnnotateError, BoxedCause};

/// Indentation of pretty JSON output.
const JSON_INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Infers the format from a file extension; `None` when unknown.
    pub fn from_path(path: &FsPath) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a serialized tree.
///
/// JSON input has no nesting limit: the parser's recursion guard is off and
/// the stack grows on demand. YAML keeps `serde_yaml`'s fixed limit of 128
/// nested collections.
pub fn decode(input: &str, format: Format) -> Result<Node, AnnotateError> {
    let result: Result<Node, BoxedCause> = match format {
        Format::Json => from_json_unbounded(input).map_err(|e| e.into()),
        Format::Yaml => serde_yaml::from_str(input).map_err(|e| e.into()),
    };
    result.map_err(|source| AnnotateError::Decode { format, source })
}

fn from_json_unbounded(input: &str) -> Result<Node, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(input);
    de.disable_recursion_limit();
    let node = Node::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(node)
}

/// Serializes a tree. JSON is indented by four spaces unless `compact`;
/// YAML has a single layout.
pub fn encode(node: &Node, format: Format, compact: bool) -> Result<String, AnnotateError> {
    let result: Result<String, BoxedCause> = match format {
        Format::Json if compact => serde_json::to_string(node).map_err(|e| e.into()),
        Format::Json => to_indented_json(node),
        Format::Yaml => serde_yaml::to_string(node).map_err(|e| e.into()),
    };
    result.map_err(|source| AnnotateError::Encode { format, source })
}

fn to_indented_json(node: &Node) -> Result<String, BoxedCause> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    node.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}
