//! Closed dispatch over the `_type` discriminant of syntax nodes.
//!
//! Only the node kinds the annotator cares about get their own variant;
//! everything else, including mappings with no discriminant at all, is
//! [`NodeKind::Other`].

use crate::ast::node::Node;

/// Field holding the syntax node discriminant.
pub const TYPE_KEY: &str = "_type";
/// Field written on every flattened constructor call.
pub const CLASS_NAME_KEY: &str = "__class_name__";
/// Call-structure fields removed by slim notation.
pub const CALL_FIELDS: [&str; 4] = [TYPE_KEY, "args", "func", "keywords"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Module,
    Call,
    Name,
    Constant,
    Attribute,
    Keyword,
    Other,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Module" => NodeKind::Module,
            "Call" => NodeKind::Call,
            "Name" => NodeKind::Name,
            "Constant" => NodeKind::Constant,
            "Attribute" => NodeKind::Attribute,
            "keyword" => NodeKind::Keyword,
            _ => NodeKind::Other,
        }
    }

    /// Kind of a node, or `None` when the node is not a mapping.
    pub fn of(node: &Node) -> Option<Self> {
        node.as_mapping()?;
        Some(node.tag().map_or(NodeKind::Other, NodeKind::from_tag))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Module => "Module",
            NodeKind::Call => "Call",
            NodeKind::Name => "Name",
            NodeKind::Constant => "Constant",
            NodeKind::Attribute => "Attribute",
            NodeKind::Keyword => "keyword",
            NodeKind::Other => "other",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
