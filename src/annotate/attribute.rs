//! Dotted-name flattening of `Attribute` chains.
//!
//! `U.V.W` is serialized left-nested:
//! `Attribute(attr=W, value=Attribute(attr=V, value=Name(id=U)))`.

use crate::ast::{Node, NodeKind, Path};
use crate::diagnostics::{malformed, AnnotateError};

/// The `id` of a `Name` node.
pub(crate) fn name_id<'a>(node: &'a Node, path: &Path) -> Result<&'a str, AnnotateError> {
    node.field("id")
        .and_then(Node::as_str)
        .ok_or_else(|| malformed!(NodeKind::Name, path, "id", "a String"))
}

/// Joins a chain of `Attribute` nodes ending in a `Name` into `"U.V.W"`.
///
/// Returns `Ok(None)` when the chain ends in anything other than a `Name`
/// (`f().x`, `"text".upper`): such a value is not a dotted name.
pub(crate) fn flatten(node: &Node, path: &Path) -> Result<Option<String>, AnnotateError> {
    let mut parts: Vec<&str> = Vec::new();
    let mut current = node;
    let mut at = path.clone();
    loop {
        match NodeKind::of(current) {
            Some(NodeKind::Attribute) => {
                let attr = current
                    .field("attr")
                    .and_then(Node::as_str)
                    .ok_or_else(|| malformed!(NodeKind::Attribute, &at, "attr", "a String"))?;
                parts.push(attr);
                current = current
                    .field("value")
                    .ok_or_else(|| malformed!(NodeKind::Attribute, &at, "value", "a node"))?;
                at = at.child("value");
            }
            Some(NodeKind::Name) => {
                parts.push(name_id(current, &at)?);
                break;
            }
            _ => return Ok(None),
        }
    }
    parts.reverse();
    Ok(Some(parts.join(".")))
}
