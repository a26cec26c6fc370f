//! Keyword-argument value normalization.
//!
//! A keyword value is flattened into one of:
//! - the literal itself for `Constant` nodes (`a=1`, `b='b'`, `c=None`);
//! - the identifier text for `Name` nodes (`a=t` gives `"t"`);
//! - the dotted text for `Attribute` chains (`unit=U.V` gives `"U.V"`);
//! - the slim record of an already flattened constructor call.
//!
//! Anything else has no flattened form and yields `None`. A string literal
//! and a bare name with the same text flatten to the same string.

use crate::annotate::attribute;
use crate::ast::{Mapping, Node, NodeKind, Path, CALL_FIELDS, CLASS_NAME_KEY};
use crate::diagnostics::{malformed, AnnotateError};

pub(crate) fn normalize(value: &Node, path: &Path) -> Result<Option<Node>, AnnotateError> {
    let Some(map) = value.as_mapping() else {
        return Ok(None);
    };
    match NodeKind::of(value) {
        Some(NodeKind::Constant) => map
            .get("value")
            .cloned()
            .map(Some)
            .ok_or_else(|| malformed!(NodeKind::Constant, path, "value", "present")),
        Some(NodeKind::Name) => Ok(Some(Node::from(attribute::name_id(value, path)?))),
        Some(NodeKind::Attribute) => Ok(attribute::flatten(value, path)?.map(Node::String)),
        // Nested constructors are embedded in slim form whatever the mode.
        _ if map.contains_key(CLASS_NAME_KEY) => {
            let mut record = map.clone();
            slim(&mut record);
            Ok(Some(Node::Mapping(record)))
        }
        _ => Ok(None),
    }
}

/// Removes the call-structure fields (`_type`, `args`, `func`, `keywords`)
/// from a flattened record. Remaining fields keep their order.
pub fn slim(record: &mut Mapping) {
    for key in CALL_FIELDS {
        record.shift_remove(key);
    }
}
