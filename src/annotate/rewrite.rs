//! Constructor-call detection and in-place flattening.
//!
//! A constructor call is a `Call` whose `func` is a `Name` starting with an
//! uppercase letter, e.g. `Voltage(value=4, unit=U.V)`. It is rewritten into
//! a flattened record on the same mapping:
//!
//! ```text
//! {"__class_name__": "Voltage", "value": 4, "unit": "U.V"}
//! ```
//!
//! plus, in parsable mode, the original call fields.

use tracing::debug;

use crate::annotate::normalize::{normalize, slim};
use crate::annotate::options::{AnnotateOptions, Mode, SkippedArgument, Summary, UnsupportedPolicy};
use crate::ast::{Key, Node, NodeKind, Path, CLASS_NAME_KEY};
use crate::diagnostics::{describe, malformed, AnnotateError};

/// The callee name when `node` is a constructor call.
pub(crate) fn constructor_name(node: &Node) -> Option<&str> {
    if NodeKind::of(node)? != NodeKind::Call {
        return None;
    }
    let func = node.field("func")?;
    if NodeKind::of(func)? != NodeKind::Name {
        return None;
    }
    let id = func.field("id")?.as_str()?;
    id.chars().next().filter(|c| c.is_uppercase())?;
    Some(id)
}

/// Rewrites the node at `path` when it is a constructor call. Returns
/// whether a rewrite happened.
pub(crate) fn try_rewrite(
    root: &mut Node,
    path: &Path,
    options: &AnnotateOptions,
    summary: &mut Summary,
) -> Result<bool, AnnotateError> {
    let node = path
        .resolve(root)
        .ok_or_else(|| AnnotateError::PathNotFound { path: path.clone() })?;
    let Some(class_name) = constructor_name(node) else {
        return Ok(false);
    };
    let class_name = class_name.to_string();
    let fields = keyword_fields(node, path, options, summary)?;

    let record = path
        .resolve_mut(root)
        .and_then(Node::as_mapping_mut)
        .ok_or_else(|| AnnotateError::PathNotFound { path: path.clone() })?;
    debug!(%path, class = %class_name, fields = fields.len(), "flattening constructor");
    record.insert(CLASS_NAME_KEY.to_string(), Node::String(class_name));
    for (name, value) in fields {
        record.insert(name, value);
    }
    if options.mode == Mode::Slim {
        slim(record);
    }
    Ok(true)
}

/// Normalized `(arg, value)` pairs of a call's keyword arguments, in order.
fn keyword_fields(
    call: &Node,
    path: &Path,
    options: &AnnotateOptions,
    summary: &mut Summary,
) -> Result<Vec<(String, Node)>, AnnotateError> {
    let keywords = call
        .field("keywords")
        .and_then(Node::as_sequence)
        .ok_or_else(|| malformed!(NodeKind::Call, path, "keywords", "a Sequence"))?;

    let mut fields = Vec::with_capacity(keywords.len());
    for (i, keyword) in keywords.iter().enumerate() {
        if NodeKind::of(keyword) != Some(NodeKind::Keyword) {
            continue;
        }
        let at = path.child("keywords").child(Key::Index(i));
        let arg = keyword
            .field("arg")
            .ok_or_else(|| malformed!(NodeKind::Keyword, &at, "arg", "present"))?;
        let value = keyword
            .field("value")
            .ok_or_else(|| malformed!(NodeKind::Keyword, &at, "value", "present"))?;

        let name = match arg {
            Node::String(name) => name,
            // `**mapping` has no parameter name to write the value under.
            Node::Null => {
                skip(summary, at, None, value);
                continue;
            }
            _ => return Err(malformed!(NodeKind::Keyword, &at, "arg", "a String or null")),
        };

        match normalize(value, &at.child("value"))? {
            Some(normalized) => fields.push((name.clone(), normalized)),
            None => {
                skip(summary, at, Some(name.clone()), value);
                if options.unsupported == UnsupportedPolicy::Null {
                    fields.push((name.clone(), Node::Null));
                }
            }
        }
    }
    Ok(fields)
}

fn skip(summary: &mut Summary, path: Path, keyword: Option<String>, value: &Node) {
    let found = describe(value);
    debug!(%path, keyword = keyword.as_deref().unwrap_or("**"), %found, "keyword value has no flattened form");
    summary.skipped.push(SkippedArgument {
        path,
        keyword,
        found,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(json: &str) -> Node {
        serde_json::from_str(json).unwrap()
    }

    fn call(func: &str) -> Node {
        node(&format!(
            r#"{{"_type": "Call", "func": {func}, "args": [], "keywords": []}}"#
        ))
    }

    #[test]
    fn detects_capitalized_bare_names_only() {
        assert_eq!(
            constructor_name(&call(r#"{"_type": "Name", "id": "Battery"}"#)),
            Some("Battery")
        );
        assert_eq!(constructor_name(&call(r#"{"_type": "Name", "id": "print"}"#)), None);
        assert_eq!(constructor_name(&call(r#"{"_type": "Name", "id": "_Private"}"#)), None);
        assert_eq!(constructor_name(&call(r#"{"_type": "Name", "id": ""}"#)), None);
        assert_eq!(constructor_name(&call(r#"{"_type": "Name", "id": "Élan"}"#)), Some("Élan"));
        assert_eq!(
            constructor_name(&call(
                r#"{"_type": "Attribute", "attr": "Voltage", "value": {"_type": "Name", "id": "units"}}"#
            )),
            None
        );
        assert_eq!(constructor_name(&node(r#"{"_type": "Name", "id": "Battery"}"#)), None);
    }

    #[test]
    fn writes_class_name_before_keywords() {
        let mut root = node(
            r#"{"_type": "Call", "args": [], "func": {"_type": "Name", "id": "Voltage"},
                "keywords": [
                    {"_type": "keyword", "arg": "value", "value": {"_type": "Constant", "value": 4}},
                    {"_type": "keyword", "arg": "unit", "value":
                        {"_type": "Attribute", "attr": "V", "value": {"_type": "Name", "id": "U"}}}
                ]}"#,
        );
        let mut summary = Summary::default();
        let options = AnnotateOptions::new(Mode::Parsable);
        assert!(try_rewrite(&mut root, &Path::root(), &options, &mut summary).unwrap());
        let keys: Vec<&str> = root.as_mapping().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["_type", "args", "func", "keywords", "__class_name__", "value", "unit"]);
        assert_eq!(root.field("unit"), Some(&Node::from("U.V")));
    }

    #[test]
    fn keyword_colliding_with_call_field_is_removed_in_slim_mode() {
        let mut root = node(
            r#"{"_type": "Call", "args": [], "func": {"_type": "Name", "id": "Box"},
                "keywords": [{"_type": "keyword", "arg": "args", "value": {"_type": "Constant", "value": 1}}]}"#,
        );
        let mut summary = Summary::default();
        try_rewrite(&mut root, &Path::root(), &AnnotateOptions::new(Mode::Parsable), &mut summary)
            .unwrap();
        assert_eq!(root.field("args"), Some(&Node::from(1)));

        let mut root = node(
            r#"{"_type": "Call", "args": [], "func": {"_type": "Name", "id": "Box"},
                "keywords": [{"_type": "keyword", "arg": "args", "value": {"_type": "Constant", "value": 1}}]}"#,
        );
        try_rewrite(&mut root, &Path::root(), &AnnotateOptions::new(Mode::Slim), &mut summary)
            .unwrap();
        assert_eq!(root, node(r#"{"__class_name__": "Box"}"#));
    }

    #[test]
    fn double_star_and_unsupported_values_are_reported() {
        let source = r#"{"_type": "Call", "args": [], "func": {"_type": "Name", "id": "Cell"},
                "keywords": [
                    {"_type": "keyword", "arg": "items", "value": {"_type": "List", "elts": []}},
                    {"_type": "keyword", "arg": null, "value": {"_type": "Name", "id": "extra"}}
                ]}"#;
        let mut root = node(source);
        let mut summary = Summary::default();
        try_rewrite(&mut root, &Path::root(), &AnnotateOptions::default(), &mut summary).unwrap();
        assert_eq!(root, node(r#"{"__class_name__": "Cell"}"#));
        assert_eq!(summary.skipped.len(), 2);
        assert_eq!(summary.skipped[0].keyword.as_deref(), Some("items"));
        assert_eq!(summary.skipped[0].path.to_string(), "$.keywords[0]");
        assert_eq!(summary.skipped[0].found, "a `List` node");
        assert_eq!(summary.skipped[1].keyword, None);

        let mut root = node(source);
        let options = AnnotateOptions::default().with_unsupported(UnsupportedPolicy::Null);
        try_rewrite(&mut root, &Path::root(), &options, &mut Summary::default()).unwrap();
        assert_eq!(root, node(r#"{"__class_name__": "Cell", "items": null}"#));
    }

    #[test]
    fn non_keyword_entries_are_ignored() {
        let mut root = node(
            r#"{"_type": "Call", "args": [], "func": {"_type": "Name", "id": "Cell"},
                "keywords": [1, {"_type": "Starred"}]}"#,
        );
        try_rewrite(&mut root, &Path::root(), &AnnotateOptions::default(), &mut Summary::default())
            .unwrap();
        assert_eq!(root, node(r#"{"__class_name__": "Cell"}"#));
    }

    #[test]
    fn missing_keywords_is_malformed() {
        let mut root = node(r#"{"_type": "Call", "func": {"_type": "Name", "id": "Cell"}}"#);
        let before = root.clone();
        let err = try_rewrite(&mut root, &Path::root(), &AnnotateOptions::default(), &mut Summary::default())
            .unwrap_err();
        assert!(matches!(
            err,
            AnnotateError::MalformedShape { kind: NodeKind::Call, field: "keywords", .. }
        ));
        assert_eq!(root, before);
    }

    #[test]
    fn keyword_without_arg_is_malformed() {
        let mut root = node(
            r#"{"_type": "Call", "args": [], "func": {"_type": "Name", "id": "Cell"},
                "keywords": [{"_type": "keyword", "value": {"_type": "Constant", "value": 1}}]}"#,
        );
        let err = try_rewrite(&mut root, &Path::root(), &AnnotateOptions::default(), &mut Summary::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed keyword node at $.keywords[0]: expected `arg` to be present"
        );
    }
}
