//! Depth-first traversal driver.
//!
//! Nodes are entered top-down but a mapping is handed to the rewriter only
//! once every node below it has been processed, so nested constructor calls
//! are already flattened when their parent call is examined. The walk runs
//! on an explicit frame stack; the input depth never grows the call stack.

use tracing::trace;

use crate::annotate::options::{AnnotateOptions, Summary};
use crate::annotate::rewrite::try_rewrite;
use crate::ast::{Key, Node, Path};
use crate::diagnostics::AnnotateError;

enum Frame {
    /// Visit a node and schedule its children.
    Enter(Path),
    /// All children of this mapping are done; try to rewrite it.
    Exit(Path),
}

pub(crate) fn walk(root: &mut Node, options: &AnnotateOptions) -> Result<Summary, AnnotateError> {
    let mut summary = Summary::default();
    let mut stack = vec![Frame::Enter(Path::root())];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(path) => {
                let node = path
                    .resolve(root)
                    .ok_or_else(|| AnnotateError::PathNotFound { path: path.clone() })?;
                summary.visited += 1;
                let children: Vec<Key> = match node {
                    Node::Sequence(items) => (0..items.len()).map(Key::Index).collect(),
                    Node::Mapping(map) => {
                        stack.push(Frame::Exit(path.clone()));
                        map.keys().cloned().map(Key::Field).collect()
                    }
                    _ => continue,
                };
                // Reversed so children pop in stored order.
                for key in children.into_iter().rev() {
                    stack.push(Frame::Enter(path.child(key)));
                }
            }
            Frame::Exit(path) => {
                if try_rewrite(root, &path, options, &mut summary)? {
                    summary.rewritten += 1;
                } else {
                    trace!(%path, "not a constructor call");
                }
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::options::Mode;

    fn node(json: &str) -> Node {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn counts_every_node() {
        let mut root = node(r#"{"_type": "Module", "body": [1, {"x": null}], "type_ignores": []}"#);
        let summary = walk(&mut root, &AnnotateOptions::default()).unwrap();
        // root, "_type", body, 1, {x}, null, type_ignores
        assert_eq!(summary.visited, 7);
        assert_eq!(summary.rewritten, 0);
    }

    #[test]
    fn inner_calls_are_flattened_first() {
        let mut root = node(
            r#"{"_type": "Call", "args": [], "func": {"_type": "Name", "id": "Outer"},
                "keywords": [{"_type": "keyword", "arg": "inner", "value":
                    {"_type": "Call", "args": [], "func": {"_type": "Name", "id": "Inner"},
                     "keywords": [{"_type": "keyword", "arg": "n", "value": {"_type": "Constant", "value": 2}}]}}]}"#,
        );
        let summary = walk(&mut root, &AnnotateOptions::new(Mode::Slim)).unwrap();
        assert_eq!(summary.rewritten, 2);
        assert_eq!(
            root,
            node(r#"{"__class_name__": "Outer", "inner": {"__class_name__": "Inner", "n": 2}}"#)
        );
    }

    #[test]
    fn constructors_inside_sequences_are_found() {
        let mut root = node(
            r#"{"_type": "Module", "body": [
                {"_type": "Expr", "value": {"_type": "Call", "args": [], "func": {"_type": "Name", "id": "A"}, "keywords": []}},
                {"_type": "Expr", "value": {"_type": "Call", "args": [], "func": {"_type": "Name", "id": "b"}, "keywords": []}}
            ]}"#,
        );
        let summary = walk(&mut root, &AnnotateOptions::new(Mode::Parsable)).unwrap();
        assert_eq!(summary.rewritten, 1);
        let first: Path = "$.body[0].value".parse().unwrap();
        let second: Path = "$.body[1].value".parse().unwrap();
        assert!(first.resolve(&root).unwrap().field("__class_name__").is_some());
        assert!(second.resolve(&root).unwrap().field("__class_name__").is_none());
    }
}
