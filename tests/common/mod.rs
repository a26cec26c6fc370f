//! # Syntax tree builders for annotree tests
//!
//! Small constructors mirroring the serialized Python AST (`_type`
//! discriminants, `ctx` markers on names) so tests can spell out programs
//! without hand-written JSON.

#![allow(dead_code)]

use annotree::{codec, Node};
use serde_json::{json, Value};

pub fn node(value: Value) -> Node {
    Node::from(value)
}

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {path}: {e}"))
}

pub fn fixture_tree(name: &str) -> Node {
    codec::decode(&fixture(name), codec::Format::Json).unwrap()
}

pub fn module(body: Vec<Value>) -> Value {
    json!({"_type": "Module", "body": body, "type_ignores": []})
}

pub fn expr(value: Value) -> Value {
    json!({"_type": "Expr", "value": value})
}

pub fn assign(target: &str, value: Value) -> Value {
    json!({"_type": "Assign", "targets": [name(target)], "type_comment": null, "value": value})
}

pub fn name(id: &str) -> Value {
    json!({"_type": "Name", "ctx": {"_type": "Load"}, "id": id})
}

pub fn constant(value: Value) -> Value {
    json!({"_type": "Constant", "kind": null, "value": value})
}

/// `a.b.c` as a left-nested `Attribute` chain.
pub fn dotted(path: &str) -> Value {
    let mut parts = path.split('.');
    let mut value = name(parts.next().unwrap());
    for attr in parts {
        value = json!({"_type": "Attribute", "attr": attr, "ctx": {"_type": "Load"}, "value": value});
    }
    value
}

pub fn kw(arg: &str, value: Value) -> Value {
    json!({"_type": "keyword", "arg": arg, "value": value})
}

/// `func(*args, **keywords)` where `func` is a bare name.
pub fn call(func: &str, args: Vec<Value>, keywords: Vec<Value>) -> Value {
    json!({"_type": "Call", "args": args, "func": name(func), "keywords": keywords})
}

/// `obj.method(*args)`.
pub fn method_call(obj: &str, method: &str, args: Vec<Value>) -> Value {
    json!({"_type": "Call", "args": args, "func": dotted(&format!("{obj}.{method}")), "keywords": []})
}

pub fn compare_lt(left: &str, right: i64) -> Value {
    json!({
        "_type": "Compare",
        "comparators": [constant(json!(right))],
        "left": name(left),
        "ops": [{"_type": "Lt"}]
    })
}

pub fn aug_add(target: &str, value: i64) -> Value {
    json!({"_type": "AugAssign", "op": {"_type": "Add"}, "target": name(target), "value": constant(json!(value))})
}

pub fn while_loop(test: Value, body: Vec<Value>) -> Value {
    json!({"_type": "While", "body": body, "orelse": [], "test": test})
}

/// True when `annotated` holds every field of `original`, recursively, with
/// the same value and in the same relative order.
pub fn extends(original: &Node, annotated: &Node) -> bool {
    match (original, annotated) {
        (Node::Mapping(orig), Node::Mapping(ann)) => {
            let mut last = None;
            for (key, value) in orig {
                let Some((index, _, other)) = ann.get_full(key.as_str()) else {
                    return false;
                };
                if last.is_some_and(|prev| index < prev) || !extends(value, other) {
                    return false;
                }
                last = Some(index);
            }
            true
        }
        (Node::Sequence(orig), Node::Sequence(ann)) => {
            orig.len() == ann.len() && orig.iter().zip(ann).all(|(o, a)| extends(o, a))
        }
        (o, a) => o == a,
    }
}
