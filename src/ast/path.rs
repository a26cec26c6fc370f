//! A canonical, type-safe representation of a path into a syntax tree.
//!
//! Paths are structural: resolving the same path against a tree whose
//! mappings gained or lost fields still reaches the same node, as long as
//! the fields along the path were kept.

use crate::ast::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One step of a [`Path`]: a mapping field or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Index(usize),
    Field(String),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Field(name.to_string())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

/// Location of a node from the tree root. The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path(pub Vec<Key>);

impl Path {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `self + [key]`.
    pub fn child(&self, key: impl Into<Key>) -> Self {
        let mut keys = Vec::with_capacity(self.0.len() + 1);
        keys.extend(self.0.iter().cloned());
        keys.push(key.into());
        Self(keys)
    }

    pub fn resolve<'a>(&self, root: &'a Node) -> Option<&'a Node> {
        let mut current = root;
        for key in &self.0 {
            current = match (current, key) {
                (Node::Mapping(map), Key::Field(name)) => map.get(name.as_str())?,
                (Node::Sequence(items), Key::Index(i)) => items.get(*i)?,
                _ => return None,
            };
        }
        Some(current)
    }

    pub fn resolve_mut<'a>(&self, root: &'a mut Node) -> Option<&'a mut Node> {
        let mut current = root;
        for key in &self.0 {
            current = match (current, key) {
                (Node::Mapping(map), Key::Field(name)) => map.get_mut(name.as_str())?,
                (Node::Sequence(items), Key::Index(i)) => items.get_mut(*i)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

/// Field names made of letters, digits and `_` (but not digits only)
/// display as `.name`; any other name is quoted as `["name"]`.
fn is_plain_field(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| c.is_alphanumeric() || c == '_')
        && name.parse::<usize>().is_err()
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for key in &self.0 {
            match key {
                Key::Field(name) if is_plain_field(name) => write!(f, ".{}", name)?,
                Key::Field(name) => {
                    write!(f, "[\"")?;
                    for c in name.chars() {
                        if c == '"' || c == '\\' {
                            write!(f, "\\")?;
                        }
                        write!(f, "{}", c)?;
                    }
                    write!(f, "\"]")?;
                }
                Key::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParseError {
    pub input: String,
}

impl fmt::Display for PathParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid path '{}': expected a form like $.body[0].value", self.input)
    }
}

impl std::error::Error for PathParseError {}

/// Parses `$.body[0].value`, `body[0].value` and `body.0.value`. Quoted
/// segments (`$["a.b"]`, with `\"` and `\\` escapes) name fields verbatim.
impl FromStr for Path {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PathParseError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let mut rest = trimmed.strip_prefix('$').unwrap_or(trimmed);
        if rest == "." {
            return Ok(Self::root());
        }
        let mut keys = Vec::new();
        let mut first = true;
        while !rest.is_empty() {
            if let Some(inner) = rest.strip_prefix('[') {
                let (key, tail) = bracket_segment(inner).ok_or_else(err)?;
                keys.push(key);
                rest = tail;
            } else {
                let after = match rest.strip_prefix('.') {
                    Some(after) => after,
                    None if first => rest,
                    None => return Err(err()),
                };
                let end = after.find(|c: char| c == '.' || c == '[').unwrap_or(after.len());
                let name = &after[..end];
                if name.is_empty() {
                    return Err(err());
                }
                keys.push(match name.parse::<usize>() {
                    Ok(i) => Key::Index(i),
                    Err(_) => Key::Field(name.to_string()),
                });
                rest = &after[end..];
            }
            first = false;
        }
        Ok(Self(keys))
    }
}

/// Parses what follows a `[`: an index or a quoted field name, up to and
/// including the closing `]`. Returns the key and the remaining input.
fn bracket_segment(input: &str) -> Option<(Key, &str)> {
    let Some(quoted) = input.strip_prefix('"') else {
        let close = input.find(']')?;
        let index = input[..close].parse::<usize>().ok()?;
        return Some((Key::Index(index), &input[close + 1..]));
    };
    let mut name = String::new();
    let mut chars = quoted.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => name.push(chars.next()?.1),
            '"' => {
                let tail = quoted[i + 1..].strip_prefix(']')?;
                return Some((Key::Field(name), tail));
            }
            _ => name.push(c),
        }
    }
    None
}
