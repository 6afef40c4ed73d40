//! Nested validation failures shaped like the validated data
//!
//! An [`ErrorTree`] is a list of nodes. A node is either a plain message or a
//! set of children keyed by field name or array index. A tree with no nodes
//! means "valid"; constructors never keep empty children, so emptiness holds
//! at every level.
//!
//! # Examples
//!
//! ```
//! use specimen::{ErrorTree, PathSegment};
//!
//! let tree = ErrorTree::nested(vec![
//!     (PathSegment::from("user"), ErrorTree::nested(vec![
//!         (PathSegment::Index(2), ErrorTree::message("\"x\" does not satisfy specification is_integer")),
//!     ])),
//! ]);
//!
//! let entries = tree.flatten();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].path_string(), "user.2");
//! assert_eq!(entries[0].to_string(), "user.2: \"x\" does not satisfy specification is_integer");
//! ```

use std::fmt;

use crate::Semigroup;

/// A single step into a validated value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSegment {
    /// Object field name
    Field(String),
    /// Array position
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// One entry of an [`ErrorTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorNode {
    /// A failure message at the current path
    Message(String),
    /// Failures below the current path, in field or index order
    Nested(Vec<(PathSegment, ErrorTree)>),
}

/// Validation failures mirroring the shape of the validated value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTree {
    nodes: Vec<ErrorNode>,
}

impl ErrorTree {
    /// The tree of a valid value.
    pub fn ok() -> Self {
        Self::default()
    }

    /// A tree holding a single message at the root.
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            nodes: vec![ErrorNode::Message(msg.into())],
        }
    }

    /// A tree holding child failures keyed by field or index.
    ///
    /// Empty children are dropped; if nothing remains the result is [`ErrorTree::ok`].
    pub fn nested(children: Vec<(PathSegment, ErrorTree)>) -> Self {
        let children: Vec<_> = children
            .into_iter()
            .filter(|(_, tree)| !tree.is_empty())
            .collect();
        if children.is_empty() {
            Self::ok()
        } else {
            Self {
                nodes: vec![ErrorNode::Nested(children)],
            }
        }
    }

    /// True when the tree records no failure.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Top-level nodes in order.
    pub fn nodes(&self) -> &[ErrorNode] {
        &self.nodes
    }

    /// Messages recorded directly at the root, skipping nested nodes.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|node| match node {
            ErrorNode::Message(msg) => Some(msg.as_str()),
            ErrorNode::Nested(_) => None,
        })
    }

    /// The subtree recorded under `segment`, if any.
    ///
    /// ```
    /// use serde_json::json;
    /// use specimen::{object_of, predicate::is_integer, spec, PathSegment};
    ///
    /// let point = object_of([("x", spec(is_integer)), ("y", spec(is_integer))]);
    /// let errors = point.errors(&json!({ "x": 1, "y": "2" }));
    /// assert!(errors.get(&PathSegment::from("x")).is_none());
    /// assert!(errors.get(&PathSegment::from("y")).is_some());
    /// ```
    pub fn get(&self, segment: &PathSegment) -> Option<&ErrorTree> {
        self.nodes.iter().find_map(|node| match node {
            ErrorNode::Nested(children) => children
                .iter()
                .find(|(key, _)| key == segment)
                .map(|(_, tree)| tree),
            ErrorNode::Message(_) => None,
        })
    }

    /// Flatten depth-first into `(path, message)` entries.
    ///
    /// Messages keep the path of the node holding them; nested nodes extend
    /// the path with each key, visited in recorded order.
    pub fn flatten(&self) -> Vec<ErrorEntry> {
        let mut entries = Vec::new();
        let mut path = Vec::new();
        self.flatten_into(&mut path, &mut entries);
        entries
    }

    fn flatten_into(&self, path: &mut Vec<PathSegment>, entries: &mut Vec<ErrorEntry>) {
        for node in &self.nodes {
            match node {
                ErrorNode::Message(msg) => entries.push(ErrorEntry {
                    path: path.clone(),
                    message: msg.clone(),
                }),
                ErrorNode::Nested(children) => {
                    for (key, tree) in children {
                        path.push(key.clone());
                        tree.flatten_into(path, entries);
                        path.pop();
                    }
                }
            }
        }
    }
}

impl Semigroup for ErrorTree {
    fn combine(mut self, other: Self) -> Self {
        self.nodes.extend(other.nodes);
        self
    }
}

/// A failure message together with the path it was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorEntry {
    /// Field names and indices leading to the failing value
    pub path: Vec<PathSegment>,
    /// What went wrong
    pub message: String,
}

impl ErrorEntry {
    /// The path joined with dots, empty for the root.
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path_string(), self.message)
        }
    }
}
