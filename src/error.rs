//! Error types for validation and example generation.
//!
//! Validation failures and generation failures are different kinds on
//! purpose: [`ValidationFailed`] says a value does not satisfy a spec, while
//! [`GenerateError`] says a spec cannot produce examples at all.

use std::error::Error as StdError;
use std::fmt;

use crate::error_tree::{ErrorEntry, ErrorTree};

/// Error returned by [`Spec::validate`](crate::Spec::validate) when a value is rejected.
///
/// Carries the original [`ErrorTree`] and its flattened entries.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use specimen::{object_of, predicate::is_integer, spec};
///
/// let point = object_of([("x", spec(is_integer))]);
/// let err = point.validate(&json!({ "x": "1" })).unwrap_err();
///
/// assert_eq!(err.message(), "x: \"1\" does not satisfy specification is_integer");
/// assert!(err.to_string().starts_with("specification not satisfied:\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailed {
    tree: ErrorTree,
    entries: Vec<ErrorEntry>,
}

impl ValidationFailed {
    /// Wrap a non-empty error tree.
    pub fn new(tree: ErrorTree) -> Self {
        let entries = tree.flatten();
        Self { tree, entries }
    }

    /// The nested failures.
    pub fn tree(&self) -> &ErrorTree {
        &self.tree
    }

    /// The flattened `(path, message)` entries in traversal order.
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Consume the error, returning the nested failures.
    pub fn into_tree(self) -> ErrorTree {
        self.tree
    }

    /// All entries rendered as `path.to.value: message`, one per line.
    pub fn message(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for ValidationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "specification not satisfied:\n{}", self.message())
    }
}

impl StdError for ValidationFailed {}

/// Error returned when a spec cannot produce an example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The spec has no example source attached.
    NoExamples {
        /// Name of the spec lacking examples
        spec: String,
    },
    /// A conjunction rejected too many candidates in a row.
    NoSuitableExample {
        /// Name of the conjunction
        spec: String,
        /// Consecutive rejections allowed before giving up
        attempts: usize,
    },
    /// The underlying sequence failed.
    Sequence(SequenceError),
}

impl GenerateError {
    /// Name of the spec the failure is reported for, if known.
    pub fn spec_name(&self) -> Option<&str> {
        match self {
            Self::NoExamples { spec } | Self::NoSuitableExample { spec, .. } => {
                Some(spec.as_str())
            }
            Self::Sequence(_) => None,
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoExamples { spec } => write!(f, "no example provided for {}", spec),
            Self::NoSuitableExample { spec, attempts } => write!(
                f,
                "no suitable example found for {} after {} attempts, provide explicit examples",
                spec, attempts
            ),
            Self::Sequence(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for GenerateError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Sequence(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SequenceError> for GenerateError {
    fn from(err: SequenceError) -> Self {
        match err {
            SequenceError::Nested(inner) => *inner,
            other => GenerateError::Sequence(other),
        }
    }
}

/// Error raised while pulling from a [`Sequence`](crate::Sequence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A filter rejected more than `max_skip` consecutive elements.
    MaxSkipReached {
        /// Consecutive rejections the filter allowed
        max_skip: usize,
    },
    /// An infinite sequence was asked to materialize.
    Unbounded,
    /// A spec generating values inside a function source failed.
    Nested(Box<GenerateError>),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxSkipReached { max_skip } => write!(
                f,
                "max skip reached: more than {} consecutive elements rejected",
                max_skip
            ),
            Self::Unbounded => write!(f, "cannot collect an infinite sequence"),
            Self::Nested(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for SequenceError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Nested(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<GenerateError> for SequenceError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Sequence(inner) => inner,
            other => SequenceError::Nested(Box::new(other)),
        }
    }
}

/// A predicate that failed to decide, by returning an error or panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateError {
    message: String,
}

impl PredicateError {
    /// Create a new predicate error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "predicate panicked".to_string()
        };
        Self { message }
    }

    /// What the predicate reported.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "predicate failed: {}", self.message)
    }
}

impl StdError for PredicateError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_tree::PathSegment;

    #[test]
    fn test_validation_failed_message() {
        use crate::Semigroup;

        let tree = ErrorTree::message("top").combine(ErrorTree::nested(vec![(
            PathSegment::from("foo"),
            ErrorTree::nested(vec![(PathSegment::Index(1), ErrorTree::message("deep"))]),
        )]));
        let err = ValidationFailed::new(tree);
        assert_eq!(err.entries().len(), 2);
        assert_eq!(err.message(), "top\nfoo.1: deep");
        assert_eq!(
            err.to_string(),
            "specification not satisfied:\ntop\nfoo.1: deep"
        );
    }

    #[test]
    fn test_generate_error_display() {
        let err = GenerateError::NoExamples {
            spec: "is_integer".to_string(),
        };
        assert_eq!(err.to_string(), "no example provided for is_integer");

        let err = GenerateError::NoSuitableExample {
            spec: "a and b".to_string(),
            attempts: 200,
        };
        assert_eq!(
            err.to_string(),
            "no suitable example found for a and b after 200 attempts, provide explicit examples"
        );
        assert_eq!(err.spec_name(), Some("a and b"));
    }

    #[test]
    fn test_nested_round_trip_unwraps() {
        let inner = GenerateError::NoExamples {
            spec: "x".to_string(),
        };
        let seq: SequenceError = inner.clone().into();
        assert!(matches!(seq, SequenceError::Nested(_)));
        assert_eq!(GenerateError::from(seq), inner);
    }

    #[test]
    fn test_sequence_error_into_generate_error() {
        let err = GenerateError::from(SequenceError::Unbounded);
        assert_eq!(err, GenerateError::Sequence(SequenceError::Unbounded));
        assert!(err.source().is_some());
        assert_eq!(err.spec_name(), None);
    }

    #[test]
    fn test_predicate_error_from_panic_payload() {
        let err = PredicateError::from_panic(Box::new("boom"));
        assert_eq!(err.message(), "boom");
        let err = PredicateError::from_panic(Box::new(String::from("bang")));
        assert_eq!(err.message(), "bang");
        let err = PredicateError::from_panic(Box::new(42));
        assert_eq!(err.message(), "predicate panicked");
    }
}
