//! Conjunction and disjunction of specs.

use serde_json::Value;

use super::{IntoSpec, Kind, Spec};
use crate::error::{GenerateError, SequenceError};
use crate::sequence::Sequence;

impl Spec {
    /// A spec satisfied when both `self` and `other` are.
    ///
    /// Errors are the concatenation of both sides' errors. Examples are drawn
    /// from both sides at random and kept only when they satisfy both; a run
    /// of [`DEFAULT_MAX_SKIP`](crate::DEFAULT_MAX_SKIP) rejected candidates
    /// makes [`Spec::generate`] fail with
    /// [`GenerateError::NoSuitableExample`](crate::GenerateError::NoSuitableExample).
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::{json, Value};
    /// use specimen::{predicate::is_integer, spec};
    ///
    /// let integer = spec(is_integer).examples([1, -2, 3]).unwrap();
    /// let positive = specimen::spec!(|v: &Value| v.as_f64().is_some_and(|n| n > 0.0))
    ///     .examples([json!(3.5), json!(42)])
    ///     .unwrap();
    ///
    /// let both = integer.and(&positive);
    /// for _ in 0..5 {
    ///     let n = both.generate().unwrap();
    ///     assert!([json!(1), json!(3), json!(42)].contains(&n));
    /// }
    /// ```
    pub fn and(&self, other: impl IntoSpec) -> Spec {
        let left = self.clone();
        let right = other.into_spec();
        let name = format!("{} and {}", left.name(), right.name());

        let (l, r) = (left.clone(), right.clone());
        let label = name.clone();
        let source = left
            .example_source()
            .random_zip(right.example_source())
            .filter(move |candidate: &Value| l.is_valid(candidate) && r.is_valid(candidate))
            // Exhaustion is reported against this conjunction, not an enclosing spec.
            .map_err(move |err| match err {
                SequenceError::MaxSkipReached { max_skip } => GenerateError::NoSuitableExample {
                    spec: label.clone(),
                    attempts: max_skip,
                }
                .into(),
                other => other,
            });

        Spec::from_parts(name, Kind::And(left, right), source)
    }

    /// A spec satisfied when either `self` or `other` is.
    ///
    /// A failing value gets a single message naming both sides; the sides'
    /// own errors are not included. Examples exist only when both sides have
    /// them, and each draw picks a side at random.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use specimen::predicate::{is_null, is_string};
    /// use specimen::spec;
    ///
    /// let maybe_string = spec(is_string).or(is_null);
    /// assert!(maybe_string.is_valid(&json!(null)));
    ///
    /// let errors = maybe_string.errors(&json!(1));
    /// assert_eq!(
    ///     errors.messages().collect::<Vec<_>>(),
    ///     vec!["1 does not satisfy specification is_string or is_null"]
    /// );
    /// assert!(maybe_string.generate().is_err());
    /// ```
    pub fn or(&self, other: impl IntoSpec) -> Spec {
        let left = self.clone();
        let right = other.into_spec();
        let name = format!("{} or {}", left.name(), right.name());

        let source = if left.has_examples() && right.has_examples() {
            left.example_source().random_zip(right.example_source())
        } else {
            Sequence::empty()
        };

        Spec::from_parts(name, Kind::Or(left, right), source)
    }
}
