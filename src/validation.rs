//! Outcome of conforming a value to a spec
//!
//! [`Spec::conform`](crate::Spec::conform) hands the value back on success
//! and the full [`ErrorTree`](crate::ErrorTree) on failure, so the caller
//! keeps ownership of whichever side it got.
//!
//! ```
//! use serde_json::json;
//! use specimen::{predicate::is_integer, spec, Validation};
//!
//! match spec(is_integer).conform(json!("7")) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 1),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

/// A conformed value or the errors that prevented it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// The value satisfied the spec
    Success(T),
    /// Everything that was wrong with the value
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }
}
