//! Predicates over dynamic values
//!
//! A [`Predicate`] decides whether a [`Value`] is acceptable. Any
//! `Fn(&Value) -> bool` closure or function is a predicate, and
//! [`Fallible`] adapts functions that may fail to decide. A predicate that
//! returns an error or panics is reported as "throws error on specification",
//! never propagated to the caller.
//!
//! # Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use specimen::predicate::{is_integer, Fallible, Predicate};
//!
//! assert_eq!(is_integer.evaluate(&json!(3)), Ok(true));
//! assert_eq!(is_integer.describe(), "is_integer");
//!
//! let even = Fallible(|v: &Value| {
//!     v.as_i64().map(|n| n % 2 == 0).ok_or("not a whole number")
//! });
//! assert_eq!(even.evaluate(&json!(4)), Ok(true));
//! assert!(even.evaluate(&json!("4")).is_err());
//! ```

mod json;

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;

use crate::error::PredicateError;

pub use json::{is_array, is_boolean, is_integer, is_null, is_number, is_object, is_string};

/// A check over dynamic values.
pub trait Predicate: 'static {
    /// Decide whether `value` is acceptable.
    ///
    /// `Err` means the predicate could not decide; specs treat it as a failure.
    fn evaluate(&self, value: &Value) -> Result<bool, PredicateError>;

    /// Name used for specs built from this predicate when none is given.
    ///
    /// Defaults to the function's own name, or the full type path for closures.
    fn describe(&self) -> String {
        short_type_name::<Self>().to_string()
    }
}

// Blanket impl for closures
impl<F> Predicate for F
where
    F: Fn(&Value) -> bool + 'static,
{
    #[inline]
    fn evaluate(&self, value: &Value) -> Result<bool, PredicateError> {
        Ok(self(value))
    }
}

/// Adapts a function returning `Result<bool, E>` into a [`Predicate`].
///
/// An `Err` is reported as the predicate throwing.
#[derive(Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F> fmt::Debug for Fallible<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fallible")
            .field(&short_type_name::<F>())
            .finish()
    }
}

impl<F, E> Predicate for Fallible<F>
where
    F: Fn(&Value) -> Result<bool, E> + 'static,
    E: fmt::Display,
{
    fn evaluate(&self, value: &Value) -> Result<bool, PredicateError> {
        (self.0)(value).map_err(|e| PredicateError::new(e.to_string()))
    }

    fn describe(&self) -> String {
        short_type_name::<F>().to_string()
    }
}

/// Evaluate a predicate, turning a panic into a [`PredicateError`].
pub(crate) fn evaluate_caught(
    predicate: &dyn Predicate,
    value: &Value,
) -> Result<bool, PredicateError> {
    panic::catch_unwind(AssertUnwindSafe(|| predicate.evaluate(value)))
        .unwrap_or_else(|payload| Err(PredicateError::from_panic(payload)))
}

/// Last path segment of a type name, or the whole name for closures and generics.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    if full.ends_with("{{closure}}") || full.contains('<') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}
