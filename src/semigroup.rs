//! Semigroup trait for accumulating validation failures
//!
//! A Semigroup is a type with an associative binary operation. Specs use it to
//! accumulate failures instead of stopping at the first one: a conjunction
//! reports `left.combine(right)` of its children's error trees.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use specimen::{ErrorTree, Semigroup};
//!
//! let left = ErrorTree::message("1.5 does not satisfy specification is_integer");
//! let right = ErrorTree::message("1.5 does not satisfy specification even");
//! assert_eq!(left.combine(right).len(), 2);
//! ```

/// A type that supports an associative binary operation
///
/// # Note on Ownership
///
/// The `combine` method takes `self` by value, not by reference. If you need to
/// preserve the original values, you must clone them before combining.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}
