//! # Specimen
//!
//! > *"Every specification should be able to show you a specimen"*
//!
//! A library for declaring data specifications, validating values against
//! them and generating example values for property-based testing.
//!
//! ## Philosophy
//!
//! A [`Spec`] is a named predicate with an optional source of examples:
//! - **Validate**: check a value and get a path-addressed [`ErrorTree`] back
//! - **Compose**: combine specs with [`Spec::and`], [`Spec::or`], [`object_of`]
//!   and [`array_of`]
//! - **Generate**: draw values that satisfy the spec from a lazy
//!   [`Sequence`] assembled once, when the spec is built
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use specimen::predicate::{is_integer, is_string};
//! use specimen::{array_of, object_of, spec};
//!
//! let integer = spec(is_integer).examples([1, 2, 3]).unwrap();
//! let name = spec(is_string).examples(["ada", "grace"]).unwrap();
//! let positive = specimen::spec!(|v: &Value| v.as_f64().is_some_and(|n| n > 0.0));
//!
//! let user = object_of([
//!     ("name", name),
//!     ("age", integer.and(&positive)),
//!     ("scores", array_of(&integer)),
//! ]);
//!
//! assert!(user.is_valid(&json!({ "name": "ada", "age": 36, "scores": [1, 2] })));
//!
//! let failure = user.validate(&json!({ "name": "ada", "age": -1, "scores": [1, "x"] }));
//! assert_eq!(failure.unwrap_err().entries().len(), 2);
//!
//! let generated = user.generate().unwrap();
//! assert!(user.is_valid(&generated));
//! ```
//!
//! ## Execution model
//!
//! Everything runs synchronously on the calling thread. Validation is pure.
//! Generation advances a cursor owned by the spec instance, see
//! [`Spec::generate`] and [`Spec::fresh`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod error_tree;
pub mod predicate;
pub mod print;
pub mod semigroup;
pub mod sequence;
pub mod spec;
pub mod testing;
pub mod validation;

// Re-exports
pub use error::{GenerateError, PredicateError, SequenceError, ValidationFailed};
pub use error_tree::{ErrorEntry, ErrorNode, ErrorTree, PathSegment};
pub use predicate::{Fallible, Predicate};
pub use semigroup::Semigroup;
pub use sequence::{Cursor, LazySequence, Sequence};
pub use spec::{array_of, object_of, spec, IntoSpec, Spec};
pub use validation::Validation;

/// The dynamic value type validated and generated by specs.
pub use serde_json::Value;

/// Consecutive rejections a filtered sequence tolerates before failing.
pub const DEFAULT_MAX_SKIP: usize = 200;

/// Number of calls a generator function must pass when it is attached.
pub const GENERATOR_SAMPLES: usize = 10;

/// Exclusive upper bound on the length of generated arrays.
pub const MAX_GENERATED_LEN: usize = 10;

/// Elements and fields shown before a printed value is truncated.
pub const PRINT_LIMIT: usize = 3;

/// Build a [`Spec`] from a predicate, naming it after the predicate's source text.
///
/// With one argument the spec's name is the stringified expression, so
/// anonymous closures show up in error messages exactly as written. A second
/// argument overrides the name.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
///
/// let positive = specimen::spec!(|v: &Value| v.as_f64().is_some_and(|n| n > 0.0));
/// let message = &positive.explain(&json!(-1)).unwrap()[0].message;
/// assert!(message.starts_with("-1 does not satisfy specification"));
/// assert!(message.contains("n > 0.0"));
///
/// let even = specimen::spec!(|v: &Value| v.as_i64().is_some_and(|n| n % 2 == 0), "even");
/// assert_eq!(even.name(), "even");
/// ```
#[macro_export]
macro_rules! spec {
    ($predicate:expr) => {
        $crate::Spec::named($predicate, stringify!($predicate))
    };
    ($predicate:expr, $name:expr) => {
        $crate::Spec::named($predicate, $name)
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{GenerateError, SequenceError, ValidationFailed};
    pub use crate::error_tree::{ErrorEntry, ErrorTree, PathSegment};
    pub use crate::predicate::{Fallible, Predicate};
    pub use crate::semigroup::Semigroup;
    pub use crate::sequence::Sequence;
    pub use crate::spec::{array_of, object_of, spec, IntoSpec, Spec};
    pub use crate::validation::Validation;
    pub use serde_json::Value;
}
