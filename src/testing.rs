//! Testing utilities for specs
//!
//! Assertion macros for validation and generation, plus property-based
//! testing support behind the `proptest` feature.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use serde_json::json;
//! use specimen::predicate::is_integer;
//! use specimen::{assert_generates, assert_invalid, assert_valid, spec};
//!
//! let integer = spec(is_integer).examples([1, 2, 3]).unwrap();
//! assert_valid!(integer, json!(2));
//! assert_invalid!(integer, json!("2"));
//! assert_invalid!(integer, json!(2.5), ["2.5 does not satisfy specification is_integer"]);
//! assert_generates!(integer);
//! ```

/// Assert that a value satisfies a spec.
///
/// Panics with the flattened failures if it does not.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use specimen::{assert_valid, predicate::is_string, spec};
///
/// assert_valid!(spec(is_string), json!("hello"));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($spec:expr, $value:expr) => {
        match $spec.validate(&$value) {
            Ok(()) => {}
            Err(err) => {
                panic!("Expected valid value, got {}", err);
            }
        }
    };
}

/// Assert that a value does not satisfy a spec.
///
/// With a third argument, also asserts the exact flattened failures, each
/// rendered as `path: message`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use specimen::{assert_invalid, object_of, predicate::is_string, spec};
///
/// let named = object_of([("name", spec(is_string))]);
/// assert_invalid!(named, json!([]));
/// assert_invalid!(
///     named,
///     json!({ "name": 1 }),
///     ["name: 1 does not satisfy specification is_string"]
/// );
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($spec:expr, $value:expr) => {
        if let Ok(()) = $spec.validate(&$value) {
            panic!("Expected invalid value, got Ok for {}", $value);
        }
    };
    ($spec:expr, $value:expr, $expected:expr) => {
        match $spec.validate(&$value) {
            Err(err) => {
                let actual: Vec<String> = err
                    .entries()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                let expected: Vec<String> = $expected
                    .into_iter()
                    .map(|entry| entry.to_string())
                    .collect();
                assert_eq!(actual, expected);
            }
            Ok(()) => {
                panic!(
                    "Expected invalid value with errors {:?}, got Ok for {}",
                    $expected, $value
                );
            }
        }
    };
}

/// Assert that a spec generates values that satisfy it.
///
/// Draws ten values by default, or as many as the second argument says.
///
/// # Example
///
/// ```rust
/// use specimen::{assert_generates, predicate::is_boolean, spec};
///
/// let flag = spec(is_boolean).examples([true, false]).unwrap();
/// assert_generates!(flag, 25);
/// ```
#[macro_export]
macro_rules! assert_generates {
    ($spec:expr) => {
        $crate::assert_generates!($spec, 10)
    };
    ($spec:expr, $count:expr) => {{
        let spec = &$spec;
        for _ in 0..$count {
            match spec.generate() {
                Ok(value) => $crate::assert_valid!(spec, value),
                Err(err) => {
                    panic!("Expected generated value, got {}", err);
                }
            }
        }
    }};
}

#[cfg(feature = "proptest")]
pub use self::strategy::{examples_of, SpecStrategy};

#[cfg(feature = "proptest")]
mod strategy {
    use proptest::strategy::{Just, NewTree, Strategy};
    use proptest::test_runner::TestRunner;
    use serde_json::Value;

    use crate::Spec;

    /// A proptest strategy drawing values from a spec's examples.
    ///
    /// Values are not shrunk. A spec that cannot generate makes the strategy
    /// fail with the generation error as the reason.
    #[derive(Debug, Clone)]
    pub struct SpecStrategy {
        spec: Spec,
    }

    impl SpecStrategy {
        /// Draw from `spec`, sharing its generation cursor.
        pub fn new(spec: Spec) -> Self {
            Self { spec }
        }
    }

    impl Strategy for SpecStrategy {
        type Tree = Just<Value>;
        type Value = Value;

        fn new_tree(&self, _runner: &mut TestRunner) -> NewTree<Self> {
            self.spec
                .generate()
                .map(Just)
                .map_err(|err| err.to_string().into())
        }
    }

    /// Strategy over the examples of `spec`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use proptest::prelude::*;
    /// use specimen::{predicate::is_integer, spec, testing::examples_of};
    ///
    /// let integer = spec(is_integer).examples([1, 2, 3]).unwrap();
    ///
    /// proptest!(|(n in examples_of(&integer))| {
    ///     prop_assert!(integer.is_valid(&n));
    /// });
    /// ```
    pub fn examples_of(spec: &Spec) -> SpecStrategy {
        SpecStrategy::new(spec.clone())
    }
}
