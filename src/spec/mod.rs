//! Composable specifications
//!
//! A [`Spec`] couples a predicate with a name and an example source. Specs
//! are immutable: [`Spec::and`], [`Spec::or`], [`object_of`], [`array_of`],
//! [`Spec::examples`] and [`Spec::generator`] all build new specs and leave
//! their operands untouched. Cloning a spec is cheap and the clone is the
//! same instance, sharing its generation cursor.
//!
//! # Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use specimen::predicate::is_integer;
//! use specimen::spec;
//!
//! let integer = spec(is_integer);
//! let positive = specimen::spec!(|v: &Value| v.as_f64().is_some_and(|n| n > 0.0));
//!
//! let positive_integer = integer.and(&positive);
//! assert!(positive_integer.is_valid(&json!(42)));
//! assert_eq!(positive_integer.errors(&json!(-1.5)).len(), 2);
//!
//! let either = integer.or(&positive);
//! assert!(either.is_valid(&json!(1.5)));
//! assert_eq!(either.errors(&json!(-1.5)).len(), 1);
//! ```

mod combinators;
mod examples;
mod structural;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::error::{GenerateError, ValidationFailed};
use crate::error_tree::{ErrorEntry, ErrorTree};
use crate::predicate::{evaluate_caught, Predicate};
use crate::print::render_value;
use crate::sequence::{Cursor, Sequence};
use crate::validation::Validation;
use crate::Semigroup;

pub use structural::{array_of, object_of};

/// Build a spec from a predicate, or pass an existing spec through.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use specimen::{predicate::is_string, spec};
///
/// let string = spec(is_string);
/// assert_eq!(string.name(), "is_string");
/// assert!(string.is_valid(&json!("hello")));
///
/// let same = spec(&string);
/// assert_eq!(same.name(), string.name());
/// ```
pub fn spec(predicate: impl IntoSpec) -> Spec {
    predicate.into_spec()
}

/// Conversion into a [`Spec`], accepted wherever a spec or a raw predicate fits.
pub trait IntoSpec {
    /// Convert into a spec, wrapping raw predicates.
    fn into_spec(self) -> Spec;
}

impl IntoSpec for Spec {
    fn into_spec(self) -> Spec {
        self
    }
}

impl IntoSpec for &Spec {
    fn into_spec(self) -> Spec {
        self.clone()
    }
}

impl<P: Predicate> IntoSpec for P {
    fn into_spec(self) -> Spec {
        Spec::new(self)
    }
}

#[derive(Clone)]
pub(crate) enum Kind {
    Leaf(Rc<dyn Predicate>),
    And(Spec, Spec),
    Or(Spec, Spec),
    Object(Rc<[(String, Spec)]>),
    Array(Spec),
    /// Validates like the inner spec, with its own example source.
    Sourced(Spec),
}

struct SpecNode {
    name: String,
    kind: Kind,
    source: Sequence<Value>,
    cursor: RefCell<Option<Box<dyn Cursor<Value>>>>,
}

/// A named, composable predicate with an optional example source.
#[derive(Clone)]
pub struct Spec {
    node: Rc<SpecNode>,
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec")
            .field("name", &self.node.name)
            .field("has_examples", &self.has_examples())
            .finish_non_exhaustive()
    }
}

impl Spec {
    pub(crate) fn from_parts(name: String, kind: Kind, source: Sequence<Value>) -> Self {
        Self {
            node: Rc::new(SpecNode {
                name,
                kind,
                source,
                cursor: RefCell::new(None),
            }),
        }
    }

    /// Build a spec named after the predicate itself.
    ///
    /// Functions are named after themselves; closures get their type path.
    /// Use the [`spec!`](crate::spec!) macro to name a closure after its source.
    pub fn new<P: Predicate>(predicate: P) -> Self {
        let name = predicate.describe();
        Self::named(predicate, name)
    }

    /// Build a spec with an explicit name.
    pub fn named<P: Predicate>(predicate: P, name: impl Into<String>) -> Self {
        Self::from_parts(
            name.into(),
            Kind::Leaf(Rc::new(predicate)),
            Sequence::empty(),
        )
    }

    /// The name used in error messages.
    pub fn name(&self) -> &str {
        &self.node.name
    }

    /// True if `value` satisfies this spec.
    ///
    /// A predicate that errors or panics counts as not satisfied.
    pub fn is_valid(&self, value: &Value) -> bool {
        match &self.node.kind {
            Kind::Leaf(predicate) => {
                matches!(evaluate_caught(predicate.as_ref(), value), Ok(true))
            }
            Kind::And(left, right) => left.is_valid(value) && right.is_valid(value),
            Kind::Or(left, right) => left.is_valid(value) || right.is_valid(value),
            Kind::Object(fields) => structural::object_is_valid(fields, value),
            Kind::Array(element) => structural::array_is_valid(element, value),
            Kind::Sourced(inner) => inner.is_valid(value),
        }
    }

    /// Every reason `value` fails this spec, shaped like the value.
    ///
    /// Returns an empty tree for valid values. Never panics on a failing
    /// predicate and never touches the generation cursor.
    pub fn errors(&self, value: &Value) -> ErrorTree {
        match &self.node.kind {
            Kind::Leaf(predicate) => match evaluate_caught(predicate.as_ref(), value) {
                Ok(true) => ErrorTree::ok(),
                Ok(false) => ErrorTree::message(format!(
                    "{} does not satisfy specification {}",
                    render_value(value),
                    self.name()
                )),
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(spec = %self.name(), error = %_err, "predicate failed to decide");
                    ErrorTree::message(format!(
                        "{} throws error on specification {}",
                        render_value(value),
                        self.name()
                    ))
                }
            },
            Kind::And(left, right) => left.errors(value).combine(right.errors(value)),
            Kind::Or(left, right) => {
                if left.is_valid(value) || right.is_valid(value) {
                    ErrorTree::ok()
                } else {
                    ErrorTree::message(format!(
                        "{} does not satisfy specification {}",
                        render_value(value),
                        self.name()
                    ))
                }
            }
            Kind::Object(fields) => structural::object_errors(fields, value),
            Kind::Array(element) => structural::array_errors(element, value),
            Kind::Sourced(inner) => inner.errors(value),
        }
    }

    /// Check `value`, failing with every reason it does not satisfy this spec.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationFailed> {
        let errors = self.errors(value);
        if errors.is_empty() {
            return Ok(());
        }
        let failed = ValidationFailed::new(errors);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            spec = %self.name(),
            failures = failed.entries().len(),
            "value rejected"
        );
        Err(failed)
    }

    /// Flattened `(path, message)` failures, or `None` if `value` is valid.
    pub fn explain(&self, value: &Value) -> Option<Vec<ErrorEntry>> {
        let errors = self.errors(value);
        if errors.is_empty() {
            None
        } else {
            Some(errors.flatten())
        }
    }

    /// Check `value`, handing it back on success.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use specimen::{predicate::is_integer, spec, Validation};
    ///
    /// let integer = spec(is_integer);
    /// assert_eq!(integer.conform(json!(7)), Validation::Success(json!(7)));
    /// assert!(integer.conform(json!("7")).is_failure());
    /// ```
    pub fn conform(&self, value: Value) -> Validation<Value, ErrorTree> {
        let errors = self.errors(&value);
        if errors.is_empty() {
            Validation::success(value)
        } else {
            Validation::failure(errors)
        }
    }

    /// True if this spec can produce examples.
    pub fn has_examples(&self) -> bool {
        !self.node.source.is_empty()
    }

    /// The sequence examples are drawn from.
    pub fn example_source(&self) -> &Sequence<Value> {
        &self.node.source
    }

    /// Draw the next example.
    ///
    /// The first call opens a cursor over the example source; later calls on
    /// the same instance (or its clones) advance it. Use [`Spec::fresh`] for
    /// an instance with an independent cursor. Calling `generate` on a spec
    /// from inside its own example source is not supported.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::NoExamples`] if no example source is attached, or for
    ///   a disjunction, if either branch lacks one
    /// - [`GenerateError::NoSuitableExample`] if a conjunction rejected too
    ///   many candidates in a row
    pub fn generate(&self) -> Result<Value, GenerateError> {
        if let Kind::Or(left, right) = &self.node.kind {
            left.require_examples()?;
            right.require_examples()?;
        }
        self.require_examples()?;

        let mut slot = self.node.cursor.borrow_mut();
        let cursor = slot.get_or_insert_with(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(spec = %self.name(), "opening example cursor");
            self.node.source.cursor()
        });

        match cursor.pull() {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(self.no_examples()),
            Err(err) => {
                let err = GenerateError::from(err);
                #[cfg(feature = "tracing")]
                tracing::warn!(spec = %self.name(), error = %err, "example generation failed");
                Err(err)
            }
        }
    }

    /// A new instance with the same behavior and an unstarted cursor.
    ///
    /// Child specs keep their own cursors.
    ///
    /// ```rust
    /// use specimen::{predicate::is_integer, spec};
    ///
    /// let counter = {
    ///     let mut next = 0;
    ///     spec(is_integer)
    ///         .generator(move || {
    ///             next += 1;
    ///             next.into()
    ///         })
    ///         .unwrap()
    /// };
    /// let other = counter.fresh();
    /// assert_eq!(counter.name(), other.name());
    /// assert!(other.is_valid(&other.generate().unwrap()));
    /// ```
    pub fn fresh(&self) -> Spec {
        Self::from_parts(
            self.node.name.clone(),
            self.node.kind.clone(),
            self.node.source.clone(),
        )
    }

    fn require_examples(&self) -> Result<(), GenerateError> {
        if self.has_examples() {
            Ok(())
        } else {
            Err(self.no_examples())
        }
    }

    fn no_examples(&self) -> GenerateError {
        GenerateError::NoExamples {
            spec: self.name().to_string(),
        }
    }
}
