//! Attaching example sources to specs.

use serde_json::Value;

use super::{Kind, Spec};
use crate::error::ValidationFailed;
use crate::sequence::Sequence;
use crate::GENERATOR_SAMPLES;

impl Spec {
    /// A copy of this spec that generates from `examples`.
    ///
    /// Every example is validated up front and the first invalid one is
    /// returned as the error. Draws are uniform with replacement.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use specimen::{predicate::is_integer, spec};
    ///
    /// let digit = spec(is_integer).examples([0, 1, 2]).unwrap();
    /// assert!(digit.generate().unwrap().as_i64().is_some_and(|n| n < 3));
    ///
    /// let err = spec(is_integer).examples([json!(1), json!(2.5)]).unwrap_err();
    /// assert_eq!(err.message(), "2.5 does not satisfy specification is_integer");
    /// ```
    pub fn examples<I>(&self, examples: I) -> Result<Spec, ValidationFailed>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let examples = examples
            .into_iter()
            .map(|example| {
                let example = example.into();
                self.validate(&example).map(|()| example)
            })
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(spec = %self.name(), count = examples.len(), "examples attached");

        Ok(self.with_source(Sequence::from_vec(examples).random()))
    }

    /// A copy of this spec that generates by calling `generator`.
    ///
    /// The generator is called [`GENERATOR_SAMPLES`] times up front and every
    /// result must satisfy the spec. Afterwards each draw calls it once more;
    /// results are never cached.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use specimen::{predicate::is_integer, spec};
    ///
    /// let small = spec(is_integer)
    ///     .generator(|| json!(rand::random_range(0..100)))
    ///     .unwrap();
    /// assert!(small.is_valid(&small.generate().unwrap()));
    ///
    /// let fractions = spec(is_integer).generator(|| json!(0.5));
    /// assert!(fractions.is_err());
    /// ```
    pub fn generator<F>(&self, mut generator: F) -> Result<Spec, ValidationFailed>
    where
        F: FnMut() -> Value + 'static,
    {
        for _ in 0..GENERATOR_SAMPLES {
            self.validate(&generator())?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(spec = %self.name(), "generator attached");

        Ok(self.with_source(Sequence::from_fn(generator)))
    }

    fn with_source(&self, source: Sequence<Value>) -> Spec {
        Spec::from_parts(
            self.name().to_string(),
            Kind::Sourced(self.clone()),
            source,
        )
    }
}
