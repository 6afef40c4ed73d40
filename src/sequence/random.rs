//! Uniform sampling with replacement.

use rand::rngs::ThreadRng;
use rand::Rng;

use super::{Cursor, LazySequence, Sequence};
use crate::error::SequenceError;

/// Endless stream of elements drawn uniformly, with replacement, from a
/// finite source.
///
/// The source is collected once per cursor, on the first pull.
#[derive(Debug, Clone)]
pub struct RandomSample<T> {
    source: Sequence<T>,
}

impl<T> RandomSample<T> {
    /// Sample from `source`.
    pub fn new(source: Sequence<T>) -> Self {
        Self { source }
    }
}

impl<T: Clone + 'static> LazySequence<T> for RandomSample<T> {
    fn is_finite(&self) -> bool {
        self.source.is_empty()
    }

    fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(RandomCursor {
            source: self.source.clone(),
            items: None,
            rng: rand::rng(),
        })
    }
}

struct RandomCursor<T> {
    source: Sequence<T>,
    items: Option<Vec<T>>,
    rng: ThreadRng,
}

impl<T: Clone + 'static> Cursor<T> for RandomCursor<T> {
    fn pull(&mut self) -> Result<Option<T>, SequenceError> {
        if self.items.is_none() {
            self.items = Some(self.source.to_vec()?);
        }
        let items = self.items.as_deref().unwrap_or(&[]);
        if items.is_empty() {
            return Ok(None);
        }
        let idx = self.rng.random_range(0..items.len());
        Ok(Some(items[idx].clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_infinite_source_fails() {
        let ones = Sequence::from_fn(|| 1);
        assert_eq!(ones.random().first(), Err(SequenceError::Unbounded));
    }

    #[test]
    fn test_every_item_is_eventually_drawn() {
        let drawn = Sequence::from_vec(vec!['a', 'b', 'c'])
            .random()
            .take(300)
            .to_vec()
            .unwrap();
        for c in ['a', 'b', 'c'] {
            assert!(drawn.contains(&c));
        }
    }
}
