//! Bounded prefix of another sequence.

use super::{Cursor, LazySequence, Sequence};
use crate::error::SequenceError;

/// Yields at most `limit` elements of the source, fewer if it runs out.
#[derive(Debug, Clone)]
pub struct Take<T> {
    limit: usize,
    source: Sequence<T>,
}

impl<T> Take<T> {
    /// Limit `source` to its first `limit` elements.
    pub fn new(limit: usize, source: Sequence<T>) -> Self {
        Self { limit, source }
    }
}

impl<T: Clone + 'static> LazySequence<T> for Take<T> {
    fn is_finite(&self) -> bool {
        true
    }

    fn is_empty(&self) -> bool {
        self.limit == 0 || self.source.is_empty()
    }

    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(TakeCursor {
            remaining: self.limit,
            inner: self.source.cursor(),
        })
    }
}

struct TakeCursor<T> {
    remaining: usize,
    inner: Box<dyn Cursor<T>>,
}

impl<T> Cursor<T> for TakeCursor<T> {
    fn pull(&mut self) -> Result<Option<T>, SequenceError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let item = self.inner.pull()?;
        match item {
            Some(_) => self.remaining -= 1,
            None => self.remaining = 0,
        }
        Ok(item)
    }
}
