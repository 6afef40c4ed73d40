//! Predicate filter with a bounded number of consecutive rejections.

use std::rc::Rc;

use super::{Cursor, LazySequence, Sequence};
use crate::error::SequenceError;

/// Yields only elements matching a predicate.
///
/// Pulling fails with [`SequenceError::MaxSkipReached`] once more than
/// `max_skip` elements in a row have been rejected, instead of searching
/// forever.
pub struct Filter<T> {
    source: Sequence<T>,
    predicate: Rc<dyn Fn(&T) -> bool>,
    max_skip: usize,
}

impl<T> Filter<T> {
    /// Filter `source` with `predicate`, allowing `max_skip` consecutive rejections.
    pub fn new<P>(source: Sequence<T>, predicate: P, max_skip: usize) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self {
            source,
            predicate: Rc::new(predicate),
            max_skip,
        }
    }
}

impl<T> std::fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .field("max_skip", &self.max_skip)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> LazySequence<T> for Filter<T> {
    fn is_finite(&self) -> bool {
        self.source.is_finite()
    }

    fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(FilterCursor {
            inner: self.source.cursor(),
            predicate: Rc::clone(&self.predicate),
            max_skip: self.max_skip,
            skipped: 0,
        })
    }
}

struct FilterCursor<T> {
    inner: Box<dyn Cursor<T>>,
    predicate: Rc<dyn Fn(&T) -> bool>,
    max_skip: usize,
    skipped: usize,
}

impl<T> Cursor<T> for FilterCursor<T> {
    fn pull(&mut self) -> Result<Option<T>, SequenceError> {
        while let Some(item) = self.inner.pull()? {
            if self.skipped > self.max_skip {
                return Err(SequenceError::MaxSkipReached {
                    max_skip: self.max_skip,
                });
            }
            if (self.predicate)(&item) {
                self.skipped = 0;
                return Ok(Some(item));
            }
            self.skipped += 1;
        }
        Ok(None)
    }
}
