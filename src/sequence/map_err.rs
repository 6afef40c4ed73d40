//! MapErr combinator - transforms the errors raised while pulling.

use std::rc::Rc;

use super::{Cursor, LazySequence, Sequence};
use crate::error::SequenceError;

/// Passes elements through unchanged and rewrites every pull error.
pub struct MapErr<T> {
    source: Sequence<T>,
    f: Rc<dyn Fn(SequenceError) -> SequenceError>,
}

impl<T> MapErr<T> {
    /// Rewrite the errors of `source` with `f`.
    pub fn new<F>(source: Sequence<T>, f: F) -> Self
    where
        F: Fn(SequenceError) -> SequenceError + 'static,
    {
        Self {
            source,
            f: Rc::new(f),
        }
    }
}

impl<T> std::fmt::Debug for MapErr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapErr")
            .field("source", &self.source)
            .field("f", &"<function>")
            .finish()
    }
}

impl<T: Clone + 'static> LazySequence<T> for MapErr<T> {
    fn is_finite(&self) -> bool {
        self.source.is_finite()
    }

    fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(MapErrCursor {
            inner: self.source.cursor(),
            f: Rc::clone(&self.f),
        })
    }
}

struct MapErrCursor<T> {
    inner: Box<dyn Cursor<T>>,
    f: Rc<dyn Fn(SequenceError) -> SequenceError>,
}

impl<T> Cursor<T> for MapErrCursor<T> {
    fn pull(&mut self) -> Result<Option<T>, SequenceError> {
        self.inner.pull().map_err(|err| (self.f)(err))
    }
}
