//! Endless repetition of another sequence.

use super::{Cursor, LazySequence, Sequence};
use crate::error::SequenceError;

/// Repeats the full cycle of its source forever.
///
/// A pass over the source that yields nothing ends the loop, so a source
/// that produces no elements never spins.
#[derive(Debug, Clone)]
pub struct Looped<T> {
    source: Sequence<T>,
}

impl<T> Looped<T> {
    /// Loop over `source`.
    pub fn new(source: Sequence<T>) -> Self {
        Self { source }
    }
}

impl<T: Clone + 'static> LazySequence<T> for Looped<T> {
    fn is_finite(&self) -> bool {
        self.source.is_empty()
    }

    fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(LoopedCursor {
            current: self.source.cursor(),
            source: self.source.clone(),
            yielded: false,
        })
    }
}

struct LoopedCursor<T> {
    source: Sequence<T>,
    current: Box<dyn Cursor<T>>,
    yielded: bool,
}

impl<T: Clone + 'static> Cursor<T> for LoopedCursor<T> {
    fn pull(&mut self) -> Result<Option<T>, SequenceError> {
        loop {
            if let Some(item) = self.current.pull()? {
                self.yielded = true;
                return Ok(Some(item));
            }
            if !self.yielded {
                return Ok(None);
            }
            self.yielded = false;
            self.current = self.source.cursor();
        }
    }
}
