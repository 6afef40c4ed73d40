//! Sequence over stored items.

use std::rc::Rc;

use super::{Cursor, LazySequence};
use crate::error::SequenceError;

/// Finite sequence yielding its items in stored order.
#[derive(Debug, Clone)]
pub struct Finite<T> {
    items: Rc<[T]>,
}

impl<T> Finite<T> {
    /// Create a sequence over `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T: Clone + 'static> LazySequence<T> for Finite<T> {
    fn is_finite(&self) -> bool {
        true
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(FiniteCursor {
            items: Rc::clone(&self.items),
            pos: 0,
        })
    }
}

struct FiniteCursor<T> {
    items: Rc<[T]>,
    pos: usize,
}

impl<T: Clone> Cursor<T> for FiniteCursor<T> {
    fn pull(&mut self) -> Result<Option<T>, SequenceError> {
        let item = self.items.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        Ok(item)
    }
}
