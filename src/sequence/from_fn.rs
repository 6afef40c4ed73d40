//! Sequence backed by an external function.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Cursor, LazySequence};
use crate::error::SequenceError;

type Source<T> = Rc<RefCell<dyn FnMut() -> Result<T, SequenceError>>>;

/// Infinite sequence calling a function for every element.
///
/// All cursors share the function, so the sequence cannot be restarted.
pub struct FromFn<T> {
    f: Source<T>,
}

impl<T> FromFn<T> {
    /// Call `f` for every element.
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut() -> Result<T, SequenceError> + 'static,
    {
        Self {
            f: Rc::new(RefCell::new(f)),
        }
    }
}

impl<T> std::fmt::Debug for FromFn<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T: 'static> LazySequence<T> for FromFn<T> {
    fn is_finite(&self) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(FromFnCursor {
            f: Rc::clone(&self.f),
        })
    }
}

struct FromFnCursor<T> {
    f: Source<T>,
}

impl<T> Cursor<T> for FromFnCursor<T> {
    fn pull(&mut self) -> Result<Option<T>, SequenceError> {
        let mut f = self.f.borrow_mut();
        (&mut *f)().map(Some)
    }
}
