//! Lazy, pull-based sequences for example generation
//!
//! A [`LazySequence`] describes a possibly infinite series of values and
//! hands out [`Cursor`]s that pull them one at a time. Whether a sequence is
//! empty or finite is known up front from its operands, without pulling.
//!
//! [`Sequence`] is the shared handle the combinators are built on:
//!
//! | combinator | yields | finite | empty |
//! |---|---|---|---|
//! | [`Sequence::from_vec`] | the items in order | yes | no items |
//! | [`Sequence::take`] | at most `n` items | yes | `n == 0` or source empty |
//! | [`Sequence::looped`] | the source, cycled forever | only if empty | source empty |
//! | [`Sequence::random`] | uniform draws with replacement | only if empty | source empty |
//! | [`Sequence::random_zip`] | a fair coin picks a side per draw | only if empty | both empty |
//! | [`Sequence::filter`] | matching items, bounded skips | as source | source empty |
//! | [`Sequence::map_err`] | the source, errors rewritten | as source | source empty |
//! | [`Sequence::from_fn`] | a fresh call per item | no | never |
//!
//! # Example
//!
//! ```rust
//! use specimen::Sequence;
//!
//! let digits = Sequence::from_vec(vec![1, 2, 3]);
//! assert_eq!(digits.looped().take(5).to_vec().unwrap(), vec![1, 2, 3, 1, 2]);
//!
//! let odd = digits.filter(|n| n % 2 == 1);
//! assert_eq!(odd.to_vec().unwrap(), vec![1, 3]);
//!
//! assert!(Sequence::<i32>::empty().looped().take(5).to_vec().unwrap().is_empty());
//! ```
//!
//! Cursors over [`Sequence::from_fn`] call an external function, so
//! re-iterating such a sequence does not replay earlier values.

mod filter;
mod finite;
mod from_fn;
mod interleave;
mod looped;
mod map_err;
mod random;
mod take;

use std::fmt;
use std::rc::Rc;

use crate::error::SequenceError;
use crate::DEFAULT_MAX_SKIP;

pub use filter::Filter;
pub use finite::Finite;
pub use from_fn::FromFn;
pub use interleave::Interleave;
pub use looped::Looped;
pub use map_err::MapErr;
pub use random::RandomSample;
pub use take::Take;

/// A pull-based iterator over a [`LazySequence`].
///
/// Infinite sequences never return `Ok(None)`.
pub trait Cursor<T> {
    /// Produce the next element, `Ok(None)` once exhausted.
    fn pull(&mut self) -> Result<Option<T>, SequenceError>;
}

/// A possibly infinite sequence that can be iterated through cursors.
pub trait LazySequence<T> {
    /// True if iteration is guaranteed to terminate.
    fn is_finite(&self) -> bool;

    /// True if no element can ever be produced.
    fn is_empty(&self) -> bool;

    /// Start a new iteration from the beginning.
    fn cursor(&self) -> Box<dyn Cursor<T>>;
}

/// Shared handle to a [`LazySequence`].
///
/// Cloning is cheap and clones iterate the same underlying sequence.
pub struct Sequence<T> {
    inner: Rc<dyn LazySequence<T>>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("finite", &self.inner.is_finite())
            .field("empty", &self.inner.is_empty())
            .finish()
    }
}

impl<T: Clone + 'static> Sequence<T> {
    /// Wrap a custom sequence implementation.
    pub fn new<S: LazySequence<T> + 'static>(sequence: S) -> Self {
        Self {
            inner: Rc::new(sequence),
        }
    }

    /// A finite sequence over `items`, in order.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::new(Finite::new(items))
    }

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Self::from_vec(Vec::new())
    }

    /// An infinite sequence calling `f` for every element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specimen::Sequence;
    ///
    /// let mut next = 0;
    /// let counter = Sequence::from_fn(move || {
    ///     next += 1;
    ///     next
    /// });
    /// assert_eq!(counter.take(3).to_vec().unwrap(), vec![1, 2, 3]);
    /// // Not restartable: a second pass continues where the first stopped.
    /// assert_eq!(counter.take(2).to_vec().unwrap(), vec![4, 5]);
    /// ```
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut() -> T + 'static,
    {
        Self::new(FromFn::new(move || Ok(f())))
    }

    /// An infinite sequence calling a fallible `f` for every element.
    pub fn try_from_fn<F>(f: F) -> Self
    where
        F: FnMut() -> Result<T, SequenceError> + 'static,
    {
        Self::new(FromFn::new(f))
    }

    /// True if iteration is guaranteed to terminate.
    pub fn is_finite(&self) -> bool {
        self.inner.is_finite()
    }

    /// True if no element can ever be produced.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Start a new iteration from the beginning.
    pub fn cursor(&self) -> Box<dyn Cursor<T>> {
        self.inner.cursor()
    }

    /// At most `n` elements of this sequence.
    pub fn take(&self, n: usize) -> Self {
        if n == 0 || self.is_empty() {
            return Self::empty();
        }
        Self::new(Take::new(n, self.clone()))
    }

    /// This sequence repeated forever.
    pub fn looped(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        Self::new(Looped::new(self.clone()))
    }

    /// Endless uniform draws, with replacement, from this finite sequence.
    ///
    /// The elements are collected on the first pull; an infinite sequence
    /// fails at that point with [`SequenceError::Unbounded`].
    pub fn random(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        Self::new(RandomSample::new(self.clone()))
    }

    /// Endless draws picking this sequence or `other` with equal probability.
    ///
    /// Both sides are looped. If one side is empty the other is returned as is.
    pub fn random_zip(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        Self::new(Interleave::new(self.looped(), other.looped()))
    }

    /// Only the elements matching `predicate`, failing after
    /// [`DEFAULT_MAX_SKIP`] consecutive rejections.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.filter_with_max_skip(predicate, DEFAULT_MAX_SKIP)
    }

    /// Only the elements matching `predicate`, failing after `max_skip`
    /// consecutive rejections.
    pub fn filter_with_max_skip<P>(&self, predicate: P, max_skip: usize) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        if self.is_empty() {
            return Self::empty();
        }
        Self::new(Filter::new(self.clone(), predicate, max_skip))
    }

    /// The same elements, with every pull error passed through `f`.
    pub fn map_err<F>(&self, f: F) -> Self
    where
        F: Fn(SequenceError) -> SequenceError + 'static,
    {
        if self.is_empty() {
            return Self::empty();
        }
        Self::new(MapErr::new(self.clone(), f))
    }

    /// Collect every element of a finite sequence.
    pub fn to_vec(&self) -> Result<Vec<T>, SequenceError> {
        if !self.is_finite() {
            return Err(SequenceError::Unbounded);
        }
        let mut cursor = self.cursor();
        let mut items = Vec::new();
        while let Some(item) = cursor.pull()? {
            items.push(item);
        }
        Ok(items)
    }

    /// The first element, if any.
    pub fn first(&self) -> Result<Option<T>, SequenceError> {
        if self.is_empty() {
            return Ok(None);
        }
        self.cursor().pull()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits() -> Sequence<i32> {
        Sequence::from_vec(vec![1, 2, 3])
    }

    fn pull_n<T>(cursor: &mut dyn Cursor<T>, n: usize) -> Vec<T> {
        (0..n)
            .map(|_| cursor.pull().unwrap().expect("infinite sequence ended"))
            .collect()
    }

    #[test]
    fn test_finite_iterates_in_order() {
        assert_eq!(digits().to_vec().unwrap(), vec![1, 2, 3]);
        assert!(digits().is_finite());
        assert!(!digits().is_empty());
        assert!(Sequence::<i32>::empty().is_empty());
    }

    #[test]
    fn test_sequences_are_reiterable() {
        let seq = digits().looped().take(4);
        assert_eq!(seq.to_vec().unwrap(), seq.to_vec().unwrap());
    }

    #[test]
    fn test_first() {
        assert_eq!(digits().first().unwrap(), Some(1));
        assert_eq!(digits().looped().first().unwrap(), Some(1));
        assert_eq!(Sequence::<i32>::empty().first().unwrap(), None);
    }

    #[test]
    fn test_loop_cycles_forever() {
        let looped = digits().looped();
        assert!(!looped.is_finite());
        let mut cursor = looped.cursor();
        assert_eq!(
            pull_n(cursor.as_mut(), 10),
            vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]
        );
    }

    #[test]
    fn test_take_from_loop() {
        assert_eq!(digits().looped().take(5).to_vec().unwrap(), vec![1, 2, 3, 1, 2]);
    }

    #[test]
    fn test_take_flags() {
        assert!(digits().take(0).is_empty());
        assert!(digits().looped().take(2).is_finite());
        assert!(Sequence::<i32>::empty().take(3).is_empty());
    }

    #[test]
    fn test_combinators_over_empty_source_are_finite_and_empty() {
        let empty = Sequence::<i32>::empty();
        let derived = [
            ("take", empty.take(5)),
            ("looped", empty.looped()),
            ("random", empty.random()),
            ("random_zip", empty.random_zip(&Sequence::empty())),
            ("filter", empty.filter(|_| true)),
            ("random().take", empty.random().take(5)),
            ("looped().take", empty.looped().take(5)),
            ("custom random", Sequence::new(RandomSample::new(empty.clone()))),
            ("custom looped", Sequence::new(Looped::new(empty.clone()))),
            (
                "custom interleave",
                Sequence::new(Interleave::new(empty.clone(), empty.clone())),
            ),
        ];
        for (label, seq) in derived {
            assert!(seq.is_empty(), "{} should be empty", label);
            assert!(seq.is_finite(), "{} should be finite", label);
            assert_eq!(seq.to_vec(), Ok(Vec::new()), "{}", label);
            assert_eq!(seq.take(5).to_vec(), Ok(Vec::new()), "{}", label);
        }
    }

    #[test]
    fn test_loop_over_empty_is_empty() {
        let looped = Sequence::<i32>::empty().looped();
        assert!(looped.is_empty());
        assert_eq!(looped.take(5).to_vec().unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_to_vec_rejects_infinite() {
        assert_eq!(digits().looped().to_vec(), Err(SequenceError::Unbounded));
    }

    #[test]
    fn test_random_draws_from_items() {
        let drawn = digits().random().take(10).to_vec().unwrap();
        assert_eq!(drawn.len(), 10);
        assert!(drawn.iter().all(|x| [1, 2, 3].contains(x)));
        assert!(!digits().random().is_finite());
    }

    #[test]
    fn test_filter_keeps_matching() {
        let odd = digits().filter(|x| x % 2 != 0);
        assert_eq!(odd.to_vec().unwrap(), vec![1, 3]);
        assert!(odd.is_finite());
        assert!(!digits().looped().filter(|x| x % 2 != 0).is_finite());
    }

    #[test]
    fn test_filter_fails_after_max_skip() {
        let mostly_even = Sequence::from_vec(vec![1, 2, 4, 6, 3]);
        let odd = |x: &i32| x % 2 != 0;
        assert_eq!(
            mostly_even.filter_with_max_skip(odd, 2).to_vec(),
            Err(SequenceError::MaxSkipReached { max_skip: 2 })
        );
        assert_eq!(
            mostly_even.filter_with_max_skip(odd, 3).to_vec().unwrap(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_filter_over_infinite_terminates_with_error() {
        let never = digits().looped().filter(|x| *x > 10);
        let mut cursor = never.cursor();
        assert_eq!(
            cursor.pull(),
            Err(SequenceError::MaxSkipReached {
                max_skip: DEFAULT_MAX_SKIP
            })
        );
    }

    #[test]
    fn test_random_zip_mixes_both_sides() {
        let letters = Sequence::from_vec(vec![10, 20, 30, 40]);
        let zipped = digits().random_zip(&letters).take(100).to_vec().unwrap();
        assert!(zipped.iter().any(|x| [1, 2, 3].contains(x)));
        assert!(zipped.iter().any(|x| [10, 20, 30, 40].contains(x)));
    }

    #[test]
    fn test_random_zip_with_empty_side_returns_other() {
        let zipped = digits().random_zip(&Sequence::empty());
        assert!(zipped.is_finite());
        assert_eq!(zipped.to_vec().unwrap(), vec![1, 2, 3]);

        let zipped = Sequence::empty().random_zip(&digits());
        assert_eq!(zipped.to_vec().unwrap(), vec![1, 2, 3]);

        assert!(Sequence::<i32>::empty()
            .random_zip(&Sequence::empty())
            .is_empty());
    }

    #[test]
    fn test_from_fn_is_infinite_and_never_empty() {
        let ones = Sequence::from_fn(|| 1);
        assert!(!ones.is_finite());
        assert!(!ones.is_empty());
        assert_eq!(ones.take(3).to_vec().unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn test_try_from_fn_propagates_errors() {
        let failing = Sequence::<i32>::try_from_fn(|| Err(SequenceError::Unbounded));
        assert_eq!(failing.first(), Err(SequenceError::Unbounded));
    }
}
