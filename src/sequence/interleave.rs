//! Fair random interleaving of two sequences.

use rand::rngs::ThreadRng;
use rand::Rng;

use super::{Cursor, LazySequence, Sequence};
use crate::error::SequenceError;

/// Each draw independently comes from the left or right side with
/// probability 0.5.
///
/// Built by [`Sequence::random_zip`], which loops both sides and never
/// constructs an interleave with an empty side. A side can still run dry
/// while reporting itself non-empty (a loop over a filter that rejects
/// everything); a draw that picks such a side is taken from the other one,
/// and the interleave ends only when both are dry.
#[derive(Debug, Clone)]
pub struct Interleave<T> {
    left: Sequence<T>,
    right: Sequence<T>,
}

impl<T> Interleave<T> {
    /// Interleave `left` and `right`.
    pub fn new(left: Sequence<T>, right: Sequence<T>) -> Self {
        Self { left, right }
    }
}

impl<T: Clone + 'static> LazySequence<T> for Interleave<T> {
    fn is_finite(&self) -> bool {
        self.is_empty()
    }

    fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    fn cursor(&self) -> Box<dyn Cursor<T>> {
        Box::new(InterleaveCursor {
            left: self.left.cursor(),
            right: self.right.cursor(),
            rng: rand::rng(),
        })
    }
}

struct InterleaveCursor<T> {
    left: Box<dyn Cursor<T>>,
    right: Box<dyn Cursor<T>>,
    rng: ThreadRng,
}

impl<T> Cursor<T> for InterleaveCursor<T> {
    fn pull(&mut self) -> Result<Option<T>, SequenceError> {
        let (first, second) = if self.rng.random_bool(0.5) {
            (&mut self.left, &mut self.right)
        } else {
            (&mut self.right, &mut self.left)
        };
        match first.pull()? {
            Some(item) => Ok(Some(item)),
            None => second.pull(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dry() -> Sequence<i32> {
        Sequence::from_vec(vec![2, 4]).filter(|x| x % 2 != 0).looped()
    }

    #[test]
    fn test_draws_come_from_both_sides() {
        let mixed = Sequence::new(Interleave::new(
            Sequence::from_vec(vec![1]).looped(),
            Sequence::from_vec(vec![2]).looped(),
        ));
        let drawn = mixed.take(100).to_vec().unwrap();
        assert!(drawn.contains(&1));
        assert!(drawn.contains(&2));
    }

    #[test]
    fn test_dry_side_falls_back_to_other() {
        let sevens = Sequence::from_vec(vec![7]).looped();
        let lopsided = Sequence::new(Interleave::new(dry(), sevens));
        assert!(!lopsided.is_finite());
        assert_eq!(lopsided.take(20).to_vec().unwrap(), vec![7; 20]);
    }

    #[test]
    fn test_both_sides_dry_ends() {
        let nothing = Sequence::new(Interleave::new(dry(), dry()));
        assert!(!nothing.is_empty());
        assert_eq!(nothing.first(), Ok(None));
    }
}
