use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use super::atomic::AtomicRange;

/// Ascending iterator over the integers covered by a list of atomic pieces.
#[derive(Debug, Clone)]
pub struct Values<'a> {
    pieces: std::slice::Iter<'a, AtomicRange>,
    current: RangeInclusive<i64>,
}

impl<'a> Values<'a> {
    pub(crate) fn new(pieces: &'a [AtomicRange]) -> Self {
        Self {
            pieces: pieces.iter(),
            current: AtomicRange::empty().iter(),
        }
    }
}

impl Iterator for Values<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if let Some(value) = self.current.next() {
                return Some(value);
            }
            self.current = self.pieces.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, _) = self.current.size_hint();
        (lower, None)
    }
}

impl FusedIterator for Values<'_> {}
