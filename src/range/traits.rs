//! Protocol shared by every range value: piece access, conversions and
//! value iteration.

use std::collections::BTreeSet;

use super::atomic::AtomicRange;
use super::iter::Values;
use super::set::RangeSet;

/// Common read-only view over atomic ranges, range sets and [`super::Range`].
///
/// Implementors only provide [`RangeLike::pieces`]; everything else is
/// derived from the consolidated piece list. The piece list of an empty value
/// is the empty slice.
pub trait RangeLike {
    /// Consolidated, ascending atomic pieces covered by this value.
    fn pieces(&self) -> &[AtomicRange];

    fn is_empty(&self) -> bool {
        self.pieces().is_empty()
    }

    /// Number of integers covered.
    fn len(&self) -> u64 {
        self.pieces().iter().map(AtomicRange::len).sum()
    }

    /// True iff the value cannot be written as a single atomic range.
    fn is_disjoint(&self) -> bool {
        self.pieces().len() > 1
    }

    /// Atomic range from the smallest to the largest covered value.
    fn span(&self) -> AtomicRange {
        match (self.pieces().first(), self.pieces().last()) {
            (Some(first), Some(last)) => first.cover(last),
            _ => AtomicRange::empty(),
        }
    }

    /// The value as a single atomic range, if it has at most one piece.
    fn as_atomic(&self) -> Option<AtomicRange> {
        match self.pieces() {
            [] => Some(AtomicRange::empty()),
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Lazy ascending iterator over the covered integers.
    ///
    /// The cursor lives in the returned iterator, so the value can be
    /// iterated any number of times, concurrently or nested.
    fn values(&self) -> Values<'_> {
        Values::new(self.pieces())
    }

    fn to_vec(&self) -> Vec<i64> {
        self.values().collect()
    }

    fn to_set(&self) -> BTreeSet<i64> {
        self.values().collect()
    }

    fn to_range_set(&self) -> RangeSet {
        RangeSet::from_sorted_unchecked(self.pieces().to_vec())
    }
}
