//! A range value of either shape.

use std::fmt::Display;

use super::atomic::AtomicRange;
use super::set::{covers, RangeSet};
use super::traits::RangeLike;
use crate::error::RangeError;

/// Either a single [`AtomicRange`] or a disjoint [`RangeSet`].
///
/// This is the result type of every operation whose outcome may need more
/// than one contiguous piece. Operations on `Range` dispatch on the shapes of
/// both operands: two single-piece values use the atomic algebra, anything
/// else goes through the set algebra. Results are normalized, so a value
/// with at most one piece is always returned as [`Range::Atomic`].
///
/// Equality and ordering are defined on the covered integers only, so
/// `Range::Set(RangeSet::new()) == Range::Atomic(AtomicRange::empty())`.
#[derive(Debug, Clone)]
pub enum Range {
    Atomic(AtomicRange),
    Set(RangeSet),
}

impl Range {
    /// Collapses a set with at most one piece into [`Range::Atomic`].
    pub fn normalize(self) -> Range {
        match self {
            Range::Set(set) => match set.as_atomic() {
                Some(atomic) => Range::Atomic(atomic),
                None => Range::Set(set),
            },
            atomic => atomic,
        }
    }

    pub fn into_set(self) -> RangeSet {
        match self {
            Range::Atomic(atomic) => RangeSet::from(atomic),
            Range::Set(set) => set,
        }
    }

    pub fn is_atomic(&self) -> bool {
        self.as_atomic().is_some()
    }

    pub fn contains(&self, value: i64) -> bool {
        match self {
            Range::Atomic(atomic) => atomic.contains(value),
            Range::Set(set) => set.contains(value),
        }
    }

    pub fn distance(&self, other: &impl RangeLike) -> Option<i64> {
        self.span().distance(&other.span())
    }

    // ── Set algebra ───────────────────────────────────────────────────

    pub fn union(&self, other: &impl RangeLike) -> Range {
        match (self.as_atomic(), other.as_atomic()) {
            (Some(a), Some(b)) => a.union(&b),
            _ => self.to_range_set().union(other).into(),
        }
    }

    pub fn intersection(&self, other: &impl RangeLike) -> Range {
        match (self.as_atomic(), other.as_atomic()) {
            (Some(a), Some(b)) => Range::Atomic(a.intersection(&b)),
            _ => self.to_range_set().intersection(other).into(),
        }
    }

    pub fn difference(&self, other: &impl RangeLike) -> Range {
        match (self.as_atomic(), other.as_atomic()) {
            (Some(a), Some(b)) => a.difference(&b),
            _ => self.to_range_set().difference(other).into(),
        }
    }

    pub fn symmetric_difference(&self, other: &impl RangeLike) -> Range {
        match (self.as_atomic(), other.as_atomic()) {
            (Some(a), Some(b)) => a.symmetric_difference(&b),
            _ => self.to_range_set().symmetric_difference(other).into(),
        }
    }

    pub fn is_subset(&self, other: &impl RangeLike) -> bool {
        covers(other.pieces(), self.pieces())
    }

    pub fn is_superset(&self, other: &impl RangeLike) -> bool {
        covers(self.pieces(), other.pieces())
    }

    pub fn overlaps(&self, other: &impl RangeLike) -> bool {
        !self.intersection(other).is_empty()
    }

    // ── Positional operations ─────────────────────────────────────────

    /// Values of `self` strictly before the start of `other`'s span.
    pub fn left_overhang(&self, other: &impl RangeLike) -> Range {
        match self {
            Range::Atomic(atomic) => Range::Atomic(atomic.left_overhang(&other.span())),
            Range::Set(set) => set.left_overhang(other).into(),
        }
    }

    /// Values of `self` strictly after the end of `other`'s span.
    pub fn right_overhang(&self, other: &impl RangeLike) -> Range {
        match self {
            Range::Atomic(atomic) => Range::Atomic(atomic.right_overhang(&other.span())),
            Range::Set(set) => set.right_overhang(other).into(),
        }
    }

    /// Splits into `(values < n, values >= n)`.
    pub fn split(&self, n: i64) -> (Range, Range) {
        match self {
            Range::Atomic(atomic) => {
                let (left, right) = atomic.split(n);
                (Range::Atomic(left), Range::Atomic(right))
            }
            Range::Set(set) => {
                let (left, right) = set.split(n);
                (left.into(), right.into())
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if a value would drop below 1, or
    /// [`RangeError::Overflow`] if one would pass `i64::MAX`.
    pub fn translate(&self, n: i64) -> Result<Range, RangeError> {
        match self {
            Range::Atomic(atomic) => atomic.translate(n).map(Range::Atomic),
            Range::Set(set) => set.translate(n).map(Range::from),
        }
    }

    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if growing the start would
    /// reach a value below 1, or [`RangeError::Overflow`] if growing the end
    /// would pass `i64::MAX`.
    pub fn expand(&self, left: i64, right: i64) -> Result<Range, RangeError> {
        match self {
            Range::Atomic(atomic) => atomic.expand(left, right).map(Range::Atomic),
            Range::Set(set) => set.expand(left, right).map(Range::from),
        }
    }

    /// Excises the positions covered by `other`, rightmost piece first.
    pub fn remove(&self, other: &impl RangeLike) -> Range {
        match (self.as_atomic(), other.as_atomic()) {
            (Some(a), Some(b)) => a.remove_atomic(&b),
            _ => self.to_range_set().remove(other).into(),
        }
    }

    /// Opens gaps for the pieces of `other`, rightmost piece first.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Overflow`] if a moved value would pass `i64::MAX`.
    pub fn insert(&self, other: &impl RangeLike) -> Result<Range, RangeError> {
        match (self.as_atomic(), other.as_atomic()) {
            (Some(a), Some(b)) => a.insert_atomic(&b),
            _ => self.to_range_set().insert(other).map(Range::from),
        }
    }
}

impl RangeLike for Range {
    fn pieces(&self) -> &[AtomicRange] {
        match self {
            Range::Atomic(atomic) => atomic.pieces(),
            Range::Set(set) => set.pieces(),
        }
    }
}

impl Default for Range {
    fn default() -> Self {
        Range::Atomic(AtomicRange::empty())
    }
}

impl From<AtomicRange> for Range {
    fn from(atomic: AtomicRange) -> Self {
        Range::Atomic(atomic)
    }
}

impl From<RangeSet> for Range {
    /// Wraps the set, collapsing it to [`Range::Atomic`] when it has at most one piece.
    fn from(set: RangeSet) -> Self {
        Range::Set(set).normalize()
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Range::Atomic(atomic) => atomic.fmt(f),
            Range::Set(set) => set.fmt(f),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Range {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.pieces(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <RangeSet as serde::Deserialize>::deserialize(deserializer).map(Range::from)
    }
}
