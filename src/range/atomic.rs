//! Contiguous closed interval of positive integers.

use std::fmt::Display;
use std::ops::RangeInclusive;

use super::range::Range;
use super::set::RangeSet;
use super::traits::RangeLike;
use crate::error::RangeError;

/// Contiguous range `[start, end]` of positive integers, or the empty range.
///
/// Both endpoints are inclusive, so `AtomicRange::new(5, 15)` covers the
/// eleven integers `5..=15`. A non-empty value always satisfies
/// `1 <= start <= end`; the only way to obtain one is through a validating
/// constructor.
///
/// Values are immutable: every operation returns a new range. Operations
/// whose result may consist of more than one contiguous piece (union,
/// difference, the positional editors) return a [`Range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtomicRange {
    bounds: Option<(i64, i64)>,
}

impl AtomicRange {
    /// Creates the range between `a` and `b`, in either order.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if either value is below 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use posranges::AtomicRange;
    ///
    /// let r = AtomicRange::new(15, 5).unwrap();
    /// assert_eq!(r.start(), Some(5));
    /// assert_eq!(r.end(), Some(15));
    /// assert!(AtomicRange::new(0, 3).is_err());
    /// ```
    pub fn new(a: i64, b: i64) -> Result<Self, RangeError> {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        if start < 1 {
            return Err(RangeError::InvalidValue(start));
        }
        Ok(Self {
            bounds: Some((start, end)),
        })
    }

    /// Creates the one-element range `[n, n]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if `n < 1`.
    pub fn point(n: i64) -> Result<Self, RangeError> {
        Self::new(n, n)
    }

    pub const fn empty() -> Self {
        Self { bounds: None }
    }

    /// Builds a range from bounds already known to be ordered and positive.
    pub(crate) fn from_bounds_unchecked(start: i64, end: i64) -> Self {
        debug_assert!(
            1 <= start && start <= end,
            "AtomicRange bounds must satisfy 1 <= start <= end"
        );
        Self {
            bounds: Some((start, end)),
        }
    }

    /// Rebuilds the range with both bounds replaced, in either order.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if either value is below 1.
    pub fn with_bounds(&self, a: i64, b: i64) -> Result<Self, RangeError> {
        Self::new(a, b)
    }

    /// Rebuilds the range with a new start, keeping the current end.
    ///
    /// On an empty range this yields the single point `start`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if the new start is below 1.
    pub fn with_start(&self, start: i64) -> Result<Self, RangeError> {
        match self.bounds {
            Some((_, end)) => Self::new(start, end),
            None => Self::point(start),
        }
    }

    /// Rebuilds the range with a new end, keeping the current start.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if the new end is below 1.
    pub fn with_end(&self, end: i64) -> Result<Self, RangeError> {
        match self.bounds {
            Some((start, _)) => Self::new(start, end),
            None => Self::point(end),
        }
    }

    pub const fn start(&self) -> Option<i64> {
        match self.bounds {
            Some((start, _)) => Some(start),
            None => None,
        }
    }

    pub const fn end(&self) -> Option<i64> {
        match self.bounds {
            Some((_, end)) => Some(end),
            None => None,
        }
    }

    pub const fn bounds(&self) -> Option<(i64, i64)> {
        self.bounds
    }

    pub const fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Number of integers in the range.
    pub const fn len(&self) -> u64 {
        match self.bounds {
            Some((start, end)) => (end - start) as u64 + 1,
            None => 0,
        }
    }

    /// Returns true if `value` ∈ `[start, end]`.
    pub const fn contains(&self, value: i64) -> bool {
        match self.bounds {
            Some((start, end)) => start <= value && value <= end,
            None => false,
        }
    }

    /// A fresh iterator over `start..=end`; empty for the empty range.
    pub fn iter(&self) -> RangeInclusive<i64> {
        match self.bounds {
            Some((start, end)) => start..=end,
            #[allow(clippy::reversed_empty_ranges)]
            None => 1..=0,
        }
    }

    /// Smallest range covering both `self` and `other`, ignoring any gap.
    pub(crate) fn cover(&self, other: &AtomicRange) -> AtomicRange {
        match (self.bounds, other.bounds) {
            (Some((s1, e1)), Some((s2, e2))) => Self::from_bounds_unchecked(s1.min(s2), e1.max(e2)),
            (Some(_), None) => *self,
            (None, _) => *other,
        }
    }

    /// Number of excluded integers strictly between the two ranges.
    ///
    /// Overlapping ranges have distance `-1`; touching ranges such as `1-3`
    /// and `4-6` have distance `0`. Undefined (`None`) if either is empty.
    pub fn distance(&self, other: &AtomicRange) -> Option<i64> {
        let ((s1, e1), (s2, e2)) = (self.bounds?, other.bounds?);
        if e1 < s2 {
            Some(s2 - e1 - 1)
        } else if s1 > e2 {
            Some(s1 - e2 - 1)
        } else {
            Some(-1)
        }
    }

    pub fn overlaps(&self, other: &AtomicRange) -> bool {
        !self.intersection(other).is_empty()
    }

    pub fn intersection(&self, other: &AtomicRange) -> AtomicRange {
        match (self.bounds, other.bounds) {
            (Some((s1, e1)), Some((s2, e2))) if s1 <= e2 && s2 <= e1 => {
                Self::from_bounds_unchecked(s1.max(s2), e1.min(e2))
            }
            _ => Self::empty(),
        }
    }

    /// Union of two ranges.
    ///
    /// Ranges separated by at least one excluded integer cannot be merged and
    /// produce a two-piece [`Range::Set`].
    pub fn union(&self, other: &AtomicRange) -> Range {
        match self.distance(other) {
            Some(gap) if gap > 0 => Range::Set(RangeSet::from(vec![*self, *other])),
            _ => Range::Atomic(self.cover(other)),
        }
    }

    /// Values of `self` that are not in `other`.
    ///
    /// Produces two pieces when `other` lies strictly inside `self`.
    pub fn difference(&self, other: &AtomicRange) -> Range {
        let (Some((s1, e1)), Some((s2, e2))) = (self.bounds, other.bounds) else {
            return Range::Atomic(*self);
        };
        if e1 < s2 || e2 < s1 {
            return Range::Atomic(*self);
        }
        let left = (s1 < s2).then(|| Self::from_bounds_unchecked(s1, s2 - 1));
        let right = (e1 > e2).then(|| Self::from_bounds_unchecked(e2 + 1, e1));
        match (left, right) {
            (Some(left), Some(right)) => {
                Range::Set(RangeSet::from_sorted_unchecked(vec![left, right]))
            }
            (Some(piece), None) | (None, Some(piece)) => Range::Atomic(piece),
            (None, None) => Range::Atomic(Self::empty()),
        }
    }

    /// `(self ∪ other) - (self ∩ other)`.
    pub fn symmetric_difference(&self, other: &AtomicRange) -> Range {
        self.union(other).difference(&self.intersection(other))
    }

    /// Subset test; the empty range is a subset of everything.
    pub fn is_subset(&self, other: &AtomicRange) -> bool {
        match (self.bounds, other.bounds) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some((s1, e1)), Some((s2, e2))) => s2 <= s1 && e1 <= e2,
        }
    }

    pub fn is_superset(&self, other: &AtomicRange) -> bool {
        other.is_subset(self)
    }

    pub fn is_proper_subset(&self, other: &AtomicRange) -> bool {
        self.is_subset(other) && self != other
    }

    pub fn is_proper_superset(&self, other: &AtomicRange) -> bool {
        self.is_superset(other) && self != other
    }

    /// Values of `self` strictly before the start of `other`.
    ///
    /// An empty `other` is treated as lying past every value, so the whole
    /// of `self` overhangs on the left and nothing on the right.
    pub fn left_overhang(&self, other: &AtomicRange) -> AtomicRange {
        match (self.bounds, other.start()) {
            (None, _) => Self::empty(),
            (Some(_), None) => *self,
            (Some((start, _)), Some(limit)) if limit <= start => Self::empty(),
            (Some((start, _)), Some(limit)) => {
                self.intersection(&Self::from_bounds_unchecked(start, limit - 1))
            }
        }
    }

    /// Values of `self` strictly after the end of `other`.
    pub fn right_overhang(&self, other: &AtomicRange) -> AtomicRange {
        match (self.bounds, other.end()) {
            (None, _) | (_, None) => Self::empty(),
            (Some((_, end)), Some(limit)) if limit >= end => Self::empty(),
            (Some((_, end)), Some(limit)) => {
                self.intersection(&Self::from_bounds_unchecked(limit + 1, end))
            }
        }
    }

    /// Shifts both endpoints by `n`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if the shifted range would
    /// reach a value below 1, or [`RangeError::Overflow`] if it would pass
    /// `i64::MAX`.
    pub fn translate(&self, n: i64) -> Result<Self, RangeError> {
        let Some((start, end)) = self.bounds else {
            return Ok(Self::empty());
        };
        let overflow = || RangeError::Overflow {
            operation: "translate",
        };
        Self::new(
            start.checked_add(n).ok_or_else(overflow)?,
            end.checked_add(n).ok_or_else(overflow)?,
        )
    }

    /// Moves the range `n` positions toward 1.
    ///
    /// Callers guarantee `n < start`, which holds for the right overhang of
    /// a cut of length `n`.
    pub(crate) fn shifted_left(&self, n: u64) -> Self {
        match self.bounds {
            Some((start, end)) => {
                let n = n as i64;
                Self::from_bounds_unchecked(start - n, end - n)
            }
            None => Self::empty(),
        }
    }

    /// Grows (positive) or shrinks (negative) each end independently.
    ///
    /// Shrinking past the opposite end yields the empty range.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if growing the start would
    /// reach a value below 1, or [`RangeError::Overflow`] if growing the end
    /// would pass `i64::MAX`.
    pub fn expand(&self, left: i64, right: i64) -> Result<Self, RangeError> {
        let Some((start, end)) = self.bounds else {
            return Ok(Self::empty());
        };
        // Widened so that amounts near i64::MIN / i64::MAX compare exactly.
        let start = i128::from(start) - i128::from(left);
        let end = i128::from(end) + i128::from(right);
        if end < start {
            return Ok(Self::empty());
        }
        let narrow = |value: i128| {
            i64::try_from(value).map_err(|_| RangeError::Overflow {
                operation: "expand",
            })
        };
        Self::new(narrow(start)?, narrow(end)?)
    }

    /// Splits into `(values < n, values >= n)`.
    pub fn split(&self, n: i64) -> (AtomicRange, AtomicRange) {
        match self.bounds {
            None => (Self::empty(), Self::empty()),
            Some((start, _)) if n <= start => (Self::empty(), *self),
            Some((_, end)) if n > end => (*self, Self::empty()),
            Some((start, end)) => (
                Self::from_bounds_unchecked(start, n - 1),
                Self::from_bounds_unchecked(n, end),
            ),
        }
    }

    /// Excises the positions `other` covers and closes the gap.
    ///
    /// Values before `other` are kept, values inside it are dropped and
    /// values after it move left by `other.len()`.
    ///
    /// ```rust
    /// use posranges::{AtomicRange, RangeLike};
    ///
    /// let a = AtomicRange::new(1, 10).unwrap();
    /// let cut = a.remove_atomic(&AtomicRange::new(5, 7).unwrap());
    /// assert_eq!(cut.to_vec(), (1..=7).collect::<Vec<_>>());
    /// ```
    pub fn remove_atomic(&self, other: &AtomicRange) -> Range {
        if other.is_empty() {
            return Range::Atomic(*self);
        }
        let left = self.left_overhang(other);
        let right = self.right_overhang(other).shifted_left(other.len());
        left.union(&right)
    }

    /// Opens a gap of `other.len()` positions at `other.start`, then fills
    /// it with `other`.
    ///
    /// Values at or after `other.start` move right by `other.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Overflow`] if a moved value would pass `i64::MAX`.
    pub fn insert_atomic(&self, other: &AtomicRange) -> Result<Range, RangeError> {
        let Some(at) = other.start() else {
            return Ok(Range::Atomic(*self));
        };
        let (left, right) = self.split(at);
        let right = right.shift_right(other.len(), "insert")?;
        Ok(RangeSet::from(vec![left, *other, right]).into())
    }

    /// Moves the range `n` positions away from 1.
    pub(crate) fn shift_right(&self, n: u64, operation: &'static str) -> Result<Self, RangeError> {
        let Some((start, end)) = self.bounds else {
            return Ok(Self::empty());
        };
        let overflow = || RangeError::Overflow { operation };
        let n = i64::try_from(n).map_err(|_| overflow())?;
        Ok(Self::from_bounds_unchecked(
            start.checked_add(n).ok_or_else(overflow)?,
            end.checked_add(n).ok_or_else(overflow)?,
        ))
    }
}

impl RangeLike for AtomicRange {
    fn pieces(&self) -> &[AtomicRange] {
        if self.is_empty() {
            &[]
        } else {
            std::slice::from_ref(self)
        }
    }
}

impl IntoIterator for AtomicRange {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<RangeSet> for AtomicRange {
    type Error = RangeError;

    /// Succeeds iff the set has at most one piece.
    fn try_from(set: RangeSet) -> Result<Self, Self::Error> {
        set.as_atomic()
            .ok_or_else(|| RangeError::InvalidOperand(format!("disjoint set {set}")))
    }
}

impl TryFrom<Range> for AtomicRange {
    type Error = RangeError;

    fn try_from(range: Range) -> Result<Self, Self::Error> {
        match range {
            Range::Atomic(atomic) => Ok(atomic),
            Range::Set(set) => AtomicRange::try_from(set),
        }
    }
}

impl Display for AtomicRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bounds {
            None => write!(f, "-"),
            Some((start, end)) if start == end => write!(f, "{start}"),
            Some((start, end)) => write!(f, "{start}-{end}"),
        }
    }
}

// =============================================================================
// AtomicRange Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for AtomicRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("AtomicRange", 2)?;
        s.serialize_field("start", &self.start())?;
        s.serialize_field("end", &self.end())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AtomicRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: Option<i64>,
            end: Option<i64>,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        match (raw.start, raw.end) {
            (None, None) => Ok(Self::empty()),
            (Some(start), Some(end)) => Self::new(start, end).map_err(serde::de::Error::custom),
            _ => Err(serde::de::Error::custom(
                "AtomicRange start and end must both be set or both be null",
            )),
        }
    }
}
