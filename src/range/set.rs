//! A consolidated union of disjoint atomic ranges.
//!
//! [`RangeSet`] wraps a `Vec<AtomicRange>` and guarantees the **consolidated
//! invariant** at all times: pieces are non-empty, sorted by start, and any
//! two neighbours are separated by at least one excluded integer (touching or
//! overlapping pieces are merged).
//!
//! Because the consolidated decomposition of a set of integers is unique,
//! structural equality of two `RangeSet`s coincides with equality of the
//! integers they cover.

use std::fmt::Display;
use std::ops::Index;

use super::atomic::AtomicRange;
use super::traits::RangeLike;
use crate::error::RangeError;

/// A sorted, consolidated set of atomic ranges.
///
/// # Performance
///
/// - Construction from unsorted pieces: O(n log n) sort + O(n) merge.
/// - Binary set operations: O(n + m) sweeps, except difference which is
///   O(n · m) in the worst case.
/// - Positional editors reconsolidate once per atomic piece of the operand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RangeSet(Vec<AtomicRange>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl RangeSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds the minimal decomposition of an arbitrary collection of integers.
    ///
    /// Duplicates and ordering of the input are irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if any value is below 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use posranges::RangeSet;
    ///
    /// let set = RangeSet::from_values([9, 1, 2, 3, 8, 7, 2]).unwrap();
    /// assert_eq!(set.to_string(), "{1-3, 7-9}");
    /// ```
    pub fn from_values<I: IntoIterator<Item = i64>>(values: I) -> Result<Self, RangeError> {
        let mut values: Vec<i64> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        if let Some(&lowest) = values.first() {
            if lowest < 1 {
                return Err(RangeError::InvalidValue(lowest));
            }
        }

        let mut runs: Vec<(i64, i64)> = Vec::new();
        for value in values {
            match runs.last_mut() {
                Some((_, end)) if *end + 1 == value => *end = value,
                _ => runs.push((value, value)),
            }
        }
        Ok(Self(
            runs.into_iter()
                .map(|(start, end)| AtomicRange::from_bounds_unchecked(start, end))
                .collect(),
        ))
    }

    /// Wraps pieces that are **already consolidated** without re-sorting.
    ///
    /// In debug builds this asserts the invariant.
    pub(crate) fn from_sorted_unchecked(pieces: Vec<AtomicRange>) -> Self {
        debug_assert!(
            super::assertions::is_consolidated(&pieces),
            "RangeSet::from_sorted_unchecked called with unconsolidated input"
        );
        Self(pieces)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Consolidation
// ─────────────────────────────────────────────────────────────────────

impl RangeSet {
    /// Sorts by start and merges touching or overlapping pieces in place.
    ///
    /// Idempotent: consolidating an already consolidated set leaves the piece
    /// list unchanged.
    pub fn consolidate(&mut self) {
        self.0.retain(|piece| !piece.is_empty());
        if self.0.len() <= 1 {
            return;
        }
        let before = self.0.len();
        self.0.sort_by_key(AtomicRange::start);
        let mut merged: Vec<AtomicRange> = Vec::with_capacity(self.0.len());
        for piece in self.0.drain(..) {
            match merged.last_mut() {
                // Touching (distance 0) or overlapping (distance -1).
                Some(last) if last.distance(&piece).is_some_and(|gap| gap < 1) => {
                    *last = last.cover(&piece);
                }
                _ => merged.push(piece),
            }
        }
        self.0 = merged;
        tracing::trace!(before, after = self.0.len(), "consolidated range set");
    }

    /// Adds the pieces of `other`, then reconsolidates.
    pub fn add(&mut self, other: &impl RangeLike) {
        if other.is_empty() {
            return;
        }
        self.0.extend_from_slice(other.pieces());
        self.consolidate();
    }

    /// Replaces the piece at `index`, then reconsolidates.
    ///
    /// Replacing with an empty range drops the piece.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::IndexOutOfRange`] if `index` is not a valid piece index.
    pub fn set(&mut self, index: usize, piece: AtomicRange) -> Result<(), RangeError> {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or(RangeError::IndexOutOfRange { index, len })?;
        *slot = piece;
        self.consolidate();
        Ok(())
    }

    /// Removes all pieces.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Consumes the set and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<AtomicRange> {
        self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Read access
// ─────────────────────────────────────────────────────────────────────

impl RangeSet {
    pub fn as_slice(&self) -> &[AtomicRange] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AtomicRange> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&AtomicRange> {
        self.0.get(index)
    }

    pub fn piece_count(&self) -> usize {
        self.0.len()
    }

    /// Returns true if `value` is covered by one of the pieces.
    pub fn contains(&self, value: i64) -> bool {
        let after = self
            .0
            .partition_point(|piece| piece.start().is_some_and(|start| start <= value));
        after > 0 && self.0[after - 1].contains(value)
    }

    /// Distance between the spans of the two values.
    pub fn distance(&self, other: &impl RangeLike) -> Option<i64> {
        self.span().distance(&other.span())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl RangeSet {
    pub fn union(&self, other: &impl RangeLike) -> RangeSet {
        let mut result = self.clone();
        result.add(other);
        result
    }

    /// Two-pointer sweep over both consolidated piece lists.
    pub fn intersection(&self, other: &impl RangeLike) -> RangeSet {
        let (a, b) = (self.pieces(), other.pieces());
        if a.is_empty() || b.is_empty() {
            return RangeSet::new();
        }

        let mut result = Vec::with_capacity(a.len().min(b.len()));
        let (mut i, mut j) = (0usize, 0usize);
        while i < a.len() && j < b.len() {
            let common = a[i].intersection(&b[j]);
            if !common.is_empty() {
                result.push(common);
            }
            match a[i].end().cmp(&b[j].end()) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        RangeSet::from(result)
    }

    /// Subtracts every piece of `other` from every piece of `self`.
    pub fn difference(&self, other: &impl RangeLike) -> RangeSet {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        let mut remaining = self.0.clone();
        for cut in other.pieces() {
            remaining = remaining
                .iter()
                .flat_map(|piece| piece.difference(cut).pieces().to_vec())
                .collect();
        }
        RangeSet::from(remaining)
    }

    /// `(self ∪ other) - (self ∩ other)`.
    pub fn symmetric_difference(&self, other: &impl RangeLike) -> RangeSet {
        self.union(other).difference(&self.intersection(other))
    }

    pub fn is_subset(&self, other: &impl RangeLike) -> bool {
        covers(other.pieces(), self.pieces())
    }

    pub fn is_superset(&self, other: &impl RangeLike) -> bool {
        covers(self.pieces(), other.pieces())
    }

    pub fn is_proper_subset(&self, other: &impl RangeLike) -> bool {
        self.is_subset(other) && self.pieces() != other.pieces()
    }

    pub fn is_proper_superset(&self, other: &impl RangeLike) -> bool {
        self.is_superset(other) && self.pieces() != other.pieces()
    }

    /// Values of `self` strictly before the start of `other`'s span.
    ///
    /// An empty `other` sits past every value, so all of `self` overhangs.
    pub fn left_overhang(&self, other: &impl RangeLike) -> RangeSet {
        let (Some(first), Some(limit)) = (self.span().start(), other.span().start()) else {
            return self.clone();
        };
        if limit <= first {
            return RangeSet::new();
        }
        self.intersection(&AtomicRange::from_bounds_unchecked(first, limit - 1))
    }

    /// Values of `self` strictly after the end of `other`'s span.
    ///
    /// Empty when `other` is empty.
    pub fn right_overhang(&self, other: &impl RangeLike) -> RangeSet {
        let Some(last) = self.span().end() else {
            return RangeSet::new();
        };
        let Some(limit) = other.span().end() else {
            return RangeSet::new();
        };
        if limit >= last {
            return RangeSet::new();
        }
        self.intersection(&AtomicRange::from_bounds_unchecked(limit + 1, last))
    }
}

/// True if every piece of `inner` lies inside some piece of `outer`.
///
/// Both lists must be consolidated, so each inner piece can only fit inside
/// a single outer piece.
pub(crate) fn covers(outer: &[AtomicRange], inner: &[AtomicRange]) -> bool {
    let mut candidates = outer.iter().peekable();
    inner.iter().all(|piece| {
        while let Some(candidate) = candidates.peek() {
            if piece.is_subset(candidate) {
                return true;
            }
            if candidate.end() >= piece.start() {
                return false;
            }
            candidates.next();
        }
        false
    })
}

// ─────────────────────────────────────────────────────────────────────
// Positional operations
// ─────────────────────────────────────────────────────────────────────

impl RangeSet {
    /// Shifts every piece by `n`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if a value would drop below 1, or
    /// [`RangeError::Overflow`] if one would pass `i64::MAX`.
    pub fn translate(&self, n: i64) -> Result<RangeSet, RangeError> {
        self.0.iter().map(|piece| piece.translate(n)).collect()
    }

    /// Grows (positive) or shrinks (negative) the set at either end of its span.
    ///
    /// Both amounts are measured against the span before expansion.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidValue`] if growing the start would
    /// reach a value below 1, or [`RangeError::Overflow`] if growing the end
    /// would pass `i64::MAX`.
    pub fn expand(&self, left: i64, right: i64) -> Result<RangeSet, RangeError> {
        let Some((first, last)) = self.span().bounds() else {
            return Ok(RangeSet::new());
        };
        let mut result = self.clone();
        if left > 0 {
            result.add(&AtomicRange::new(first - left, first)?);
        } else if left < 0 {
            // Shrinking past i64::MAX removes everything from `first` on.
            let to = first.checked_sub(left + 1).unwrap_or(i64::MAX);
            result = result.difference(&AtomicRange::from_bounds_unchecked(first, to));
        }
        if right > 0 {
            let to = last
                .checked_add(right)
                .ok_or(RangeError::Overflow { operation: "expand" })?;
            result.add(&AtomicRange::from_bounds_unchecked(last, to));
        } else if right < 0 {
            let from = (last + right + 1).max(1);
            result = result.difference(&AtomicRange::from_bounds_unchecked(from, last));
        }
        Ok(result)
    }

    /// Splits into `(values < n, values >= n)`.
    pub fn split(&self, n: i64) -> (RangeSet, RangeSet) {
        let (left, right): (Vec<AtomicRange>, Vec<AtomicRange>) =
            self.0.iter().map(|piece| piece.split(n)).unzip();
        (RangeSet::from(left), RangeSet::from(right))
    }

    /// Excises the positions of `other` and shifts later values left by its length.
    pub fn remove_atomic(&self, other: &AtomicRange) -> RangeSet {
        if other.is_empty() {
            return self.clone();
        }
        let left = self.left_overhang(other);
        let right: Vec<AtomicRange> = self
            .right_overhang(other)
            .iter()
            .map(|piece| piece.shifted_left(other.len()))
            .collect();
        left.union(&RangeSet::from(right))
    }

    /// Applies [`RangeSet::remove_atomic`] for each piece of `other`,
    /// rightmost first, so each cut is computed against unshifted positions.
    pub fn remove(&self, other: &impl RangeLike) -> RangeSet {
        tracing::trace!(pieces = other.pieces().len(), "removing positions");
        other
            .pieces()
            .iter()
            .rev()
            .fold(self.clone(), |acc, piece| acc.remove_atomic(piece))
    }

    /// Opens a gap of `other.len()` positions at `other.start`, filled with `other`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Overflow`] if a moved value would pass `i64::MAX`.
    pub fn insert_atomic(&self, other: &AtomicRange) -> Result<RangeSet, RangeError> {
        let Some(at) = other.start() else {
            return Ok(self.clone());
        };
        let (left, right) = self.split(at);
        let shifted = right
            .iter()
            .map(|piece| piece.shift_right(other.len(), "insert"))
            .collect::<Result<RangeSet, _>>()?;
        let mut result = left;
        result.add(other);
        result.add(&shifted);
        Ok(result)
    }

    /// Applies [`RangeSet::insert_atomic`] for each piece of `other`, rightmost first.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Overflow`] if a moved value would pass `i64::MAX`.
    pub fn insert(&self, other: &impl RangeLike) -> Result<RangeSet, RangeError> {
        tracing::trace!(pieces = other.pieces().len(), "inserting positions");
        other
            .pieces()
            .iter()
            .rev()
            .try_fold(self.clone(), |acc, piece| acc.insert_atomic(piece))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl RangeLike for RangeSet {
    fn pieces(&self) -> &[AtomicRange] {
        &self.0
    }
}

impl Index<usize> for RangeSet {
    type Output = AtomicRange;

    fn index(&self, index: usize) -> &AtomicRange {
        &self.0[index]
    }
}

impl From<Vec<AtomicRange>> for RangeSet {
    /// Creates a `RangeSet` from unsorted pieces, consolidating on construction.
    fn from(pieces: Vec<AtomicRange>) -> Self {
        let mut set = Self(pieces);
        set.consolidate();
        set
    }
}

impl From<AtomicRange> for RangeSet {
    fn from(piece: AtomicRange) -> Self {
        Self(piece.pieces().to_vec())
    }
}

impl FromIterator<AtomicRange> for RangeSet {
    fn from_iter<I: IntoIterator<Item = AtomicRange>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<AtomicRange> for RangeSet {
    fn extend<I: IntoIterator<Item = AtomicRange>>(&mut self, iter: I) {
        self.0.extend(iter);
        self.consolidate();
    }
}

impl IntoIterator for RangeSet {
    type Item = AtomicRange;
    type IntoIter = std::vec::IntoIter<AtomicRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a AtomicRange;
    type IntoIter = std::slice::Iter<'a, AtomicRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for RangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "-"),
            [only] => write!(f, "{only}"),
            pieces => {
                write!(f, "{{")?;
                for (i, piece) in pieces.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{piece}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for RangeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RangeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pieces = <Vec<AtomicRange> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(pieces))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
