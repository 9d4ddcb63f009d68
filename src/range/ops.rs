//! Operator overloads for the range algebra.
//!
//! `|`, `&`, `-` and `^` map to union, intersection, difference and symmetric
//! difference for every pair of [`AtomicRange`], [`RangeSet`] and [`Range`],
//! by value and by reference. Comparison operators implement the subset
//! order on covered integers: `a <= b` iff `a ⊆ b`, and incomparable pairs
//! return `None` from `partial_cmp`.

use std::cmp::Ordering;
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, SubAssign};

use super::atomic::AtomicRange;
use super::range::Range;
use super::set::{covers, RangeSet};
use super::traits::RangeLike;

/// Subset order between two consolidated piece lists.
fn subset_order(a: &[AtomicRange], b: &[AtomicRange]) -> Option<Ordering> {
    match (covers(b, a), covers(a, b)) {
        (true, true) => Some(Ordering::Equal),
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        (false, false) => None,
    }
}

// ─────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────

macro_rules! impl_set_semantic_eq {
    ($($lhs:ty => $rhs:ty),* $(,)?) => {
        $(
            impl PartialEq<$rhs> for $lhs {
                fn eq(&self, other: &$rhs) -> bool {
                    self.pieces() == other.pieces()
                }
            }
        )*
    };
}

macro_rules! impl_subset_order {
    ($($lhs:ty => $rhs:ty),* $(,)?) => {
        $(
            impl PartialOrd<$rhs> for $lhs {
                fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                    subset_order(self.pieces(), other.pieces())
                }
            }
        )*
    };
}

// AtomicRange and RangeSet derive PartialEq: both have a unique representation.
impl_set_semantic_eq! {
    AtomicRange => RangeSet,
    AtomicRange => Range,
    RangeSet => AtomicRange,
    RangeSet => Range,
    Range => AtomicRange,
    Range => RangeSet,
    Range => Range,
}

impl Eq for Range {}

impl_subset_order! {
    AtomicRange => AtomicRange,
    AtomicRange => RangeSet,
    AtomicRange => Range,
    RangeSet => AtomicRange,
    RangeSet => RangeSet,
    RangeSet => Range,
    Range => AtomicRange,
    Range => RangeSet,
    Range => Range,
}

// ─────────────────────────────────────────────────────────────────────
// Binary operators
// ─────────────────────────────────────────────────────────────────────

macro_rules! impl_operator {
    ($trait:ident, $fn:ident, $method:ident, $lhs:ty, $rhs:ty, $out:ty, |$a:ident| $recv:expr) => {
        impl std::ops::$trait<&$rhs> for &$lhs {
            type Output = $out;

            fn $fn(self, rhs: &$rhs) -> $out {
                let $a = self;
                ($recv).$method(rhs).into()
            }
        }

        impl std::ops::$trait<$rhs> for $lhs {
            type Output = $out;

            fn $fn(self, rhs: $rhs) -> $out {
                std::ops::$trait::$fn(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_operators {
    ($lhs:ty, $rhs:ty => $out:ty, |$a:ident| $recv:expr) => {
        impl_operator!(BitOr, bitor, union, $lhs, $rhs, $out, |$a| $recv);
        impl_operator!(BitAnd, bitand, intersection, $lhs, $rhs, $out, |$a| $recv);
        impl_operator!(Sub, sub, difference, $lhs, $rhs, $out, |$a| $recv);
        impl_operator!(BitXor, bitxor, symmetric_difference, $lhs, $rhs, $out, |$a| $recv);
    };
}

impl_operators!(AtomicRange, AtomicRange => Range, |a| a);
impl_operators!(AtomicRange, RangeSet => RangeSet, |a| RangeSet::from(*a));
impl_operators!(AtomicRange, Range => Range, |a| Range::Atomic(*a));
impl_operators!(RangeSet, AtomicRange => RangeSet, |a| a);
impl_operators!(RangeSet, RangeSet => RangeSet, |a| a);
impl_operators!(RangeSet, Range => RangeSet, |a| a);
impl_operators!(Range, AtomicRange => Range, |a| a);
impl_operators!(Range, RangeSet => Range, |a| a);
impl_operators!(Range, Range => Range, |a| a);

// ─────────────────────────────────────────────────────────────────────
// In-place operators on RangeSet
// ─────────────────────────────────────────────────────────────────────
//
// These mutate only the receiver; the operand is borrowed immutably.

impl<R: RangeLike> BitOrAssign<&R> for RangeSet {
    fn bitor_assign(&mut self, rhs: &R) {
        self.add(rhs);
    }
}

impl<R: RangeLike> BitAndAssign<&R> for RangeSet {
    fn bitand_assign(&mut self, rhs: &R) {
        *self = self.intersection(rhs);
    }
}

impl<R: RangeLike> SubAssign<&R> for RangeSet {
    fn sub_assign(&mut self, rhs: &R) {
        *self = self.difference(rhs);
    }
}

impl<R: RangeLike> BitXorAssign<&R> for RangeSet {
    fn bitxor_assign(&mut self, rhs: &R) {
        *self = self.symmetric_difference(rhs);
    }
}
