//! Range values over positive integers.
//!
//! [`AtomicRange`] is a single closed interval, [`RangeSet`] a consolidated
//! union of intervals, and [`Range`] the closed union of both shapes returned
//! by operations whose result may need more than one piece. All three share
//! the read-only [`RangeLike`] protocol.

mod atomic;
mod iter;
mod ops;
#[allow(clippy::module_inception)]
mod range;
mod set;
mod traits;

#[cfg(debug_assertions)]
pub(crate) mod assertions;

#[cfg(not(debug_assertions))]
pub(crate) mod assertions {
    use super::AtomicRange;

    pub fn is_consolidated(_pieces: &[AtomicRange]) -> bool {
        true
    }
}

#[cfg(test)]
mod tests;

pub use atomic::AtomicRange;
pub use iter::Values;
pub use range::Range;
pub use set::RangeSet;
pub use traits::RangeLike;
