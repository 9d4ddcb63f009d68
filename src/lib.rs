//! posranges - algebra of positive-integer ranges
//!
//! Contiguous intervals ([`AtomicRange`]), consolidated disjoint unions of
//! intervals ([`RangeSet`]) and the set-theoretic, ordering and positional
//! operations between them. All values are integers `>= 1`; both endpoints
//! of an interval are inclusive.
//!
//! ```rust
//! use posranges::{AtomicRange, RangeLike};
//!
//! let a = AtomicRange::new(5, 15).unwrap();
//! let b = AtomicRange::new(8, 10).unwrap();
//! let diff = a - b;
//! assert_eq!(diff.to_string(), "{5-7, 11-15}");
//! assert_eq!(diff.len(), 8);
//! ```

pub mod error;
pub mod range;
pub mod render;

pub use error::RangeError;
pub use range::{AtomicRange, Range, RangeLike, RangeSet, Values};
pub use render::{render, RenderOptions};
