//! Invariant checks for consolidated piece lists.

use super::atomic::AtomicRange;

/// Returns true if `pieces` is consolidated: no piece is empty, pieces are
/// sorted by start, and neighbours are separated by at least one excluded
/// integer.
pub fn is_consolidated(pieces: &[AtomicRange]) -> bool {
    pieces.iter().all(|piece| !piece.is_empty())
        && pieces.windows(2).all(|w| {
            let (prev, curr) = (&w[0], &w[1]);
            prev.end() < curr.start() && prev.distance(curr).is_some_and(|gap| gap >= 1)
        })
}
