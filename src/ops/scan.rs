use log::{debug, warn};

use crate::ops::errors::OpsError;
use crate::stepper::Direction;

/// Locates the rightmost index whose symbol precedes its successor in the
/// given direction. `None` means the sequence is at its final arrangement
/// and no further permutation exists.
pub fn find_pivot<T: Ord>(symbols: &[T], direction: Direction) -> Option<usize> {
    if symbols.len() < 2 {
        return None;
    }

    (0..symbols.len() - 1)
        .rev()
        .find(|&k| direction.precedes(&symbols[k], &symbols[k + 1]))
}

/// Locates the rightmost index past the pivot whose symbol the pivot symbol
/// precedes. Falls back to the pivot itself when no later symbol qualifies,
/// which turns the follow-up swap into a no-op.
///
/// # Errors
///
/// Returns an error if the pivot index is out of bounds.
pub fn find_partner<T: Ord>(
    symbols: &[T],
    pivot: usize,
    direction: Direction,
) -> Result<usize, OpsError> {
    if pivot >= symbols.len() {
        warn!(
            "Pivot out of bounds: index={}, length={}",
            pivot,
            symbols.len()
        );
        return Err(OpsError::InvalidIndex {
            index: pivot,
            length: symbols.len(),
        });
    }

    let partner = (pivot + 1..symbols.len())
        .rev()
        .find(|&r| direction.precedes(&symbols[pivot], &symbols[r]))
        .unwrap_or(pivot);
    debug!("Partner scan for pivot {} selected {}", pivot, partner);
    Ok(partner)
}
