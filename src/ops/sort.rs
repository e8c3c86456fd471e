use log::{debug, warn};

use crate::ops::errors::OpsError;
use crate::stepper::Direction;

/// Reorders the tail of the sequence starting at `from` into the direction's
/// starting order: ascending for `Ascending`, descending for `Descending`.
///
/// # Errors
///
/// Returns an error if `from` is past the last position.
pub fn sort_tail<T: Ord>(
    symbols: &mut [T],
    from: usize,
    direction: Direction,
) -> Result<(), OpsError> {
    if from >= symbols.len() {
        warn!(
            "Tail start out of bounds: index={}, length={}",
            from,
            symbols.len()
        );
        return Err(OpsError::InvalidIndex {
            index: from,
            length: symbols.len(),
        });
    }

    debug!("Reordering tail {}..{} {:?}", from, symbols.len(), direction);
    symbols[from..].sort_unstable_by(|a, b| direction.order(a, b));
    Ok(())
}
