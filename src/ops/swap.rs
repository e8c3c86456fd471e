use log::warn;

use crate::ops::errors::OpsError;

/// Exchanges the symbols at two positions. The index pair is normalized at
/// entry, so callers may pass the positions in either order; equal indices
/// leave the sequence untouched.
///
/// # Errors
///
/// Returns an error if either index is out of bounds.
pub fn swap_symbols<T>(symbols: &mut [T], index0: usize, index1: usize) -> Result<(), OpsError> {
    let (low, high) = if index0 <= index1 {
        (index0, index1)
    } else {
        (index1, index0)
    };

    if high >= symbols.len() {
        warn!(
            "Swap index out of bounds: index={}, length={}",
            high,
            symbols.len()
        );
        return Err(OpsError::InvalidIndex {
            index: high,
            length: symbols.len(),
        });
    }

    if low != high {
        symbols.swap(low, high);
    }
    Ok(())
}
