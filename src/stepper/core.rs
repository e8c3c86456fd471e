use log::{debug, error, info};

use crate::ops::{OpsError, find_partner, find_pivot, sort_tail, swap_symbols};
use crate::stepper::direction::Direction;

/// Steps a fixed sequence of symbols through its permutations in
/// lexicographic order, one arrangement at a time.
///
/// The stepper owns its sequence for its whole lifetime and mutates it in
/// place; every arrangement it produces is a permutation of the symbols it
/// was constructed with. Whether another permutation exists is derived from
/// the current sequence on every call, never cached.
#[derive(Debug, Clone)]
pub struct PermutationStepper<T> {
    symbols: Vec<T>,
    direction: Direction,
}

impl<T: Ord> PermutationStepper<T> {
    /// Create a stepper over `symbols` advancing in `direction`.
    pub fn new(symbols: Vec<T>, direction: Direction) -> Self {
        info!(
            "Initialized {:?} permutation stepper over {} symbols",
            direction,
            symbols.len()
        );
        Self { symbols, direction }
    }

    /// Create a stepper that advances in increasing lexicographic order.
    pub fn ascending(symbols: Vec<T>) -> Self {
        Self::new(symbols, Direction::Ascending)
    }

    /// Create a stepper that advances in decreasing lexicographic order.
    pub fn descending(symbols: Vec<T>) -> Self {
        Self::new(symbols, Direction::Descending)
    }

    /// The current arrangement.
    pub fn current(&self) -> &[T] {
        &self.symbols
    }

    /// The direction this stepper advances in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true if a strictly next permutation exists in the configured
    /// direction. Does not mutate the sequence.
    pub fn has_next(&self) -> bool {
        find_pivot(&self.symbols, self.direction).is_some()
    }

    /// Advance to the next permutation in place and return the new current
    /// arrangement.
    ///
    /// When no next permutation exists this is a safe no-op returning the
    /// sequence unchanged, so `while stepper.has_next()` loops terminate
    /// cleanly and extra calls past exhaustion are harmless.
    pub fn advance(&mut self) -> &[T] {
        if let Err(err) = self.step() {
            error!("Internal index fault during advance: {}", err);
        }
        &self.symbols
    }

    /// Recover the sequence, consuming the stepper.
    pub fn into_inner(self) -> Vec<T> {
        self.symbols
    }

    fn step(&mut self) -> Result<(), OpsError> {
        let pivot = match find_pivot(&self.symbols, self.direction) {
            Some(pivot) => pivot,
            None => {
                debug!("No pivot; sequence is at its final arrangement");
                return Ok(());
            }
        };

        let partner = find_partner(&self.symbols, pivot, self.direction)?;
        swap_symbols(&mut self.symbols, pivot, partner)?;
        sort_tail(&mut self.symbols, pivot + 1, self.direction)
    }
}
