//! Lexperm - A library for stepping through lexicographic permutations
//!
//! This library provides a permutation stepper that walks a fixed sequence
//! of symbols through its arrangements one at a time, in ascending or
//! descending lexicographic order, without materializing the full
//! permutation set.

pub mod ops;
pub mod stepper;

// Re-export the main public API
pub use ops::OpsError;
pub use stepper::{Direction, PermutationStepper, Permutations};

/// Enumerate every arrangement reachable from `initial` in `direction`,
/// starting with `initial` itself.
///
/// This is a convenience function that wraps a stepper in an iterator over
/// the arrangements it visits. The walk ends at the fully reversed
/// arrangement for the chosen direction; a sequence that already sits there
/// yields only itself.
///
/// # Examples
///
/// ```
/// use lexperm::{Direction, permutations};
///
/// let all: Vec<String> = permutations("abc".chars().collect(), Direction::Ascending)
///     .map(|p| p.into_iter().collect())
///     .collect();
/// assert_eq!(all, ["abc", "acb", "bac", "bca", "cab", "cba"]);
/// ```
pub fn permutations<T: Ord + Clone>(initial: Vec<T>, direction: Direction) -> Permutations<T> {
    Permutations::new(PermutationStepper::new(initial, direction))
}
