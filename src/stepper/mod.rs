mod core;
mod direction;
mod iter;

pub use direction::Direction;
pub use iter::Permutations;
pub use self::core::PermutationStepper;

#[cfg(test)]
mod tests;
