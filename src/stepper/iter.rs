use crate::stepper::core::PermutationStepper;

/// Iterator over every arrangement a stepper will visit, starting with the
/// arrangement it currently holds.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    stepper: PermutationStepper<T>,
    started: bool,
}

impl<T> Permutations<T> {
    pub fn new(stepper: PermutationStepper<T>) -> Self {
        Self {
            stepper,
            started: false,
        }
    }
}

impl<T: Ord + Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.stepper.current().to_vec());
        }

        if !self.stepper.has_next() {
            return None;
        }
        Some(self.stepper.advance().to_vec())
    }
}
