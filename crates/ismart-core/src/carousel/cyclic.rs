//! Single-slide carousel stepper with wraparound

use super::Steppable;
use serde::{Deserialize, Serialize};

/// Active index over a fixed-size sequence that wraps at both boundaries.
///
/// An empty sequence is accepted; every operation on it is a no-op and the
/// index stays at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclicStepper {
    index: usize,
    len: usize,
}

impl CyclicStepper {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, i: usize) -> bool {
        !self.is_empty() && self.index == i
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to `i`. Out-of-range targets are ignored and `false` is returned.
    pub fn go_to(&mut self, i: usize) -> bool {
        if i >= self.len {
            tracing::debug!(target = i, len = self.len, "ignoring out-of-range carousel jump");
            return false;
        }
        self.index = i;
        true
    }
}

impl Steppable for CyclicStepper {
    fn index(&self) -> usize {
        self.index
    }

    fn step_forward(&mut self) -> usize {
        self.next()
    }

    fn step_backward(&mut self) -> usize {
        self.previous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_next_wraps_to_start() {
        let mut stepper = CyclicStepper::new(3);
        assert_eq!(stepper.next(), 1);
        assert_eq!(stepper.next(), 2);
        assert_eq!(stepper.next(), 0);
    }

    #[test]
    fn test_previous_wraps_to_end() {
        let mut stepper = CyclicStepper::new(4);
        assert_eq!(stepper.previous(), 3);
        assert_eq!(stepper.previous(), 2);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut stepper = CyclicStepper::new(5);
        assert!(stepper.go_to(3));
        assert!(!stepper.go_to(5));
        assert_eq!(stepper.index(), 3);
    }

    #[test]
    fn test_empty_stepper_is_noop() {
        let mut stepper = CyclicStepper::new(0);
        assert_eq!(stepper.next(), 0);
        assert_eq!(stepper.previous(), 0);
        assert!(!stepper.go_to(0));
        assert!(!stepper.is_active(0));
    }

    proptest! {
        #[test]
        fn prop_full_cycle_returns_to_start(len in 1usize..64, start in 0usize..64) {
            let mut stepper = CyclicStepper::new(len);
            stepper.go_to(start % len);
            let origin = stepper.index();
            for _ in 0..len {
                stepper.next();
            }
            prop_assert_eq!(stepper.index(), origin);
        }

        #[test]
        fn prop_previous_undoes_next(len in 1usize..64, start in 0usize..64) {
            let mut stepper = CyclicStepper::new(len);
            stepper.go_to(start % len);
            let origin = stepper.index();
            stepper.next();
            stepper.previous();
            prop_assert_eq!(stepper.index(), origin);
        }

        #[test]
        fn prop_index_stays_in_bounds(len in 1usize..32, moves in prop::collection::vec(any::<bool>(), 0..100)) {
            let mut stepper = CyclicStepper::new(len);
            for forward in moves {
                if forward { stepper.next(); } else { stepper.previous(); }
                prop_assert!(stepper.index() < len);
            }
        }
    }
}
