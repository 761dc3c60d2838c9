//! Step counter
//!
//! The counter owns its cursor as a plain field, so advancing requires
//! `&mut self` and every mutation is visible to the borrow checker.

/// Counter yielding `start`, `start + step`, `start + 2 * step`, and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter<T = i64> {
    start: T,
    step: T,
    value: T,
}

impl<T: Copy + std::ops::AddAssign> Counter<T> {
    pub fn new(start: T, step: T) -> Self {
        Self {
            start,
            step,
            value: start,
        }
    }

    /// Return the current value and advance by the step.
    pub fn next(&mut self) -> T {
        let value = self.value;
        self.value += self.step;
        value
    }

    /// Current value without advancing.
    pub fn peek(&self) -> T {
        self.value
    }

    /// Rewind to the starting value.
    pub fn reset(&mut self) {
        self.value = self.start;
    }
}

impl Default for Counter<i64> {
    fn default() -> Self {
        Self::new(0, 1)
    }
}
