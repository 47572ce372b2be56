//! Running count holder

use crate::direction::Delta;

/// Accumulated signed count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountStore {
    count: i32,
}

impl CountStore {
    /// Create a store at zero
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Add a delta to the count
    ///
    /// Saturates at the `i32` range instead of wrapping.
    pub fn apply(&mut self, delta: i32) {
        self.count = self.count.saturating_add(delta);
    }

    /// Add a direction delta to the count
    pub fn apply_delta(&mut self, delta: Delta) {
        self.apply(delta.value());
    }

    /// Clear the count to zero
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Get the current count
    pub fn current(&self) -> i32 {
        self.count
    }
}
