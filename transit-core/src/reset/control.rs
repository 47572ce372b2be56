//! Reset button debouncer
//!
//! A press must still be present after the settle time to commit a reset.
//! While the button stays engaged the counter is suspended, but only for a
//! bounded number of ticks. A reset fires at most once per press: the button
//! must be seen released before it can fire again.

/// Default settle time in ticks
pub const DEFAULT_SETTLE_TICKS: u16 = 10;

/// Default upper bound on a suspended hold, in ticks
pub const DEFAULT_MAX_HOLD_TICKS: u16 = 1000;

/// Reset control states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetState {
    /// Button not engaged
    #[default]
    Released,
    /// Press seen, waiting out the settle time
    Settling { elapsed: u16 },
    /// Reset committed, waiting for release
    Held { elapsed: u16 },
    /// Hold guard expired; counting resumed, waiting for release to re-arm
    Latched,
}

/// What the caller should do this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetAction {
    /// Nothing to do
    None,
    /// Skip counting and display for upcoming ticks
    Suspend,
    /// Clear the count now
    Commit,
}

/// Tick-driven reset debouncer
#[derive(Debug, Clone)]
pub struct ResetControl {
    state: ResetState,
    settle_ticks: u16,
    max_hold_ticks: u16,
}

impl Default for ResetControl {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_TICKS, DEFAULT_MAX_HOLD_TICKS)
    }
}

impl ResetControl {
    /// Create a new reset control
    ///
    /// # Arguments
    /// - `settle_ticks`: Ticks between seeing a press and re-checking it (min 1)
    /// - `max_hold_ticks`: Ticks a committed hold may suspend counting (min 1)
    pub fn new(settle_ticks: u16, max_hold_ticks: u16) -> Self {
        Self {
            state: ResetState::Released,
            settle_ticks: settle_ticks.max(1),
            max_hold_ticks: max_hold_ticks.max(1),
        }
    }

    /// Get the current state
    pub fn state(&self) -> ResetState {
        self.state
    }

    /// Check if counting ticks are currently suspended
    pub fn is_blocking(&self) -> bool {
        matches!(self.state, ResetState::Settling { .. } | ResetState::Held { .. })
    }

    /// Check if a committed reset is being held
    pub fn is_held(&self) -> bool {
        matches!(self.state, ResetState::Held { .. })
    }

    /// Feed the button level for one tick
    pub fn poll(&mut self, pressed: bool) -> ResetAction {
        use ResetState::*;

        let (next, action) = match self.state {
            Released if pressed => (Settling { elapsed: 0 }, ResetAction::Suspend),
            Released => (Released, ResetAction::None),

            Settling { elapsed } => {
                let elapsed = elapsed.saturating_add(1);
                if elapsed < self.settle_ticks {
                    (Settling { elapsed }, ResetAction::Suspend)
                } else if pressed {
                    (Held { elapsed: 0 }, ResetAction::Commit)
                } else {
                    // Bounce: released before the settle re-check
                    (Released, ResetAction::None)
                }
            }

            Held { .. } if !pressed => (Released, ResetAction::None),
            Held { elapsed } => {
                let elapsed = elapsed.saturating_add(1);
                if elapsed >= self.max_hold_ticks {
                    (Latched, ResetAction::None)
                } else {
                    (Held { elapsed }, ResetAction::Suspend)
                }
            }

            Latched if pressed => (Latched, ResetAction::None),
            Latched => (Released, ResetAction::None),
        };

        self.state = next;
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_for(control: &mut ResetControl, ticks: usize) -> usize {
        let mut commits = 0;
        for _ in 0..ticks {
            if control.poll(true) == ResetAction::Commit {
                commits += 1;
            }
        }
        commits
    }

    #[test]
    fn test_idle_released() {
        let mut control = ResetControl::new(3, 10);
        for _ in 0..5 {
            assert_eq!(control.poll(false), ResetAction::None);
        }
        assert_eq!(control.state(), ResetState::Released);
    }

    #[test]
    fn test_commit_after_settle() {
        let mut control = ResetControl::new(3, 10);

        assert_eq!(control.poll(true), ResetAction::Suspend);
        assert!(control.is_blocking());
        assert_eq!(control.poll(true), ResetAction::Suspend);
        assert_eq!(control.poll(true), ResetAction::Suspend);
        assert_eq!(control.poll(true), ResetAction::Commit);
        assert!(control.is_held());

        assert_eq!(control.poll(false), ResetAction::None);
        assert_eq!(control.state(), ResetState::Released);
    }

    #[test]
    fn test_bounce_rejected() {
        let mut control = ResetControl::new(3, 10);

        assert_eq!(control.poll(true), ResetAction::Suspend);
        assert_eq!(control.poll(false), ResetAction::Suspend);
        assert_eq!(control.poll(false), ResetAction::Suspend);
        // Re-check finds the button released
        assert_eq!(control.poll(false), ResetAction::None);
        assert_eq!(control.state(), ResetState::Released);
    }

    #[test]
    fn test_single_commit_per_press() {
        let mut control = ResetControl::new(2, 50);
        assert_eq!(press_for(&mut control, 40), 1);

        control.poll(false);
        assert_eq!(press_for(&mut control, 40), 1);
    }

    #[test]
    fn test_hold_is_bounded() {
        let mut control = ResetControl::new(1, 5);

        control.poll(true);
        assert_eq!(control.poll(true), ResetAction::Commit);

        for _ in 0..4 {
            assert_eq!(control.poll(true), ResetAction::Suspend);
        }
        assert_eq!(control.poll(true), ResetAction::None);
        assert_eq!(control.state(), ResetState::Latched);

        // Still held: no re-trigger
        assert_eq!(press_for(&mut control, 100), 0);
        assert!(!control.is_blocking());

        // Release re-arms
        assert_eq!(control.poll(false), ResetAction::None);
        assert_eq!(control.state(), ResetState::Released);
        assert_eq!(press_for(&mut control, 3), 1);
    }

    #[test]
    fn test_zero_ticks_clamped() {
        let mut control = ResetControl::new(0, 0);
        assert_eq!(control.poll(true), ResetAction::Suspend);
        assert_eq!(control.poll(true), ResetAction::Commit);
        assert_eq!(control.poll(true), ResetAction::None);
        assert_eq!(control.state(), ResetState::Latched);
    }
}
