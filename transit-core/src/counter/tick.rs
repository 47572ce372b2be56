//! Counter state owned by the poll loop

use crate::config::CounterConfig;
use crate::count::{CountStore, PassStats};
use crate::direction::{Delta, Edge, Phase, SensorReading};
use crate::reset::{ResetAction, ResetControl};
use crate::traits::CounterFrame;

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Phase after the tick
    pub phase: Phase,
    /// Count adjustment applied this tick
    pub delta: Delta,
    /// Edge taken, or `None` when the tick was suspended
    pub edge: Option<Edge>,
    /// Counting was skipped because the reset control is engaged
    pub suspended: bool,
    /// The count was cleared this tick
    pub reset_committed: bool,
    /// Frame to show, if the display should be updated
    pub frame: Option<CounterFrame>,
}

/// All counting state for one rig
///
/// Owned by a single task; nothing here is shared.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    phase: Phase,
    store: CountStore,
    reset: ResetControl,
    stats: PassStats,
}

impl Counter {
    /// Create a counter with the given reset debouncer
    pub fn new(reset: ResetControl) -> Self {
        Self {
            phase: Phase::Idle,
            store: CountStore::new(),
            reset,
            stats: PassStats::new(),
        }
    }

    /// Create a counter from configuration
    pub fn from_config(config: &CounterConfig) -> Self {
        Self::new(config.reset_control())
    }

    /// Run one tick
    ///
    /// # Arguments
    /// - `reading`: Latest sensor sample
    /// - `reset_pressed`: Reset control level this tick
    pub fn tick(&mut self, reading: SensorReading, reset_pressed: bool) -> TickOutcome {
        if self.reset.is_blocking() {
            return self.tick_suspended(reading, reset_pressed);
        }

        let t = self.phase.advance(reading);
        self.phase = t.phase;
        self.store.apply_delta(t.delta);
        self.stats.record(&t);

        let frame = self.frame(reading);

        // Reset is checked last. A new press only affects later ticks.
        self.reset.poll(reset_pressed);

        TickOutcome {
            phase: t.phase,
            delta: t.delta,
            edge: Some(t.edge),
            suspended: false,
            reset_committed: false,
            frame: Some(frame),
        }
    }

    fn tick_suspended(&mut self, reading: SensorReading, reset_pressed: bool) -> TickOutcome {
        let committed = self.reset.poll(reset_pressed) == ResetAction::Commit;
        if committed {
            self.store.reset();
        }

        TickOutcome {
            phase: self.phase,
            delta: Delta::None,
            edge: None,
            suspended: true,
            reset_committed: committed,
            frame: committed.then(|| self.frame(reading)),
        }
    }

    fn frame(&self, reading: SensorReading) -> CounterFrame {
        CounterFrame {
            a_active: reading.a_active,
            b_active: reading.b_active,
            count: self.store.current(),
            reset_held: self.reset.is_held(),
        }
    }

    /// Get the current count
    pub fn count(&self) -> i32 {
        self.store.current()
    }

    /// Get the direction phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get pass statistics since boot
    pub fn stats(&self) -> &PassStats {
        &self.stats
    }

    /// Get the reset control
    pub fn reset_control(&self) -> &ResetControl {
        &self.reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reset::ResetState;
    use proptest::prelude::*;

    const CLEAR: SensorReading = SensorReading::new(false, false);
    const ONLY_A: SensorReading = SensorReading::new(true, false);
    const ONLY_B: SensorReading = SensorReading::new(false, true);
    const BOTH: SensorReading = SensorReading::new(true, true);

    fn counter() -> Counter {
        Counter::new(ResetControl::new(2, 4))
    }

    fn pass(counter: &mut Counter, readings: &[SensorReading]) {
        for &r in readings {
            let outcome = counter.tick(r, false);
            assert!(!outcome.suspended);
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut counter = counter();

        let outcomes: [TickOutcome; 3] =
            [ONLY_A, BOTH, CLEAR].map(|r| counter.tick(r, false));

        assert_eq!(outcomes.map(|o| o.phase), [Phase::AFirst, Phase::Idle, Phase::Idle]);
        assert_eq!(
            outcomes.map(|o| o.delta),
            [Delta::None, Delta::Forward, Delta::None]
        );
        assert_eq!(counter.count(), 1);
        assert_eq!(
            outcomes[1].frame,
            Some(CounterFrame {
                a_active: true,
                b_active: true,
                count: 1,
                reset_held: false,
            })
        );
    }

    #[test]
    fn test_display_every_counting_tick() {
        let mut counter = counter();
        for r in [ONLY_A, ONLY_A, ONLY_A, CLEAR, BOTH] {
            let outcome = counter.tick(r, false);
            let frame = outcome.frame.unwrap();
            assert_eq!((frame.a_active, frame.b_active), (r.a_active, r.b_active));
        }
    }

    #[test]
    fn test_reset_clears_count_keeps_phase() {
        let mut counter = counter();
        pass(&mut counter, &[ONLY_A, BOTH, CLEAR, ONLY_A, ONLY_B, CLEAR]);
        assert_eq!(counter.count(), 2);

        // Arm a pass so the phase is not Idle
        counter.tick(ONLY_B, true);
        assert_eq!(counter.phase(), Phase::BFirst);

        // Settling
        let o = counter.tick(ONLY_B, true);
        assert!(o.suspended);
        assert!(!o.reset_committed);
        assert_eq!(o.frame, None);

        // Re-check commits
        let o = counter.tick(ONLY_B, true);
        assert!(o.suspended);
        assert!(o.reset_committed);
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.phase(), Phase::BFirst);
        assert_eq!(o.frame.map(|f| (f.count, f.reset_held)), Some((0, true)));

        // Release, then counting resumes
        let o = counter.tick(ONLY_B, false);
        assert!(o.suspended);
        assert_eq!(counter.reset_control().state(), ResetState::Released);

        let o = counter.tick(BOTH, false);
        assert_eq!(o.delta, Delta::Backward);
        assert_eq!(counter.count(), -1);
    }

    #[test]
    fn test_no_counting_while_suspended() {
        let mut counter = counter();
        counter.tick(CLEAR, true);

        // Readings during settle are ignored
        let o = counter.tick(ONLY_A, false);
        assert!(o.suspended);
        assert_eq!(counter.phase(), Phase::Idle);

        // Bounce: released at re-check, nothing cleared
        let o = counter.tick(BOTH, false);
        assert!(o.suspended);
        assert!(!o.reset_committed);

        let o = counter.tick(ONLY_A, false);
        assert!(!o.suspended);
        assert_eq!(o.phase, Phase::AFirst);
    }

    #[test]
    fn test_hold_guard_resumes_counting() {
        let mut counter = counter();
        pass(&mut counter, &[ONLY_A, BOTH, CLEAR]);

        let mut suspended = 0;
        for _ in 0..20 {
            if counter.tick(CLEAR, true).suspended {
                suspended += 1;
            }
        }
        assert!(suspended <= 2 + 4);
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.reset_control().state(), ResetState::Latched);

        // Button still stuck down: counting works, no second reset
        for r in [ONLY_A, BOTH, CLEAR] {
            assert!(!counter.tick(r, true).suspended);
        }
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_stats_follow_edges() {
        let mut counter = counter();
        pass(
            &mut counter,
            &[ONLY_A, BOTH, CLEAR, ONLY_B, BOTH, CLEAR, ONLY_A, CLEAR, ONLY_B, CLEAR],
        );
        let stats = counter.stats();
        assert_eq!(stats.forward, 1);
        assert_eq!(stats.backward, 1);
        assert_eq!(stats.cancelled, 2);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_saturated_count_keeps_phase() {
        let readings = [ONLY_A, BOTH, CLEAR, ONLY_A, ONLY_B, CLEAR, ONLY_B, ONLY_B, BOTH, CLEAR];

        let mut fresh = counter();
        let mut saturated = counter();
        saturated.store.apply(i32::MAX - 1);

        for r in readings {
            let expected = fresh.tick(r, false);
            let outcome = saturated.tick(r, false);
            assert_eq!(outcome.phase, expected.phase, "{:?}", r);
            assert_eq!(outcome.edge, expected.edge, "{:?}", r);
            assert_eq!(outcome.delta, expected.delta, "{:?}", r);
        }

        // +1, +1 (clamped), -1
        assert_eq!(saturated.count(), i32::MAX - 1);
        assert_eq!(saturated.phase(), Phase::Idle);

        saturated.tick(ONLY_A, false);
        saturated.tick(BOTH, false);
        saturated.tick(ONLY_A, false);
        let o = saturated.tick(ONLY_B, false);
        assert_eq!(saturated.count(), i32::MAX);
        assert_eq!(o.delta, Delta::Forward);
        assert_eq!(o.phase, Phase::Idle);
        assert_eq!(o.frame.map(|f| f.count), Some(i32::MAX));
    }

    proptest! {
        #[test]
        fn prop_count_matches_stats(
            readings in prop::collection::vec((any::<bool>(), any::<bool>()), 0..128)
        ) {
            let mut counter = counter();
            for r in readings {
                counter.tick(SensorReading::from(r), false);
            }
            let stats = *counter.stats();
            prop_assert_eq!(
                counter.count() as i64,
                stats.forward as i64 - stats.backward as i64
            );
        }
    }
}
