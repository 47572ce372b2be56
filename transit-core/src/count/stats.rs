//! Pass statistics since boot
//!
//! Diagnostic tallies of what the direction machine saw. Unlike the count,
//! these are not cleared by the reset button.

use crate::direction::{Delta, Edge, Transition};

/// Tallies of completed and cancelled passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PassStats {
    /// Completed A-then-B passes
    pub forward: u32,
    /// Completed B-then-A passes
    pub backward: u32,
    /// Passes abandoned before the trailing sensor triggered
    pub cancelled: u32,
}

impl PassStats {
    /// Create empty stats
    pub const fn new() -> Self {
        Self {
            forward: 0,
            backward: 0,
            cancelled: 0,
        }
    }

    /// Record one transition
    pub fn record(&mut self, t: &Transition) {
        match (t.edge, t.delta) {
            (Edge::Complete, Delta::Forward) => self.forward = self.forward.saturating_add(1),
            (Edge::Complete, Delta::Backward) => self.backward = self.backward.saturating_add(1),
            (Edge::Cancel, _) => self.cancelled = self.cancelled.saturating_add(1),
            _ => {}
        }
    }

    /// Total completed passes in either direction
    pub fn completed(&self) -> u32 {
        self.forward.saturating_add(self.backward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::{DirectionSensor, SensorReading};

    #[test]
    fn test_record_sequence() {
        let mut sensor = DirectionSensor::new();
        let mut stats = PassStats::new();

        let readings = [
            (true, false),
            (true, true),
            (false, false),
            (false, true),
            (true, true),
            (false, false),
            (true, false),
            (false, false),
        ];

        for r in readings {
            let t = sensor.update_full(SensorReading::from(r));
            stats.record(&t);
        }

        assert_eq!(stats.forward, 1);
        assert_eq!(stats.backward, 1);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.completed(), 2);
    }
}
