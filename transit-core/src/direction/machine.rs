//! Direction state machine definition
//!
//! A pass is counted when the leading sensor triggers first and the trailing
//! sensor then triggers while the leading one may still be active. If the
//! leading sensor releases before the trailing one ever activates, the
//! attempt is cancelled without a count.

use super::reading::{Delta, SensorReading};

/// Direction machine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// No pass in progress
    #[default]
    Idle,
    /// Sensor A triggered, waiting for B
    AFirst,
    /// Sensor B triggered, waiting for A
    BFirst,
}

/// Which edge of the table a step took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Idle and the reading carries no direction (both or neither active)
    Ignore,
    /// Idle to AFirst/BFirst
    Arm,
    /// Still waiting with only the leading sensor active
    Hold,
    /// Trailing sensor confirmed the pass; count changes
    Complete,
    /// Leading sensor released before the trailing one activated
    Cancel,
}

/// Full result of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Phase after the step
    pub phase: Phase,
    /// Count adjustment
    pub delta: Delta,
    /// Edge taken
    pub edge: Edge,
}

impl Phase {
    /// Process a reading and return the next phase and count delta
    ///
    /// This is the core transition logic. It is total: every phase and
    /// every reading has a defined result.
    pub fn step(self, reading: SensorReading) -> (Phase, Delta) {
        let t = self.advance(reading);
        (t.phase, t.delta)
    }

    /// Name the edge a reading would take from this phase
    pub fn classify(self, reading: SensorReading) -> Edge {
        self.advance(reading).edge
    }

    /// Process a reading and return the full transition
    pub fn advance(self, reading: SensorReading) -> Transition {
        use Edge::*;
        use Phase::*;

        let (phase, edge) = match self {
            Idle if reading.only_a() => (AFirst, Arm),
            Idle if reading.only_b() => (BFirst, Arm),
            Idle => (Idle, Ignore),

            // Completion is checked before cancellation so that a reading
            // with both sensors active still counts.
            AFirst if reading.b_active => (Idle, Complete),
            AFirst if reading.is_clear() => (Idle, Cancel),
            AFirst => (AFirst, Hold),

            BFirst if reading.a_active => (Idle, Complete),
            BFirst if reading.is_clear() => (Idle, Cancel),
            BFirst => (BFirst, Hold),
        };

        let delta = match (self, edge) {
            (AFirst, Complete) => Delta::Forward,
            (BFirst, Complete) => Delta::Backward,
            _ => Delta::None,
        };

        Transition { phase, delta, edge }
    }
}

/// Owned direction state for callers that only want deltas
///
/// The phase can be observed but never set from outside.
#[derive(Debug, Clone, Default)]
pub struct DirectionSensor {
    phase: Phase,
}

impl DirectionSensor {
    /// Create a new sensor in the idle phase
    pub const fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Feed one reading
    pub fn update(&mut self, reading: SensorReading) -> Delta {
        self.update_full(reading).delta
    }

    /// Feed one reading and return the full transition
    pub fn update_full(&mut self, reading: SensorReading) -> Transition {
        let t = self.phase.advance(reading);
        self.phase = t.phase;
        t
    }

    /// Get the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }
}
