//! Direction detection
//!
//! Converts a stream of two-sensor readings into count deltas.
//! The machine is explicit, finite, and deterministic: the next phase is a
//! function of the current phase and the latest reading only.

pub mod machine;
pub mod reading;

pub use machine::{DirectionSensor, Edge, Phase, Transition};
pub use reading::{Delta, SensorReading};
