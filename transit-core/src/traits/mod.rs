//! Boundary traits
//!
//! These traits define the interface between the counting logic and the
//! outputs it drives. Inputs come through `transit_hal::ActiveInput`.

pub mod display;

pub use display::{CounterFrame, DisplaySink};
