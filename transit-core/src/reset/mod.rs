//! Hold-to-clear reset control
//!
//! Debounces the reset button and decides when counting ticks must be
//! suspended while the button is engaged.

pub mod control;

pub use control::{ResetAction, ResetControl, ResetState};
