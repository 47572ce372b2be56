//! Tick controller
//!
//! One tick is: read sensors, step the direction machine, apply the delta,
//! update the display, check the reset control. A tick always runs to
//! completion before the next begins.

pub mod poll;
pub mod tick;

pub use poll::{PollLoop, Polled};
pub use tick::{Counter, TickOutcome};
