//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod display;
pub mod poll;

pub use display::display_task;
pub use poll::poll_task;
