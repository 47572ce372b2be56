//! Inter-task communication channels
//!
//! The poll task is the only writer. A `Signal` keeps just the latest frame,
//! so a slow display drops intermediate frames instead of holding up ticks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use transit_core::traits::CounterFrame;

/// Latest counter state for the display task
pub static FRAME_SIGNAL: Signal<CriticalSectionRawMutex, CounterFrame> = Signal::new();
