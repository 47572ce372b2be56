//! Display abstraction and counter screen for Transit
//!
//! This crate provides:
//! - `DisplayBackend` trait for character displays
//! - `Screen` buffer with per-row dirty tracking
//! - `CounterScreen` which lays out the counter state on a `Screen`
//!
//! # Architecture
//!
//! The poll task hands [`transit_core::traits::CounterFrame`]s to the display
//! task. The display task updates a `CounterScreen` and flushes only the rows
//! that changed to whatever backend drives the glass, so an I2C character
//! LCD is not rewritten every few milliseconds.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod counter;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use counter::CounterScreen;
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
