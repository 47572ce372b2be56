//! RP2040-specific HAL for the counter firmware
//!
//! This crate provides RP2040 implementations of the shared `transit-hal`
//! traits:
//!
//! - GPIO inputs for the IR sensors and the reset button, configured from
//!   `transit_core::config::InputConfig`

#![no_std]

pub mod gpio;

// Re-export shared traits from transit-hal for convenience
pub use transit_hal::{ActiveInput, InputPin, Polarity, Polarized};
