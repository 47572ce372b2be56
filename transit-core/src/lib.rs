//! Board-agnostic core logic for the bidirectional counter firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Direction state machine (two sensors in, one count delta out)
//! - Count store and pass statistics
//! - Hold-to-clear reset debouncer
//! - Tick controller and poll loop
//! - Display sink trait
//! - Configuration types and the embedded config parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod count;
pub mod counter;
pub mod direction;
pub mod reset;
pub mod traits;
