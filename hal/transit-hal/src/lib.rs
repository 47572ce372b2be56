//! Transit Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the counter logic is
//! written against. Chip-specific HALs implement them, so the same counting
//! code runs on the RP2040 board and on the host under test.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  transit-core (counter, poll loop)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  transit-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ transit-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Raw digital input level
//! - [`gpio::ActiveInput`] - Logical "asserted" state after polarity

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{ActiveInput, InputPin, Polarity, Polarized};
