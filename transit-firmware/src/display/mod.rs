//! Display drivers
//!
//! Character LCD on the board's I2C header.

pub mod lcd;

pub use lcd::Lcd;
