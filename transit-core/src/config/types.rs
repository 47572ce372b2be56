//! Configuration type definitions
//!
//! Timing is configured in milliseconds and converted to tick counts for the
//! poll-driven state machines.

use crate::reset::ResetControl;

/// Default poll interval (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u16 = 5;

/// Valid poll interval range (ms)
pub const POLL_INTERVAL_RANGE_MS: core::ops::RangeInclusive<u16> = 1..=100;

/// Default reset settle time (ms)
pub const DEFAULT_SETTLE_MS: u16 = 50;

/// Default bound on a suspended reset hold (ms)
pub const DEFAULT_MAX_HOLD_MS: u16 = 5000;

/// Default PCF8574 backpack address
pub const DEFAULT_LCD_ADDRESS: u8 = 0x27;

/// Digital input configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Asserted when the pin reads low
    pub inverted: bool,
    /// Enable the internal pull-up
    pub pull_up: bool,
}

/// Internal pull resistor for an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bias {
    /// Internal pull-up
    PullUp,
    /// Internal pull-down
    PullDown,
    /// No internal pull; the line is driven or pulled externally
    Floating,
}

impl InputConfig {
    /// Internal pull for this input
    ///
    /// Without `pull_up`, the pin is pulled toward its inactive level where
    /// that does not fight the configuration: an active-high input gets a
    /// pull-down. An active-low input without pull-up is left floating,
    /// since a pull-down would hold it asserted.
    pub fn bias(&self) -> Bias {
        match (self.pull_up, self.inverted) {
            (true, _) => Bias::PullUp,
            (false, false) => Bias::PullDown,
            (false, true) => Bias::Floating,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        // IR proximity modules pull their output low on detection
        Self {
            inverted: true,
            pull_up: true,
        }
    }
}

/// Reset button configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetConfig {
    /// Button input
    pub input: InputConfig,
    /// Press must still be present after this long to reset (ms)
    pub settle_ms: u16,
    /// Longest time a held button may suspend counting (ms)
    pub max_hold_ms: u16,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            settle_ms: DEFAULT_SETTLE_MS,
            max_hold_ms: DEFAULT_MAX_HOLD_MS,
        }
    }
}

/// Character LCD configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Drive the LCD at all
    pub enabled: bool,
    /// 7-bit I2C address of the backpack
    pub i2c_address: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            i2c_address: DEFAULT_LCD_ADDRESS,
        }
    }
}

/// Complete counter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterConfig {
    /// Sensor sampling period (ms)
    pub poll_interval_ms: u16,
    /// Sensor A input
    pub sensor_a: InputConfig,
    /// Sensor B input
    pub sensor_b: InputConfig,
    /// Reset button
    pub reset: ResetConfig,
    /// Display
    pub display: DisplayConfig,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            sensor_a: InputConfig::default(),
            sensor_b: InputConfig::default(),
            reset: ResetConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl CounterConfig {
    /// Number of ticks covering `ms`, rounded up, at least 1
    pub fn ticks_for(&self, ms: u16) -> u16 {
        let interval = self.poll_interval_ms.max(1);
        ms.div_ceil(interval).max(1)
    }

    /// Reset settle time in ticks
    pub fn settle_ticks(&self) -> u16 {
        self.ticks_for(self.reset.settle_ms)
    }

    /// Reset hold bound in ticks
    pub fn max_hold_ticks(&self) -> u16 {
        self.ticks_for(self.reset.max_hold_ms)
    }

    /// Build the reset debouncer for this configuration
    pub fn reset_control(&self) -> ResetControl {
        ResetControl::new(self.settle_ticks(), self.max_hold_ticks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ticks() {
        let config = CounterConfig::default();
        assert_eq!(config.settle_ticks(), 10);
        assert_eq!(config.max_hold_ticks(), 1000);
    }

    #[test]
    fn test_ticks_round_up() {
        let mut config = CounterConfig::default();
        config.poll_interval_ms = 20;
        config.reset.settle_ms = 50;
        assert_eq!(config.settle_ticks(), 3);

        config.reset.settle_ms = 0;
        assert_eq!(config.settle_ticks(), 1);
    }

    #[test]
    fn test_bias_never_asserts_idle_input() {
        let input = |inverted, pull_up| InputConfig { inverted, pull_up };

        assert_eq!(input(true, true).bias(), Bias::PullUp);
        assert_eq!(input(false, true).bias(), Bias::PullUp);
        assert_eq!(input(false, false).bias(), Bias::PullDown);
        // Pulling an active-low input down would read as "object present"
        assert_eq!(input(true, false).bias(), Bias::Floating);
    }

    #[test]
    fn test_zero_interval_guarded() {
        let mut config = CounterConfig::default();
        config.poll_interval_ms = 0;
        assert_eq!(config.ticks_for(7), 7);
    }
}
