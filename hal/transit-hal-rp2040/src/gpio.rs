//! GPIO inputs backed by embassy-rp

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;

use transit_core::config::{Bias, InputConfig};
use transit_hal::{InputPin, Polarity, Polarized};

/// Digital input pin on the RP2040
pub struct GpioInput<'d> {
    inner: Input<'d>,
}

impl<'d> GpioInput<'d> {
    /// Create an input with the given pull
    pub fn new(pin: Peri<'d, impl Pin>, pull: Pull) -> Self {
        Self {
            inner: Input::new(pin, pull),
        }
    }

    /// Create a polarity-aware input from config
    ///
    /// The pull comes from [`InputConfig::bias`]. An active-low input
    /// without `pull_up` floats and needs an external pull-up.
    pub fn configured(pin: Peri<'d, impl Pin>, config: &InputConfig) -> Polarized<Self> {
        let pull = match config.bias() {
            Bias::PullUp => Pull::Up,
            Bias::PullDown => Pull::Down,
            Bias::Floating => Pull::None,
        };
        Polarized::new(Self::new(pin, pull), Polarity::from_inverted(config.inverted))
    }
}

impl InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}
