//! GPIO input abstractions
//!
//! Raw pin levels are separated from their meaning. IR proximity modules and
//! push buttons are commonly active-low, so the counter never looks at
//! electrical levels directly: it asks an [`ActiveInput`] whether the signal
//! is asserted.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Input with a logical meaning ("object present", "button pressed")
pub trait ActiveInput {
    /// Check if the input is currently asserted
    fn is_active(&self) -> bool;
}

/// Electrical level that means "asserted"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Asserted when the pin reads high
    #[default]
    ActiveHigh,
    /// Asserted when the pin reads low
    ActiveLow,
}

impl Polarity {
    /// Polarity from an "inverted" config flag
    pub const fn from_inverted(inverted: bool) -> Self {
        if inverted {
            Polarity::ActiveLow
        } else {
            Polarity::ActiveHigh
        }
    }
}

/// Input pin paired with its polarity
#[derive(Debug)]
pub struct Polarized<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> Polarized<P> {
    /// Wrap a pin with the given polarity
    pub const fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }
}

impl<P: InputPin> ActiveInput for Polarized<P> {
    fn is_active(&self) -> bool {
        match self.polarity {
            Polarity::ActiveHigh => self.pin.is_high(),
            Polarity::ActiveLow => self.pin.is_low(),
        }
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

impl<T: ActiveInput + ?Sized> ActiveInput for &T {
    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct FakePin(Cell<bool>);

    impl InputPin for FakePin {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_active_high() {
        let pin = FakePin(Cell::new(false));
        let input = Polarized::new(&pin, Polarity::ActiveHigh);
        assert!(!input.is_active());

        pin.0.set(true);
        assert!(input.is_active());
    }

    #[test]
    fn test_active_low() {
        let pin = FakePin(Cell::new(true));
        let input = Polarized::new(&pin, Polarity::ActiveLow);
        assert!(!input.is_active());

        pin.0.set(false);
        assert!(input.is_active());
    }

    #[test]
    fn test_from_inverted() {
        assert_eq!(Polarity::from_inverted(true), Polarity::ActiveLow);
        assert_eq!(Polarity::from_inverted(false), Polarity::ActiveHigh);
        assert_eq!(Polarity::default(), Polarity::ActiveHigh);
    }
}
