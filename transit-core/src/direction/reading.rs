//! Per-tick sensor sample and the count delta it produces

/// One sample of both sensors
///
/// `true` means an object is currently detected at that sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    /// Sensor A (leading sensor for forward passes)
    pub a_active: bool,
    /// Sensor B (leading sensor for backward passes)
    pub b_active: bool,
}

impl SensorReading {
    /// Create a reading
    pub const fn new(a_active: bool, b_active: bool) -> Self {
        Self { a_active, b_active }
    }

    /// Only sensor A active
    pub fn only_a(&self) -> bool {
        self.a_active && !self.b_active
    }

    /// Only sensor B active
    pub fn only_b(&self) -> bool {
        self.b_active && !self.a_active
    }

    /// Neither sensor active
    pub fn is_clear(&self) -> bool {
        !self.a_active && !self.b_active
    }

    /// Same reading with A and B swapped
    pub fn mirrored(&self) -> Self {
        Self::new(self.b_active, self.a_active)
    }
}

impl From<(bool, bool)> for SensorReading {
    fn from((a_active, b_active): (bool, bool)) -> Self {
        Self::new(a_active, b_active)
    }
}

/// Count adjustment emitted by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i8)]
pub enum Delta {
    /// Completed B-then-A pass
    Backward = -1,
    /// No count change
    #[default]
    None = 0,
    /// Completed A-then-B pass
    Forward = 1,
}

impl Delta {
    /// Signed value of this delta
    pub const fn value(self) -> i32 {
        self as i8 as i32
    }

    /// Opposite direction
    pub fn reversed(self) -> Self {
        match self {
            Delta::Backward => Delta::Forward,
            Delta::None => Delta::None,
            Delta::Forward => Delta::Backward,
        }
    }
}

impl From<Delta> for i32 {
    fn from(delta: Delta) -> Self {
        delta.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_values() {
        assert_eq!(Delta::Forward.value(), 1);
        assert_eq!(Delta::Backward.value(), -1);
        assert_eq!(Delta::None.value(), 0);
        assert_eq!(i32::from(Delta::Backward), -1);
    }

    #[test]
    fn test_delta_reversed() {
        assert_eq!(Delta::Forward.reversed(), Delta::Backward);
        assert_eq!(Delta::Backward.reversed(), Delta::Forward);
        assert_eq!(Delta::None.reversed(), Delta::None);
    }

    #[test]
    fn test_reading_predicates() {
        let a = SensorReading::new(true, false);
        assert!(a.only_a());
        assert!(!a.only_b());
        assert!(!a.is_clear());
        assert_eq!(a.mirrored(), SensorReading::new(false, true));

        assert!(SensorReading::new(false, false).is_clear());
        assert_eq!(SensorReading::from((true, true)), SensorReading::new(true, true));
    }
}
