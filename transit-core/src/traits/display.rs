//! Display sink for counter state

/// Everything the display shows for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterFrame {
    /// Live sensor A state
    pub a_active: bool,
    /// Live sensor B state
    pub b_active: bool,
    /// Current count
    pub count: i32,
    /// A committed reset is being held
    pub reset_held: bool,
}

/// Output that receives the counter state every counting tick
///
/// The rendering format is up to the implementation.
pub trait DisplaySink {
    /// Error returned when the frame could not be delivered
    type Error;

    /// Show a frame
    fn show(&mut self, frame: &CounterFrame) -> Result<(), Self::Error>;
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    type Error = T::Error;

    fn show(&mut self, frame: &CounterFrame) -> Result<(), Self::Error> {
        (**self).show(frame)
    }
}
