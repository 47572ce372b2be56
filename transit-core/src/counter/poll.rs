//! Poll loop binding the counter to hardware inputs and a display
//!
//! The caller decides the cadence (a `Ticker` in the firmware, a plain loop
//! in tests). Each call to [`PollLoop::poll`] is one complete tick.

use transit_hal::ActiveInput;

use super::tick::{Counter, TickOutcome};
use crate::direction::SensorReading;
use crate::traits::DisplaySink;

/// Result of one poll
#[derive(Debug)]
pub struct Polled<E> {
    /// What the counter did this tick
    pub outcome: TickOutcome,
    /// Display delivery result; the tick is already applied either way
    pub display: Result<(), E>,
}

/// Sensors, reset button, display and counter state for one rig
pub struct PollLoop<A, B, R, D> {
    sensor_a: A,
    sensor_b: B,
    reset: R,
    display: D,
    counter: Counter,
}

impl<A, B, R, D> PollLoop<A, B, R, D>
where
    A: ActiveInput,
    B: ActiveInput,
    R: ActiveInput,
    D: DisplaySink,
{
    /// Create a new poll loop
    pub fn new(sensor_a: A, sensor_b: B, reset: R, display: D, counter: Counter) -> Self {
        Self {
            sensor_a,
            sensor_b,
            reset,
            display,
            counter,
        }
    }

    /// Sample both sensors
    pub fn read(&self) -> SensorReading {
        SensorReading::new(self.sensor_a.is_active(), self.sensor_b.is_active())
    }

    /// Run one tick
    pub fn poll(&mut self) -> Polled<D::Error> {
        let reading = self.read();
        let reset_pressed = self.reset.is_active();

        let outcome = self.counter.tick(reading, reset_pressed);

        let display = match &outcome.frame {
            Some(frame) => self.display.show(frame),
            None => Ok(()),
        };

        Polled { outcome, display }
    }

    /// Get the counter state
    pub fn counter(&self) -> &Counter {
        &self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Delta;
    use crate::reset::ResetControl;
    use crate::traits::CounterFrame;
    use core::cell::Cell;

    struct FakeInput<'a>(&'a Cell<bool>);

    impl ActiveInput for FakeInput<'_> {
        fn is_active(&self) -> bool {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        frames: heapless::Vec<CounterFrame, 32>,
        fail: bool,
    }

    impl DisplaySink for RecordingSink {
        type Error = ();

        fn show(&mut self, frame: &CounterFrame) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.frames.push(*frame).map_err(|_| ())
        }
    }

    struct Rig {
        a: Cell<bool>,
        b: Cell<bool>,
        reset: Cell<bool>,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                a: Cell::new(false),
                b: Cell::new(false),
                reset: Cell::new(false),
            }
        }

        fn set(&self, a: bool, b: bool) {
            self.a.set(a);
            self.b.set(b);
        }

        fn poll_loop<'a>(
            &'a self,
            sink: &'a mut RecordingSink,
        ) -> PollLoop<FakeInput<'a>, FakeInput<'a>, FakeInput<'a>, &'a mut RecordingSink> {
            PollLoop::new(
                FakeInput(&self.a),
                FakeInput(&self.b),
                FakeInput(&self.reset),
                sink,
                Counter::new(ResetControl::new(2, 10)),
            )
        }
    }

    #[test]
    fn test_forward_pass_updates_display() {
        let rig = Rig::new();
        let mut sink = RecordingSink::default();
        let mut poll_loop = rig.poll_loop(&mut sink);

        for (a, b) in [(true, false), (true, true), (false, false)] {
            rig.set(a, b);
            let polled = poll_loop.poll();
            assert!(polled.display.is_ok());
        }

        assert_eq!(poll_loop.counter().count(), 1);
        let frames = &sink.frames;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].count, 0);
        assert_eq!(frames[1].count, 1);
        assert!(!frames[2].a_active && !frames[2].b_active);
    }

    #[test]
    fn test_reset_button_through_loop() {
        let rig = Rig::new();
        let mut sink = RecordingSink::default();
        let mut poll_loop = rig.poll_loop(&mut sink);

        rig.set(false, true);
        poll_loop.poll();
        rig.set(true, true);
        assert_eq!(poll_loop.poll().outcome.delta, Delta::Backward);
        rig.set(false, false);
        poll_loop.poll();

        rig.reset.set(true);
        let mut committed = false;
        for _ in 0..4 {
            committed |= poll_loop.poll().outcome.reset_committed;
        }
        assert!(committed);
        assert_eq!(poll_loop.counter().count(), 0);

        let last = sink.frames.last().copied().unwrap();
        assert_eq!(last.count, 0);
        assert!(last.reset_held);
    }

    #[test]
    fn test_display_error_does_not_lose_count() {
        let rig = Rig::new();
        let mut sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let mut poll_loop = rig.poll_loop(&mut sink);

        rig.set(true, false);
        assert!(poll_loop.poll().display.is_err());
        rig.set(false, true);
        let polled = poll_loop.poll();
        assert!(polled.display.is_err());
        assert_eq!(polled.outcome.delta, Delta::Forward);
        assert_eq!(poll_loop.counter().count(), 1);
    }
}
