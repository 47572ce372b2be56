//! Sensor poll task
//!
//! Samples both IR sensors and the reset button every poll interval and
//! runs one counter tick. Frames go to the display task through
//! `FRAME_SIGNAL`, so an LCD write never delays the next sample.

use core::convert::Infallible;

use defmt::*;
use embassy_time::{Duration, Ticker};

use transit_core::config::CounterConfig;
use transit_core::counter::{Counter, PollLoop, TickOutcome};
use transit_core::direction::Edge;
use transit_core::traits::{CounterFrame, DisplaySink};
use transit_hal_rp2040::gpio::GpioInput;
use transit_hal_rp2040::Polarized;

use crate::channels::FRAME_SIGNAL;

/// How often pass statistics are logged
const STATS_LOG_INTERVAL_MS: u32 = 60_000;

/// Polarity-corrected GPIO input
type Input = Polarized<GpioInput<'static>>;

/// Display sink that hands frames to the display task
struct FrameSink;

impl DisplaySink for FrameSink {
    type Error = Infallible;

    fn show(&mut self, frame: &CounterFrame) -> Result<(), Self::Error> {
        FRAME_SIGNAL.signal(*frame);
        Ok(())
    }
}

/// Poll task - one counter tick per poll interval
#[embassy_executor::task]
pub async fn poll_task(sensor_a: Input, sensor_b: Input, reset: Input, config: CounterConfig) {
    info!(
        "Poll task started ({} ms interval)",
        config.poll_interval_ms
    );

    let counter = Counter::from_config(&config);
    let mut poll_loop = PollLoop::new(sensor_a, sensor_b, reset, FrameSink, counter);

    let interval_ms = u32::from(config.poll_interval_ms.max(1));
    let stats_every = (STATS_LOG_INTERVAL_MS / interval_ms).max(1);
    let mut ticks_since_stats: u32 = 0;
    let mut was_suspended = false;

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(interval_ms)));

    loop {
        ticker.next().await;

        let polled = poll_loop.poll();
        log_outcome(&polled.outcome, poll_loop.counter(), &mut was_suspended);

        ticks_since_stats += 1;
        if ticks_since_stats >= stats_every {
            ticks_since_stats = 0;
            let stats = poll_loop.counter().stats();
            info!(
                "Count {} after {} passes (forward={}, backward={}, cancelled={})",
                poll_loop.counter().count(),
                stats.completed(),
                stats.forward,
                stats.backward,
                stats.cancelled
            );
        }
    }
}

/// Log the interesting parts of a tick
fn log_outcome(outcome: &TickOutcome, counter: &Counter, was_suspended: &mut bool) {
    match outcome.edge {
        Some(Edge::Complete) => {
            debug!("Pass {:?}, count now {}", outcome.delta, counter.count());
        }
        Some(Edge::Cancel) => debug!("Pass abandoned"),
        Some(Edge::Arm) => trace!("Armed: {:?}", outcome.phase),
        _ => {}
    }

    if outcome.suspended != *was_suspended {
        *was_suspended = outcome.suspended;
        let state = counter.reset_control().state();
        if outcome.suspended {
            debug!("Reset engaged ({:?}), counting suspended", state);
        } else {
            debug!("Counting resumed ({:?})", state);
        }
    }

    if outcome.reset_committed {
        info!("Count reset to zero");
    }
}
