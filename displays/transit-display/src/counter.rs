//! Counter screen layout
//!
//! ```text
//! ┌────────────────────┐
//! │TRANSIT COUNTER     │
//! │A:1  B:0            │
//! │Count: 42           │
//! │                    │  <- "RESET" while a reset is held
//! └────────────────────┘
//! ```

use core::fmt::Write;

use heapless::String;
use transit_core::traits::CounterFrame;

use crate::backend::{DisplayBackend, DisplayError};
use crate::screen::{Screen, LINE_LEN};

/// Title row
pub const TITLE: &str = "TRANSIT COUNTER";

const ROW_TITLE: usize = 0;
const ROW_SENSORS: usize = 1;
const ROW_COUNT: usize = 2;
const ROW_STATUS: usize = 3;

/// Screen that shows counter frames
pub struct CounterScreen {
    screen: Screen,
    last: Option<CounterFrame>,
}

impl Default for CounterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterScreen {
    /// Create a new counter screen
    pub fn new() -> Self {
        Self {
            screen: Screen::new(),
            last: None,
        }
    }

    /// Get the screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Render the boot screen
    pub fn render_boot(&mut self) {
        self.last = None;
        self.screen.clear();
        self.screen.set_line(ROW_TITLE, TITLE);
        self.screen.set_line(ROW_COUNT, "Starting...");
    }

    /// Lay out a frame
    ///
    /// Returns `true` if anything on screen changed.
    pub fn update(&mut self, frame: &CounterFrame) -> bool {
        if self.last.as_ref() == Some(frame) {
            return false;
        }
        self.last = Some(*frame);

        self.screen.set_line(ROW_TITLE, TITLE);

        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(
            line,
            "A:{}  B:{}",
            u8::from(frame.a_active),
            u8::from(frame.b_active)
        );
        self.screen.set_line(ROW_SENSORS, &line);

        line.clear();
        let _ = write!(line, "Count: {}", frame.count);
        self.screen.set_line(ROW_COUNT, &line);

        let status = if frame.reset_held { "RESET" } else { "" };
        self.screen.set_line(ROW_STATUS, status);

        self.screen.is_dirty()
    }

    /// Force a full redraw on the next flush
    pub fn invalidate(&mut self) {
        self.screen.mark_dirty();
    }

    /// Send changed rows to the backend
    pub async fn flush<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<usize, DisplayError> {
        self.screen.flush(backend).await
    }
}
