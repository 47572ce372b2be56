//! Screen buffer types
//!
//! Provides a character-based screen buffer for text-mode displays.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Number of character rows on a 2004 LCD
pub const SCREEN_ROWS: usize = 4;

/// Number of character columns on a 2004 LCD
pub const SCREEN_COLS: usize = 20;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for text-mode displays
///
/// Tracks which rows changed since the last flush so only those are
/// re-sent to the backend.
#[derive(Clone)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Rows changed since the last flush
    dirty: [bool; SCREEN_ROWS],
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: [true; SCREEN_ROWS],
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for row in 0..SCREEN_ROWS {
            self.set_line(row, "");
        }
    }

    /// Set the content of a specific row
    ///
    /// Text longer than the row is truncated. Setting identical content
    /// does not mark the row dirty.
    pub fn set_line(&mut self, row: usize, text: &str) {
        if row >= SCREEN_ROWS {
            return;
        }

        let text = truncate(text, LINE_LEN);
        if self.lines[row].as_str() == text {
            return;
        }

        self.lines[row].clear();
        let _ = self.lines[row].push_str(text);
        self.dirty[row] = true;
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Check if any row needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty.iter().any(|&d| d)
    }

    /// Mark every row dirty (after the glass was cleared or reset)
    pub fn mark_dirty(&mut self) {
        self.dirty = [true; SCREEN_ROWS];
    }

    /// Send dirty rows to a backend
    ///
    /// Each row is padded with spaces to full width so stale characters are
    /// overwritten. A row stays dirty if its write fails. Backends smaller
    /// than the screen are rejected before anything is sent.
    pub async fn flush<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<usize, DisplayError> {
        let (cols, rows) = backend.dimensions();
        if (cols as usize) < SCREEN_COLS || (rows as usize) < SCREEN_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }

        let mut written = 0;

        for row in 0..SCREEN_ROWS {
            if !self.dirty[row] {
                continue;
            }

            let mut padded: String<LINE_LEN> = String::new();
            let _ = padded.push_str(self.lines[row].as_str());
            while padded.push(' ').is_ok() {}

            backend.draw_text(row as u8, 0, padded.as_str()).await?;
            self.dirty[row] = false;
            written += 1;
        }

        Ok(written)
    }
}

/// Truncate to at most `max` bytes on a char boundary
fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
