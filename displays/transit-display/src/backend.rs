//! Display backend trait
//!
//! Defines the interface for character display types.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Character display backend
///
/// Bus transfers to external displays are slow compared to the poll
/// cadence, so drawing is async and the caller awaits each write.
#[allow(async_fn_in_trait)]
pub trait DisplayBackend {
    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number in characters (0-based)
    /// - `text`: ASCII text to display
    async fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}
