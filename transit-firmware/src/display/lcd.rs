//! HD44780 character LCD driver
//!
//! Driver for 20x4 HD44780-compatible LCDs behind a PCF8574 I2C backpack.
//! The controller runs in 4-bit mode; each byte goes out as two nibbles on
//! the expander's upper four pins.

use embassy_time::Timer;

use transit_display::{DisplayBackend, DisplayError, SCREEN_COLS, SCREEN_ROWS};

/// PCF8574 pin assignments on the common backpack
///
/// P1 (RW) is left low: the driver only writes.
mod pin {
    pub const RS: u8 = 0x01;
    pub const EN: u8 = 0x04;
    pub const BACKLIGHT: u8 = 0x08;
}

/// HD44780 commands
mod cmd {
    pub const CLEAR: u8 = 0x01;
    /// Increment cursor, no display shift
    pub const ENTRY_MODE: u8 = 0x06;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// 4-bit bus, 2 line, 5x8 font
    pub const FUNCTION_SET: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// DDRAM address of the first column of each row on a 20x4 module
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// HD44780 LCD over a PCF8574
pub struct Lcd<I2C> {
    i2c: I2C,
    address: u8,
    initialized: bool,
}

impl<I2C> Lcd<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a new LCD driver
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            initialized: false,
        }
    }

    /// Run the 4-bit initialization sequence
    ///
    /// Safe to call again after a bus error; the controller is forced back
    /// into 8-bit mode first, whatever state it was left in.
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        self.initialized = false;

        // Power-on settle
        Timer::after_millis(50).await;

        self.write_nibble(0x30, 0).await?;
        Timer::after_millis(5).await;
        self.write_nibble(0x30, 0).await?;
        Timer::after_millis(1).await;
        self.write_nibble(0x30, 0).await?;
        Timer::after_millis(1).await;

        // Switch to 4-bit
        self.write_nibble(0x20, 0).await?;
        Timer::after_millis(1).await;

        self.command(cmd::FUNCTION_SET).await?;
        self.command(cmd::DISPLAY_ON).await?;
        self.clear_display().await?;
        self.command(cmd::ENTRY_MODE).await?;

        self.initialized = true;
        Ok(())
    }

    /// Whether `init` has completed since the last bus error
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Clear the display and home the cursor
    async fn clear_display(&mut self) -> Result<(), I2C::Error> {
        self.command(cmd::CLEAR).await?;
        Timer::after_millis(2).await;
        Ok(())
    }

    /// Move the cursor
    async fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), I2C::Error> {
        let offset = ROW_OFFSETS[row as usize % ROW_OFFSETS.len()];
        self.command(cmd::SET_DDRAM_ADDR | (offset + col)).await
    }

    /// Write characters at the cursor
    ///
    /// Characters outside printable ASCII are shown as `?`.
    async fn write_str(&mut self, text: &str) -> Result<(), I2C::Error> {
        for ch in text.chars() {
            self.data(glyph(ch)).await?;
        }
        Ok(())
    }

    /// Send a command byte
    async fn command(&mut self, byte: u8) -> Result<(), I2C::Error> {
        self.write_byte(byte, 0).await
    }

    /// Send a data byte
    async fn data(&mut self, byte: u8) -> Result<(), I2C::Error> {
        self.write_byte(byte, pin::RS).await
    }

    /// Send a byte as two nibbles in one bus transfer
    ///
    /// Commands other than clear and home finish within one I2C byte time
    /// at 100kHz, so no extra delay is needed.
    async fn write_byte(&mut self, byte: u8, mode: u8) -> Result<(), I2C::Error> {
        let high = (byte & 0xF0) | mode | pin::BACKLIGHT;
        let low = ((byte << 4) & 0xF0) | mode | pin::BACKLIGHT;
        let frame = [high, high | pin::EN, high, low, low | pin::EN, low];
        self.i2c.write(self.address, &frame).await
    }

    /// Send the upper nibble of `bits` with an enable pulse
    async fn write_nibble(&mut self, bits: u8, mode: u8) -> Result<(), I2C::Error> {
        let b = (bits & 0xF0) | mode | pin::BACKLIGHT;
        self.i2c.write(self.address, &[b, b | pin::EN, b]).await
    }
}

impl<I2C> DisplayBackend for Lcd<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    async fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        if row as usize >= SCREEN_ROWS || col as usize >= SCREEN_COLS {
            return Err(DisplayError::InvalidCoordinates);
        }

        let visible = SCREEN_COLS - col as usize;
        let text = match text.char_indices().nth(visible) {
            Some((end, _)) => &text[..end],
            None => text,
        };

        let result = self.set_cursor(row, col).await;
        self.check(result)?;
        let result = self.write_str(text).await;
        self.check(result)
    }

    fn dimensions(&self) -> (u8, u8) {
        (SCREEN_COLS as u8, SCREEN_ROWS as u8)
    }
}

impl<I2C> Lcd<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Map a bus result; a failed transfer leaves the controller in an
    /// unknown nibble phase, so it must be re-initialized.
    fn check(&mut self, result: Result<(), I2C::Error>) -> Result<(), DisplayError> {
        result.map_err(|_| {
            self.initialized = false;
            DisplayError::Communication
        })
    }
}

/// Map a char to the controller's ROM code
fn glyph(ch: char) -> u8 {
    if ch.is_ascii() && !ch.is_ascii_control() {
        ch as u8
    } else {
        b'?'
    }
}
