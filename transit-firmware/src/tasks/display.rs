//! LCD display task
//!
//! Waits for counter frames from the poll task and redraws the rows that
//! changed. Bus errors are logged and the LCD is re-initialized; the count
//! itself lives in the poll task and is never affected.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Timer;

use transit_display::CounterScreen;

use crate::channels::FRAME_SIGNAL;
use crate::display::Lcd;

/// Delay between LCD initialization attempts
const INIT_RETRY_MS: u64 = 1000;

/// Display task - renders counter frames on the LCD
#[embassy_executor::task]
pub async fn display_task(bus: I2c<'static, I2C0, Async>, address: u8) {
    info!("Display task started");

    let mut lcd = Lcd::new(bus, address);
    let mut screen = CounterScreen::new();

    init_lcd(&mut lcd).await;
    screen.render_boot();
    if let Err(e) = screen.flush(&mut lcd).await {
        warn!("Failed to draw boot screen: {:?}", e);
    }

    loop {
        let frame = FRAME_SIGNAL.wait().await;

        if !lcd.is_initialized() {
            init_lcd(&mut lcd).await;
            screen.invalidate();
        }

        if !screen.update(&frame) && !screen.screen().is_dirty() {
            continue;
        }

        match screen.flush(&mut lcd).await {
            Ok(rows) => trace!("LCD updated ({} rows)", rows),
            Err(e) => {
                warn!("LCD write failed: {:?}", e);
                screen.invalidate();
            }
        }
    }
}

/// Initialize the LCD, retrying until it answers
async fn init_lcd(lcd: &mut Lcd<I2c<'static, I2C0, Async>>) {
    let mut attempts: u32 = 0;

    while let Err(e) = lcd.init().await {
        attempts += 1;
        if attempts == 1 {
            warn!("LCD init failed: {:?}, retrying", defmt::Debug2Format(&e));
        }
        Timer::after_millis(INIT_RETRY_MS).await;
    }

    if attempts > 0 {
        info!("LCD initialized after {} retries", attempts);
    } else {
        info!("LCD initialized");
    }
}
