//! Transit - Bidirectional Object Counter Firmware
//!
//! Main firmware binary for RP2040-based counter boards. Two IR proximity
//! sensors a short distance apart watch a passage; an object that breaks
//! A then B counts up, B then A counts down. A hold-to-clear button zeroes
//! the count and a 2004 character LCD shows the live state.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use transit_hal_rp2040::gpio::GpioInput;

mod channels;
mod config;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// LCD backpack bus speed
const I2C_FREQUENCY_HZ: u32 = 100_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Transit firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // Pin assignments are fixed by the board wiring:
    // sensor A = GPIO2, sensor B = GPIO3, reset button = GPIO4
    let sensor_a = GpioInput::configured(p.PIN_2, &config.sensor_a);
    let sensor_b = GpioInput::configured(p.PIN_3, &config.sensor_b);
    let reset = GpioInput::configured(p.PIN_4, &config.reset.input);

    info!("Sensor and reset inputs initialized");

    if config.display.enabled {
        // LCD backpack on I2C0: SDA = GPIO16, SCL = GPIO17
        let i2c_config = {
            let mut cfg = i2c::Config::default();
            cfg.frequency = I2C_FREQUENCY_HZ;
            cfg
        };
        let bus = I2c::new_async(p.I2C0, p.PIN_17, p.PIN_16, Irqs, i2c_config);

        info!("I2C initialized for LCD at {=u8:#x}", config.display.i2c_address);
        spawner
            .spawn(tasks::display_task(bus, config.display.i2c_address))
            .unwrap();
    } else {
        info!("Display disabled in config");
    }

    spawner
        .spawn(tasks::poll_task(sensor_a, sensor_b, reset, config))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
