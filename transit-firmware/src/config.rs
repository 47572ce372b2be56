//! Configuration loading
//!
//! The configuration is compiled into the image from `counter.toml`.
//! build.rs has already validated it; the runtime parser is the last line.

use defmt::*;

use transit_core::config::{parse_config, CounterConfig};

/// Embedded configuration (compiled into firmware)
/// Edit counter.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../counter.toml");

/// Parse the embedded configuration
///
/// Falls back to built-in defaults if the embedded file is rejected.
pub fn load_config() -> CounterConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            warn!("Using built-in default configuration");
            CounterConfig::default()
        }
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &CounterConfig) {
    debug!("  poll interval {} ms", config.poll_interval_ms);
    debug!(
        "  sensor A inverted={} pull_up={}",
        config.sensor_a.inverted, config.sensor_a.pull_up
    );
    debug!(
        "  sensor B inverted={} pull_up={}",
        config.sensor_b.inverted, config.sensor_b.pull_up
    );
    debug!(
        "  reset settle {} ms ({} ticks), max hold {} ms ({} ticks)",
        config.reset.settle_ms,
        config.settle_ticks(),
        config.reset.max_hold_ms,
        config.max_hold_ticks()
    );
    debug!(
        "  display enabled={} addr={=u8:#x}",
        config.display.enabled, config.display.i2c_address
    );
}
