//! Build script for transit-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates counter.toml at compile time

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x"))
        .expect("failed to copy memory.x to OUT_DIR");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate counter.toml at compile time
///
/// The firmware falls back to defaults if the embedded file does not parse,
/// so mistakes are caught here instead of silently on the bench.
fn validate_config() {
    println!("cargo:rerun-if-changed=counter.toml");

    let config_path = Path::new("counter.toml");
    if !config_path.exists() {
        fail("counter.toml not found", &["The firmware embeds counter.toml from the crate root."]);
    }

    let content = fs::read_to_string(config_path)
        .unwrap_or_else(|e| fail("Failed to read counter.toml", &[&e.to_string()]));

    let config: toml::Value = toml::from_str(&content)
        .unwrap_or_else(|e| fail("Invalid TOML syntax in counter.toml", &[&e.to_string()]));

    let mut errors = Vec::new();
    validate_root(&config, &mut errors);
    validate_inputs(&config, &mut errors);
    validate_reset(&config, &mut errors);
    validate_display(&config, &mut errors);

    if !errors.is_empty() {
        let lines: Vec<&str> = errors.iter().map(String::as_str).collect();
        fail("Invalid counter configuration", &lines);
    }

    println!("cargo:warning=counter.toml validated successfully");
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[&str]) -> ! {
    let body = lines
        .iter()
        .flat_map(|l| l.lines())
        .map(|line| {
            let truncated = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}

/// Check an optional integer key lies in range
fn check_int(table: &toml::Table, section: &str, key: &str, min: i64, max: i64, errors: &mut Vec<String>) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("{} {} must be {}-{}", section, key, min, max));
        }
        Some(_) => errors.push(format!("{} {} must be an integer", section, key)),
    }
}

/// Check an optional key is a boolean
fn check_bool(table: &toml::Table, section: &str, key: &str, errors: &mut Vec<String>) {
    if let Some(v) = table.get(key) {
        if !v.is_bool() {
            errors.push(format!("{} {} must be true or false", section, key));
        }
    }
}

/// Reject keys the firmware parser would not accept
fn check_keys(table: &toml::Table, section: &str, allowed: &[&str], errors: &mut Vec<String>) {
    for key in table.keys() {
        if !allowed.contains(&key.as_str()) {
            errors.push(format!("{} unknown key '{}'", section, key));
        }
    }
}

fn validate_root(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    check_keys(root, "[root]", &["poll_interval_ms", "sensor", "reset", "display"], errors);
    check_int(root, "[root]", "poll_interval_ms", 1, 100, errors);
}

fn validate_inputs(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(sensors) = config.get("sensor") else {
        return;
    };
    let Some(sensors) = sensors.as_table() else {
        errors.push("[sensor] must contain [sensor.a] and [sensor.b] tables".into());
        return;
    };

    for (name, sensor) in sensors {
        let section = format!("[sensor.{}]", name);
        if name != "a" && name != "b" {
            errors.push(format!("{} only sensors 'a' and 'b' exist", section));
            continue;
        }
        match sensor.as_table() {
            Some(t) => {
                check_keys(t, &section, &["inverted", "pull_up"], errors);
                check_bool(t, &section, "inverted", errors);
                check_bool(t, &section, "pull_up", errors);
            }
            None => errors.push(format!("{} must be a table", section)),
        }
    }
}

fn validate_reset(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(reset) = config.get("reset").and_then(|r| r.as_table()) else {
        return;
    };

    check_keys(reset, "[reset]", &["inverted", "pull_up", "settle_ms", "max_hold_ms"], errors);
    check_bool(reset, "[reset]", "inverted", errors);
    check_bool(reset, "[reset]", "pull_up", errors);
    check_int(reset, "[reset]", "settle_ms", 0, u16::MAX as i64, errors);
    check_int(reset, "[reset]", "max_hold_ms", 0, u16::MAX as i64, errors);

    let settle = reset.get("settle_ms").and_then(|v| v.as_integer()).unwrap_or(50);
    let hold = reset.get("max_hold_ms").and_then(|v| v.as_integer()).unwrap_or(5000);
    if hold < settle {
        errors.push("[reset] max_hold_ms must not be less than settle_ms".into());
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = config.get("display").and_then(|d| d.as_table()) else {
        return;
    };

    check_keys(display, "[display]", &["enabled", "i2c_address"], errors);
    check_bool(display, "[display]", "enabled", errors);
    check_int(display, "[display]", "i2c_address", 0, 0x7F, errors);
}
