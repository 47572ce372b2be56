//! Simple TOML parser for counter configuration
//!
//! This is a minimal line parser that handles only the subset needed for
//! the counter configuration. It does NOT support the full TOML grammar.
//!
//! Supported features:
//! - Key = value pairs (integer, boolean)
//! - Decimal and `0x` hexadecimal integers
//! - [section] and [section.subsection] headers
//! - Comments (# ...), including trailing comments
//!
//! NOT supported:
//! - Strings, arrays, inline tables
//! - Dotted keys outside section headers

use super::types::{CounterConfig, InputConfig, POLL_INTERVAL_RANGE_MS};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Value has the wrong type or does not parse
    InvalidValue,
    /// Key not recognized in this section
    UnknownKey,
    /// Value parsed but is outside the allowed range
    OutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    SensorA,
    SensorB,
    Reset,
    Display,
}

/// Parse TOML configuration into CounterConfig
///
/// Keys that are not present keep their defaults.
pub fn parse_config(input: &str) -> Result<CounterConfig, ParseError> {
    let mut config = CounterConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    validate(&config)?;
    Ok(config)
}

/// Remove a trailing `# comment`
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse section header like "sensor.a" or "reset"
///
/// Only headers that are also valid TOML are accepted, so the build-time
/// check and this parser agree on the shipped file.
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    let header = header.trim();

    let (kind, name) = match header.split_once('.') {
        Some((kind, name)) => (kind.trim(), Some(name.trim())),
        None => (header, None),
    };

    match (kind, name) {
        ("sensor", Some("a")) => Ok(Section::SensorA),
        ("sensor", Some("b")) => Ok(Section::SensorB),
        ("reset", None) => Ok(Section::Reset),
        ("display", None) => Ok(Section::Display),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse an unsigned integer, decimal or 0x-prefixed hex
fn parse_int(value: &str) -> Result<u32, ParseError> {
    let parsed = match value.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| ParseError::InvalidValue)
}

/// Parse an integer that must fit in u16
fn parse_u16(value: &str) -> Result<u16, ParseError> {
    u16::try_from(parse_int(value)?).map_err(|_| ParseError::OutOfRange)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Apply a key to an input config
fn apply_input(input: &mut InputConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "inverted" => input.inverted = parse_bool(value)?,
        "pull_up" => input.pull_up = parse_bool(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut CounterConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => match key {
            "poll_interval_ms" => config.poll_interval_ms = parse_u16(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::SensorA => apply_input(&mut config.sensor_a, key, value)?,
        Section::SensorB => apply_input(&mut config.sensor_b, key, value)?,
        Section::Reset => match key {
            "settle_ms" => config.reset.settle_ms = parse_u16(value)?,
            "max_hold_ms" => config.reset.max_hold_ms = parse_u16(value)?,
            _ => apply_input(&mut config.reset.input, key, value)?,
        },
        Section::Display => match key {
            "enabled" => config.display.enabled = parse_bool(value)?,
            "i2c_address" => {
                let addr = parse_int(value)?;
                if addr > 0x7F {
                    return Err(ParseError::OutOfRange);
                }
                config.display.i2c_address = addr as u8;
            }
            _ => return Err(ParseError::UnknownKey),
        },
    }
    Ok(())
}

/// Check cross-field constraints
fn validate(config: &CounterConfig) -> Result<(), ParseError> {
    if !POLL_INTERVAL_RANGE_MS.contains(&config.poll_interval_ms) {
        return Err(ParseError::OutOfRange);
    }
    if config.reset.max_hold_ms < config.reset.settle_ms {
        return Err(ParseError::OutOfRange);
    }
    Ok(())
}
