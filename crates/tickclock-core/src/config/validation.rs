//! Configuration validation and value resolution.

use std::time::Duration;

use chrono::FixedOffset;

use crate::config::defaults;
use crate::config::types::{ClockConfig, TargetKind, TickclockConfig};
use crate::errors::ConfigError;
use crate::locale::DisplayLocale;

/// Validate the configuration.
///
/// # Errors
///
/// Returns an error for a zero interval, an unknown locale, a malformed UTC
/// offset, or a file target without a path.
pub fn validate_config(config: &TickclockConfig) -> Result<(), ConfigError> {
    resolve_locale(&config.clock)?;
    resolve_interval(&config.clock)?;
    resolve_utc_offset(&config.clock)?;

    if config.display.target_kind() == TargetKind::File && config.display.path.is_none() {
        return Err(ConfigError::InvalidConfiguration {
            message: "display.target = \"file\" requires display.path".to_string(),
        });
    }

    Ok(())
}

pub fn resolve_locale(clock: &ClockConfig) -> Result<DisplayLocale, ConfigError> {
    match &clock.locale {
        Some(tag) => tag.parse().map_err(|_| ConfigError::InvalidLocale {
            locale: tag.clone(),
        }),
        None => Ok(defaults::default_locale()),
    }
}

pub fn resolve_interval(clock: &ClockConfig) -> Result<Duration, ConfigError> {
    match clock.interval_ms.unwrap_or_else(defaults::default_interval_ms) {
        0 => Err(ConfigError::InvalidConfiguration {
            message: "clock.interval_ms must be greater than 0".to_string(),
        }),
        ms => Ok(Duration::from_millis(ms)),
    }
}

/// Parse an offset of the form `+HH:MM` / `-HH:MM`. `Z` and `UTC` mean zero.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset, ConfigError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| ConfigError::InvalidUtcOffset {
            offset: value.to_string(),
        });
    }

    let invalid = || ConfigError::InvalidUtcOffset {
        offset: value.to_string(),
    };

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'+') => (1, &trimmed[1..]),
        Some(b'-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

pub fn resolve_utc_offset(clock: &ClockConfig) -> Result<Option<FixedOffset>, ConfigError> {
    clock.utc_offset.as_deref().map(parse_utc_offset).transpose()
}

pub fn resolve_separator(clock: &ClockConfig) -> &str {
    clock
        .separator
        .as_deref()
        .unwrap_or(defaults::default_separator())
}
