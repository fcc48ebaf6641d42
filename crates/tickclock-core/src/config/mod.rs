//! # Configuration System
//!
//! Hierarchical TOML configuration for tickclock.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.tickclock/config.toml`
//! 3. **Project config** - `./.tickclock/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.tickclock/config.toml
//! [clock]
//! locale = "ru-RU"
//! interval_ms = 1000
//!
//! [display]
//! target = "stdout"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use tickclock_core::config::TickclockConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TickclockConfig::load_hierarchy()?;
//!     let formatter = config.formatter()?;
//!     println!("{}", formatter.locale());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

use std::time::Duration;

use crate::clock::SystemClock;
use crate::errors::ConfigError;
use crate::locale::{DateTimeFormatter, DisplayLocale};

// Public API exports
pub use types::{ClockConfig, DisplayConfig, TargetKind, TickclockConfig};
pub use validation::{parse_utc_offset, validate_config};

impl TickclockConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    pub fn locale(&self) -> Result<DisplayLocale, ConfigError> {
        validation::resolve_locale(&self.clock)
    }

    pub fn interval(&self) -> Result<Duration, ConfigError> {
        validation::resolve_interval(&self.clock)
    }

    /// Formatter for the configured locale and separator.
    pub fn formatter(&self) -> Result<DateTimeFormatter, ConfigError> {
        Ok(DateTimeFormatter::new(self.locale()?)
            .with_separator(validation::resolve_separator(&self.clock)))
    }

    /// System clock in the configured zone.
    pub fn system_clock(&self) -> Result<SystemClock, ConfigError> {
        Ok(match validation::resolve_utc_offset(&self.clock)? {
            Some(offset) => SystemClock::with_offset(offset),
            None => SystemClock::local(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_from_config() {
        let mut config = TickclockConfig::default();
        config.clock.locale = Some("en-GB".to_string());
        config.clock.separator = Some(" | ".to_string());

        let formatter = config.formatter().expect("valid formatter");
        assert_eq!(formatter.locale(), DisplayLocale::EnGb);

        let at = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(13, 5, 9))
            .expect("valid timestamp");
        assert_eq!(formatter.format(&at), "15/01/2024 | 13:05:09");
    }

    #[test]
    fn test_system_clock_from_config() {
        let mut config = TickclockConfig::default();
        assert_eq!(config.system_clock().expect("local").offset(), None);

        config.clock.utc_offset = Some("+03:00".to_string());
        let clock = config.system_clock().expect("offset clock");
        assert_eq!(clock.offset().map(|o| o.local_minus_utc()), Some(3 * 3600));
    }

    #[test]
    fn test_interval_from_config() {
        let mut config = TickclockConfig::default();
        config.clock.interval_ms = Some(250);
        assert_eq!(config.interval().ok(), Some(Duration::from_millis(250)));
    }
}
