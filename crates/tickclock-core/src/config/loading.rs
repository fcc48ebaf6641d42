//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.tickclock/config.toml` (global user preferences)
//! 3. **Project config** - `./.tickclock/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{ClockConfig, DisplayConfig, TickclockConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".tickclock";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a present file cannot be read or parsed, or if the
/// merged result fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<TickclockConfig, ConfigError> {
    let user = user_config_path()?;
    let project = std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    load_from_paths(&[user, project])
}

/// Load and merge the given files in order, skipping missing ones.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<TickclockConfig, ConfigError> {
    let mut config = TickclockConfig::default();

    for path in paths {
        if let Some(file_config) = load_config_file(path)? {
            config = merge_configs(config, file_config);
        }
    }

    validate_config(&config)?;
    Ok(config)
}

fn user_config_path() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home_dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load a configuration file, returning `Ok(None)` if it does not exist.
fn load_config_file(path: &Path) -> Result<Option<TickclockConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(event = "core.config.file_not_found", path = %path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Each field is replaced only if the override sets it.
pub fn merge_configs(base: TickclockConfig, override_config: TickclockConfig) -> TickclockConfig {
    TickclockConfig {
        clock: ClockConfig {
            locale: override_config.clock.locale.or(base.clock.locale),
            interval_ms: override_config.clock.interval_ms.or(base.clock.interval_ms),
            utc_offset: override_config.clock.utc_offset.or(base.clock.utc_offset),
            separator: override_config.clock.separator.or(base.clock.separator),
        },
        display: DisplayConfig {
            target: override_config.display.target.or(base.display.target),
            path: override_config.display.path.or(base.display.path),
        },
    }
}
