//! Configuration type definitions for tickclock.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [clock]
//! locale = "ru-RU"
//! interval_ms = 1000
//! utc_offset = "+03:00"
//!
//! [display]
//! target = "file"
//! path = "/tmp/datetime"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.tickclock/config.toml`
/// 2. Project config: `./.tickclock/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TickclockConfig {
    /// Clock rendering and timing
    #[serde(default)]
    pub clock: ClockConfig,

    /// Where the rendered clock goes
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Clock configuration.
///
/// All fields are optional so that a project file can override a single
/// value of the user file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClockConfig {
    /// Locale tag, e.g. "ru-RU". Default: ru-RU.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Refresh period in milliseconds. Default: 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Fixed UTC offset such as "+03:00". Default: system local time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,

    /// Text between the date and the time. Default: a single space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

/// Display target configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Target kind. Default: stdout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetKind>,

    /// File path, required when `target = "file"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl DisplayConfig {
    pub fn target_kind(&self) -> TargetKind {
        self.target.unwrap_or_default()
    }
}

/// Kind of display slot the clock writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    #[default]
    Stdout,
    File,
    None,
}

impl TargetKind {
    pub const NAMES: [&'static str; 3] = ["stdout", "file", "none"];
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Stdout => write!(f, "stdout"),
            TargetKind::File => write!(f, "file"),
            TargetKind::None => write!(f, "none"),
        }
    }
}

impl FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stdout" => Ok(TargetKind::Stdout),
            "file" => Ok(TargetKind::File),
            "none" => Ok(TargetKind::None),
            other => Err(format!(
                "Unknown display target '{}'. Expected one of: {}",
                other,
                TargetKind::NAMES.join(", ")
            )),
        }
    }
}
