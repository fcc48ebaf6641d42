use std::path::PathBuf;

use clap::ArgMatches;
use tracing::warn;

use tickclock_core::config::{TargetKind, TickclockConfig};

/// Load config with a warning on errors, falling back to defaults.
pub(crate) fn load_config_with_warning() -> TickclockConfig {
    match TickclockConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.tickclock/config.toml and ./.tickclock/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            TickclockConfig::default()
        }
    }
}

/// Apply `--locale` and `--utc-offset` on top of the loaded config.
pub(crate) fn apply_clock_overrides(config: &mut TickclockConfig, matches: &ArgMatches) {
    if let Some(locale) = matches.get_one::<String>("locale") {
        config.clock.locale = Some(locale.clone());
    }
    if let Some(offset) = matches.get_one::<String>("utc-offset") {
        config.clock.utc_offset = Some(offset.clone());
    }
}

/// Apply the `run`-only flags on top of the loaded config.
pub(crate) fn apply_run_overrides(
    config: &mut TickclockConfig,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    apply_clock_overrides(config, matches);

    if let Some(interval_ms) = matches.get_one::<u64>("interval-ms") {
        config.clock.interval_ms = Some(*interval_ms);
    }
    if let Some(target) = matches.get_one::<String>("target") {
        config.display.target = Some(target.parse::<TargetKind>()?);
    }
    if let Some(path) = matches.get_one::<PathBuf>("path") {
        config.display.path = Some(path.clone());
        // A path on its own implies a file target.
        if matches.get_one::<String>("target").is_none() {
            config.display.target = Some(TargetKind::File);
        }
    }

    Ok(())
}
