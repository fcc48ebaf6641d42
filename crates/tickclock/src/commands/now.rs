use std::io;
use std::sync::Arc;

use chrono::{NaiveDateTime, Timelike};
use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use tickclock_core::{
    Clock, ClockUpdater, DateTimeFormatter, TerminalDisplay, TerminalMode, TickOutcome,
};

use super::helpers::{apply_clock_overrides, load_config_with_warning};

#[derive(Debug, Serialize)]
struct NowOutput {
    text: String,
    date: String,
    time: String,
    locale: String,
    timestamp: NaiveDateTime,
}

impl NowOutput {
    fn new(formatter: &DateTimeFormatter, at: NaiveDateTime) -> Self {
        let at = at.with_nanosecond(0).unwrap_or(at);
        Self {
            text: formatter.format(&at),
            date: formatter.format_date(&at),
            time: formatter.format_time(&at),
            locale: formatter.locale().to_string(),
            timestamp: at,
        }
    }
}

pub(crate) fn handle_now_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();
    apply_clock_overrides(&mut config, matches);

    let formatter = config.formatter()?;
    let clock = config.system_clock()?;

    if matches.get_flag("json") {
        let output = NowOutput::new(&formatter, clock.now());
        println!("{}", serde_json::to_string_pretty(&output)?);
        info!(event = "cli.now_completed", locale = %output.locale, json = true);
        return Ok(());
    }

    // A single tick into a line-mode stdout slot.
    let display = TerminalDisplay::new(io::stdout(), TerminalMode::Lines);
    let mut updater = ClockUpdater::new(Arc::new(clock), formatter, Some(Box::new(display)));
    if let TickOutcome::Written { text, .. } = updater.tick()? {
        info!(event = "cli.now_completed", text = %text, json = false);
    }

    Ok(())
}
