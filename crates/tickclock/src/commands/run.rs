use std::sync::Arc;

use clap::ArgMatches;
use tracing::info;

use tickclock_core::display::open_target;
use tickclock_core::{ClockTicker, ClockUpdater, events};

use super::helpers::{apply_run_overrides, load_config_with_warning};

pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();
    apply_run_overrides(&mut config, matches)?;
    config.validate()?;

    let formatter = config.formatter()?;
    let locale = formatter.locale();
    let target = open_target(&config.display)?;
    let updater = ClockUpdater::new(Arc::new(config.system_clock()?), formatter, target);

    let mut ticker = ClockTicker::new(config.interval()?)?;
    if let Some(count) = matches.get_one::<u64>("count") {
        ticker = ticker.with_limit(*count);
    }

    info!(
        event = "cli.run_started",
        display_target = %config.display.target_kind(),
        locale = %locale
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let mut handle = ticker.start(updater);

        let interrupted = tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal?;
                true
            }
            _ = handle.finished() => false,
        };

        if interrupted {
            events::log_app_shutdown();
        }

        let ticks = handle.ticks();
        let mut updater = handle.stop().await?;
        updater.finish()?;

        info!(event = "cli.run_completed", ticks, interrupted);
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
