//! Structured lifecycle events shared by the CLI and the ticker.

use std::time::Duration;

use tracing::{error, info, warn};

use crate::DISPLAY_SLOT;
use crate::display::DisplayError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

pub fn log_ticker_started(period: Duration, limit: Option<u64>, has_target: bool) {
    info!(
        event = "core.ticker.started",
        slot = DISPLAY_SLOT,
        period_ms = period.as_millis() as u64,
        limit = ?limit,
        has_target
    );
}

pub fn log_ticker_stopped(ticks: u64, reason: &'static str) {
    info!(
        event = "core.ticker.stopped",
        slot = DISPLAY_SLOT,
        ticks,
        reason
    );
}

pub fn log_display_write_failed(error: &DisplayError) {
    warn!(
        event = "core.display.write_failed",
        slot = DISPLAY_SLOT,
        error = %error
    );
}
