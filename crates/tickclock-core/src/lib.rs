//! tickclock-core: Core library for a localized, periodically refreshed clock
//!
//! This library renders the current date and time under a regional
//! convention and writes it into a display target on a fixed period.
//! It is used by the `tickclock` CLI and can be embedded directly.
//!
//! # Main Entry Points
//!
//! - [`updater`] - One tick: read the clock, format, write the target
//! - [`ticker`] - Owned periodic trigger with an explicit stop
//! - [`display`] - Display writer capability and concrete targets
//! - [`locale`] - Locale-specific date/time rendering
//! - [`config`] - Configuration management

pub mod clock;
pub mod config;
pub mod display;
pub mod errors;
pub mod events;
pub mod locale;
pub mod logging;
pub mod ticker;
pub mod updater;

// Re-export commonly used types at crate root for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::TickclockConfig;
pub use display::{
    DisplayError, DisplayWriter, FileDisplay, MemoryDisplay, TerminalDisplay, TerminalMode,
};
pub use errors::TickclockError;
pub use locale::{DateTimeFormatter, DisplayLocale, LocaleError};
pub use ticker::{ClockTicker, TickerError, TickerHandle};
pub use updater::{ClockUpdater, TickOutcome};

// Re-export logging initialization
pub use logging::init_logging;

/// Identifier of the display slot this crate owns and overwrites.
pub const DISPLAY_SLOT: &str = "datetime";
