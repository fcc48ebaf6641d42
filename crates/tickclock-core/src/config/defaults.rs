//! Default values for configuration fields left unset in every file.

use crate::locale::DisplayLocale;

/// Returns the default refresh period in milliseconds (1000ms).
pub fn default_interval_ms() -> u64 {
    1000
}

/// Returns the default locale (ru-RU).
pub fn default_locale() -> DisplayLocale {
    DisplayLocale::RuRu
}

/// Returns the default date/time separator.
pub fn default_separator() -> &'static str {
    " "
}
