//! Locale-specific date and time rendering.
//!
//! Each [`DisplayLocale`] maps to the short numeric date and the medium
//! time style of its regional convention, e.g. `ru-RU` renders
//! 2024-01-15T13:05:09 as `15.01.2024` and `13:05:09`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::TickclockError;

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("Unsupported locale '{tag}'")]
    Unsupported { tag: String },
}

impl TickclockError for LocaleError {
    fn error_code(&self) -> &'static str {
        match self {
            LocaleError::Unsupported { .. } => "UNSUPPORTED_LOCALE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

/// Regional convention used to render the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayLocale {
    #[default]
    RuRu,
    EnUs,
    EnGb,
    DeDe,
    FrFr,
}

impl DisplayLocale {
    pub const ALL: [DisplayLocale; 5] = [
        DisplayLocale::RuRu,
        DisplayLocale::EnUs,
        DisplayLocale::EnGb,
        DisplayLocale::DeDe,
        DisplayLocale::FrFr,
    ];

    /// Canonical BCP-47 tag.
    pub fn tag(self) -> &'static str {
        match self {
            DisplayLocale::RuRu => "ru-RU",
            DisplayLocale::EnUs => "en-US",
            DisplayLocale::EnGb => "en-GB",
            DisplayLocale::DeDe => "de-DE",
            DisplayLocale::FrFr => "fr-FR",
        }
    }

    fn date_pattern(self) -> &'static str {
        match self {
            DisplayLocale::RuRu => "%d.%m.%Y",
            DisplayLocale::EnUs => "%-m/%-d/%Y",
            DisplayLocale::EnGb | DisplayLocale::FrFr => "%d/%m/%Y",
            DisplayLocale::DeDe => "%-d.%-m.%Y",
        }
    }

    fn time_pattern(self) -> &'static str {
        match self {
            DisplayLocale::EnUs => "%-I:%M:%S %p",
            _ => "%H:%M:%S",
        }
    }

    pub fn format_date(self, at: &NaiveDateTime) -> String {
        at.format(self.date_pattern()).to_string()
    }

    pub fn format_time(self, at: &NaiveDateTime) -> String {
        at.format(self.time_pattern()).to_string()
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DisplayLocale {
    type Err = LocaleError;

    /// Accepts `ru-RU`, `ru_RU`, `ru` and any casing of those.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "ru" | "ru-ru" => Ok(DisplayLocale::RuRu),
            "en" | "en-us" => Ok(DisplayLocale::EnUs),
            "en-gb" => Ok(DisplayLocale::EnGb),
            "de" | "de-de" => Ok(DisplayLocale::DeDe),
            "fr" | "fr-fr" => Ok(DisplayLocale::FrFr),
            _ => Err(LocaleError::Unsupported { tag: s.to_string() }),
        }
    }
}

impl TryFrom<String> for DisplayLocale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayLocale> for String {
    fn from(locale: DisplayLocale) -> Self {
        locale.tag().to_string()
    }
}

/// Renders a timestamp as `<date><separator><time>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormatter {
    locale: DisplayLocale,
    separator: String,
}

impl DateTimeFormatter {
    pub fn new(locale: DisplayLocale) -> Self {
        Self {
            locale,
            separator: " ".to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn locale(&self) -> DisplayLocale {
        self.locale
    }

    pub fn format_date(&self, at: &NaiveDateTime) -> String {
        self.locale.format_date(at)
    }

    pub fn format_time(&self, at: &NaiveDateTime) -> String {
        self.locale.format_time(at)
    }

    pub fn format(&self, at: &NaiveDateTime) -> String {
        format!(
            "{}{}{}",
            self.format_date(at),
            self.separator,
            self.format_time(at)
        )
    }
}

impl Default for DateTimeFormatter {
    fn default() -> Self {
        Self::new(DisplayLocale::default())
    }
}
