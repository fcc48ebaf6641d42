//! One clock refresh.
//!
//! A [`ClockUpdater`] owns a clock source, a formatter and, optionally, a
//! display writer. Each [`ClockUpdater::tick`] reads the clock, renders
//! `<date> <time>` and overwrites the writer's text. Without a writer the
//! tick does nothing.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::clock::Clock;
use crate::display::{DisplayError, DisplayWriter};
use crate::locale::DateTimeFormatter;

/// Result of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No display slot was present; nothing happened.
    Skipped,
    /// The slot now shows `text`, rendered from `at`.
    Written { at: NaiveDateTime, text: String },
}

impl TickOutcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            TickOutcome::Skipped => None,
            TickOutcome::Written { text, .. } => Some(text),
        }
    }
}

pub struct ClockUpdater {
    clock: Arc<dyn Clock>,
    formatter: DateTimeFormatter,
    target: Option<Box<dyn DisplayWriter>>,
}

impl ClockUpdater {
    pub fn new(
        clock: Arc<dyn Clock>,
        formatter: DateTimeFormatter,
        target: Option<Box<dyn DisplayWriter>>,
    ) -> Self {
        Self {
            clock,
            formatter,
            target,
        }
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    pub fn formatter(&self) -> &DateTimeFormatter {
        &self.formatter
    }

    /// Render a timestamp the way a tick would.
    pub fn render(&self, at: &NaiveDateTime) -> String {
        self.formatter.format(at)
    }

    /// Refresh the display slot.
    ///
    /// An absent slot, or a writer reporting its slot is gone, yields
    /// [`TickOutcome::Skipped`] and no error. Other write failures are
    /// returned.
    pub fn tick(&mut self) -> Result<TickOutcome, DisplayError> {
        let Some(target) = self.target.as_mut() else {
            return Ok(TickOutcome::Skipped);
        };

        let at = self.clock.now();
        let text = self.formatter.format(&at);

        match target.write_text(&text) {
            Ok(()) => Ok(TickOutcome::Written { at, text }),
            Err(e) if e.is_target_missing() => Ok(TickOutcome::Skipped),
            Err(e) => Err(e),
        }
    }

    /// Tear down the display slot, if any.
    pub fn finish(&mut self) -> Result<(), DisplayError> {
        match self.target.as_mut() {
            Some(target) => target.finish(),
            None => Ok(()),
        }
    }

    /// Give the display writer back to the owner.
    pub fn into_target(self) -> Option<Box<dyn DisplayWriter>> {
        self.target
    }
}

impl fmt::Debug for ClockUpdater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockUpdater")
            .field("formatter", &self.formatter)
            .field("has_target", &self.has_target())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, SystemClock};
    use crate::display::{FileDisplay, MemoryDisplay};
    use crate::locale::DisplayLocale;
    use chrono::{NaiveDate, TimeDelta};

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(13, 5, 9))
            .expect("valid timestamp")
    }

    fn updater_with(clock: Arc<dyn Clock>, display: &MemoryDisplay) -> ClockUpdater {
        ClockUpdater::new(
            clock,
            DateTimeFormatter::new(DisplayLocale::RuRu),
            Some(Box::new(display.clone())),
        )
    }

    #[test]
    fn test_absent_target_is_silent_noop() {
        let mut updater = ClockUpdater::new(
            Arc::new(FixedClock::new(sample())),
            DateTimeFormatter::default(),
            None,
        );

        assert!(!updater.has_target());
        assert_eq!(updater.tick().expect("no error"), TickOutcome::Skipped);
        assert!(updater.finish().is_ok());
    }

    #[test]
    fn test_fixed_time_renders_russian() {
        let display = MemoryDisplay::new();
        let mut updater = updater_with(Arc::new(FixedClock::new(sample())), &display);

        let outcome = updater.tick().expect("tick");

        assert_eq!(
            outcome,
            TickOutcome::Written {
                at: sample(),
                text: "15.01.2024 13:05:09".to_string(),
            }
        );
        assert_eq!(display.current().as_deref(), Some("15.01.2024 13:05:09"));
    }

    #[test]
    fn test_text_is_date_space_time_of_now() {
        let display = MemoryDisplay::new();
        let mut updater = updater_with(Arc::new(SystemClock::local()), &display);

        let outcome = updater.tick().expect("tick");
        let TickOutcome::Written { at, text } = outcome else {
            panic!("expected a write");
        };

        let locale = DisplayLocale::RuRu;
        assert_eq!(
            text,
            format!("{} {}", locale.format_date(&at), locale.format_time(&at))
        );
        assert_eq!(display.current(), Some(text));
    }

    #[test]
    fn test_successive_ticks_never_go_backwards() {
        let display = MemoryDisplay::new();
        let mut updater = updater_with(Arc::new(SystemClock::local()), &display);

        let first = updater.tick().expect("first");
        let second = updater.tick().expect("second");

        match (first, second) {
            (TickOutcome::Written { at: a, .. }, TickOutcome::Written { at: b, .. }) => {
                assert!(b >= a)
            }
            other => panic!("expected two writes, got {other:?}"),
        }
        assert_eq!(display.writes(), 2);
    }

    #[test]
    fn test_tick_overwrites_previous_text() {
        let clock = Arc::new(FixedClock::new(sample()));
        let display = MemoryDisplay::new();
        let mut updater = updater_with(clock.clone(), &display);

        updater.tick().expect("first");
        clock.advance(TimeDelta::seconds(1));
        updater.tick().expect("second");

        assert_eq!(display.current().as_deref(), Some("15.01.2024 13:05:10"));
    }

    #[test]
    fn test_vanished_file_slot_is_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("datetime");
        let mut updater = ClockUpdater::new(
            Arc::new(FixedClock::new(sample())),
            DateTimeFormatter::default(),
            Some(Box::new(FileDisplay::new(&path))),
        );

        assert_eq!(updater.tick().expect("no error"), TickOutcome::Skipped);
        assert!(!path.exists());
    }

    #[test]
    fn test_render_and_into_target() {
        let display = MemoryDisplay::new();
        let updater = updater_with(Arc::new(FixedClock::new(sample())), &display);

        assert_eq!(updater.render(&sample()), "15.01.2024 13:05:09");
        assert_eq!(updater.formatter().locale(), DisplayLocale::RuRu);
        assert!(updater.into_target().is_some());
        assert_eq!(display.writes(), 0);
    }
}
