//! Owned periodic trigger for a [`ClockUpdater`].
//!
//! [`ClockTicker::start`] runs the first tick synchronously, so the slot is
//! populated before it returns, then re-runs the updater every period on a
//! Tokio task. The returned [`TickerHandle`] owns that task: call
//! [`TickerHandle::stop`] on teardown, or drop the handle to abort it.

pub mod errors;

pub use errors::TickerError;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::events;
use crate::updater::ClockUpdater;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTicker {
    period: Duration,
    limit: Option<u64>,
}

impl ClockTicker {
    pub fn new(period: Duration) -> Result<Self, TickerError> {
        if period.is_zero() {
            return Err(TickerError::InvalidPeriod);
        }
        Ok(Self {
            period,
            limit: None,
        })
    }

    /// Stop on its own after `ticks` ticks, the initial one included.
    /// The initial tick always runs.
    pub fn with_limit(mut self, ticks: u64) -> Self {
        self.limit = Some(ticks);
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Tick once now, then every period.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(self, mut updater: ClockUpdater) -> TickerHandle {
        events::log_ticker_started(self.period, self.limit, updater.has_target());

        let ticks = Arc::new(AtomicU64::new(0));
        let target_open = run_tick(&mut updater, &ticks);

        let first_deadline = Instant::now() + self.period;
        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(run_loop(
            updater,
            self,
            first_deadline,
            target_open,
            Arc::clone(&ticks),
            stop_rx,
        ));

        TickerHandle {
            stop_tx: Some(stop_tx),
            task: Some(task),
            outcome: None,
            ticks,
        }
    }
}

/// Returns false once the target's reader has gone away.
fn run_tick(updater: &mut ClockUpdater, ticks: &AtomicU64) -> bool {
    let target_open = match updater.tick() {
        Ok(_) => true,
        Err(e) if e.is_target_closed() => false,
        Err(e) => {
            events::log_display_write_failed(&e);
            true
        }
    };
    ticks.fetch_add(1, Ordering::Relaxed);
    target_open
}

async fn run_loop(
    mut updater: ClockUpdater,
    ticker: ClockTicker,
    first_deadline: Instant,
    mut target_open: bool,
    ticks: Arc<AtomicU64>,
    mut stop_rx: oneshot::Receiver<()>,
) -> ClockUpdater {
    let mut interval = time::interval_at(first_deadline, ticker.period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let reason = loop {
        if !target_open {
            break "target_closed";
        }
        if ticker
            .limit
            .is_some_and(|limit| ticks.load(Ordering::Relaxed) >= limit)
        {
            break "limit_reached";
        }

        tokio::select! {
            // Fires on an explicit stop and when the handle's sender is dropped.
            _ = &mut stop_rx => break "stopped",
            _ = interval.tick() => target_open = run_tick(&mut updater, &ticks),
        }
    };

    events::log_ticker_stopped(ticks.load(Ordering::Relaxed), reason);
    updater
}

/// Owner of a running ticker.
#[derive(Debug)]
pub struct TickerHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<ClockUpdater>>,
    outcome: Option<Result<ClockUpdater, TickerError>>,
    ticks: Arc<AtomicU64>,
}

impl TickerHandle {
    /// Ticks run so far, the initial one included.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|task| task.is_finished())
    }

    /// Cancel further ticks and hand the updater back.
    pub async fn stop(mut self) -> Result<ClockUpdater, TickerError> {
        if let Some(stop_tx) = self.stop_tx.take() {
            // Err means the loop already ended on its own.
            let _ = stop_tx.send(());
        }
        self.join().await
    }

    /// Wait for a tick-limited ticker to finish. Without a limit this only
    /// returns if the task fails.
    pub async fn wait(mut self) -> Result<ClockUpdater, TickerError> {
        self.join().await
    }

    /// Resolve once the ticker task has ended, keeping its result for
    /// [`stop`](Self::stop) or [`wait`](Self::wait). Cancel safe, so it can
    /// race a shutdown signal in `select!`.
    pub async fn finished(&mut self) {
        if let Some(task) = self.task.as_mut() {
            let result = task.await.map_err(|e| TickerError::TaskFailed {
                message: e.to_string(),
            });
            self.task = None;
            self.outcome = Some(result);
        }
    }

    async fn join(&mut self) -> Result<ClockUpdater, TickerError> {
        self.finished().await;
        self.outcome.take().unwrap_or(Err(TickerError::AlreadyJoined))
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::display::{DisplayError, DisplayWriter, MemoryDisplay};
    use crate::errors::TickclockError;
    use crate::locale::DateTimeFormatter;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    fn memory_updater(display: &MemoryDisplay) -> ClockUpdater {
        let at = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(13, 5, 9))
            .expect("valid timestamp");
        ClockUpdater::new(
            Arc::new(FixedClock::new(at)),
            DateTimeFormatter::default(),
            Some(Box::new(display.clone())),
        )
    }

    fn one_second() -> ClockTicker {
        ClockTicker::new(Duration::from_millis(1000)).expect("non-zero period")
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = ClockTicker::new(Duration::ZERO).unwrap_err();
        assert_eq!(err.error_code(), "TICKER_INVALID_PERIOD");
        assert!(err.is_user_error());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_is_synchronous() {
        let display = MemoryDisplay::new();
        let handle = one_second().start(memory_updater(&display));

        // No await has happened yet: only the synchronous tick can have run.
        assert_eq!(display.current().as_deref(), Some("15.01.2024 13:05:09"));
        assert_eq!(handle.ticks(), 1);

        handle.stop().await.expect("stop");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_period_until_limit() {
        let display = MemoryDisplay::new();
        let started = Instant::now();

        let handle = one_second().with_limit(3).start(memory_updater(&display));
        let updater = handle.wait().await.expect("limited ticker finishes");

        assert_eq!(started.elapsed(), Duration::from_millis(2000));
        assert_eq!(display.writes(), 3);
        assert!(updater.has_target());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_further_ticks() {
        let display = MemoryDisplay::new();
        let handle = one_second().start(memory_updater(&display));

        time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(handle.ticks(), 3);

        let updater = handle.stop().await.expect("stop");
        assert!(updater.into_target().is_some());

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(display.writes(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_ticker() {
        let display = MemoryDisplay::new();
        let handle = one_second().start(memory_updater(&display));
        drop(handle);

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(display.writes(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_absent_target_still_ticks() {
        let updater = ClockUpdater::new(
            Arc::new(FixedClock::new(chrono::NaiveDateTime::default())),
            DateTimeFormatter::default(),
            None,
        );
        let handle = one_second().with_limit(2).start(updater);
        let updater = handle.wait().await.expect("finishes");
        assert!(!updater.has_target());
    }

    /// Fails every write with the given error.
    struct FailingDisplay {
        attempts: Arc<AtomicU64>,
        error: fn() -> DisplayError,
    }

    impl DisplayWriter for FailingDisplay {
        fn write_text(&mut self, _text: &str) -> Result<(), DisplayError> {
            self.attempts.fetch_add(1, Ordering::Relaxed);
            Err((self.error)())
        }
    }

    fn failing_updater(attempts: &Arc<AtomicU64>, error: fn() -> DisplayError) -> ClockUpdater {
        ClockUpdater::new(
            Arc::new(FixedClock::new(chrono::NaiveDateTime::default())),
            DateTimeFormatter::default(),
            Some(Box::new(FailingDisplay {
                attempts: Arc::clone(attempts),
                error,
            })),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_write_failures_do_not_stop_ticker() {
        let attempts = Arc::new(AtomicU64::new(0));
        let updater = failing_updater(&attempts, || std::io::Error::other("disk full").into());

        let handle = one_second().with_limit(4).start(updater);
        handle.wait().await.expect("finishes");
        assert_eq!(attempts.load(Ordering::Relaxed), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_target_ends_unlimited_ticker() {
        let attempts = Arc::new(AtomicU64::new(0));
        let updater = failing_updater(&attempts, || DisplayError::TargetClosed {
            target: "terminal".to_string(),
        });

        let mut handle = one_second().start(updater);
        let ended = time::timeout(Duration::from_secs(5), handle.finished()).await;
        assert!(ended.is_ok(), "closed target must end the ticker");
        assert_eq!(handle.ticks(), 1);
        assert_eq!(attempts.load(Ordering::Relaxed), 1);
        assert!(handle.stop().await.is_ok());
    }

    /// Forwards to a memory slot until its reader leaves after `open_for` writes.
    struct ClosingDisplay {
        inner: MemoryDisplay,
        open_for: usize,
    }

    impl DisplayWriter for ClosingDisplay {
        fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
            if self.inner.writes() >= self.open_for {
                return Err(DisplayError::TargetClosed {
                    target: "terminal".to_string(),
                });
            }
            self.inner.write_text(text)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_target_after_some_ticks() {
        let display = MemoryDisplay::new();
        let updater = ClockUpdater::new(
            Arc::new(FixedClock::new(chrono::NaiveDateTime::default())),
            DateTimeFormatter::default(),
            Some(Box::new(ClosingDisplay {
                inner: display.clone(),
                open_for: 2,
            })),
        );

        let started = Instant::now();
        let handle = one_second().start(updater);
        let updater = handle.wait().await.expect("ends on close");

        assert_eq!(started.elapsed(), Duration::from_millis(2000));
        assert_eq!(display.writes(), 2);
        assert!(updater.has_target());
    }

    /// Records when each write happened, relative to `base`.
    struct RecordingDisplay {
        base: Instant,
        offsets: Arc<Mutex<Vec<Duration>>>,
    }

    impl DisplayWriter for RecordingDisplay {
        fn write_text(&mut self, _text: &str) -> Result<(), DisplayError> {
            let offset = Instant::now() - self.base;
            self.offsets
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(offset);
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_missed_ticks_are_delayed_not_bursted() {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let updater = ClockUpdater::new(
            Arc::new(FixedClock::new(chrono::NaiveDateTime::default())),
            DateTimeFormatter::default(),
            Some(Box::new(RecordingDisplay {
                base: Instant::now(),
                offsets: Arc::clone(&offsets),
            })),
        );

        let handle = one_second().with_limit(3).start(updater);
        // Jump over three deadlines without yielding to the ticker task.
        time::advance(Duration::from_millis(3500)).await;
        handle.wait().await.expect("limited ticker finishes");

        let offsets = offsets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        assert_eq!(
            offsets,
            vec![
                Duration::ZERO,
                Duration::from_millis(3500),
                Duration::from_millis(4500),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_finished_is_cancel_safe() {
        let display = MemoryDisplay::new();
        let mut handle = one_second().start(memory_updater(&display));

        let raced = time::timeout(Duration::from_millis(1500), handle.finished()).await;
        assert!(raced.is_err(), "unlimited ticker must still be running");
        assert!(!handle.is_finished());

        handle.stop().await.expect("stop after a cancelled wait");
        assert_eq!(display.writes(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_finished_then_wait_returns_updater() {
        let display = MemoryDisplay::new();
        let mut handle = one_second().with_limit(2).start(memory_updater(&display));

        handle.finished().await;
        assert!(handle.is_finished());
        assert!(handle.wait().await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_finished_after_limit() {
        let display = MemoryDisplay::new();
        let handle = one_second().with_limit(1).start(memory_updater(&display));

        time::sleep(Duration::from_millis(10)).await;
        assert!(handle.is_finished());
        assert_eq!(display.writes(), 1);
    }
}
