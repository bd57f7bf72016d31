//! Scheduler background loop.
//!
//! Spawns a tokio task that ticks at a fixed cadence and fires a reminder
//! once the configured interval has elapsed since the last fire (or since
//! scheduler start). Fired reminders are sent to the notification
//! dispatcher over an unbounded channel; the scheduler never waits for
//! display.
//!
//! # Fail-fast
//!
//! A tick cannot fail under normal operation: the decision is a clock
//! comparison and the firing branch is a non-blocking channel send. If the
//! dispatcher is gone (channel closed), the tick resolves to
//! [`Action::Shutdown`], the shared token is cancelled, and the host
//! process exits rather than continuing in an unknown state.

use crate::config::ReminderConfig;
use crate::scheduler::reminder::{Action, FireRecord, ReminderEvent, ReminderMessage};
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Default seconds between reminders (one hour).
const DEFAULT_INTERVAL_SECS: u64 = 3600;

/// Default seconds between scheduler ticks.
const DEFAULT_TICK_SECS: u64 = 5;

/// Number of fire records kept in memory.
const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Cross-thread pause toggle for the scheduler.
///
/// Single writer path (the control surface), single reader path (the
/// scheduler). Staleness of at most one tick period is acceptable, so a
/// relaxed-order atomic is all the discipline required.
#[derive(Clone, Debug)]
pub struct PauseHandle(Arc<AtomicBool>);

impl PauseHandle {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Pause or resume reminders. Idempotent.
    pub fn set_paused(&self, paused: bool) {
        self.0.store(paused, Ordering::Relaxed);
    }

    /// Flip the pause state and return the new value.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::Relaxed)
    }

    /// Returns `true` while reminders are suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Shutdown control exposed to the host.
///
/// Cancellation is absorbing: once requested, the scheduler processes no
/// further ticks.
#[derive(Clone, Debug)]
pub struct ShutdownHandle(CancellationToken);

impl ShutdownHandle {
    /// Signal the scheduler (and everything sharing the token) to stop.
    pub fn request_shutdown(&self) {
        self.0.cancel();
    }

    /// Wait until shutdown has been requested.
    pub async fn wait(&self) {
        self.0.cancelled().await;
    }

    /// Returns `true` once shutdown has been requested.
    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        self.0.is_cancelled()
    }
}

/// Periodic reminder scheduler.
///
/// Owns the "time since last reminder" state; the pause flag is shared
/// with the control surface through [`PauseHandle`] but written only
/// through that handle.
pub struct ReminderScheduler {
    /// Notification content dispatched on fire.
    message: ReminderMessage,
    /// Duration that must elapse before a reminder fires.
    interval: Duration,
    /// Cadence of the decision loop.
    tick_period: Duration,
    /// Monotonic instant of the last fire, or of scheduler start before
    /// the first fire. Only advances in the firing branch of a tick.
    last_fired: Option<Instant>,
    /// Shared pause flag; read, never written, by the scheduler.
    paused: PauseHandle,
    /// Channel to the notification dispatcher.
    event_tx: mpsc::UnboundedSender<ReminderEvent>,
    /// Shutdown token shared with the host; cancelled on fault.
    cancel: CancellationToken,
    /// Recent fires, oldest first.
    history: Vec<FireRecord>,
    /// Max history entries kept in memory.
    max_history_entries: usize,
}

impl ReminderScheduler {
    /// Create a scheduler with default interval, cadence, and message.
    pub fn new(event_tx: mpsc::UnboundedSender<ReminderEvent>, cancel: CancellationToken) -> Self {
        Self {
            message: ReminderMessage::default(),
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            tick_period: Duration::from_secs(DEFAULT_TICK_SECS),
            last_fired: None,
            paused: PauseHandle::new(),
            event_tx,
            cancel,
            history: Vec::new(),
            max_history_entries: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Create a scheduler from the reminder config section.
    pub fn from_config(
        config: &ReminderConfig,
        event_tx: mpsc::UnboundedSender<ReminderEvent>,
        cancel: CancellationToken,
    ) -> Self {
        Self::new(event_tx, cancel)
            .with_interval(config.interval())
            .with_tick_period(config.tick_period())
            .with_message(ReminderMessage::new(&config.title, &config.body))
    }

    /// Override the reminder interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Override the tick cadence.
    #[must_use]
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    /// Override the notification content.
    #[must_use]
    pub fn with_message(mut self, message: ReminderMessage) -> Self {
        self.message = message;
        self
    }

    /// Override the in-memory fire-history limit.
    #[must_use]
    pub fn with_history_limit(mut self, max_entries: usize) -> Self {
        self.max_history_entries = max_entries.max(1);
        self
    }

    /// Handle for pausing and resuming reminders.
    #[must_use]
    pub fn pause_handle(&self) -> PauseHandle {
        self.paused.clone()
    }

    /// Handle for requesting shutdown.
    #[must_use]
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(self.cancel.clone())
    }

    /// Recent fires, oldest first.
    #[must_use]
    pub fn history(&self) -> &[FireRecord] {
        &self.history
    }

    /// Decide what to do at `now`.
    ///
    /// Safe to call repeatedly and indefinitely. While paused, nothing
    /// fires and `last_fired` does not advance, so a resume after a long
    /// pause fires on the very next qualifying tick. The threshold
    /// comparison is inclusive: the reminder fires as soon as the full
    /// interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> Action {
        if self.paused.is_paused() {
            return Action::None;
        }

        // First tick marks scheduler start.
        let last = *self.last_fired.get_or_insert(now);
        if now.duration_since(last) < self.interval {
            return Action::None;
        }

        let fired_at = Utc::now();
        let event = ReminderEvent::Fired {
            message: self.message.clone(),
            fired_at,
        };
        if self.event_tx.send(event).is_err() {
            // Dispatcher is gone; there is no safe degraded mode.
            return Action::Shutdown;
        }

        self.last_fired = Some(now);
        self.push_history(FireRecord { fired_at });
        Action::Notify(self.message.clone())
    }

    fn push_history(&mut self, record: FireRecord) {
        self.history.push(record);
        if self.history.len() > self.max_history_entries {
            let drop_count = self.history.len() - self.max_history_entries;
            self.history.drain(0..drop_count);
        }
    }

    /// Start the scheduler background loop.
    ///
    /// Ticks are strictly serialized: each tick completes, including its
    /// dispatch, before the next is scheduled. The loop exits when the
    /// shutdown token is cancelled or a tick reports a fault.
    pub fn run(mut self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            info!(
                interval_secs = self.interval.as_secs(),
                tick_secs = self.tick_period.as_secs(),
                "reminder scheduler started"
            );
            let cancel = self.cancel.clone();
            let mut ticker = tokio::time::interval(self.tick_period);

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        info!("reminder scheduler stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        match self.tick(Instant::now()) {
                            Action::None => {}
                            Action::Notify(message) => {
                                debug!(title = %message.title, "reminder dispatched");
                            }
                            Action::Shutdown => {
                                error!("reminder dispatch failed: event channel closed; requesting shutdown");
                                self.cancel.cancel();
                                break;
                            }
                        }
                    }
                }
            }
        })
    }
}
