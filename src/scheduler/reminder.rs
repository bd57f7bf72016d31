//! Reminder definitions and scheduler events.
//!
//! Defines the [`ReminderMessage`] displayed to the user, the [`Action`]
//! a tick resolves to, and the [`ReminderEvent`] sent to the dispatcher.

use chrono::{DateTime, Utc};

/// Title and body displayed when a reminder fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderMessage {
    /// Short notification title.
    pub title: String,
    /// Longer descriptive body.
    pub body: String,
}

impl ReminderMessage {
    /// Create a message with the given title and body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Default for ReminderMessage {
    fn default() -> Self {
        Self::new(
            "Drink Water Notification",
            "An hour has passed, you need to drink some water!",
        )
    }
}

/// What a scheduler tick decided to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing due this tick.
    None,
    /// A reminder fired and was dispatched for display.
    Notify(ReminderMessage),
    /// Unrecoverable fault; the host must terminate.
    Shutdown,
}

/// Event sent from the scheduler to the notification dispatcher.
#[derive(Debug, Clone)]
pub enum ReminderEvent {
    /// A reminder fired and should be displayed.
    Fired {
        /// Notification content.
        message: ReminderMessage,
        /// Wall-clock time the reminder fired.
        fired_at: DateTime<Utc>,
    },
}

/// One fired reminder, kept in the bounded in-memory history.
///
/// History is never persisted; it exists for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct FireRecord {
    /// Wall-clock time the reminder fired.
    pub fired_at: DateTime<Utc>,
}
