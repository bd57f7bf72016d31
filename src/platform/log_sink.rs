//! Logging-only notification sink.
//!
//! Used on headless hosts and in tests where no notification service is
//! available; reminders are written to the log instead of the screen.

use super::NotificationSink;
use tracing::info;

/// Sink that records reminders in the log.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    /// Create a logging sink.
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for LogSink {
    fn notify(&self, title: &str, body: &str) -> crate::error::Result<()> {
        info!(%title, %body, "reminder");
        Ok(())
    }
}
