//! Desktop notification sink backed by the OS notification service.

use super::NotificationSink;
use notify_rust::Notification;

/// Milliseconds a reminder stays on screen (where the platform honors it).
const DISPLAY_TIMEOUT_MS: i32 = 10_000;

/// Shows reminders through the platform notification center.
#[derive(Debug, Default)]
pub struct DesktopSink;

impl DesktopSink {
    /// Create a desktop sink.
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for DesktopSink {
    fn notify(&self, title: &str, body: &str) -> crate::error::Result<()> {
        Notification::new()
            .appname("sip")
            .summary(title)
            .body(body)
            .icon("dialog-information")
            .timeout(DISPLAY_TIMEOUT_MS)
            .show()
            .map_err(|e| crate::error::SipError::Notify(e.to_string()))?;
        Ok(())
    }
}
