//! Platform notification delivery.
//!
//! Provides the [`NotificationSink`] trait the dispatcher displays
//! reminders through, with a desktop implementation backed by the OS
//! notification service and a logging sink for headless hosts.

mod desktop;
mod log_sink;

pub use desktop::DesktopSink;
pub use log_sink::LogSink;

use crate::config::NotifyBackend;

/// Displays a reminder to the user.
///
/// Display is fire-and-forget: implementations must not block waiting for
/// user interaction, and callers never learn whether the user saw the
/// notification, only whether handing it to the platform succeeded.
pub trait NotificationSink: Send + Sync {
    /// Display a notification with the given title and body.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be handed to the
    /// platform.
    fn notify(&self, title: &str, body: &str) -> crate::error::Result<()>;
}

/// Create the sink for the configured backend.
pub fn create_sink(backend: NotifyBackend) -> Box<dyn NotificationSink> {
    match backend {
        NotifyBackend::Desktop => Box::new(DesktopSink::new()),
        NotifyBackend::Log => Box::new(LogSink::new()),
    }
}
