//! Error types for the reminder daemon.

/// Top-level error type for the reminder daemon.
#[derive(Debug, thiserror::Error)]
pub enum SipError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Notification delivery error.
    #[error("notify error: {0}")]
    Notify(String),

    /// Scheduler error (tick dispatch, event channel).
    #[error("scheduler error: {0}")]
    Scheduler(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, SipError>;
