//! Logging initialization.
//!
//! Writes to stderr and to a daily-rolling file under
//! [`sip_dirs::logs_dir()`](crate::sip_dirs::logs_dir). The default
//! filter is `sip=info`; override with `RUST_LOG`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global tracing subscriber.
///
/// Returns the file appender's worker guard; hold it for the process
/// lifetime or buffered log lines are lost on exit.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init() -> crate::error::Result<WorkerGuard> {
    let logs_dir = crate::sip_dirs::logs_dir();
    std::fs::create_dir_all(&logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "sip.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sip=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    Ok(guard)
}
