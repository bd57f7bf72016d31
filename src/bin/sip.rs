//! Background reminder daemon binary.
//!
//! Wires configuration, logging, the scheduler, and the notification
//! dispatcher, then waits for shutdown. Ctrl-C requests an orderly exit;
//! on Unix, SIGUSR1 toggles the pause state. An unrecoverable fault in
//! the scheduler or the sink exits the process with a nonzero code.

use sip::config::SipConfig;
use sip::scheduler::ReminderScheduler;
use sip::{notify, platform};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = sip::logging::init()?;

    info!("starting sip v{}", env!("CARGO_PKG_VERSION"));

    let config_path = SipConfig::default_config_path();
    let config = if config_path.exists() {
        let config = SipConfig::from_file(&config_path)?;
        info!(path = %config_path.display(), "loaded configuration");
        config
    } else {
        info!(path = %config_path.display(), "no config file found, using defaults");
        SipConfig::default()
    };
    config.validate()?;

    let cancel = CancellationToken::new();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let sink = platform::create_sink(config.notifications.backend);
    let dispatcher = tokio::spawn(notify::dispatch_events(event_rx, sink, cancel.clone()));

    let scheduler = ReminderScheduler::from_config(&config.reminder, event_tx, cancel.clone());
    let shutdown = scheduler.shutdown_handle();
    #[cfg(unix)]
    spawn_pause_toggle(scheduler.pause_handle(), cancel.clone());
    let scheduler_task = scheduler.run();

    // Distinguishes a user-requested exit from a fail-fast one.
    let user_exit = Arc::new(AtomicBool::new(false));
    {
        let user_exit = Arc::clone(&user_exit);
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received, shutting down");
                user_exit.store(true, Ordering::Relaxed);
                shutdown.request_shutdown();
            }
        });
    }

    shutdown.wait().await;
    let _ = scheduler_task.await;
    let _ = dispatcher.await;

    info!("exiting");
    if user_exit.load(Ordering::Relaxed) {
        Ok(())
    } else {
        Err(sip::SipError::Scheduler("unrecoverable fault; see log for context".to_owned()).into())
    }
}

/// Toggle pause on SIGUSR1, the headless stand-in for a tray checkbox.
#[cfg(unix)]
fn spawn_pause_toggle(pause: sip::scheduler::PauseHandle, cancel: CancellationToken) {
    use tracing::warn;

    tokio::spawn(async move {
        use tokio::signal::unix::{SignalKind, signal};

        let mut usr1 = match signal(SignalKind::user_defined1()) {
            Ok(stream) => stream,
            Err(e) => {
                warn!(error = %e, "cannot install SIGUSR1 handler; pause toggle unavailable");
                return;
            }
        };

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                received = usr1.recv() => {
                    if received.is_none() {
                        break;
                    }
                    let paused = pause.toggle();
                    info!(paused, "pause toggled");
                }
            }
        }
    });
}
