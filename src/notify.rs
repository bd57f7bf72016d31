//! Notification dispatch.
//!
//! Bridges the scheduler's event channel to a [`NotificationSink`]. The
//! scheduler fires and forgets; this task is the only place display
//! actually happens, and a sink failure here is an unrecoverable fault
//! that shuts the daemon down.

use crate::platform::NotificationSink;
use crate::scheduler::ReminderEvent;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Drain reminder events into the sink until the channel closes or
/// shutdown is requested.
///
/// Intended to be spawned as a background task alongside the scheduler.
/// A sink error is logged with context and converted into cancellation of
/// the shared token so the host exits instead of running silently without
/// notifications.
pub async fn dispatch_events(
    mut event_rx: mpsc::UnboundedReceiver<ReminderEvent>,
    sink: Box<dyn NotificationSink>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                match event {
                    ReminderEvent::Fired { message, fired_at } => {
                        info!(title = %message.title, %fired_at, "displaying reminder");
                        if let Err(e) = sink.notify(&message.title, &message.body) {
                            error!(error = %e, "notification sink failed; requesting shutdown");
                            cancel.cancel();
                            break;
                        }
                    }
                }
            }
        }
    }
}
