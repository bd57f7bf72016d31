//! Sip: background hydration reminder daemon.
//!
//! Runs indefinitely, tracks elapsed time, and raises a desktop
//! notification once the configured reminder interval has passed.
//!
//! # Architecture
//!
//! Independent pieces connected by async channels:
//! - **Scheduler**: a fixed-cadence tick loop that decides when a
//!   reminder is due and honors a cross-thread pause toggle
//! - **Dispatcher**: drains scheduler events into a [`NotificationSink`]
//! - **Platform sinks**: desktop notifications via `notify-rust`, or a
//!   logging sink for headless hosts
//!
//! Any unrecoverable fault cancels a shared shutdown token and the
//! process exits. A background reminder task has no safe degraded mode,
//! so faults are never retried or swallowed.

pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod platform;
pub mod scheduler;
pub mod sip_dirs;

pub use config::SipConfig;
pub use error::{Result, SipError};
pub use platform::NotificationSink;
pub use scheduler::{Action, PauseHandle, ReminderScheduler, ShutdownHandle};
