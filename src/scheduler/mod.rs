//! Background reminder scheduling.
//!
//! A fixed-cadence tick loop that decides when the reminder interval has
//! elapsed, honors the pause toggle, and dispatches fire events to the
//! notification dispatcher.

pub mod reminder;
pub mod runner;

pub use reminder::{Action, FireRecord, ReminderEvent, ReminderMessage};
pub use runner::{PauseHandle, ReminderScheduler, ShutdownHandle};
