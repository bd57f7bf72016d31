//! Configuration types for the reminder daemon.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration for the daemon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SipConfig {
    /// Reminder interval and message settings.
    pub reminder: ReminderConfig,
    /// Notification delivery settings.
    pub notifications: NotifyConfig,
}

/// Reminder scheduling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Seconds that must elapse before a reminder fires.
    pub interval_secs: u64,
    /// Seconds between scheduler ticks.
    ///
    /// The cadence only needs to be short enough that an interval boundary
    /// is never missed by more than one tick period.
    pub tick_secs: u64,
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            interval_secs: 3600,
            tick_secs: 5,
            title: "Drink Water Notification".to_owned(),
            body: "An hour has passed, you need to drink some water!".to_owned(),
        }
    }
}

impl ReminderConfig {
    /// Reminder interval as a [`Duration`].
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Tick cadence as a [`Duration`].
    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(self.tick_secs)
    }
}

/// Notification delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Which sink displays reminders.
    pub backend: NotifyBackend,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            backend: NotifyBackend::Desktop,
        }
    }
}

/// Available notification sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyBackend {
    /// OS notification center via `notify-rust`.
    Desktop,
    /// Write reminders to the log only (headless hosts).
    Log,
}

impl SipConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::SipError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SipError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path (`config_dir()/config.toml`).
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        crate::sip_dirs::config_file()
    }

    /// Check that the configured durations make sense.
    ///
    /// # Errors
    ///
    /// Returns an error for zero durations or a tick period longer than
    /// the reminder interval (the interval boundary could then be missed
    /// by more than one tick).
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.reminder.interval_secs == 0 {
            return Err(crate::error::SipError::Config(
                "reminder.interval_secs must be non-zero".to_owned(),
            ));
        }
        if self.reminder.tick_secs == 0 {
            return Err(crate::error::SipError::Config(
                "reminder.tick_secs must be non-zero".to_owned(),
            ));
        }
        if self.reminder.tick_secs > self.reminder.interval_secs {
            return Err(crate::error::SipError::Config(format!(
                "reminder.tick_secs ({}) must not exceed reminder.interval_secs ({})",
                self.reminder.tick_secs, self.reminder.interval_secs
            )));
        }
        Ok(())
    }
}
