//! Centralized application directory paths for the daemon.
//!
//! Provides a single source of truth for all filesystem paths used by the
//! app. Uses the [`dirs`] crate for platform-appropriate directory
//! resolution, which is sandbox-transparent on macOS.
//!
//! # Directory Layout
//!
//! | Purpose | macOS (sandbox) | Linux |
//! |---------|----------------|-------|
//! | App data | `~/Library/Application Support/sip/` | `~/.local/share/sip/` |
//! | Config | `~/Library/Application Support/sip/` | `~/.config/sip/` |
//!
//! # Environment Overrides
//!
//! All paths can be overridden for testing or custom deployments:
//! - `SIP_DATA_DIR` overrides [`data_dir`]
//! - `SIP_CONFIG_DIR` overrides [`config_dir`]

use std::path::PathBuf;

/// Application data root directory.
///
/// Used for persistent user data, primarily log files.
///
/// Resolves to `dirs::data_dir()/sip/` by default. Override with the
/// `SIP_DATA_DIR` environment variable.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("SIP_DATA_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::data_dir()
        .map(|d| d.join("sip"))
        .unwrap_or_else(|| PathBuf::from("/tmp/sip-data"))
}

/// Application config directory.
///
/// Used for `config.toml`.
///
/// Resolves to `dirs::config_dir()/sip/` by default. Override with the
/// `SIP_CONFIG_DIR` environment variable.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("SIP_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("sip"))
        .unwrap_or_else(|| PathBuf::from("/tmp/sip-config"))
}

/// Log file directory (`data_dir()/logs/`).
#[must_use]
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Main config file path (`config_dir()/config.toml`).
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}
