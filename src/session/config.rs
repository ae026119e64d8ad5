//! Session lifecycle configuration.
//!
//! All durations default to the product constants (24 h sessions, 30 day
//! remember-me, 5 minute warning window, 30 minute inactivity timeout,
//! 60 second watchdog poll) and can be overridden from a TOML file:
//!
//! ```toml
//! session_hours = 24
//! remember_me_days = 30
//! warning_minutes = 5
//! inactivity_minutes = 30
//! poll_seconds = 60
//! backend_latency_ms = 500
//! ```

use crate::domain::error::{DealflowError, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_session_hours() -> i64 {
    24
}
fn default_remember_me_days() -> i64 {
    30
}
fn default_warning_minutes() -> i64 {
    5
}
fn default_inactivity_minutes() -> i64 {
    30
}
fn default_poll_seconds() -> u64 {
    60
}
fn default_backend_latency_ms() -> u64 {
    500
}

/// Tunable durations for the session lifecycle manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session length for a normal login and for renewals.
    #[serde(default = "default_session_hours")]
    pub session_hours: i64,

    /// Session length when "remember me" is set at login.
    #[serde(default = "default_remember_me_days")]
    pub remember_me_days: i64,

    /// Expiry warning window: remaining time at or under this surfaces the
    /// extend/logout prompt.
    #[serde(default = "default_warning_minutes")]
    pub warning_minutes: i64,

    /// Maximum gap between user interactions before forced logout.
    #[serde(default = "default_inactivity_minutes")]
    pub inactivity_minutes: i64,

    /// Watchdog poll cadence for the periodic session check.
    #[serde(default = "default_poll_seconds")]
    pub poll_seconds: u64,

    /// Artificial latency of the simulated auth backend.
    #[serde(default = "default_backend_latency_ms")]
    pub backend_latency_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_hours: default_session_hours(),
            remember_me_days: default_remember_me_days(),
            warning_minutes: default_warning_minutes(),
            inactivity_minutes: default_inactivity_minutes(),
            poll_seconds: default_poll_seconds(),
            backend_latency_ms: default_backend_latency_ms(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file. Missing keys fall back to
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| DealflowError::Config(e.to_string()))
    }

    /// Session duration for a normal login.
    #[must_use]
    pub fn session_duration(&self) -> Duration {
        Duration::hours(self.session_hours)
    }

    /// Session duration for a remember-me login.
    #[must_use]
    pub fn remember_me_duration(&self) -> Duration {
        Duration::days(self.remember_me_days)
    }

    /// Expiry warning window.
    #[must_use]
    pub fn warning_window(&self) -> Duration {
        Duration::minutes(self.warning_minutes)
    }

    /// Inactivity timeout.
    #[must_use]
    pub fn inactivity_timeout(&self) -> Duration {
        Duration::minutes(self.inactivity_minutes)
    }

    /// Watchdog poll interval.
    #[must_use]
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_seconds)
    }

    /// Simulated backend latency.
    #[must_use]
    pub fn backend_latency(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.backend_latency_ms)
    }
}
