//! Simulated auth backend.
//!
//! No real endpoint exists; credential checks run locally behind the
//! [`AuthBackend`] trait with artificial latency, the same contract a real
//! API client would satisfy: `(credentials) → success: bool`. A declined
//! credential is `Ok(false)`, never an error.

use crate::domain::error::Result;
use std::time::Duration;

/// Contract for login, signup, and session-renewal calls.
pub trait AuthBackend: Send {
    /// Validates login credentials.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport-level failure; bad credentials
    /// are `Ok(false)`.
    fn authenticate(&self, email: &str, password: &str) -> Result<bool>;

    /// Validates signup input.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport-level failure.
    fn register(&self, email: &str, password: &str, name: &str) -> Result<bool>;

    /// Requests a session renewal.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport-level failure; a declined renewal
    /// is `Ok(false)`.
    fn renew(&self) -> Result<bool>;
}

/// Mock backend: sleeps for the configured latency, then accepts any
/// non-empty email with a password of at least six characters.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    latency: Duration,
    fail_renewals: bool,
}

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

impl SimulatedBackend {
    /// Creates a backend with the given artificial latency.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            fail_renewals: false,
        }
    }

    /// Creates a backend whose renewals are always declined, for exercising
    /// the warning-state failure path.
    #[must_use]
    pub fn failing_renewals(latency: Duration) -> Self {
        Self {
            latency,
            fail_renewals: true,
        }
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }
}

impl AuthBackend for SimulatedBackend {
    fn authenticate(&self, email: &str, password: &str) -> Result<bool> {
        self.simulate_latency();
        Ok(!email.is_empty() && password.len() >= MIN_PASSWORD_LEN)
    }

    fn register(&self, email: &str, password: &str, name: &str) -> Result<bool> {
        self.simulate_latency();
        Ok(!email.is_empty() && password.len() >= MIN_PASSWORD_LEN && !name.is_empty())
    }

    fn renew(&self) -> Result<bool> {
        self.simulate_latency();
        Ok(!self.fail_renewals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> SimulatedBackend {
        SimulatedBackend::new(Duration::ZERO)
    }

    #[test]
    fn accepts_valid_credentials() {
        assert!(backend().authenticate("ana@example.com", "hunter22").unwrap());
    }

    #[test]
    fn rejects_short_passwords_and_empty_emails() {
        assert!(!backend().authenticate("ana@example.com", "abc").unwrap());
        assert!(!backend().authenticate("", "long enough").unwrap());
    }

    #[test]
    fn signup_requires_a_name() {
        assert!(!backend().register("ana@example.com", "hunter22", "").unwrap());
        assert!(backend().register("ana@example.com", "hunter22", "Ana").unwrap());
    }

    #[test]
    fn failing_backend_declines_renewals() {
        assert!(!SimulatedBackend::failing_renewals(Duration::ZERO)
            .renew()
            .unwrap());
        assert!(backend().renew().unwrap());
    }
}
