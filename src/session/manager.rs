//! Session lifecycle state machine.
//!
//! [`SessionManager`] owns the authenticated session: who is signed in,
//! when the session expires, and when the user last interacted. It is an
//! explicit store object with an init/teardown lifecycle: construct it
//! with its collaborators, call [`SessionManager::restore`] at application
//! start, and [`SessionManager::logout`] tears the session down.
//!
//! # States
//!
//! - `Anonymous`: no user signed in.
//! - `Active`: signed in, more than the warning window remaining.
//! - `Warning`: signed in, five minutes or less remaining; the UI surfaces
//!   an extend/logout prompt.
//! - `Expired`: transient; expiry-driven logout reports it once, then the
//!   manager settles in `Anonymous` with a sticky expired flag that the
//!   next successful login clears.
//!
//! # Timing
//!
//! The manager never registers timers or event listeners itself. The
//! embedding application drives it: a [`Watchdog`](crate::session::Watchdog)
//! calls [`SessionManager::check`] periodically (at least once a minute,
//! every second while a warning banner is up), and the UI layer reports
//! interactions through [`SessionManager::record_activity`].

use crate::domain::error::{DealflowError, Result};
use crate::domain::user::{User, UserRole};
use crate::session::backend::AuthBackend;
use crate::session::clock::Clock;
use crate::session::config::SessionConfig;
use crate::storage::vault::Vault;
use chrono::{DateTime, Duration, Utc};

/// Vault key holding the serialized user identity.
pub const USER_KEY: &str = "auth-user";

/// Vault key holding the RFC 3339 session expiry.
pub const EXPIRY_KEY: &str = "auth-session-expiry";

/// Lifecycle state of the session, as observed at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No user signed in.
    Anonymous,
    /// Signed in with comfortable time remaining.
    Active,
    /// Signed in with at most the warning window remaining.
    Warning,
    /// The session just expired; converges to `Anonymous`.
    Expired,
}

/// The session lifecycle manager.
///
/// Collaborators are injected at construction: a [`Vault`] for durable
/// identity/expiry storage, a [`Clock`] so lifecycle arithmetic is testable,
/// and an [`AuthBackend`] standing in for the (simulated) API.
pub struct SessionManager {
    vault: Box<dyn Vault>,
    clock: Box<dyn Clock>,
    backend: Box<dyn AuthBackend>,
    config: SessionConfig,

    user: Option<User>,
    expiry: Option<DateTime<Utc>>,
    last_activity: DateTime<Utc>,
    expired: bool,
}

impl SessionManager {
    /// Creates a manager in the `Anonymous` state. Call [`Self::restore`]
    /// afterwards to resume a persisted session.
    #[must_use]
    pub fn new(
        vault: Box<dyn Vault>,
        clock: Box<dyn Clock>,
        backend: Box<dyn AuthBackend>,
        config: SessionConfig,
    ) -> Self {
        let now = clock.now();
        Self {
            vault,
            clock,
            backend,
            config,
            user: None,
            expiry: None,
            last_activity: now,
            expired: false,
        }
    }

    /// Resumes a persisted session, if one exists and has not expired.
    ///
    /// Run once at application start. A stored session whose expiry has
    /// passed (or whose stored data no longer parses) is cleaned out of the
    /// vault and leaves the expired flag set, so the UI can explain why the
    /// user was signed out.
    ///
    /// # Errors
    ///
    /// Returns an error if the vault cannot be read or written.
    pub fn restore(&mut self) -> Result<()> {
        let saved_user = self.vault.get(USER_KEY)?;
        let saved_expiry = self.vault.get(EXPIRY_KEY)?;

        let (Some(user_json), Some(expiry_raw)) = (saved_user, saved_expiry) else {
            return Ok(());
        };

        let now = self.clock.now();
        let resumed = DateTime::parse_from_rfc3339(&expiry_raw)
            .ok()
            .map(|e| e.with_timezone(&Utc))
            .filter(|expiry| now < *expiry)
            .and_then(|expiry| {
                serde_json::from_str::<User>(&user_json)
                    .ok()
                    .map(|user| (user, expiry))
            });

        match resumed {
            Some((user, expiry)) => {
                tracing::info!(email = %user.email, %expiry, "session restored");
                self.user = Some(user);
                self.expiry = Some(expiry);
                self.last_activity = now;
                self.expired = false;
            }
            None => {
                tracing::info!("stored session is stale, clearing");
                self.clear_session()?;
                self.expired = true;
            }
        }
        Ok(())
    }

    /// Attempts a login. Returns `Ok(false)` when the credentials are
    /// rejected (empty email or password under six characters); the state
    /// stays `Anonymous`.
    ///
    /// The mock identity gets id `"1"` and the local part of the email as
    /// its display name. With `remember_me` the session lasts the
    /// remember-me duration (default 30 days) instead of the normal one
    /// (default 24 h).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call or vault write fails.
    pub fn login(&mut self, email: &str, password: &str, remember_me: bool) -> Result<bool> {
        if !self.backend.authenticate(email, password)? {
            tracing::debug!("login rejected");
            return Ok(false);
        }

        let user = User {
            id: "1".to_string(),
            email: email.to_string(),
            name: email.split('@').next().unwrap_or(email).to_string(),
            role: UserRole::User,
        };

        let duration = if remember_me {
            self.config.remember_me_duration()
        } else {
            self.config.session_duration()
        };

        self.establish(user, duration)?;
        Ok(true)
    }

    /// Attempts a signup. Returns `Ok(false)` when validation fails
    /// (missing name, empty email, or short password). A fresh identity is
    /// minted with a timestamp id; the session always gets the normal
    /// duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call or vault write fails.
    pub fn signup(&mut self, email: &str, password: &str, name: &str) -> Result<bool> {
        if !self.backend.register(email, password, name)? {
            tracing::debug!("signup rejected");
            return Ok(false);
        }

        let user = User {
            id: self.clock.now().timestamp_millis().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role: UserRole::User,
        };

        self.establish(user, self.config.session_duration())?;
        Ok(true)
    }

    fn establish(&mut self, user: User, duration: Duration) -> Result<()> {
        let now = self.clock.now();
        let expiry = now + duration;

        let user_json = serde_json::to_string(&user)
            .map_err(|e| DealflowError::Storage(format!("failed to serialize user: {e}")))?;
        self.vault.set(USER_KEY, &user_json)?;
        self.vault.set(EXPIRY_KEY, &expiry.to_rfc3339())?;

        tracing::info!(email = %user.email, %expiry, "session established");
        self.user = Some(user);
        self.expiry = Some(expiry);
        self.last_activity = now;
        self.expired = false;
        Ok(())
    }

    /// Signs the user out: clears identity, expiry, the vault keys, and the
    /// expired flag. No confirmation step.
    ///
    /// # Errors
    ///
    /// Returns an error if the vault write fails.
    pub fn logout(&mut self) -> Result<()> {
        tracing::info!("logout");
        self.clear_session()?;
        self.expired = false;
        Ok(())
    }

    /// Reports a user interaction (mouse, keyboard, scroll, touch, click).
    /// The UI layer calls this; it resets the inactivity window. Ignored
    /// while anonymous.
    pub fn record_activity(&mut self) {
        if self.user.is_some() {
            self.last_activity = self.clock.now();
        }
    }

    /// Runs the periodic session check at the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if a forced logout cannot clear the vault.
    pub fn check(&mut self) -> Result<SessionPhase> {
        self.check_at(self.clock.now())
    }

    /// Runs the periodic session check at an explicit instant.
    ///
    /// Inactivity is evaluated first: a gap since the last interaction
    /// beyond the timeout forces a logout. Then expiry: no time remaining
    /// sets the expired flag and forces a logout, reporting `Expired` once.
    /// Otherwise the phase reflects whether the warning window has been
    /// entered. Either forced path converges to `Anonymous`.
    ///
    /// # Errors
    ///
    /// Returns an error if a forced logout cannot clear the vault.
    pub fn check_at(&mut self, now: DateTime<Utc>) -> Result<SessionPhase> {
        if self.user.is_none() {
            return Ok(SessionPhase::Anonymous);
        }

        if now - self.last_activity > self.config.inactivity_timeout() {
            tracing::info!("inactivity timeout, logging out");
            self.clear_session()?;
            return Ok(SessionPhase::Anonymous);
        }

        let remaining = self
            .expiry
            .map_or(Duration::zero(), |expiry| expiry - now);

        if remaining <= Duration::zero() {
            tracing::info!("session expired, logging out");
            self.expired = true;
            self.clear_session()?;
            return Ok(SessionPhase::Expired);
        }

        if remaining <= self.config.warning_window() {
            tracing::debug!(seconds_left = remaining.num_seconds(), "session expiring soon");
            return Ok(SessionPhase::Warning);
        }

        Ok(SessionPhase::Active)
    }

    /// Extends the session by the normal duration via the backend.
    ///
    /// Returns `Ok(false)` when the renewal is declined; the session state
    /// (including a visible warning) is left untouched and no retry is
    /// scheduled. On success the new expiry is persisted and the expired
    /// flag cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call or vault write fails.
    pub fn refresh_session(&mut self) -> Result<bool> {
        if self.user.is_none() {
            return Ok(false);
        }

        if !self.backend.renew()? {
            tracing::warn!("session renewal declined, keeping current expiry");
            return Ok(false);
        }

        let expiry = self.clock.now() + self.config.session_duration();
        self.vault.set(EXPIRY_KEY, &expiry.to_rfc3339())?;
        self.expiry = Some(expiry);
        self.expired = false;
        tracing::info!(%expiry, "session renewed");
        Ok(true)
    }

    /// The lifecycle phase as of now, without side effects.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        let Some(expiry) = self.expiry.filter(|_| self.user.is_some()) else {
            return SessionPhase::Anonymous;
        };
        let remaining = expiry - self.clock.now();
        if remaining <= Duration::zero() {
            SessionPhase::Expired
        } else if remaining <= self.config.warning_window() {
            SessionPhase::Warning
        } else {
            SessionPhase::Active
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The session expiry, if signed in.
    #[must_use]
    pub fn session_expiry(&self) -> Option<DateTime<Utc>> {
        self.expiry
    }

    /// Time left before expiry, if signed in. Drives the countdown in the
    /// warning prompt.
    #[must_use]
    pub fn time_remaining(&self) -> Option<Duration> {
        self.expiry.map(|expiry| expiry - self.clock.now())
    }

    /// True when the last sign-out was expiry-driven. Cleared by the next
    /// successful login or an explicit logout.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Read access to the underlying vault.
    #[must_use]
    pub fn vault(&self) -> &dyn Vault {
        &*self.vault
    }

    fn clear_session(&mut self) -> Result<()> {
        self.user = None;
        self.expiry = None;
        self.vault.remove(USER_KEY)?;
        self.vault.remove(EXPIRY_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::backend::SimulatedBackend;
    use crate::session::clock::ManualClock;
    use crate::storage::memory::MemoryVault;

    fn start_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-23T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn manager_with(vault: MemoryVault, clock: &ManualClock) -> SessionManager {
        SessionManager::new(
            Box::new(vault),
            Box::new(clock.clone()),
            Box::new(SimulatedBackend::new(std::time::Duration::ZERO)),
            SessionConfig::default(),
        )
    }

    fn manager(clock: &ManualClock) -> SessionManager {
        manager_with(MemoryVault::new(), clock)
    }

    #[test]
    fn short_password_login_fails_and_stays_anonymous() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);

        assert!(!mgr.login("ana@example.com", "abc", false).unwrap());
        assert_eq!(mgr.phase(), SessionPhase::Anonymous);
        assert!(mgr.user().is_none());
        assert_eq!(mgr.vault().get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn login_sets_expiry_to_now_plus_24h() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);

        assert!(mgr.login("ana@example.com", "hunter22", false).unwrap());
        assert_eq!(
            mgr.session_expiry(),
            Some(start_time() + Duration::hours(24))
        );
        assert_eq!(mgr.phase(), SessionPhase::Active);
        assert_eq!(mgr.user().unwrap().name, "ana");
        assert_eq!(mgr.user().unwrap().id, "1");
    }

    #[test]
    fn remember_me_extends_to_30_days() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);

        assert!(mgr.login("ana@example.com", "hunter22", true).unwrap());
        assert_eq!(
            mgr.session_expiry(),
            Some(start_time() + Duration::days(30))
        );
    }

    #[test]
    fn signup_requires_a_name_and_uses_normal_duration() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);

        assert!(!mgr.signup("ana@example.com", "hunter22", "").unwrap());
        assert_eq!(mgr.phase(), SessionPhase::Anonymous);

        assert!(mgr.signup("ana@example.com", "hunter22", "Ana").unwrap());
        assert_eq!(
            mgr.session_expiry(),
            Some(start_time() + Duration::hours(24))
        );
        assert_ne!(mgr.user().unwrap().id, "1");
    }

    #[test]
    fn restore_resumes_an_unexpired_session() {
        let clock = ManualClock::starting_at(start_time());
        let expiry = (start_time() + Duration::hours(3)).to_rfc3339();
        let vault = MemoryVault::new()
            .with_entry(USER_KEY, r#"{"id":"1","email":"ana@example.com","name":"ana","role":"user"}"#)
            .with_entry(EXPIRY_KEY, &expiry);

        let mut mgr = manager_with(vault, &clock);
        mgr.restore().unwrap();

        assert_eq!(mgr.phase(), SessionPhase::Active);
        assert_eq!(mgr.user().unwrap().email, "ana@example.com");
        assert!(!mgr.is_expired());
    }

    #[test]
    fn restore_clears_a_stale_session() {
        let clock = ManualClock::starting_at(start_time());
        let expiry = (start_time() - Duration::minutes(1)).to_rfc3339();
        let vault = MemoryVault::new()
            .with_entry(USER_KEY, r#"{"id":"1","email":"ana@example.com","name":"ana","role":"user"}"#)
            .with_entry(EXPIRY_KEY, &expiry);

        let mut mgr = manager_with(vault, &clock);
        mgr.restore().unwrap();

        assert_eq!(mgr.phase(), SessionPhase::Anonymous);
        assert!(mgr.is_expired());
        assert_eq!(mgr.vault().get(USER_KEY).unwrap(), None);
        assert_eq!(mgr.vault().get(EXPIRY_KEY).unwrap(), None);
    }

    #[test]
    fn restore_with_empty_vault_is_a_noop() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);
        mgr.restore().unwrap();
        assert_eq!(mgr.phase(), SessionPhase::Anonymous);
        assert!(!mgr.is_expired());
    }

    #[test]
    fn warning_within_five_minutes_of_expiry() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);
        mgr.login("ana@example.com", "hunter22", false).unwrap();

        clock.advance(Duration::hours(24) - Duration::minutes(4));
        mgr.record_activity();
        assert_eq!(mgr.check().unwrap(), SessionPhase::Warning);
        // Still signed in.
        assert!(mgr.user().is_some());
    }

    #[test]
    fn inactivity_beyond_30_minutes_forces_logout() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);
        mgr.login("ana@example.com", "hunter22", false).unwrap();

        clock.advance(Duration::minutes(31));
        assert_eq!(mgr.check().unwrap(), SessionPhase::Anonymous);
        assert!(mgr.user().is_none());
        // Inactivity is a plain logout, not an expiry.
        assert!(!mgr.is_expired());
        assert_eq!(mgr.vault().get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn activity_resets_the_inactivity_window() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);
        mgr.login("ana@example.com", "hunter22", false).unwrap();

        clock.advance(Duration::minutes(25));
        mgr.record_activity();
        clock.advance(Duration::minutes(25));
        assert_eq!(mgr.check().unwrap(), SessionPhase::Active);
    }

    #[test]
    fn expiry_forces_logout_and_sets_the_flag() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);
        mgr.login("ana@example.com", "hunter22", false).unwrap();

        clock.advance(Duration::hours(24) - Duration::minutes(1));
        mgr.record_activity();
        clock.advance(Duration::minutes(2));
        assert_eq!(mgr.check().unwrap(), SessionPhase::Expired);

        assert_eq!(mgr.phase(), SessionPhase::Anonymous);
        assert!(mgr.is_expired());
        assert_eq!(mgr.vault().get(EXPIRY_KEY).unwrap(), None);

        // The next login clears the flag.
        mgr.login("ana@example.com", "hunter22", false).unwrap();
        assert!(!mgr.is_expired());
    }

    #[test]
    fn refresh_extends_by_the_normal_duration() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);
        mgr.login("ana@example.com", "hunter22", false).unwrap();

        clock.advance(Duration::hours(24) - Duration::minutes(3));
        mgr.record_activity();
        assert_eq!(mgr.check().unwrap(), SessionPhase::Warning);

        assert!(mgr.refresh_session().unwrap());
        assert_eq!(
            mgr.session_expiry(),
            Some(clock.now() + Duration::hours(24))
        );
        assert_eq!(mgr.check().unwrap(), SessionPhase::Active);
    }

    #[test]
    fn declined_refresh_keeps_the_warning_state() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = SessionManager::new(
            Box::new(MemoryVault::new()),
            Box::new(clock.clone()),
            Box::new(SimulatedBackend::failing_renewals(std::time::Duration::ZERO)),
            SessionConfig::default(),
        );
        mgr.login("ana@example.com", "hunter22", false).unwrap();

        clock.advance(Duration::hours(24) - Duration::minutes(3));
        mgr.record_activity();
        let expiry_before = mgr.session_expiry();

        assert!(!mgr.refresh_session().unwrap());
        assert_eq!(mgr.session_expiry(), expiry_before);
        assert_eq!(mgr.check().unwrap(), SessionPhase::Warning);
    }

    #[test]
    fn explicit_logout_clears_everything() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);
        mgr.login("ana@example.com", "hunter22", false).unwrap();

        mgr.logout().unwrap();
        assert_eq!(mgr.phase(), SessionPhase::Anonymous);
        assert!(!mgr.is_expired());
        assert_eq!(mgr.vault().get(USER_KEY).unwrap(), None);
        assert_eq!(mgr.vault().get(EXPIRY_KEY).unwrap(), None);
    }

    #[test]
    fn activity_is_ignored_while_anonymous() {
        let clock = ManualClock::starting_at(start_time());
        let mut mgr = manager(&clock);
        clock.advance(Duration::hours(1));
        mgr.record_activity();
        assert_eq!(mgr.check().unwrap(), SessionPhase::Anonymous);
    }
}
