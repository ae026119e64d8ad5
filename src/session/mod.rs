//! Session lifecycle: state machine, clock, simulated backend, watchdog.
//!
//! The pieces compose explicitly rather than through globals: the
//! application constructs a [`SessionManager`] over a vault, clock, and
//! backend, restores any persisted session at startup, and runs a
//! [`Watchdog`] only while someone is signed in.

pub mod backend;
pub mod clock;
pub mod config;
pub mod manager;
pub mod watchdog;

pub use backend::{AuthBackend, SimulatedBackend, MIN_PASSWORD_LEN};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SessionConfig;
pub use manager::{SessionManager, SessionPhase, EXPIRY_KEY, USER_KEY};
pub use watchdog::Watchdog;
