//! Dealflow: core logic for a real-estate investment deal-tracking CRM.
//!
//! Dealflow provides the two logic units behind the deal-tracking UI,
//! plus the supporting calculators:
//! - A pure listing filter/sort engine for deal and contact records
//! - A session lifecycle manager with expiry, warning, and inactivity
//!   handling backed by durable key/value storage
//! - ROI and IRR/NPV investment calculators
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  UI / demo binary (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Catalog Layer │   │ Session Layer │   │ Calc Layer    │
//! │ (catalog/)    │   │ (session/)    │   │ (calc/)       │
//! │ - Filtering   │   │ - Lifecycle   │   │ - ROI         │
//! │ - Sorting     │   │ - Watchdog    │   │ - IRR / NPV   │
//! │ - View state  │   │ - Mock auth   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Storage Layers                            │
//! │  - Records and errors (domain/)                     │
//! │  - Key/value vault backends (storage/)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: listing filter/sort engine and per-view state
//! - [`domain`]: core record types (Deal, Contact, User, errors)
//! - [`session`]: session lifecycle manager, clock, watchdog, mock backend
//! - [`storage`]: durable key/value vault with JSON and in-memory backends
//! - [`calc`]: ROI and IRR calculators
//! - `observability`: tracing subscriber setup
//!
//! # Examples
//!
//! ## Filtering a listing
//!
//! ```
//! use dealflow::catalog::{FilterField, ListView, SortKey};
//! use dealflow::domain::sample_deals;
//!
//! let mut view = ListView::new(sample_deals());
//! view.toggle_filter(FilterField::Status, "Active");
//! view.set_sort(SortKey::parse("size"));
//!
//! for deal in view.results() {
//!     println!("{} ({})", deal.title, deal.deal_size);
//! }
//! ```
//!
//! ## Driving a session
//!
//! ```
//! use dealflow::session::{SessionConfig, SessionManager, SimulatedBackend, SystemClock};
//! use dealflow::storage::MemoryVault;
//! use std::time::Duration;
//!
//! let mut session = SessionManager::new(
//!     Box::new(MemoryVault::new()),
//!     Box::new(SystemClock),
//!     Box::new(SimulatedBackend::new(Duration::ZERO)),
//!     SessionConfig::default(),
//! );
//! session.restore()?;
//!
//! assert!(session.login("ana@example.com", "hunter22", false)?);
//! session.record_activity();
//! session.check()?;
//! session.logout()?;
//! # Ok::<(), dealflow::domain::DealflowError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Pure filtering
//!
//! The engine is a pure function of `(records, search, filters, sort)` and
//! is re-run in full after every mutation. Record lists here are small UI
//! listings; recomputing beats caching invalidation.
//!
//! ## Explicit session lifecycle
//!
//! Nothing in the session layer registers global listeners or timers. The
//! application owns a [`session::SessionManager`], starts a
//! [`session::Watchdog`] on login, stops it on logout, and reports user
//! interactions explicitly. All collaborators (vault, clock, backend) are
//! trait objects injected at construction.

pub mod calc;
pub mod catalog;
pub mod domain;
pub mod observability;
pub mod session;
pub mod storage;

pub use catalog::{filter_and_sort, FilterField, FilterState, ListView, SizeBounds, SortKey};
pub use domain::{
    sample_contacts, sample_deals, Contact, Deal, DealStatus, DealflowError, InvestmentType,
    Result, RiskProfile, User, UserRole,
};
pub use observability::init_tracing;
pub use session::{
    AuthBackend, SessionConfig, SessionManager, SessionPhase, SimulatedBackend, SystemClock,
    Watchdog,
};
pub use storage::{JsonVault, MemoryVault, Vault};
