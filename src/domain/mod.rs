//! Core domain types: deals, contacts, users, errors, and seed data.

pub mod contact;
pub mod deal;
pub mod error;
pub mod samples;
pub mod user;

pub use contact::Contact;
pub use deal::{Deal, DealStatus, InvestmentType, RiskProfile};
pub use error::{DealflowError, Result};
pub use samples::{sample_contacts, sample_deals};
pub use user::{User, UserRole};
