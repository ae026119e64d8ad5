//! Durable key/value storage abstraction.
//!
//! The session manager persists exactly two keys (the serialized user
//! identity and the RFC 3339 session expiry) through this trait, so the
//! persistence medium can be swapped without touching session logic.
//!
//! # Design Philosophy
//!
//! The trait is intentionally the minimal `get`/`set`/`remove` surface of a
//! browser-style key/value store, not a generic database. Each method maps
//! directly to one session-manager use case.

use crate::domain::error::Result;

/// Abstraction over durable client-side key/value storage.
///
/// # Implementations
///
/// - [`JsonVault`](crate::storage::JsonVault): JSON file with atomic writes
/// - [`MemoryVault`](crate::storage::MemoryVault): in-memory, for tests and demos
pub trait Vault: Send {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` if present. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove(&mut self, key: &str) -> Result<()>;
}
