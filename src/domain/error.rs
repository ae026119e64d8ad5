//! Error types for the dealflow crate.
//!
//! This module defines the centralized error type [`DealflowError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for dealflow operations.
///
/// This enum consolidates all error conditions that can occur in the core,
/// from vault persistence to configuration parsing. Most variants wrap
/// underlying errors from external crates using `#[from]` for automatic
/// conversion.
///
/// Note that *expected* failures never surface here: a failed login returns
/// `Ok(false)`, a malformed numeric filter input coerces to zero, and a
/// declined session renewal leaves the session in its warning state. Only
/// genuinely broken collaborators (unreadable vault file, invalid config)
/// produce an error.
#[derive(Debug, Error)]
pub enum DealflowError {
    /// Vault (durable key/value storage) operation failed.
    ///
    /// Occurs when reading from or writing to the storage backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or cannot be parsed.
    ///
    /// Occurs when a session configuration file contains invalid TOML or
    /// out-of-range values. The string contains a description of the problem.
    #[error("Config error: {0}")]
    Config(String),

    /// The simulated auth backend failed in an unexpected way.
    ///
    /// Distinct from a *declined* login or renewal, which is reported as
    /// `Ok(false)` by the session manager.
    #[error("Auth backend error: {0}")]
    Backend(String),
}

/// A convenient type alias for `Result<T, DealflowError>`.
pub type Result<T> = std::result::Result<T, DealflowError>;
