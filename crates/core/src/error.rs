//! Store error model.

use thiserror::Error;

/// Result type used across the store crates.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Every variant is a local, synchronous, non-retryable outcome reported once
/// to the immediate caller. None is fatal to the process; the in-memory
/// stores have no "unavailable" failure mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The session is missing or does not carry the admin role.
    #[error("unauthorized")]
    Unauthorized,

    /// An item with the same identifier already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// No item carries the requested identifier.
    #[error("not found")]
    NotFound,

    /// A required field is missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl StoreError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
