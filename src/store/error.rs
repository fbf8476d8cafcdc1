//! Store error types
//!
//! Defines all errors that can occur while reading or writing persisted entries.

use thiserror::Error;

use crate::tracker::ValidationError;

/// Errors that can occur in the entry store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failed while writing a snapshot
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A persisted payload could not be parsed
    #[error("Corrupt data under key '{key}': {error}")]
    Corrupt { key: String, error: String },

    /// The storage medium refused the operation (quota, disabled storage, ...)
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Lock acquisition failed
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from submitting a form draft
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
