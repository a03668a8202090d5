//! Unified error types for the tracking backend.

use thiserror::Error;

/// Unified error type for the tracking backend.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Store-related error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Object store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input rejected before it reached the store.
    #[error("validation failed for {field}: {reason}")]
    Validation {
        /// The field that failed validation.
        field: &'static str,
        /// Reason for rejection.
        reason: String,
    },

    /// Lookup for an id no record has.
    #[error("no object with id {id}")]
    NotFound {
        /// The id that was requested.
        id: u64,
    },

    /// Backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Shorthand for a validation failure.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
