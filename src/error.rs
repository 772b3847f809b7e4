//! Error types for the contact import/export codec.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while importing or exporting contacts.
///
/// Structural problems with an upload (`BadRequest`) and a missing owner
/// (`NotFound`) abort the whole call before anything is persisted.
#[derive(Error, Debug)]
pub enum TransferError {
    /// Referenced user does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Upload is empty, too large or structurally malformed
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Serializing contacts failed
    #[error("Export failed: {0}")]
    Export(String),

    /// The store rejected or failed to commit a write
    #[error("Storage error: {0}")]
    Storage(String),

    /// A domain value failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransferError {
    /// Whether the error is the caller's fault (404/400-class).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TransferError::NotFound(_) | TransferError::BadRequest(_) | TransferError::Validation(_)
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with TransferError
pub type TransferResult<T> = Result<T, TransferError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
