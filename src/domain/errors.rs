//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is zero or not a number.
    InvalidId(String),

    /// The provided type tag is not a member of the enumeration.
    UnknownType {
        /// Name of the enumeration (e.g. "email", "phone")
        kind: &'static str,
        /// The rejected tag
        value: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "Invalid ID: {}", id),
            Self::UnknownType { kind, value } => {
                write!(f, "Unknown {} type: {}", kind, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
