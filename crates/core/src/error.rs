//! Core error model.

use thiserror::Error;

/// Result type used across the data model.
pub type CoreResult<T> = Result<T, CoreError>;

/// Data-model error.
///
/// Raised when a value cannot be constructed (bad input) or a result would
/// break one of its invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A value failed validation (e.g. a non-image MIME type).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A result invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
