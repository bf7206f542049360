//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur while constructing or parsing domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value failed domain validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A textual record could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
