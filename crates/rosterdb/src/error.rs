//! Error types for the repository layer.

use rosterdb_core::CoreError;
use rosterdb_store::StoreError;
use thiserror::Error;

/// Errors that can occur in repository operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A domain value or query input failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A core type error occurred.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A storage structure error occurred (array bounds, hash overflow).
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// An event refers to a person that does not exist.
    #[error("event references a missing person: {key}")]
    UnknownPerson {
        /// The unresolved composite key.
        key: String,
    },

    /// A person still has events and cannot be deleted.
    #[error("person still has events recorded: {key}")]
    PersonHasEvents {
        /// The person's composite key.
        key: String,
    },

    /// Bulk-loaded data violates referential integrity.
    #[error("dangling event reference: {key}")]
    Integrity {
        /// The dangling composite key.
        key: String,
    },
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, Error>;
