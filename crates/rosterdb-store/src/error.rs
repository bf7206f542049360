//! Error types for the storage structures.

use thiserror::Error;

/// Errors that can occur in the storage structures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An array access beyond the current length.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The array length at the time of the access.
        len: usize,
    },

    /// The hash table has no free slot left for a new entry.
    ///
    /// Capacity is fixed at construction; the table never resizes.
    #[error("hash table overflow: capacity {capacity} exhausted")]
    TableOverflow {
        /// The fixed table capacity.
        capacity: usize,
    },

    /// An equal key was found while probing for an insert position.
    #[error("key already present: {key}")]
    DuplicateKey {
        /// The rendered duplicate key.
        key: String,
    },
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
