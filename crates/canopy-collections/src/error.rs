//! Error types for the sequence containers.

use thiserror::Error;

/// Errors that can occur on container operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// Index is outside the valid range for the operation.
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Removal by value did not find the value.
    #[error("value not found")]
    NotFound,
}
