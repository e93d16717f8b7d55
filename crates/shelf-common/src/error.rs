//! Error types for ShelfDB.

use crate::types::BookId;
use thiserror::Error;

/// Result type alias using ShelfError.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Errors that can occur in ShelfDB operations.
///
/// Lookups that find nothing return `Option::None` rather than an error;
/// absence is an expected outcome, not a failure.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// A record with this id already exists in the catalog.
    #[error("Duplicate book id: {id}")]
    DuplicateId { id: BookId },

    /// Configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
