//! CLI error type.

use shelf_common::ShelfError;
use thiserror::Error;

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the interactive front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Shelf(#[from] ShelfError),
}
