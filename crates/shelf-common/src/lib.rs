//! ShelfDB common types, errors, and configuration.
//!
//! This crate provides shared definitions used across all ShelfDB components.

pub mod config;
pub mod error;
pub mod types;

pub use config::CatalogConfig;
pub use error::{Result, ShelfError};
pub use types::{BookId, RecordId};
