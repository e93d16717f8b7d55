//! Configuration structures for ShelfDB.

use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};

/// Default number of hash buckets. Prime, to spread sequential ids.
pub const DEFAULT_HASH_BUCKETS: usize = 101;

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Number of buckets in the exact-id hash index.
    pub hash_buckets: usize,
    /// Initial slot capacity of the owning record store.
    pub initial_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            hash_buckets: DEFAULT_HASH_BUCKETS,
            initial_capacity: 64,
        }
    }
}

impl CatalogConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.hash_buckets == 0 {
            return Err(ShelfError::InvalidConfig(
                "hash_buckets must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
