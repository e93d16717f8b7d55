//! Identifier types for ShelfDB records.

use serde::{Deserialize, Serialize};

/// Unique primary key for a book record.
///
/// Ids are assigned by the caller at creation time and are immutable for
/// the life of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub u32);

impl BookId {
    /// Creates a new book id.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Non-owning handle to a record slot in the owning store.
///
/// Indexes store `RecordId` values instead of references or raw addresses.
/// Slots are append-only and never relocated, so a handle stays valid for
/// the lifetime of the store that issued it. A handle carries no
/// destruction responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(u32);

impl RecordId {
    /// Invalid record handle.
    pub const INVALID: RecordId = RecordId(u32::MAX);

    /// Creates a handle from a raw slot index.
    #[inline]
    pub const fn new(slot: u32) -> Self {
        Self(slot)
    }

    /// Returns the slot index this handle refers to.
    #[inline]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }

    /// Returns true if this is a valid record handle.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 != u32::MAX
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
