//! Book record type.

use serde::Serialize;
use shelf_common::BookId;

/// A book record owned by the catalog.
///
/// Id and title are fixed at construction. The title is the ordering key
/// of the BST index; mutating it after insertion would corrupt tree
/// ordering, so no setter exists. Availability is the only mutable field
/// and defaults to available.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    available: bool,
}

impl Book {
    /// Creates a new, available book.
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }

    /// Primary key.
    #[inline]
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Title, the ordered-index key.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author.
    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns true if the book is on the shelf.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Sets the availability flag. Crate-internal; callers go through
    /// [`Catalog::checkout`](crate::Catalog::checkout) and
    /// [`Catalog::return_book`](crate::Catalog::return_book).
    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} | {} | {}",
            self.id,
            self.title,
            self.author,
            if self.available { "Available" } else { "Checked Out" }
        )
    }
}
