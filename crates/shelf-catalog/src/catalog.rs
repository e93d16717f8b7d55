//! Catalog facade coordinating the owning store and both indexes.

use crate::book::Book;
use crate::store::BookStore;
use shelf_common::{BookId, CatalogConfig, RecordId, Result, ShelfError};
use shelf_index::{HashIndex, TitleIndex};
use tracing::{debug, trace};

/// The catalog: sole owner of all book records plus the two lookup paths
/// over them.
///
/// Both indexes store [`RecordId`] handles into the owning store. The
/// indexes are fields of the catalog, so they can never outlive the
/// records they point at; teardown is one `Drop` of the whole value.
#[derive(Debug)]
pub struct Catalog {
    /// Owning record store. Records are created in `add_book` and dropped
    /// only when the catalog itself is dropped.
    store: BookStore,
    /// Exact-id lookup path.
    id_index: HashIndex,
    /// Ordered-title lookup path.
    title_index: TitleIndex,
}

impl Catalog {
    /// Creates a catalog with default configuration.
    pub fn new() -> Self {
        // Default config always validates.
        Self::with_config(CatalogConfig::default()).expect("default config is valid")
    }

    /// Creates a catalog with the given configuration.
    pub fn with_config(config: CatalogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: BookStore::with_capacity(config.initial_capacity),
            id_index: HashIndex::new(config.hash_buckets),
            title_index: TitleIndex::with_capacity(config.initial_capacity),
        })
    }

    /// Adds a new book to the catalog.
    ///
    /// Fails with [`ShelfError::DuplicateId`] if a record with `id` already
    /// exists; a rejected add mutates nothing. On success the catalog
    /// takes ownership of the new record and registers it in the id index
    /// and then the title index. A title equal to an already-indexed one
    /// leaves the new record reachable by id only (the earlier record
    /// shadows it in title lookups).
    pub fn add_book(
        &mut self,
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<RecordId> {
        if self.id_index.contains(id) {
            debug!(%id, "add rejected: duplicate id");
            return Err(ShelfError::DuplicateId { id });
        }

        let book = Book::new(id, title, author);
        let title_key = book.title().to_string();
        let record = self.store.insert(book);

        // Index insertion cannot fail, so no rollback path is needed.
        self.id_index.insert(id, record);
        let indexed = self.title_index.insert(&title_key, record);
        if !indexed {
            debug!(%id, title = %title_key, "duplicate title: ordered index entry shadowed");
        }

        debug!(%id, title = %title_key, %record, "book added");
        Ok(record)
    }

    /// Exact lookup by id. Delegates to the hash index.
    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        trace!(%id, "find_by_id");
        self.id_index.search(id).and_then(|record| self.store.get(record))
    }

    /// Lookup by exact title. Delegates to the title index; subject to
    /// duplicate-title shadowing.
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        trace!(title, "find_by_title");
        self.title_index
            .search(title)
            .and_then(|record| self.store.get(record))
    }

    /// Lazy listing of books in non-decreasing title order.
    ///
    /// Yields one book per distinct title; records whose title was
    /// shadowed at insert are omitted. Empty catalog yields an empty
    /// iterator.
    pub fn iter_by_title(&self) -> impl Iterator<Item = &Book> {
        self.title_index
            .iter()
            .filter_map(|(_, record)| self.store.get(record))
    }

    /// Marks the book checked out.
    ///
    /// Returns the previous availability, or `None` if no record with
    /// `id` exists.
    pub fn checkout(&mut self, id: BookId) -> Option<bool> {
        self.set_availability(id, false)
    }

    /// Marks the book returned to the shelf.
    ///
    /// Returns the previous availability, or `None` if no record with
    /// `id` exists.
    pub fn return_book(&mut self, id: BookId) -> Option<bool> {
        self.set_availability(id, true)
    }

    fn set_availability(&mut self, id: BookId, available: bool) -> Option<bool> {
        let record = self.id_index.search(id)?;
        let book = self.store.get_mut(record)?;
        let previous = book.is_available();
        book.set_available(available);
        debug!(%id, available, "availability changed");
        Some(previous)
    }

    /// Number of records owned, including ones shadowed in the title
    /// index.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the catalog owns no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of distinct titles reachable through the title index.
    #[inline]
    pub fn distinct_titles(&self) -> usize {
        self.title_index.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
