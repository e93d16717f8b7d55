//! Append-only owning store for book records.

use crate::book::Book;
use shelf_common::RecordId;

/// The single owner of all book records.
///
/// Slots are append-only: a record's slot index is issued once at insert
/// and never reused or relocated, so a [`RecordId`] stays valid for the
/// store's lifetime. Records are dropped in bulk when the store is
/// dropped; nothing else ever destroys one.
#[derive(Debug, Default)]
pub struct BookStore {
    slots: Vec<Book>,
}

impl BookStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates an empty store with capacity for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Takes ownership of `book` and returns the handle to its slot.
    pub fn insert(&mut self, book: Book) -> RecordId {
        let record = RecordId::new(self.slots.len() as u32);
        self.slots.push(book);
        record
    }

    /// Resolves a handle to a record view.
    #[inline]
    pub fn get(&self, record: RecordId) -> Option<&Book> {
        self.slots.get(record.slot())
    }

    /// Resolves a handle to a mutable record.
    #[inline]
    pub fn get_mut(&mut self, record: RecordId) -> Option<&mut Book> {
        self.slots.get_mut(record.slot())
    }

    /// Number of records owned.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the store owns no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_common::BookId;

    #[test]
    fn test_empty_store() {
        let store = BookStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get(RecordId::new(0)).is_none());
        assert!(store.get(RecordId::INVALID).is_none());
    }

    #[test]
    fn test_insert_issues_sequential_handles() {
        let mut store = BookStore::new();
        let a = store.insert(Book::new(BookId::new(1), "A", "x"));
        let b = store.insert(Book::new(BookId::new(2), "B", "y"));

        assert_eq!(a, RecordId::new(0));
        assert_eq!(b, RecordId::new(1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(a).unwrap().title(), "A");
        assert_eq!(store.get(b).unwrap().title(), "B");
    }

    #[test]
    fn test_handles_stay_valid_across_growth() {
        let mut store = BookStore::with_capacity(1);
        let first = store.insert(Book::new(BookId::new(0), "first", "x"));
        for n in 1..200 {
            store.insert(Book::new(BookId::new(n), format!("t{n}"), "x"));
        }
        assert_eq!(store.get(first).unwrap().title(), "first");
    }

    #[test]
    fn test_get_mut_flips_availability() {
        let mut store = BookStore::new();
        let rec = store.insert(Book::new(BookId::new(1), "T", "A"));
        store.get_mut(rec).unwrap().set_available(false);
        assert!(!store.get(rec).unwrap().is_available());
    }

    #[test]
    fn test_iter_insertion_order() {
        let mut store = BookStore::new();
        store.insert(Book::new(BookId::new(3), "C", "x"));
        store.insert(Book::new(BookId::new(1), "A", "x"));
        let titles: Vec<_> = store.iter().map(Book::title).collect();
        assert_eq!(titles, vec!["C", "A"]);
    }
}
