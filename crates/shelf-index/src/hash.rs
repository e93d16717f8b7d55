//! Chained hash index over book ids.

use shelf_common::{BookId, RecordId};

/// Hash index mapping a book id to its record handle.
///
/// Fixed bucket count chosen at construction (a prime keeps sequential ids
/// spread across buckets). Each bucket is a chain of `(id, handle)` pairs
/// in append order. The index performs no uniqueness check on insert;
/// enforcing one id per record is the catalog's responsibility.
#[derive(Debug)]
pub struct HashIndex {
    /// Bucket chains; entry appended to `buckets[id mod bucket_count]`.
    buckets: Vec<Vec<(BookId, RecordId)>>,
    /// Number of entries across all buckets.
    len: usize,
}

impl HashIndex {
    /// Creates a new index with the given bucket count.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero. Callers construct through a
    /// validated [`CatalogConfig`](shelf_common::CatalogConfig).
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket_count must be non-zero");
        Self {
            buckets: vec![Vec::new(); bucket_count],
            len: 0,
        }
    }

    /// Bucket selection: `id mod bucket_count`.
    #[inline]
    fn bucket_of(&self, id: BookId) -> usize {
        id.raw() as usize % self.buckets.len()
    }

    /// Registers a record handle under `id`.
    ///
    /// Appends to the bucket chain without checking for an existing entry.
    pub fn insert(&mut self, id: BookId, record: RecordId) {
        let bucket = self.bucket_of(id);
        self.buckets[bucket].push((id, record));
        self.len += 1;
    }

    /// Point lookup by id.
    ///
    /// Scans the single bucket the id maps to and returns the first match.
    /// O(1) average with a bounded load factor, O(n) when all ids are
    /// congruent mod the bucket count.
    pub fn search(&self, id: BookId) -> Option<RecordId> {
        let bucket = self.bucket_of(id);
        self.buckets[bucket]
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, record)| *record)
    }

    /// Returns true if an entry for `id` exists.
    #[inline]
    pub fn contains(&self, id: BookId) -> bool {
        self.search(id).is_some()
    }

    /// Number of entries in the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the index holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest bucket chain. Diagnostic only.
    pub fn max_chain_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> BookId {
        BookId::new(n)
    }

    #[test]
    fn test_empty_index() {
        let index = HashIndex::new(101);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.bucket_count(), 101);
        assert_eq!(index.search(id(1001)), None);
        assert!(!index.contains(id(1001)));
    }

    #[test]
    fn test_insert_and_search() {
        let mut index = HashIndex::new(101);
        index.insert(id(1001), RecordId::new(0));
        index.insert(id(2042), RecordId::new(1));

        assert_eq!(index.len(), 2);
        assert_eq!(index.search(id(1001)), Some(RecordId::new(0)));
        assert_eq!(index.search(id(2042)), Some(RecordId::new(1)));
        assert_eq!(index.search(id(9999)), None);
    }

    #[test]
    fn test_colliding_ids_chain_in_one_bucket() {
        // 5, 106, 207 are all congruent mod 101.
        let mut index = HashIndex::new(101);
        index.insert(id(5), RecordId::new(0));
        index.insert(id(106), RecordId::new(1));
        index.insert(id(207), RecordId::new(2));

        assert_eq!(index.max_chain_len(), 3);
        assert_eq!(index.search(id(5)), Some(RecordId::new(0)));
        assert_eq!(index.search(id(106)), Some(RecordId::new(1)));
        assert_eq!(index.search(id(207)), Some(RecordId::new(2)));
        assert_eq!(index.search(id(308)), None);
    }

    #[test]
    fn test_duplicate_insert_first_match_wins() {
        // The index itself does not enforce uniqueness; the first entry in
        // the chain shadows later ones on lookup.
        let mut index = HashIndex::new(101);
        index.insert(id(7), RecordId::new(0));
        index.insert(id(7), RecordId::new(1));

        assert_eq!(index.len(), 2);
        assert_eq!(index.search(id(7)), Some(RecordId::new(0)));
    }

    #[test]
    fn test_single_bucket_degenerate() {
        let mut index = HashIndex::new(1);
        for n in 0..32 {
            index.insert(id(n), RecordId::new(n));
        }
        assert_eq!(index.max_chain_len(), 32);
        for n in 0..32 {
            assert_eq!(index.search(id(n)), Some(RecordId::new(n)));
        }
    }

    #[test]
    #[should_panic(expected = "bucket_count must be non-zero")]
    fn test_zero_buckets_panics() {
        let _ = HashIndex::new(0);
    }
}
