//! Arena-based binary search tree over titles.
//!
//! Nodes live in a flat `Vec` arena and link to each other by index, so
//! the tree carries no heap pointer chains and teardown is a single arena
//! drop. Insert, search, and traversal are all iterative; traversal keeps
//! an explicit stack bounded by tree height, so a pathological
//! sorted-order insert (which degrades the tree to a linked list) cannot
//! overflow the call stack.

use shelf_common::RecordId;

/// Sentinel for an absent child or empty root.
const NULL_NODE: u32 = u32::MAX;

/// One tree node: the title key, the record handle, and child links.
///
/// The node stores its own copy of the title. Titles are immutable after
/// record creation, so the copy can never drift from the record it
/// indexes.
#[derive(Debug)]
struct Node {
    title: String,
    record: RecordId,
    left: u32,
    right: u32,
}

/// Ordered index mapping a title to its record handle.
///
/// Left subtree holds titles sorting strictly before a node's title, right
/// subtree strictly after. A title equal to an existing node's is silently
/// discarded: the first record inserted under a title owns it in this
/// index for good, even though later records with the same title remain in
/// the owning store and reachable by id. No rebalancing is performed.
#[derive(Debug)]
pub struct TitleIndex {
    /// Node arena; links are indices into this vector.
    nodes: Vec<Node>,
    /// Root node index, or `NULL_NODE` when empty.
    root: u32,
}

impl TitleIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: NULL_NODE,
        }
    }

    /// Creates an empty index with arena capacity for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: NULL_NODE,
        }
    }

    /// Allocates a leaf node in the arena and returns its index.
    fn alloc(&mut self, title: String, record: RecordId) -> u32 {
        let idx = self.nodes.len() as u32;
        self.nodes.push(Node {
            title,
            record,
            left: NULL_NODE,
            right: NULL_NODE,
        });
        idx
    }

    /// Inserts a record handle under `title`.
    ///
    /// Returns `true` if a node was created, `false` if an equal title was
    /// already present and the handle was discarded.
    pub fn insert(&mut self, title: &str, record: RecordId) -> bool {
        if self.root == NULL_NODE {
            self.root = self.alloc(title.to_string(), record);
            return true;
        }

        let mut current = self.root;
        loop {
            match title.cmp(self.nodes[current as usize].title.as_str()) {
                std::cmp::Ordering::Equal => return false,
                std::cmp::Ordering::Less => {
                    let left = self.nodes[current as usize].left;
                    if left == NULL_NODE {
                        let node = self.alloc(title.to_string(), record);
                        self.nodes[current as usize].left = node;
                        return true;
                    }
                    current = left;
                }
                std::cmp::Ordering::Greater => {
                    let right = self.nodes[current as usize].right;
                    if right == NULL_NODE {
                        let node = self.alloc(title.to_string(), record);
                        self.nodes[current as usize].right = node;
                        return true;
                    }
                    current = right;
                }
            }
        }
    }

    /// Point lookup by exact title.
    ///
    /// O(log N) expected on random insertion order, O(N) when insertion
    /// order was already sorted.
    pub fn search(&self, title: &str) -> Option<RecordId> {
        let mut current = self.root;
        while current != NULL_NODE {
            let node = &self.nodes[current as usize];
            match title.cmp(node.title.as_str()) {
                std::cmp::Ordering::Equal => return Some(node.record),
                std::cmp::Ordering::Less => current = node.left,
                std::cmp::Ordering::Greater => current = node.right,
            }
        }
        None
    }

    /// Lazy in-order traversal, yielding `(title, record)` in
    /// non-decreasing title order.
    ///
    /// Restartable: each call walks the tree from scratch.
    pub fn iter(&self) -> InOrderIter<'_> {
        let mut iter = InOrderIter {
            index: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Number of distinct titles indexed.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no titles are indexed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for TitleIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order tree iterator with an explicit node stack.
///
/// The stack holds the path of unvisited ancestors; its depth is bounded
/// by tree height.
pub struct InOrderIter<'a> {
    index: &'a TitleIndex,
    stack: Vec<u32>,
}

impl<'a> InOrderIter<'a> {
    /// Pushes `node` and its chain of left children onto the stack.
    fn push_left_spine(&mut self, mut node: u32) {
        while node != NULL_NODE {
            self.stack.push(node);
            node = self.index.nodes[node as usize].left;
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = (&'a str, RecordId);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let node: &'a Node = &self.index.nodes[current as usize];
        self.push_left_spine(node.right);
        Some((node.title.as_str(), node.record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    fn collect_titles(index: &TitleIndex) -> Vec<String> {
        index.iter().map(|(title, _)| title.to_string()).collect()
    }

    #[test]
    fn test_empty_index() {
        let index = TitleIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.search("anything"), None);
        assert_eq!(index.iter().count(), 0);
    }

    #[test]
    fn test_insert_and_search() {
        let mut index = TitleIndex::new();
        assert!(index.insert("Mid", RecordId::new(0)));
        assert!(index.insert("Abe", RecordId::new(1)));
        assert!(index.insert("Zed", RecordId::new(2)));

        assert_eq!(index.len(), 3);
        assert_eq!(index.search("Abe"), Some(RecordId::new(1)));
        assert_eq!(index.search("Mid"), Some(RecordId::new(0)));
        assert_eq!(index.search("Zed"), Some(RecordId::new(2)));
        assert_eq!(index.search("Nope"), None);
    }

    #[test]
    fn test_in_order_traversal_sorted() {
        let mut index = TitleIndex::new();
        for (i, title) in ["Mid", "Zed", "Abe", "Cat", "Yak"].iter().enumerate() {
            index.insert(title, RecordId::new(i as u32));
        }
        assert_eq!(collect_titles(&index), vec!["Abe", "Cat", "Mid", "Yak", "Zed"]);
    }

    #[test]
    fn test_traversal_restartable() {
        let mut index = TitleIndex::new();
        index.insert("B", RecordId::new(0));
        index.insert("A", RecordId::new(1));

        let first: Vec<_> = index.iter().map(|(_, r)| r).collect();
        let second: Vec<_> = index.iter().map(|(_, r)| r).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![RecordId::new(1), RecordId::new(0)]);
    }

    #[test]
    fn test_duplicate_title_silently_discarded() {
        let mut index = TitleIndex::new();
        assert!(index.insert("Clean Code", RecordId::new(0)));
        assert!(!index.insert("Clean Code", RecordId::new(1)));

        // First insertion owns the title; the second handle is gone.
        assert_eq!(index.len(), 1);
        assert_eq!(index.search("Clean Code"), Some(RecordId::new(0)));
        let entries: Vec<_> = index.iter().collect();
        assert_eq!(entries, vec![("Clean Code", RecordId::new(0))]);
    }

    #[test]
    fn test_sorted_insertion_degenerates_but_stays_correct() {
        // Worst case: already-sorted input builds a right spine. The
        // iterative walk must still produce every title in order.
        let mut index = TitleIndex::new();
        let titles: Vec<String> = (0..500).map(|n| format!("title-{n:04}")).collect();
        for (i, title) in titles.iter().enumerate() {
            assert!(index.insert(title, RecordId::new(i as u32)));
        }

        assert_eq!(index.len(), 500);
        assert_eq!(collect_titles(&index), titles);
        assert_eq!(index.search("title-0000"), Some(RecordId::new(0)));
        assert_eq!(index.search("title-0499"), Some(RecordId::new(499)));
    }

    #[test]
    fn test_reverse_sorted_insertion() {
        let mut index = TitleIndex::new();
        for n in (0..100).rev() {
            index.insert(&format!("t{n:03}"), RecordId::new(n));
        }
        let titles = collect_titles(&index);
        let mut expected = titles.clone();
        expected.sort();
        assert_eq!(titles, expected);
        assert_eq!(titles.len(), 100);
    }

    #[test]
    fn test_randomized_insert_search_traverse() {
        let mut rng = rand::rng();
        let mut titles: Vec<String> = (0..256).map(|n| format!("book-{n:03}")).collect();
        titles.shuffle(&mut rng);

        let mut index = TitleIndex::new();
        for (i, title) in titles.iter().enumerate() {
            assert!(index.insert(title, RecordId::new(i as u32)));
        }

        for (i, title) in titles.iter().enumerate() {
            assert_eq!(index.search(title), Some(RecordId::new(i as u32)));
        }

        let walked = collect_titles(&index);
        let mut expected = titles.clone();
        expected.sort();
        assert_eq!(walked, expected);
    }
}
