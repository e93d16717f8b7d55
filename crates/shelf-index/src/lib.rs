//! Index structures for ShelfDB.
//!
//! This crate provides the two lookup paths over the catalog's owning
//! record store:
//!
//! - [`HashIndex`] — chained hash index over book ids. O(1) average
//!   point lookup, O(n) worst case when ids collide into one bucket.
//! - [`TitleIndex`] — binary search tree over titles, nodes held in a
//!   flat arena and addressed by index. O(log N) average lookup and lazy
//!   in-order traversal; degrades to O(N) on sorted insertion order (no
//!   rebalancing is performed).
//!
//! Both indexes store [`RecordId`](shelf_common::RecordId) handles into
//! the owning store, never references. Neither index supports removal;
//! uniqueness of ids is enforced by the catalog layer, not here.

pub mod bst;
pub mod hash;

pub use bst::{InOrderIter, TitleIndex};
pub use hash::HashIndex;
