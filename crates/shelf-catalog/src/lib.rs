//! ShelfDB catalog: the owning record store and its lookup facade.
//!
//! The [`Catalog`] owns every [`Book`] in a [`BookStore`] arena and keeps
//! two non-owning indexes over it: a hash index for exact id lookup and a
//! BST for ordered title lookup and sorted listing. All mutation goes
//! through the catalog; lookups hand out `&Book` views that borrow it, so
//! no view can outlive the records it points at.

pub mod book;
pub mod catalog;
pub mod store;

pub use book::Book;
pub use catalog::Catalog;
pub use store::BookStore;
