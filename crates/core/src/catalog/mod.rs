//! Product catalog - the in-memory snapshot of products and its store.
//!
//! A snapshot is built in one go and never mutated afterwards; refreshing
//! the catalog means building a new snapshot and swapping it into the
//! [`CatalogStore`].

mod store;
mod types;

pub use store::CatalogStore;
pub use types::*;
