//! Process-scoped holder of the active snapshot.

use std::sync::Arc;

use arc_swap::ArcSwap;

use super::Snapshot;

/// Holds the current catalog snapshot and swaps it atomically.
///
/// Readers get an `Arc<Snapshot>` and keep using it for the whole request,
/// so a concurrent [`replace`](CatalogStore::replace) never leaves them
/// looking at a mix of old and new products.
#[derive(Debug)]
pub struct CatalogStore {
    current: ArcSwap<Snapshot>,
}

impl CatalogStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            current: ArcSwap::from_pointee(snapshot),
        }
    }

    pub fn empty() -> Self {
        Self::new(Snapshot::empty())
    }

    /// The active snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Install `snapshot` as the active one and return the previous snapshot.
    pub fn replace(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        self.current.swap(Arc::new(snapshot))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::empty()
    }
}
