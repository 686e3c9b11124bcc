use std::sync::Arc;

use smartdisplay_core::{CatalogRefresher, CatalogStore, Config, Snapshot};

/// Shared application state
pub struct AppState {
    config: Config,
    store: Arc<CatalogStore>,
    refresher: Arc<CatalogRefresher>,
}

impl AppState {
    pub fn new(config: Config, refresher: Arc<CatalogRefresher>) -> Self {
        Self {
            config,
            store: Arc::clone(refresher.store()),
            refresher,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The snapshot a request should run all its reads against.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.store.snapshot()
    }

    pub fn refresher(&self) -> &CatalogRefresher {
        self.refresher.as_ref()
    }
}
