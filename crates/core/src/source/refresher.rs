//! Rebuilds the catalog from a product source.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::{ProductSource, SourceError};
use crate::catalog::{CatalogStore, Snapshot};
use crate::metrics::{CATALOG_PRODUCTS, CATALOG_REFRESHES, CATALOG_REFRESH_DURATION};

/// Errors for refresh operations.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("source '{source_name}' failed: {error}")]
    Source {
        source_name: String,
        #[source]
        error: SourceError,
    },
}

/// Result of a successful refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub total_products: usize,
    pub generated_at: DateTime<Utc>,
    pub duration: Duration,
}

/// Fetches listings from a source and swaps a freshly generated snapshot
/// into the store.
pub struct CatalogRefresher {
    source: Arc<dyn ProductSource>,
    store: Arc<CatalogStore>,
}

impl CatalogRefresher {
    pub fn new(source: Arc<dyn ProductSource>, store: Arc<CatalogStore>) -> Self {
        Self { source, store }
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Build a new snapshot and make it the active one.
    ///
    /// The fetch runs without touching the store; on failure the current
    /// snapshot stays in place.
    pub async fn refresh(&self) -> Result<RefreshOutcome, RefreshError> {
        let started = Instant::now();

        let listings = match self.source.fetch().await {
            Ok(listings) => listings,
            Err(error) => {
                CATALOG_REFRESHES.with_label_values(&["failure"]).inc();
                warn!(source = self.source.name(), %error, "Catalog refresh failed");
                return Err(RefreshError::Source {
                    source_name: self.source.name().to_string(),
                    error,
                });
            }
        };

        let snapshot = Snapshot::generate(listings, Utc::now());
        let total_products = snapshot.len();
        let generated_at = snapshot.generated_at();

        let previous = self.store.replace(snapshot);
        let duration = started.elapsed();

        CATALOG_REFRESHES.with_label_values(&["success"]).inc();
        CATALOG_REFRESH_DURATION.observe(duration.as_secs_f64());
        CATALOG_PRODUCTS.set(total_products as i64);

        info!(
            source = self.source.name(),
            total_products,
            previous_products = previous.len(),
            elapsed_ms = duration.as_millis() as u64,
            "Catalog refreshed"
        );

        Ok(RefreshOutcome {
            total_products,
            generated_at,
            duration,
        })
    }

    /// Refresh every `period` in a background task until `shutdown` flips to
    /// `true` (or its sender is dropped). Failures are logged and the
    /// previous snapshot stays active.
    pub fn spawn_periodic(
        self: Arc<Self>,
        period: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick fires immediately; the catalog is already fresh.
            ticker.tick().await;

            info!(period_secs = period.as_secs(), "Periodic catalog refresh started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(e) = self.refresh().await {
                            warn!("Periodic refresh failed, keeping previous snapshot: {}", e);
                        }
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            debug!("Periodic catalog refresh stopping");
                            break;
                        }
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticProductSource;
    use crate::testing::{fixtures, MockProductSource};

    #[tokio::test]
    async fn test_refresh_installs_reference_catalog() {
        let store = Arc::new(CatalogStore::empty());
        let refresher = CatalogRefresher::new(Arc::new(StaticProductSource::new()), store.clone());

        let outcome = refresher.refresh().await.unwrap();

        assert_eq!(outcome.total_products, 20);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 20);
        assert_eq!(snapshot.generated_at(), outcome.generated_at);
        let ids: Vec<u32> = snapshot.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_refresh_replaces_previous_snapshot() {
        let source = Arc::new(MockProductSource::with_listings(vec![
            fixtures::listing("Old A", "X"),
            fixtures::listing("Old B", "X"),
        ]));
        let store = Arc::new(CatalogStore::empty());
        let refresher = CatalogRefresher::new(source.clone(), store.clone());
        refresher.refresh().await.unwrap();

        source
            .set_listings(vec![
                fixtures::listing("New A", "Y"),
                fixtures::listing("New B", "Y"),
                fixtures::listing("New C", "Z"),
            ])
            .await;
        let outcome = refresher.refresh().await.unwrap();

        assert_eq!(outcome.total_products, 3);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.products()[0].title, "New A");
        assert_eq!(snapshot.products()[2].id, 3);
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let source = Arc::new(MockProductSource::with_listings(vec![fixtures::listing(
            "Keeper", "X",
        )]));
        let store = Arc::new(CatalogStore::empty());
        let refresher = CatalogRefresher::new(source.clone(), store.clone());
        refresher.refresh().await.unwrap();
        let before = store.snapshot();

        source
            .set_next_error(SourceError::Unavailable("upstream timed out".to_string()))
            .await;
        let err = refresher.refresh().await.unwrap_err();

        assert!(err.to_string().contains("upstream timed out"));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[tokio::test]
    async fn test_periodic_refresh_runs_and_stops() {
        let source = Arc::new(MockProductSource::with_listings(vec![fixtures::listing(
            "Tick", "X",
        )]));
        let store = Arc::new(CatalogStore::empty());
        let refresher = Arc::new(CatalogRefresher::new(source.clone(), store.clone()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = refresher.spawn_periodic(Duration::from_millis(10), shutdown_rx);

        tokio::time::timeout(Duration::from_secs(5), async {
            while source.fetch_count() < 2 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("periodic refresh never ran");

        shutdown_tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("periodic refresh did not stop")
            .unwrap();

        assert_eq!(store.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_periodic_refresh_survives_failures() {
        let source = Arc::new(MockProductSource::with_listings(vec![fixtures::listing(
            "Tick", "X",
        )]));
        source.set_always_fail(true).await;
        let store = Arc::new(CatalogStore::empty());
        let refresher = Arc::new(CatalogRefresher::new(source.clone(), store.clone()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = refresher.spawn_periodic(Duration::from_millis(10), shutdown_rx);

        tokio::time::timeout(Duration::from_secs(5), async {
            while source.fetch_count() < 3 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("periodic refresh stopped after a failure");

        drop(shutdown_tx);
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("periodic refresh did not stop")
            .unwrap();

        assert!(store.snapshot().is_empty());
    }
}
