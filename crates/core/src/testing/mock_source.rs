//! Mock product source for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::ProductListing;
use crate::source::{ProductSource, SourceError};

/// Mock implementation of the ProductSource trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable listings
/// - Count fetches for assertions
/// - Simulate one-off or permanent failures
///
/// # Example
///
/// ```rust,ignore
/// use smartdisplay_core::testing::{MockProductSource, fixtures};
///
/// let source = MockProductSource::new();
/// source.set_listings(vec![fixtures::listing("Widget", "Gadgets")]).await;
/// source.set_next_error(SourceError::Unavailable("down".into())).await;
///
/// assert!(source.fetch().await.is_err());
/// assert_eq!(source.fetch().await.unwrap().len(), 1);
/// assert_eq!(source.fetch_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockProductSource {
    listings: Arc<RwLock<Vec<ProductListing>>>,
    /// If set, the next fetch fails with this error.
    next_error: Arc<RwLock<Option<SourceError>>>,
    /// If true, every fetch fails.
    always_fail: Arc<RwLock<bool>>,
    fetches: AtomicUsize,
}

impl MockProductSource {
    /// Create a mock source with no listings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source with predefined listings.
    pub fn with_listings(listings: Vec<ProductListing>) -> Self {
        Self {
            listings: Arc::new(RwLock::new(listings)),
            ..Self::default()
        }
    }

    /// Replace the listings returned by subsequent fetches.
    pub async fn set_listings(&self, listings: Vec<ProductListing>) {
        *self.listings.write().await = listings;
    }

    /// Make the next fetch fail.
    pub async fn set_next_error(&self, error: SourceError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make every fetch fail (or stop failing).
    pub async fn set_always_fail(&self, fail: bool) {
        *self.always_fail.write().await = fail;
    }

    /// Number of fetches made so far, including failed ones.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductSource for MockProductSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<Vec<ProductListing>, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }
        if *self.always_fail.read().await {
            return Err(SourceError::Unavailable("mock source is down".to_string()));
        }

        Ok(self.listings.read().await.clone())
    }
}
