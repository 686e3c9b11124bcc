//! Product sources and the catalog refresher.
//!
//! A [`ProductSource`] yields raw listings; the [`CatalogRefresher`] turns
//! them into a new snapshot (ids, timestamps) and swaps it into the store.

mod refresher;
mod static_source;

pub use refresher::{CatalogRefresher, RefreshError, RefreshOutcome};
pub use static_source::{reference_listings, StaticProductSource};

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::ProductListing;
use crate::config::{CatalogConfig, SourceBackend};

/// Errors a product source can report.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed listing: {0}")]
    Malformed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Anything that can produce a full set of product listings.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Name of this source, for logs.
    fn name(&self) -> &str;

    /// Fetch every listing, in display order.
    async fn fetch(&self) -> Result<Vec<ProductListing>, SourceError>;
}

/// Factory function to create the configured product source
pub fn create_source(config: &CatalogConfig) -> Arc<dyn ProductSource> {
    match config.source {
        SourceBackend::Static => Arc::new(StaticProductSource::new()),
    }
}
