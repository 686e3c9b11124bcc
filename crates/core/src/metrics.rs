//! Prometheus metrics for core components.
//!
//! This module provides metrics for catalog refreshes and the size of the
//! active snapshot.

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, IntGauge, Opts};

/// Catalog refreshes by outcome ("success", "failure").
pub static CATALOG_REFRESHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "smartdisplay_catalog_refreshes_total",
            "Total catalog refresh attempts",
        ),
        &["outcome"],
    )
    .unwrap()
});

/// Time spent fetching listings and building a snapshot.
pub static CATALOG_REFRESH_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "smartdisplay_catalog_refresh_duration_seconds",
            "Duration of catalog refreshes",
        )
        .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
    )
    .unwrap()
});

/// Products in the active snapshot.
pub static CATALOG_PRODUCTS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "smartdisplay_catalog_products",
        "Number of products in the active catalog snapshot",
    )
    .unwrap()
});

/// Get all core metrics for registration.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CATALOG_REFRESHES.clone()),
        Box::new(CATALOG_REFRESH_DURATION.clone()),
        Box::new(CATALOG_PRODUCTS.clone()),
    ]
}
