//! Common test utilities for in-process API testing.
//!
//! This module provides a test fixture that builds the full router around a
//! catalog fed either by the built-in product table or by a mock source.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use smartdisplay_core::{
    testing::MockProductSource, CatalogRefresher, CatalogStore, Config, ProductListing,
    ProductSource, StaticProductSource,
};
use smartdisplay_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use smartdisplay_core::testing::fixtures;

/// Test fixture for in-process API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_products() {
///     let fixture = TestFixture::new().await;
///     let response = fixture.get("/api/products?category=Processors").await;
///     assert_eq!(response.body["total"], 2);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Store behind the router, for direct assertions
    pub store: Arc<CatalogStore>,
    /// Mock source, when the fixture was built with one
    pub source: Option<Arc<MockProductSource>>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub raw: Vec<u8>,
    pub content_type: Option<String>,
}

impl TestFixture {
    /// Fixture backed by the built-in product table, already loaded.
    pub async fn new() -> Self {
        Self::build(Arc::new(StaticProductSource::new()), None).await
    }

    /// Fixture backed by a mock source seeded with `listings`, already loaded.
    pub async fn with_listings(listings: Vec<ProductListing>) -> Self {
        let source = Arc::new(MockProductSource::with_listings(listings));
        Self::build(source.clone(), Some(source)).await
    }

    async fn build(
        source: Arc<dyn ProductSource>,
        mock: Option<Arc<MockProductSource>>,
    ) -> Self {
        let store = Arc::new(CatalogStore::empty());
        let refresher = Arc::new(CatalogRefresher::new(source, Arc::clone(&store)));
        refresher
            .refresh()
            .await
            .expect("Initial refresh failed");

        let state = Arc::new(AppState::new(Config::default(), refresher));
        let router = create_router(state);

        Self {
            router,
            store,
            source: mock,
        }
    }

    /// The mock source; panics if the fixture uses the built-in table.
    pub fn mock(&self) -> &MockProductSource {
        self.source.as_deref().expect("Fixture has no mock source")
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path).await
    }

    /// Send a POST request without a body.
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request("POST", path).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let raw = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        let body: Value = if raw.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&raw).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            body,
            raw,
            content_type,
        }
    }
}

/// Titles of the products in a `/api/products` response body.
pub fn titles(body: &Value) -> Vec<String> {
    body["products"]
        .as_array()
        .expect("products is not an array")
        .iter()
        .map(|p| p["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
