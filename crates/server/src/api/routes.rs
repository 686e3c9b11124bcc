use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers, middleware::metrics_middleware, page, products};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Catalog reads
        .route("/products", get(products::list_products))
        .route("/categories", get(products::list_categories))
        .route("/product/{id}", get(products::get_product))
        .route("/stats", get(products::get_stats))
        // Refresh
        .route("/refresh", post(products::refresh_catalog))
        // Config
        .route("/config", get(handlers::get_config));

    Router::new()
        .route("/", get(page::index))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .nest("/api", api_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
