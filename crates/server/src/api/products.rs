//! Product catalog API handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use smartdisplay_core::{query, Product, ProductQuery, QueryError, QueryLimit, SortKey};
use tracing::{debug, error};

use super::error::{ApiError, FieldError};
use crate::state::AppState;

/// Echoed as `category` when no category filter was given.
const ALL_CATEGORIES: &str = "All Categories";

// ============================================================================
// Request/Response types
// ============================================================================

/// Query parameters for listing products. Everything arrives as text so
/// bad values can be reported per field.
#[derive(Debug, Default)]
pub struct ProductListParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

impl ProductListParams {
    /// Collect raw query pairs. A repeated parameter keeps its last value;
    /// unknown parameters are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "category" => params.category = Some(value),
                "search" => params.search = Some(value),
                "limit" => params.limit = Some(value),
                "sort" => params.sort = Some(value),
                _ => {}
            }
        }
        params
    }

    /// Validate into a query, collecting every invalid field.
    pub fn into_query(self) -> Result<ProductQuery, Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut product_query = ProductQuery::new();

        if let Some(category) = self.category {
            product_query = product_query.with_category(category);
        }
        if let Some(search) = self.search {
            product_query = product_query.with_search(search);
        }

        if let Some(raw) = self.limit {
            match parse_limit(&raw) {
                Ok(limit) => product_query = product_query.with_limit(limit),
                Err(e) => errors.push(e),
            }
        }

        if let Some(raw) = self.sort.filter(|s| !s.is_empty()) {
            match raw.parse::<SortKey>() {
                Ok(key) => product_query = product_query.with_sort(key),
                Err(e) => errors.push(FieldError::query("sort", e.to_string(), "enum")),
            }
        }

        if errors.is_empty() {
            Ok(product_query)
        } else {
            Err(errors)
        }
    }
}

const INT_PARSING_MSG: &str =
    "Input should be a valid integer, unable to parse string as an integer";

/// Parse an optionally signed run of ASCII digits. Values beyond `i64`
/// saturate, so a huge number is still a number (out of range, not malformed).
pub fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(raw.parse::<i64>().unwrap_or(if raw.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

fn parse_limit(raw: &str) -> Result<QueryLimit, FieldError> {
    let value = parse_integer(raw)
        .ok_or_else(|| FieldError::query("limit", INT_PARSING_MSG, "int_parsing"))?;

    QueryLimit::new(value).map_err(|e| match e {
        QueryError::LimitOutOfRange(v) if v < 1 => FieldError::query(
            "limit",
            "Input should be greater than or equal to 1",
            "greater_than_equal",
        ),
        _ => FieldError::query(
            "limit",
            "Input should be less than or equal to 100",
            "less_than_equal",
        ),
    })
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    /// Number of products in this response.
    pub total: usize,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub message: String,
    pub total_products: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_products: usize,
    pub categories: BTreeMap<String, usize>,
    pub last_updated: DateTime<Utc>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/products
///
/// Filter, optionally sort, and limit the current catalog.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let Query(pairs) = pairs.map_err(|rejection| {
        ApiError::Validation(vec![FieldError {
            loc: vec!["query".to_string()],
            msg: rejection.body_text(),
            kind: "query_parsing".to_string(),
        }])
    })?;

    let product_query = ProductListParams::from_pairs(pairs)
        .into_query()
        .map_err(ApiError::Validation)?;
    let category = product_query
        .category
        .clone()
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());

    let snapshot = state.snapshot();
    let products = query::query(&snapshot, &product_query);
    debug!(
        category = %category,
        search = ?product_query.search,
        limit = product_query.limit.get(),
        matched = products.len(),
        "Product query"
    );

    Ok(Json(ProductListResponse {
        total: products.len(),
        products,
        category,
    }))
}

/// GET /api/categories
///
/// Sorted distinct categories of the current catalog.
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: query::distinct_categories(&state.snapshot()),
    })
}

/// GET /api/product/{id}
///
/// Any well-formed integer that names no product is a 404, however large.
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_integer(&raw).ok_or_else(|| {
        ApiError::Validation(vec![FieldError::path(
            "product_id",
            INT_PARSING_MSG,
            "int_parsing",
        )])
    })?;

    query::by_id(&state.snapshot(), id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))
}

/// GET /api/stats
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let stats = query::stats(&state.snapshot());
    Json(StatsResponse {
        total_products: stats.total,
        categories: stats.per_category,
        last_updated: stats.generated_at,
    })
}

/// POST /api/refresh
///
/// Regenerate the catalog and swap it in.
pub async fn refresh_catalog(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RefreshResponse>, ApiError> {
    match state.refresher().refresh().await {
        Ok(outcome) => Ok(Json(RefreshResponse {
            message: "Data refreshed successfully".to_string(),
            total_products: outcome.total_products,
        })),
        Err(e) => {
            error!("Refresh request failed: {}", e);
            Err(ApiError::Internal(format!("Failed to refresh data: {}", e)))
        }
    }
}
