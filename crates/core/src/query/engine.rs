//! Read-only operations over one catalog snapshot.

use std::collections::{BTreeMap, BTreeSet};

use super::{ProductQuery, SortKey};
use crate::catalog::{CatalogStats, Product, Snapshot};

/// Run a query against a snapshot.
///
/// Filters compose with AND. Without a sort key the result is a prefix of
/// the snapshot's matching products in snapshot order; with one, matches are
/// stably sorted before truncation so equal keys keep snapshot order.
pub fn query(snapshot: &Snapshot, query: &ProductQuery) -> Vec<Product> {
    let category = query.category.as_deref().map(str::to_lowercase);
    let search = query.search.as_deref().map(str::to_lowercase);

    let mut matches: Vec<&Product> = snapshot
        .products()
        .iter()
        .filter(|p| category.as_deref().is_none_or(|c| matches_category(p, c)))
        .filter(|p| search.as_deref().is_none_or(|s| matches_search(p, s)))
        .collect();

    if let Some(key) = query.sort {
        sort_products(&mut matches, key);
    }

    matches
        .into_iter()
        .take(query.limit.get())
        .cloned()
        .collect()
}

/// Stable sort by `key`.
pub fn sort_products(products: &mut [&Product], key: SortKey) {
    match key {
        SortKey::Title => products.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Price => products.sort_by_key(|p| price_value(&p.price)),
        SortKey::Category => products.sort_by(|a, b| a.category.cmp(&b.category)),
    }
}

/// Numeric value of a display price: all non-digit characters are dropped
/// and the rest read as an integer. No digits reads as 0.
pub fn price_value(price: &str) -> u64 {
    price
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

/// All categories in the snapshot, sorted and deduplicated.
pub fn distinct_categories(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .products()
        .iter()
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Look up a product by id.
pub fn by_id(snapshot: &Snapshot, id: i64) -> Option<Product> {
    snapshot
        .products()
        .iter()
        .find(|p| i64::from(p.id) == id)
        .cloned()
}

/// Total and per-category product counts.
pub fn stats(snapshot: &Snapshot) -> CatalogStats {
    let mut per_category = BTreeMap::new();
    for product in snapshot.products() {
        *per_category.entry(product.category.clone()).or_insert(0) += 1;
    }

    CatalogStats {
        total: snapshot.len(),
        per_category,
        generated_at: snapshot.generated_at(),
    }
}

fn matches_category(product: &Product, category_lower: &str) -> bool {
    product.category.to_lowercase() == category_lower
}

fn matches_search(product: &Product, term_lower: &str) -> bool {
    product.title.to_lowercase().contains(term_lower)
        || product.description.to_lowercase().contains(term_lower)
}
