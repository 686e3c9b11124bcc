//! Types for the product catalog.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// 1-based position in the snapshot that produced it.
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Display-formatted price (e.g. "₹32,999"), not a number.
    pub price: String,
    /// Where the listing came from.
    pub source: String,
    pub link: String,
    pub category: String,
    /// When the snapshot containing this product was generated.
    pub updated_at: DateTime<Utc>,
}

/// A raw listing as yielded by a product source, before ids and timestamps
/// are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    pub title: String,
    pub description: String,
    pub price: String,
    pub source: String,
    pub link: String,
    pub category: String,
}

impl ProductListing {
    /// Stamp this listing into a product.
    pub fn into_product(self, id: u32, updated_at: DateTime<Utc>) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            source: self.source,
            link: self.link,
            category: self.category,
            updated_at,
        }
    }
}

/// An immutable, fully-formed catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    products: Vec<Product>,
    generated_at: DateTime<Utc>,
}

impl Snapshot {
    /// Build a snapshot from listings, assigning ids 1..=N in order and
    /// stamping every product with `generated_at`.
    pub fn generate(listings: Vec<ProductListing>, generated_at: DateTime<Utc>) -> Self {
        let products = listings
            .into_iter()
            .zip(1u32..)
            .map(|(listing, id)| listing.into_product(id, generated_at))
            .collect();

        Self {
            products,
            generated_at,
        }
    }

    /// A snapshot with no products.
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    /// Products in declaration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Aggregate counts over one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub per_category: BTreeMap<String, usize>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, category: &str) -> ProductListing {
        ProductListing {
            title: title.to_string(),
            description: format!("{} description", title),
            price: "₹1,000".to_string(),
            source: "Test".to_string(),
            link: "https://example.com/x".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_generate_assigns_dense_ids() {
        let now = Utc::now();
        let snapshot = Snapshot::generate(
            vec![listing("a", "X"), listing("b", "Y"), listing("c", "X")],
            now,
        );

        let ids: Vec<u32> = snapshot.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(snapshot.products()[1].title, "b");
    }

    #[test]
    fn test_generate_stamps_all_products() {
        let now = Utc::now();
        let snapshot = Snapshot::generate(vec![listing("a", "X"), listing("b", "Y")], now);

        assert_eq!(snapshot.generated_at(), now);
        assert!(snapshot.products().iter().all(|p| p.updated_at == now));
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }

    #[test]
    fn test_product_serialization_shape() {
        let product = listing("Widget", "Gadgets").into_product(7, Utc::now());
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Widget");
        assert_eq!(json["price"], "₹1,000");
        assert_eq!(json["category"], "Gadgets");
        assert!(json["updated_at"].is_string());
    }
}
