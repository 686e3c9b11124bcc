//! Testing utilities and mock implementations.
//!
//! Lets server and integration tests drive refreshes without depending on
//! the built-in product table.

mod mock_source;

pub use mock_source::MockProductSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::Utc;

    use crate::catalog::{ProductListing, Snapshot};

    /// Create a listing with reasonable defaults.
    pub fn listing(title: &str, category: &str) -> ProductListing {
        ProductListing {
            title: title.to_string(),
            description: format!("{} for testing", title),
            price: "₹1,000".to_string(),
            source: "Fixture".to_string(),
            link: format!(
                "https://example.com/{}",
                title.to_lowercase().replace(' ', "-")
            ),
            category: category.to_string(),
        }
    }

    /// Create a listing with a specific price string.
    pub fn priced_listing(title: &str, category: &str, price: &str) -> ProductListing {
        ProductListing {
            price: price.to_string(),
            ..listing(title, category)
        }
    }

    /// A snapshot of the given listings, generated now.
    pub fn snapshot(listings: Vec<ProductListing>) -> Snapshot {
        Snapshot::generate(listings, Utc::now())
    }
}
