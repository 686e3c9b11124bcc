//! Query engine - filter, sort and limit over a catalog snapshot.
//!
//! Every operation here is a pure function of one [`Snapshot`](crate::Snapshot),
//! so callers load the snapshot once and run all their reads against it.

mod engine;
mod types;

pub use engine::{by_id, distinct_categories, price_value, query, sort_products, stats};
pub use types::*;
