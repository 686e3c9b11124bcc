//! Types for product queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest accepted result limit.
pub const MIN_LIMIT: u32 = 1;
/// Largest accepted result limit.
pub const MAX_LIMIT: u32 = 100;
/// Limit used when the caller doesn't give one.
pub const DEFAULT_LIMIT: u32 = 50;

/// A result limit known to be within `MIN_LIMIT..=MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QueryLimit(u32);

impl QueryLimit {
    pub fn new(value: i64) -> Result<Self, QueryError> {
        if value < i64::from(MIN_LIMIT) || value > i64::from(MAX_LIMIT) {
            return Err(QueryError::LimitOutOfRange(value));
        }
        Ok(Self(value as u32))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for QueryLimit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

/// Key to order query results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Lexicographic by title.
    Title,
    /// By the digits of the price string read as a number.
    Price,
    /// Lexicographic by category.
    Category,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Price => "price",
            SortKey::Category => "category",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortKey::Title),
            "price" => Ok(SortKey::Price),
            "category" => Ok(SortKey::Category),
            other => Err(QueryError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Filter, sort and limit parameters for [`query`](super::query).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Keep products whose category equals this, ignoring case.
    pub category: Option<String>,
    /// Keep products whose title or description contains this, ignoring case.
    pub search: Option<String>,
    pub limit: QueryLimit,
    /// None keeps snapshot order.
    pub sort: Option<SortKey>,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category. Blank values are ignored.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category.into());
        self
    }

    /// Filter by search term. Blank values are ignored.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = non_blank(search.into());
        self
    }

    pub fn with_limit(mut self, limit: QueryLimit) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Errors for building queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("limit must be between 1 and 100, got {0}")]
    LimitOutOfRange(i64),

    #[error("unknown sort key '{0}' (expected title, price or category)")]
    UnknownSortKey(String),
}
