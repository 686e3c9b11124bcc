//! The browser front end.
//!
//! The embedded script re-implements search and sorting client side. It is a
//! second copy of `smartdisplay_core::query` and has to stay in step with it:
//! case-insensitive substring search over title and description, a stable
//! sort, and prices compared by their digits only. The script reads those
//! digits with `Number(..)`, which loses precision past 2^53, while
//! `price_value` saturates at `u64::MAX`; the two only agree for prices
//! below 2^53.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
