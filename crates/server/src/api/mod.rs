pub mod error;
pub mod handlers;
pub mod middleware;
pub mod page;
pub mod products;
pub mod routes;

pub use error::{ApiError, FieldError};
pub use routes::create_router;
