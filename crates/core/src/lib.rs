pub mod catalog;
pub mod config;
pub mod metrics;
pub mod query;
pub mod source;
pub mod testing;

pub use catalog::{CatalogStats, CatalogStore, Product, ProductListing, Snapshot};
pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, CatalogConfig,
    Config, ConfigError, ServerConfig, SourceBackend,
};
pub use query::{ProductQuery, QueryError, QueryLimit, SortKey};
pub use source::{
    create_source, CatalogRefresher, ProductSource, RefreshError, RefreshOutcome, SourceError,
    StaticProductSource,
};
