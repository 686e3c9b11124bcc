use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8000
}

/// Catalog configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Where refreshed product listings come from
    #[serde(default)]
    pub source: SourceBackend,
    /// Seconds between background refreshes (None = refresh only on demand)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_refresh_secs: Option<u64>,
}

/// Available product sources
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceBackend {
    /// Built-in literal product table
    #[default]
    Static,
    // Future: scraped sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.catalog.source, SourceBackend::Static);
        assert!(config.catalog.auto_refresh_secs.is_none());
    }

    #[test]
    fn test_deserialize_server_section() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
    }

    #[test]
    fn test_deserialize_catalog_section() {
        let toml = r#"
[catalog]
source = "static"
auto_refresh_secs = 300
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.source, SourceBackend::Static);
        assert_eq!(config.catalog.auto_refresh_secs, Some(300));
    }

    #[test]
    fn test_deserialize_unknown_source_fails() {
        let toml = r#"
[catalog]
source = "ftp"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_omits_unset_auto_refresh() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["catalog"]["source"], "static");
        assert!(json["catalog"].get("auto_refresh_secs").is_none());
        assert_eq!(json["server"]["port"], 8000);
    }
}
