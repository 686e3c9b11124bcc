use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Auto refresh interval, when set, is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.catalog.auto_refresh_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "catalog.auto_refresh_secs must be positive (omit it to disable)".to_string(),
        ));
    }

    Ok(())
}
