//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[test]
    fn validation_failure_wraps_into_config_error() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let err: ConfigError = config.validate().map_err(ConfigError::from).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed(_)));
        assert_eq!(err.to_string(), "Validation failed: Invalid port number");
    }
}
