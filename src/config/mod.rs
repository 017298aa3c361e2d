// Configuration module

mod models;

pub use models::*;

use crate::error::{GatewayError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments (highest, applied by the caller)
    /// 2. Environment variables
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default()).map_err(config_error)?)
            // Load from config file if it exists
            .add_source(File::with_name(&Self::default_config_path()).required(false))
            // Override with environment variables, e.g. VISIONGATE_AZURE__KEY
            .add_source(
                Environment::with_prefix("VISIONGATE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_error)?;

        config.try_deserialize().map_err(config_error)
    }

    /// Check that the upstream credentials are present. No validation
    /// beyond presence; a bad key or endpoint surfaces on the first
    /// analysis request instead.
    pub fn require_credentials(&self) -> Result<()> {
        if self.azure.key.is_empty() {
            return Err(GatewayError::Config(
                "Azure subscription key is not set (VISIONGATE_AZURE__KEY)".to_string(),
            ));
        }
        if self.azure.endpoint.is_empty() {
            return Err(GatewayError::Config(
                "Azure endpoint is not set (VISIONGATE_AZURE__ENDPOINT)".to_string(),
            ));
        }
        Ok(())
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".visiongate")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

fn config_error(e: config::ConfigError) -> GatewayError {
    GatewayError::Config(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.azure.timeout_seconds, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let config = AppConfig::default();
        assert!(config.require_credentials().is_err());

        let mut config = AppConfig::default();
        config.azure.key = "key".to_string();
        assert!(config.require_credentials().is_err());

        config.azure.endpoint = "https://example.cognitiveservices.azure.com".to_string();
        assert!(config.require_credentials().is_ok());
    }
}
