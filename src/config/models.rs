//! Configuration data structures for the visiongate gateway.
//!
//! Defines the schema for application settings: HTTP server parameters,
//! Azure Computer Vision credentials, documentation links, and logging.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Azure Computer Vision connection settings.
    #[serde(default)]
    pub azure: AzureConfig,

    /// Documentation link settings.
    #[serde(default)]
    pub docs: DocsConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `3000`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings for the upstream Azure Computer Vision connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureConfig {
    /// Subscription key sent as `Ocp-Apim-Subscription-Key` on every
    /// upstream request. Required; checked for presence at startup only.
    #[serde(default)]
    pub key: String,

    /// Base URL of the Computer Vision resource, e.g.
    /// `https://myresource.cognitiveservices.azure.com`. Required.
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout for upstream calls, in seconds.
    /// Default: `30`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Settings for documentation links exposed on the metadata endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Public base URL of this service, used to build the documentation
    /// link returned by `GET /`.
    /// Default: `http://localhost:3000`
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            endpoint: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout() -> u64 {
    30
}

fn default_public_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
