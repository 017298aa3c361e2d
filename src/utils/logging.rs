//! Structured logging setup and trace hygiene.
//!
//! Configures the `tracing` ecosystem for the gateway and provides a
//! helper to keep the upstream subscription key out of log sinks.

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Two output formats are supported:
/// - `json`: structured JSON logs for production ingestion.
/// - `pretty` (default): human-readable output for development.
///
/// Log levels come from the `RUST_LOG` environment variable when set,
/// otherwise from the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Replace every occurrence of the subscription key in a message with a
/// placeholder. Upstream error bodies occasionally echo request headers
/// back; run them through this before logging.
pub fn redact_key(input: &str, key: &str) -> String {
    if key.is_empty() {
        return input.to_string();
    }
    input.replace(key, "[REDACTED_KEY]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_subscription_key() {
        let out = redact_key("Ocp-Apim-Subscription-Key: abc123", "abc123");
        assert!(out.contains("[REDACTED_KEY]"));
        assert!(!out.contains("abc123"));
    }

    #[test]
    fn empty_key_leaves_input_alone() {
        assert_eq!(redact_key("hello", ""), "hello");
    }
}
