//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! service. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the description service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream provider endpoints and timeouts.
    pub upstream: UpstreamConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Total request timeout in seconds enforced at the router.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Upstream provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Pokemon data resource; the name is appended as a path segment.
    pub pokeapi_url: String,

    /// Shakespeare translation resource (POST target).
    pub translation_url: String,

    /// Response timeout for upstream calls in seconds.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            pokeapi_url: "https://pokeapi.co/api/v2/pokemon".to_string(),
            translation_url: "https://api.funtranslations.com/translate/shakespeare.json"
                .to_string(),
            timeout_secs: 20,
            connect_timeout_secs: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.upstream.timeout_secs, 20);
        assert!(config.upstream.pokeapi_url.starts_with("https://pokeapi.co"));
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_override() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [upstream]
            pokeapi_url = "http://127.0.0.1:9001/api/v2/pokemon"
            timeout_secs = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.upstream.timeout_secs, 2);
        assert_eq!(config.upstream.connect_timeout_secs, 5);
        assert_eq!(config.listener.request_timeout_secs, 30);
    }
}
