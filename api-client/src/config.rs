//! Configuration for the API client

use serde::{Deserialize, Serialize};

/// Environment variable overriding the service base URL
const API_URL_ENV: &str = "FRAUDSHIELD_API_URL";

/// API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service base URL, without a trailing slash
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) => Self::new(url),
            Err(_) => Self::default(),
        }
    }
}
