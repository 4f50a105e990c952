//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Loaded once at startup; pure data, no validation. Every field has a
/// default so a partial (or missing) configuration file still boots.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Remote blog service settings
    pub api: ApiConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the blog service, without a trailing slash
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8089".to_string(),
            timeout_secs: 30,
        }
    }
}
