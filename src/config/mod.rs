//! Application configuration.
//!
//! Settings load from a TOML file with serde. Every field has a default and
//! a missing file is not an error. CLI flags override the file after
//! loading.

mod loader;

pub use loader::ConfigError;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

/// Connection settings for the roster service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the service, without a trailing path.
    pub base_url: String,
    /// Total per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 5,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick interval in milliseconds. Drives the busy spinner and notice
    /// expiry.
    pub tick_rate_ms: u64,
    /// How long a notice stays on screen, in milliseconds.
    pub notice_ttl_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            notice_ttl_ms: 4500,
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }
}
