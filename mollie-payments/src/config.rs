//! Client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.mollie.com";

/// API version path segment
pub const DEFAULT_API_VERSION: &str = "v2";

/// Fixed client identifier sent as `User-Agent`
pub const USER_AGENT: &str = concat!("mollie-rs/", env!("CARGO_PKG_VERSION"));

/// Where and how the client talks to Mollie.
///
/// The defaults point at the production API. Tests override `base_url` to
/// reach a mock server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host, without a version segment
    pub base_url: String,
    /// API version path segment
    pub api_version: String,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Per-request timeout; none by default
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Versioned endpoint every resource path is resolved against, e.g.
    /// `https://api.mollie.com/v2/`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API host
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API version segment
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Override the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set a per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
