//! Client configuration

use crate::error::{Error, Result};
use crate::http::RateLimiterConfig;
use std::time::Duration;

/// Configuration for a [`Client`](crate::Client)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Rate limiter configuration
    pub rate_limit: RateLimiterConfig,
    /// Client identification string, sent on every request. The API rejects
    /// unidentified clients.
    pub client_id: String,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    rate_limit: Option<RateLimiterConfig>,
    client_id: Option<String>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the base URL (required)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (default: 30s)
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the minimum interval between requests (default: 1s)
    #[must_use]
    pub fn min_request_interval(mut self, interval: Duration) -> Self {
        self.rate_limit = Some(RateLimiterConfig::new(interval));
        self
    }

    /// Set the client identification string (required)
    #[must_use]
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Set the user agent (default: `driftboard/<version>`)
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the config
    pub fn build(self) -> Result<ClientConfig> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::validation("base_url is required"))?;
        let client_id = self
            .client_id
            .ok_or_else(|| Error::validation("client_id is required"))?;

        Ok(ClientConfig {
            base_url,
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
            rate_limit: self.rate_limit.unwrap_or_default(),
            client_id,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("driftboard/{}", env!("CARGO_PKG_VERSION"))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::builder()
            .base_url("https://api.example.com")
            .client_id("test-client")
            .timeout(Duration::from_secs(10))
            .min_request_interval(Duration::from_millis(500))
            .user_agent("tester/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.client_id, "test-client");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.rate_limit.min_interval, Duration::from_millis(500));
        assert_eq!(config.user_agent, "tester/1.0");
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::builder()
            .base_url("https://api.example.com")
            .client_id("test-client")
            .build()
            .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.rate_limit, RateLimiterConfig::default());
        assert!(config.user_agent.starts_with("driftboard/"));
    }

    #[test]
    fn test_config_requires_base_url_and_client_id() {
        assert!(ClientConfig::builder().client_id("c").build().is_err());
        assert!(ClientConfig::builder().base_url("https://x").build().is_err());
    }
}
