//! Session configuration for SoftLayer clients.
//!
//! This module provides the configuration used to open an authenticated
//! API session: endpoint, credentials, timeouts, and retry bounds.

use crate::Error;
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Public REST endpoint for the SoftLayer API.
pub const PUBLIC_ENDPOINT: &str = "https://api.softlayer.com/rest/v3.1";

/// Private-network REST endpoint, reachable from provisioned machines.
pub const PRIVATE_ENDPOINT: &str = "https://api.service.softlayer.com/rest/v3.1";

/// Environment variable holding the API username.
pub const ENV_USERNAME: &str = "SL_USERNAME";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "SL_API_KEY";

/// Environment variable overriding the endpoint URL.
pub const ENV_ENDPOINT_URL: &str = "SL_ENDPOINT_URL";

/// Configuration for an authenticated API session.
///
/// Credentials are an API username plus an API key; the key is held as a
/// [`SecretString`] and is never serialized or logged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SessionConfig {
    /// REST endpoint base URL
    #[validate(url)]
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// API username
    #[validate(length(min = 1))]
    pub username: String,

    /// API key
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 600))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of retry attempts for transient failures
    #[validate(range(min = 0, max = 10))]
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Whether to verify TLS certificates
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,
}

fn default_endpoint_url() -> String {
    PUBLIC_ENDPOINT.to_string()
}

const fn default_timeout_secs() -> u64 {
    crate::client::DEFAULT_REQUEST_TIMEOUT
}

const fn default_max_retries() -> u32 {
    crate::client::DEFAULT_MAX_RETRIES
}

const fn default_tls_verify() -> bool {
    true
}

impl SessionConfig {
    /// Create a configuration for the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (e.g. empty username).
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            endpoint_url: default_endpoint_url(),
            username: username.into(),
            api_key: SecretString::from(api_key.into()),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            tls_verify: default_tls_verify(),
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Build a configuration from the process environment.
    ///
    /// Reads `SL_USERNAME` and `SL_API_KEY`, plus the optional
    /// `SL_ENDPOINT_URL` override.
    ///
    /// # Errors
    ///
    /// Returns an error when a required variable is missing or the
    /// resulting configuration fails validation.
    pub fn from_env() -> Result<Self, Error> {
        let username = std::env::var(ENV_USERNAME)
            .map_err(|_| Error::ConfigError(format!("{ENV_USERNAME} is not set")))?;
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| Error::ConfigError(format!("{ENV_API_KEY} is not set")))?;

        let mut config = Self::new(username, api_key)?;
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT_URL) {
            config = config.with_endpoint(endpoint)?;
        }

        Ok(config)
    }

    /// Override the endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn with_endpoint(mut self, endpoint_url: impl Into<String>) -> Result<Self, Error> {
        self.endpoint_url = endpoint_url.into();
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid endpoint: {e}")))?;
        Ok(self)
    }

    /// Use the private-network endpoint.
    #[must_use]
    pub fn on_private_network(mut self) -> Self {
        self.endpoint_url = PRIVATE_ENDPOINT.to_string();
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Set maximum retry attempts.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse and validate the endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_endpoint_url(&self) -> Result<Url, Error> {
        Url::parse(&self.endpoint_url)
            .map_err(|e| Error::ConfigError(format!("Invalid endpoint URL: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_new() {
        let config = SessionConfig::new("SL12345", "api-key").unwrap();
        assert_eq!(config.endpoint_url, PUBLIC_ENDPOINT);
        assert_eq!(config.username, "SL12345");
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.max_retries, 3);
        assert!(config.tls_verify);
    }

    #[test]
    fn test_session_config_empty_username() {
        let result = SessionConfig::new("", "api-key");
        assert!(matches!(result.unwrap_err(), Error::ConfigError(_)));
    }

    #[test]
    fn test_session_config_builder() {
        let config = SessionConfig::new("SL12345", "api-key")
            .unwrap()
            .with_timeout(60)
            .with_max_retries(5)
            .with_tls_verify(false);

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_retries, 5);
        assert!(!config.tls_verify);
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_session_config_with_endpoint() {
        let config = SessionConfig::new("SL12345", "api-key")
            .unwrap()
            .with_endpoint("https://api.example.com/rest/v3.1")
            .unwrap();
        assert_eq!(config.endpoint_url, "https://api.example.com/rest/v3.1");
    }

    #[test]
    fn test_session_config_with_invalid_endpoint() {
        let result = SessionConfig::new("SL12345", "api-key")
            .unwrap()
            .with_endpoint("not-a-url");
        assert!(matches!(result.unwrap_err(), Error::ConfigError(_)));
    }

    #[test]
    fn test_session_config_private_network() {
        let config = SessionConfig::new("SL12345", "api-key")
            .unwrap()
            .on_private_network();
        assert_eq!(config.endpoint_url, PRIVATE_ENDPOINT);
    }

    #[test]
    fn test_session_config_parse_endpoint_url() {
        let config = SessionConfig::new("SL12345", "api-key").unwrap();
        let url = config.parse_endpoint_url().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("api.softlayer.com"));
    }

    #[test]
    fn test_session_config_validation_timeout_range() {
        let mut config = SessionConfig::new("SL12345", "api-key").unwrap();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.timeout_secs = 601;
        assert!(config.validate().is_err());

        config.timeout_secs = 120;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_session_config_validation_retries_range() {
        let mut config = SessionConfig::new("SL12345", "api-key").unwrap();
        config.max_retries = 11;
        assert!(config.validate().is_err());

        config.max_retries = 3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_session_config_debug_redacts_key() {
        let config = SessionConfig::new("SL12345", "super-secret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_session_config_deserialize_defaults() {
        let json = r#"{"username":"SL12345","api_key":"k"}"#;
        let config: SessionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.endpoint_url, PUBLIC_ENDPOINT);
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.max_retries, 3);
        assert!(config.tls_verify);
    }
}
