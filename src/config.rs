//! Configuration management for the DEV publishing SDK.
//!
//! This module provides:
//! - Type-safe configuration with sensible defaults
//! - Environment variable overrides
//! - Builder pattern for easy setup
//! - Configuration validation
//!
//! The API key itself is not part of the configuration. Only the name of the
//! variable holding it is, so that the key is looked up again on every publish.
//!
//! ## Usage
//!
//! ```rust
//! use devto_pub_rs::config::{Config, HttpConfig};
//! use devto_pub_rs::Result;
//!
//! fn example() -> Result<()> {
//!     let config = Config::builder()
//!         .http(HttpConfig::builder()
//!             .request_timeout_secs(60)
//!             .build())
//!         .build();
//!     config.validate()?;
//!
//!     // Load from environment variables
//!     let config = Config::from_env()?;
//!     Ok(())
//! }
//! ```

use crate::error::{PublishError, Result};
use std::time::Duration;

/// Article creation endpoint of the DEV API.
pub const DEFAULT_ENDPOINT: &str = "https://dev.to/api/articles";

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_VAR: &str = "DEV_TO_API_KEY";

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// HTTP client configuration
    pub http: HttpConfig,
    /// Credential lookup configuration
    pub credential: CredentialConfig,
}

/// HTTP client configuration settings.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Article creation URL (default: "https://dev.to/api/articles")
    pub endpoint: String,
    /// User agent string for requests
    pub user_agent: String,
    /// Request timeout in seconds (default: none, the transport default applies)
    pub request_timeout_secs: Option<u64>,
}

/// Credential lookup settings.
#[derive(Debug, Clone)]
pub struct CredentialConfig {
    /// Name of the environment variable holding the API key (default: "DEV_TO_API_KEY")
    pub env_var: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: format!("devto-pub-rs/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: None,
        }
    }
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_API_KEY_VAR.to_string(),
        }
    }
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("DEVTO_ENDPOINT") {
            config.http.endpoint = val;
        }

        if let Ok(val) = std::env::var("DEVTO_REQUEST_TIMEOUT") {
            config.http.request_timeout_secs = Some(
                val.parse()
                    .map_err(|_| PublishError::config_error("Invalid DEVTO_REQUEST_TIMEOUT value"))?,
            );
        }

        if let Ok(val) = std::env::var("DEVTO_API_KEY_VAR") {
            config.credential.env_var = val;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for consistency and constraints.
    pub fn validate(&self) -> Result<()> {
        if self.http.endpoint.is_empty() {
            return Err(PublishError::config_error("endpoint cannot be empty"));
        }

        if !self.http.endpoint.starts_with("http://") && !self.http.endpoint.starts_with("https://")
        {
            return Err(PublishError::config_error(format!(
                "endpoint must be an http(s) URL, got {}",
                self.http.endpoint
            )));
        }

        if self.http.request_timeout_secs == Some(0) {
            return Err(PublishError::config_error(
                "request_timeout_secs must be greater than 0",
            ));
        }

        if self.credential.env_var.trim().is_empty() {
            return Err(PublishError::config_error("env_var cannot be empty"));
        }

        Ok(())
    }

    /// Converts the HTTP timeout to a Duration, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.http.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Builder for creating Config instances.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    http: Option<HttpConfig>,
    credential: Option<CredentialConfig>,
}

impl ConfigBuilder {
    /// Sets the HTTP configuration.
    pub fn http(mut self, http: HttpConfig) -> Self {
        self.http = Some(http);
        self
    }

    /// Sets the credential configuration.
    pub fn credential(mut self, credential: CredentialConfig) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Config {
        Config {
            http: self.http.unwrap_or_default(),
            credential: self.credential.unwrap_or_default(),
        }
    }
}

impl HttpConfig {
    /// Creates a new HTTP config builder.
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }
}

impl CredentialConfig {
    /// Creates a credential config reading the given variable.
    pub fn env_var(name: impl Into<String>) -> Self {
        Self {
            env_var: name.into(),
        }
    }
}

/// Builder for HttpConfig.
#[derive(Debug, Default)]
pub struct HttpConfigBuilder {
    endpoint: Option<String>,
    user_agent: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl HttpConfigBuilder {
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn request_timeout_secs(mut self, timeout: u64) -> Self {
        self.request_timeout_secs = Some(timeout);
        self
    }

    pub fn build(self) -> HttpConfig {
        let default = HttpConfig::default();
        HttpConfig {
            endpoint: self.endpoint.unwrap_or(default.endpoint),
            user_agent: self.user_agent.unwrap_or(default.user_agent),
            request_timeout_secs: self.request_timeout_secs.or(default.request_timeout_secs),
        }
    }
}
