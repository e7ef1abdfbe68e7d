//! Configuration types for the SoftLayer API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with SoftLayer.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SoftLayerConfig`]: The main configuration struct holding credentials and endpoint
//! - [`SoftLayerConfigBuilder`]: A builder for constructing [`SoftLayerConfig`] instances
//! - [`ApiUsername`]: A validated account username newtype
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`EndpointUrl`]: A validated API endpoint URL
//!
//! # Example
//!
//! ```rust
//! use softlayer_api::{SoftLayerConfig, ApiUsername, ApiKey};
//!
//! let config = SoftLayerConfig::builder()
//!     .username(ApiUsername::new("SL123456").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiUsername, EndpointUrl};

use crate::error::ConfigError;

/// Configuration for the SoftLayer API SDK.
///
/// Holds the account credentials used for HTTP Basic authentication and the
/// API endpoint to talk to. The endpoint defaults to the public SoftLayer
/// REST API; accounts on the private network can point it at the private
/// endpoint instead.
///
/// # Thread Safety
///
/// `SoftLayerConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use softlayer_api::{SoftLayerConfig, ApiUsername, ApiKey, EndpointUrl};
///
/// let config = SoftLayerConfig::builder()
///     .username(ApiUsername::new("SL123456").unwrap())
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .endpoint(EndpointUrl::new("https://api.service.softlayer.com/rest/v3").unwrap())
///     .user_agent_prefix("my-deployer/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.username().as_ref(), "SL123456");
/// ```
#[derive(Clone, Debug)]
pub struct SoftLayerConfig {
    username: ApiUsername,
    api_key: ApiKey,
    endpoint: EndpointUrl,
    user_agent_prefix: Option<String>,
}

impl SoftLayerConfig {
    /// Creates a new builder for constructing a `SoftLayerConfig`.
    #[must_use]
    pub fn builder() -> SoftLayerConfigBuilder {
        SoftLayerConfigBuilder::new()
    }

    /// Returns the account username.
    #[must_use]
    pub const fn username(&self) -> &ApiUsername {
        &self.username
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the optional User-Agent prefix.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`SoftLayerConfig`] instances.
///
/// Required fields: `username`, `api_key`. The endpoint defaults to the
/// public SoftLayer REST API.
#[derive(Debug, Default)]
pub struct SoftLayerConfigBuilder {
    username: Option<ApiUsername>,
    api_key: Option<ApiKey>,
    endpoint: Option<EndpointUrl>,
    user_agent_prefix: Option<String>,
}

impl SoftLayerConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account username (required).
    #[must_use]
    pub fn username(mut self, username: ApiUsername) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the API endpoint URL (defaults to the public endpoint).
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets a prefix for the User-Agent header sent with every request.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `username` or
    /// `api_key` has not been set.
    pub fn build(self) -> Result<SoftLayerConfig, ConfigError> {
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(SoftLayerConfig {
            username,
            api_key,
            endpoint: self.endpoint.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
