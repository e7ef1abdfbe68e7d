//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use std::fmt;

use crate::error::ConfigError;

/// A validated SoftLayer account username.
///
/// This newtype ensures the username is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use softlayer_api::ApiUsername;
///
/// let username = ApiUsername::new("SL123456").unwrap();
/// assert_eq!(username.as_ref(), "SL123456");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUsername(String);

impl ApiUsername {
    /// Creates a new validated account username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyApiUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for ApiUsername {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated SoftLayer API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use softlayer_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API endpoint URL.
///
/// The URL must be absolute with an `http` or `https` scheme. A trailing
/// slash is stripped so that request paths can always be joined with `/`.
///
/// # Example
///
/// ```rust
/// use softlayer_api::EndpointUrl;
///
/// let endpoint = EndpointUrl::new("https://api.softlayer.com/rest/v3/").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://api.softlayer.com/rest/v3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl(String);

impl EndpointUrl {
    /// The public SoftLayer REST API endpoint.
    pub const DEFAULT: &'static str = "https://api.softlayer.com/rest/v3";

    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL is empty or
    /// does not start with an `http://` or `https://` scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        if trimmed.is_empty()
            || !(trimmed.starts_with("https://") || trimmed.starts_with("http://"))
        {
            return Err(ConfigError::InvalidEndpointUrl { url });
        }

        // Reject scheme-only values like "https://"
        let rest = trimmed
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        if rest.is_empty() {
            return Err(ConfigError::InvalidEndpointUrl { url });
        }

        Ok(Self(trimmed.trim_end_matches('/').to_string()))
    }

    /// Returns the default public SoftLayer endpoint.
    #[must_use]
    pub fn public() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for EndpointUrl {
    fn default() -> Self {
        Self::public()
    }
}
