//! HTTP client for SoftLayer API communication.
//!
//! This module provides the [`HttpClient`] type, the single transport
//! collaborator every service in this SDK calls through. It handles base URI
//! construction, HTTP Basic authentication, object mask and filter query
//! parameters, and response collection. It does not retry, cache, or
//! classify non-2xx statuses; that is left to the service layer.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::SoftLayerConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the SoftLayer REST API.
///
/// The client handles:
/// - Base URI construction from the configured endpoint
/// - HTTP Basic authentication with the account username and API key
/// - Default headers including User-Agent and Accept
/// - `objectMask` / `objectFilter` query parameter encoding
///
/// Every call is a single network round trip. Responses are returned for
/// any HTTP status; only transport-level failures produce an error.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use softlayer_api::{SoftLayerConfig, ApiUsername, ApiKey};
/// use softlayer_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = SoftLayerConfig::builder()
///     .username(ApiUsername::new("SL123456")?)
///     .api_key(ApiKey::new("my-api-key")?)
///     .build()?;
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "SoftLayer_Location/getDatacenters.json")
///     .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.softlayer.com/rest/v3`).
    base_uri: String,
    /// Account username for Basic auth.
    username: String,
    /// API key for Basic auth.
    api_key: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &SoftLayerConfig) -> Self {
        let base_uri = config.endpoint().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}SoftLayer API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            username: config.username().as_ref().to_string(),
            api_key: config.api_key().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the SoftLayer API.
    ///
    /// Performs exactly one attempt. The response is returned for every HTTP
    /// status; callers inspect [`HttpResponse::is_error`] themselves.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The network round trip fails (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path);

        tracing::debug!(
            path = %request.path,
            has_mask = request.mask.is_some(),
            has_filter = request.filter.is_some(),
            "sending request to SoftLayer API"
        );

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        req_builder = req_builder.basic_auth(&self.username, Some(&self.api_key));

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        // Mask and filter travel as query parameters
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(mask) = &request.mask {
            query.push(("objectMask", mask.to_query()));
        }
        if let Some(filter) = &request.filter {
            query.push(("objectFilter", filter.to_query()));
        }
        if !query.is_empty() {
            req_builder = req_builder.query(&query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
