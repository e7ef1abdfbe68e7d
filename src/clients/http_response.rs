//! HTTP response types for the SoftLayer API SDK.

use std::collections::HashMap;

/// An HTTP response from the SoftLayer API.
///
/// Carries the raw body text alongside the status code and headers; the
/// service layer decides how to classify the status and decode the body.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use softlayer_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"id":66}"#.to_string());
/// assert!(response.is_ok());
/// assert!(!response.is_error());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns true if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns true if the status code indicates a client (4xx) or
    /// server (5xx) error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.code >= 400
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are stored lowercased by the client.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
