//! HTTP request types for the SoftLayer API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the SoftLayer REST API.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::{ObjectFilter, ObjectMask};

/// HTTP methods supported by the SoftLayer REST API transport.
///
/// Every operation in this SDK is a GET; POST is carried so callers can
/// issue parameter-bearing requests through the same transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for requests carrying a parameter body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// An HTTP request to be sent to the SoftLayer API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use softlayer_api::clients::{HttpRequest, HttpMethod, ObjectMask};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "SoftLayer_Location/66/getObject.json")
///     .mask(ObjectMask::from_paths(["id", "longName", "name"]))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the endpoint URL) for this request.
    pub path: String,
    /// Object mask restricting which fields the response includes.
    pub mask: Option<ObjectMask>,
    /// Object filter restricting which records a collection returns.
    pub filter: Option<ObjectFilter>,
    /// The JSON parameter body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `http_method` is `Post` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.http_method == HttpMethod::Post && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    mask: Option<ObjectMask>,
    filter: Option<ObjectFilter>,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            mask: None,
            filter: None,
            body: None,
        }
    }

    /// Attaches an object mask to the request.
    ///
    /// Empty masks are dropped rather than sent as an empty query parameter.
    #[must_use]
    pub fn mask(mut self, mask: ObjectMask) -> Self {
        self.mask = if mask.is_empty() { None } else { Some(mask) };
        self
    }

    /// Attaches an object filter to the request.
    #[must_use]
    pub fn filter(mut self, filter: ObjectFilter) -> Self {
        self.filter = if filter.is_empty() {
            None
        } else {
            Some(filter)
        };
        self
    }

    /// Sets the JSON parameter body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            mask: self.mask,
            filter: self.filter,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "SoftLayer_Location/getDatacenters.json")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "SoftLayer_Location/getDatacenters.json");
        assert!(request.mask.is_none());
        assert!(request.filter.is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_builder_attaches_mask() {
        let request = HttpRequest::builder(HttpMethod::Get, "SoftLayer_Location/66/getObject.json")
            .mask(ObjectMask::from_paths(["id", "longName", "name"]))
            .build()
            .unwrap();

        assert_eq!(
            request.mask.unwrap().to_query(),
            "id;longName;name".to_string()
        );
    }

    #[test]
    fn test_builder_drops_empty_mask() {
        let request = HttpRequest::builder(HttpMethod::Get, "SoftLayer_Location/getDatacenters.json")
            .mask(ObjectMask::new())
            .build()
            .unwrap();

        assert!(request.mask.is_none());
    }

    #[test]
    fn test_builder_drops_empty_filter() {
        let request = HttpRequest::builder(HttpMethod::Get, "SoftLayer_Product_Package/getAllObjects.json")
            .filter(ObjectFilter::new())
            .build()
            .unwrap();

        assert!(request.filter.is_none());
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "SoftLayer_Product_Order/placeOrder.json").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_verify_accepts_post_with_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "SoftLayer_Product_Order/placeOrder.json")
            .body(json!({"parameters": []}))
            .build()
            .unwrap();

        assert!(request.body.is_some());
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "").build();

        assert!(matches!(result, Err(InvalidHttpRequestError::EmptyPath)));
    }
}
