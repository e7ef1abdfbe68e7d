//! HTTP-specific error types for the SoftLayer API SDK.
//!
//! The transport layer distinguishes two failure classes:
//!
//! - [`InvalidHttpRequestError`]: the request failed validation before sending
//! - [`HttpError::Network`]: the network round trip itself failed (DNS, TLS,
//!   connect, body read); surfaced verbatim from reqwest
//!
//! Non-2xx status codes are NOT transport errors: the transport hands any
//! status back to the service layer, which wraps it with resource and
//! operation context (see `services::ServiceError`).

use thiserror::Error;

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Cannot send a request with an empty path.")]
    EmptyPath,

    /// A POST request was made without a parameter body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for transport-level failures.
///
/// # Example
///
/// ```rust,ignore
/// match client.request(request).await {
///     Ok(response) => println!("status {}", response.code),
///     Err(HttpError::InvalidRequest(e)) => println!("bad request: {e}"),
///     Err(HttpError::Network(e)) => println!("network error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, passed through from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_error_message() {
        let error = InvalidHttpRequestError::EmptyPath;
        assert_eq!(error.to_string(), "Cannot send a request with an empty path.");
    }

    #[test]
    fn test_missing_body_error_message() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_http_error_wraps_invalid_request() {
        let error: HttpError = InvalidHttpRequestError::EmptyPath.into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::EmptyPath;
        let _ = invalid;

        let http: &dyn std::error::Error =
            &HttpError::InvalidRequest(InvalidHttpRequestError::EmptyPath);
        let _ = http;
    }
}
