//! Error types for service operations.
//!
//! Every service method can fail in exactly three ways, uniformly applied:
//!
//! - [`ServiceError::Transport`]: the network round trip failed; the
//!   underlying error is passed through verbatim
//! - [`ServiceError::Http`]: the API answered with a 4xx or 5xx status; the
//!   error names the service, the operation, and the numeric status
//! - [`ServiceError::Decode`]: the response body was malformed or did not
//!   match the operation's declared result shape
//!
//! There are no retries and no partial results: any failure yields `Err`.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for SoftLayer service operations.
///
/// # Example
///
/// ```rust,ignore
/// match service.get_object(66).await {
///     Ok(location) => println!("{}", location.long_name),
///     Err(ServiceError::Http { service, operation, code }) => {
///         println!("{service}#{operation} failed with status {code}");
///     }
///     Err(e) => println!("error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The API answered with a client (4xx) or server (5xx) error status.
    #[error("could not {service}#{operation}, HTTP error code: '{code}'")]
    Http {
        /// The remote resource type name (e.g. "SoftLayer_Location").
        service: &'static str,
        /// The operation that was attempted (e.g. "getObject").
        operation: &'static str,
        /// The HTTP status code.
        code: u16,
    },

    /// The response body failed to decode into the operation's result shape.
    #[error("failed to decode {operation} JSON response: {source}")]
    Decode {
        /// The operation whose response failed to decode.
        operation: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// No packages matched the requested package type.
    #[error("No packages available for type '{package_type}'.")]
    NoPackagesOfType {
        /// The package type keyname that was requested.
        package_type: String,
    },

    /// A transport-level error, passed through verbatim.
    #[error(transparent)]
    Transport(#[from] HttpError),
}

// Verify ServiceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceError>();
};
