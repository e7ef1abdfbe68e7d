//! HTTP transport layer for SoftLayer API communication.
//!
//! This module provides the low-level HTTP client every service calls
//! through, plus the request/response types and the object mask and object
//! filter value types that shape SoftLayer requests.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response (status, headers, body text)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`ObjectMask`]: Ordered dotted field paths limiting a response payload
//! - [`ObjectFilter`]: JSON predicate limiting which records a collection returns
//!
//! # Example
//!
//! ```rust,ignore
//! use softlayer_api::{SoftLayerConfig, ApiUsername, ApiKey};
//! use softlayer_api::clients::{HttpClient, HttpRequest, HttpMethod, ObjectMask};
//!
//! let config = SoftLayerConfig::builder()
//!     .username(ApiUsername::new("SL123456")?)
//!     .api_key(ApiKey::new("my-api-key")?)
//!     .build()?;
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "SoftLayer_Location/66/getObject.json")
//!     .mask(ObjectMask::from_paths(["id", "longName", "name"]))
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Status Handling
//!
//! The transport returns the response for every HTTP status and only errors
//! on validation or network failures. Classifying 4xx/5xx statuses is the
//! service layer's job, so each service can report errors in its own terms,
//! naming the service and operation that hit them.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod object_filter;
mod object_mask;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use object_filter::ObjectFilter;
pub use object_mask::ObjectMask;
