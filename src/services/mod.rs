//! Service layer: one capability type per remote resource.
//!
//! Each service is a thin wrapper over the shared [`HttpClient`] exposing
//! one remote resource's operations. Every method follows the same
//! contract: build an endpoint path from the resource name, an optional
//! numeric identifier, and the operation name; optionally attach an object
//! mask and/or object filter; issue a single GET; and decode the JSON body
//! into the operation's declared result shape.
//!
//! # Example
//!
//! ```rust,ignore
//! use softlayer_api::{SoftLayerConfig, ApiUsername, ApiKey};
//! use softlayer_api::clients::HttpClient;
//! use softlayer_api::services::{LocationService, Service};
//!
//! let config = SoftLayerConfig::builder()
//!     .username(ApiUsername::new("SL123456")?)
//!     .api_key(ApiKey::new("my-api-key")?)
//!     .build()?;
//! let client = HttpClient::new(&config);
//!
//! let locations = LocationService::new(&client);
//! assert_eq!(locations.name(), "SoftLayer_Location");
//!
//! for datacenter in locations.get_datacenters().await? {
//!     println!("{}: {}", datacenter.name, datacenter.long_name);
//! }
//! ```

mod errors;
mod location;
mod location_group_regional;
mod product_package;
mod product_package_server;

pub use errors::ServiceError;
pub use location::LocationService;
pub use location_group_regional::LocationGroupRegionalService;
pub use product_package::ProductPackageService;
pub use product_package_server::ProductPackageServerService;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpMethod, HttpRequest, ObjectFilter, ObjectMask};

/// Common surface of every SoftLayer service.
///
/// `NAME` is the fixed remote resource type name; it both prefixes every
/// endpoint path and identifies the service in error messages.
pub trait Service {
    /// The remote resource type name (e.g. `SoftLayer_Location`).
    const NAME: &'static str;

    /// Returns the remote resource type name.
    #[must_use]
    fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// Builds a collection-level endpoint path:
/// `{ResourceTypeName}/{operation}.json`.
fn collection_path(service: &str, operation: &str) -> String {
    format!("{service}/{operation}.json")
}

/// Builds an instance-level endpoint path:
/// `{ResourceTypeName}/{id}/{operation}.json`.
fn instance_path(service: &str, id: i32, operation: &str) -> String {
    format!("{service}/{id}/{operation}.json")
}

/// The generic request/decode round trip shared by every service method.
///
/// Issues one GET for `path`, attaching `mask` and `filter` when present,
/// and maps the three failure classes onto [`ServiceError`]: transport
/// errors pass through, 4xx/5xx statuses are wrapped with service and
/// operation context, and decode failures are wrapped with the operation.
async fn fetch<T>(
    client: &HttpClient,
    service: &'static str,
    operation: &'static str,
    path: String,
    mask: Option<ObjectMask>,
    filter: Option<ObjectFilter>,
) -> Result<T, ServiceError>
where
    T: DeserializeOwned,
{
    let mut builder = HttpRequest::builder(HttpMethod::Get, path);
    if let Some(mask) = mask {
        builder = builder.mask(mask);
    }
    if let Some(filter) = filter {
        builder = builder.filter(filter);
    }
    let request = builder.build().map_err(crate::clients::HttpError::from)?;

    let response = client.request(request).await?;

    if response.is_error() {
        return Err(ServiceError::Http {
            service,
            operation,
            code: response.code,
        });
    }

    serde_json::from_str(&response.body)
        .map_err(|source| ServiceError::Decode { operation, source })
}
