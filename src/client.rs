//! Top-level SoftLayer client.
//!
//! [`SoftLayerClient`] owns the shared HTTP transport and hands out the
//! per-resource services that borrow it. Services are cheap `Copy` handles;
//! create them ad hoc wherever they are needed.

use crate::clients::HttpClient;
use crate::config::SoftLayerConfig;
use crate::services::{
    LocationGroupRegionalService, LocationService, ProductPackageServerService,
    ProductPackageService,
};

/// Entry point tying the configuration, the transport, and the services
/// together.
///
/// # Example
///
/// ```rust,ignore
/// use softlayer_api::{SoftLayerClient, SoftLayerConfig, ApiUsername, ApiKey};
///
/// let config = SoftLayerConfig::builder()
///     .username(ApiUsername::new("SL123456")?)
///     .api_key(ApiKey::new("my-api-key")?)
///     .build()?;
///
/// let client = SoftLayerClient::new(&config);
///
/// let datacenters = client.location_service().get_datacenters().await?;
/// ```
#[derive(Debug)]
pub struct SoftLayerClient {
    http_client: HttpClient,
}

impl SoftLayerClient {
    /// Creates a new client from the given configuration.
    #[must_use]
    pub fn new(config: &SoftLayerConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the underlying HTTP transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns a `SoftLayer_Location` service.
    #[must_use]
    pub const fn location_service(&self) -> LocationService<'_> {
        LocationService::new(&self.http_client)
    }

    /// Returns a `SoftLayer_Location_Group_Regional` service.
    #[must_use]
    pub const fn location_group_regional_service(&self) -> LocationGroupRegionalService<'_> {
        LocationGroupRegionalService::new(&self.http_client)
    }

    /// Returns a `SoftLayer_Product_Package` service.
    #[must_use]
    pub const fn product_package_service(&self) -> ProductPackageService<'_> {
        ProductPackageService::new(&self.http_client)
    }

    /// Returns a `SoftLayer_Product_Package_Server` service.
    #[must_use]
    pub const fn product_package_server_service(&self) -> ProductPackageServerService<'_> {
        ProductPackageServerService::new(&self.http_client)
    }
}
