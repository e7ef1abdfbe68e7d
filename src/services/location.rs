//! Location service.
//!
//! Wraps the `SoftLayer_Location` remote resource: datacenter listings,
//! per-location status, price groups, and regions.
//!
//! See <https://sldn.softlayer.com/reference/services/SoftLayer_Location/>.

use crate::clients::{HttpClient, ObjectMask};
use crate::services::{collection_path, fetch, instance_path, Service, ServiceError};
use crate::types::{Location, LocationGroup, LocationRegion, LocationStatus};

/// Client for the `SoftLayer_Location` service.
///
/// # Example
///
/// ```rust,ignore
/// let service = LocationService::new(&client);
/// let datacenters = service.get_datacenters().await?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LocationService<'a> {
    client: &'a HttpClient,
}

impl Service for LocationService<'_> {
    const NAME: &'static str = "SoftLayer_Location";
}

impl<'a> LocationService<'a> {
    /// Creates a new service backed by the given transport.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Retrieves a single location by id.
    ///
    /// An object mask limits the response to `id`, `longName`, and `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_object(&self, location_id: i32) -> Result<Location, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getObject",
            instance_path(Self::NAME, location_id, "getObject"),
            Some(ObjectMask::from_paths(["id", "longName", "name"])),
            None,
        )
        .await
    }

    /// Retrieves all datacenter locations.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_datacenters(&self) -> Result<Vec<Location>, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getDatacenters",
            collection_path(Self::NAME, "getDatacenters"),
            None,
            None,
        )
        .await
    }

    /// Retrieves the datacenters where object storage is available.
    ///
    /// Object storage is only offered in select datacenters.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_available_object_storage_datacenters(
        &self,
    ) -> Result<Vec<Location>, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getObjectStorageDatacenters",
            collection_path(Self::NAME, "getObjectStorageDatacenters"),
            None,
            None,
        )
        .await
    }

    /// Retrieves the status of a location.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_location_status(
        &self,
        location_id: i32,
    ) -> Result<LocationStatus, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getLocationStatus",
            instance_path(Self::NAME, location_id, "getLocationStatus"),
            None,
            None,
        )
        .await
    }

    /// Retrieves the price groups a location is a member of.
    ///
    /// A location can belong to one or more price groups.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_price_groups(
        &self,
        location_id: i32,
    ) -> Result<Vec<LocationGroup>, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getPriceGroups",
            instance_path(Self::NAME, location_id, "getPriceGroups"),
            None,
            None,
        )
        .await
    }

    /// Retrieves the regions a location belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_regions(
        &self,
        location_id: i32,
    ) -> Result<Vec<LocationRegion>, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getRegions",
            instance_path(Self::NAME, location_id, "getRegions"),
            None,
            None,
        )
        .await
    }
}
