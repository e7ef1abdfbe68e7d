//! Location group regional service.
//!
//! Wraps the `SoftLayer_Location_Group_Regional` remote resource: regional
//! groups, their member datacenters and locations, and the preferred
//! datacenter of a group.
//!
//! See <https://sldn.softlayer.com/reference/services/SoftLayer_Location_Group_Regional/>.

use crate::clients::HttpClient;
use crate::services::{collection_path, fetch, instance_path, Service, ServiceError};
use crate::types::{Location, LocationGroup, LocationGroupRegional, LocationGroupType};

/// Client for the `SoftLayer_Location_Group_Regional` service.
#[derive(Debug, Clone, Copy)]
pub struct LocationGroupRegionalService<'a> {
    client: &'a HttpClient,
}

impl Service for LocationGroupRegionalService<'_> {
    const NAME: &'static str = "SoftLayer_Location_Group_Regional";
}

impl<'a> LocationGroupRegionalService<'a> {
    /// Creates a new service backed by the given transport.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Retrieves all regional groups.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_all_objects(&self) -> Result<Vec<LocationGroup>, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getAllObjects",
            collection_path(Self::NAME, "getAllObjects"),
            None,
            None,
        )
        .await
    }

    /// Retrieves the datacenters in a regional group.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_datacenters(&self, group_id: i32) -> Result<Vec<Location>, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getDatacenters",
            instance_path(Self::NAME, group_id, "getDatacenters"),
            None,
            None,
        )
        .await
    }

    /// Retrieves the locations in a regional group.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_locations(&self, group_id: i32) -> Result<Vec<Location>, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getLocations",
            instance_path(Self::NAME, group_id, "getLocations"),
            None,
            None,
        )
        .await
    }

    /// Retrieves a single regional group by id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_object(&self, group_id: i32) -> Result<LocationGroupRegional, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getObject",
            instance_path(Self::NAME, group_id, "getObject"),
            None,
            None,
        )
        .await
    }

    /// Retrieves the preferred datacenter of a regional group.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_preferred_datacenter(
        &self,
        group_id: i32,
    ) -> Result<Location, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getPreferredDatacenter",
            instance_path(Self::NAME, group_id, "getPreferredDatacenter"),
            None,
            None,
        )
        .await
    }

    /// Retrieves the type of a regional group.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_location_group_type(
        &self,
        group_id: i32,
    ) -> Result<LocationGroupType, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getLocationGroupType",
            instance_path(Self::NAME, group_id, "getLocationGroupType"),
            None,
            None,
        )
        .await
    }
}
