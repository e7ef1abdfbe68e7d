//! Product package server service.
//!
//! Wraps the `SoftLayer_Product_Package_Server` remote resource, which
//! lists the bare metal server configurations available in the catalog.
//!
//! See <https://sldn.softlayer.com/reference/services/SoftLayer_Product_Package_Server/>.

use crate::clients::HttpClient;
use crate::services::{collection_path, fetch, instance_path, Service, ServiceError};
use crate::types::ProductPackageServer;

/// Client for the `SoftLayer_Product_Package_Server` service.
#[derive(Debug, Clone, Copy)]
pub struct ProductPackageServerService<'a> {
    client: &'a HttpClient,
}

impl Service for ProductPackageServerService<'_> {
    const NAME: &'static str = "SoftLayer_Product_Package_Server";
}

impl<'a> ProductPackageServerService<'a> {
    /// Creates a new service backed by the given transport.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Retrieves all the package servers available.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_all_objects(&self) -> Result<Vec<ProductPackageServer>, ServiceError> {
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

    /// Retrieves a single package server by id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_object(
        &self,
        package_server_id: i32,
    ) -> Result<ProductPackageServer, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getObject",
            instance_path(Self::NAME, package_server_id, "getObject"),
            None,
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_name_is_fixed_constant() {
        assert_eq!(
            ProductPackageServerService::NAME,
            "SoftLayer_Product_Package_Server"
        );
    }

    #[test]
    fn test_service_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProductPackageServerService<'_>>();
    }
}
