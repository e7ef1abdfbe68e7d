//! Product package service.
//!
//! Wraps the `SoftLayer_Product_Package` remote resource: package lookup by
//! type, items, item prices, and order configuration.
//!
//! The package-by-type lookup is the one place in this SDK with logic
//! beyond request/decode: the remote API cannot exclude outlet (clearance)
//! packages server-side, so they are filtered out here after the fetch.
//!
//! See <https://sldn.softlayer.com/reference/services/SoftLayer_Product_Package/>.

use crate::clients::{HttpClient, ObjectFilter, ObjectMask};
use crate::services::{collection_path, fetch, instance_path, Service, ServiceError};
use crate::types::{
    ProductItem, ProductItemPrice, ProductPackage, ProductPackageOrderConfiguration,
};

/// Marker substring identifying discounted outlet packages.
///
/// Matched exactly and case-sensitively against a package's name and
/// description; the remote catalog carries no structured outlet flag on
/// the package record itself.
const OUTLET_PACKAGE: &str = "OUTLET";

/// Client for the `SoftLayer_Product_Package` service.
///
/// # Example
///
/// ```rust,ignore
/// let service = ProductPackageService::new(&client);
/// let packages = service.get_packages_by_type("BARE_METAL_CPU").await?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProductPackageService<'a> {
    client: &'a HttpClient,
}

impl Service for ProductPackageService<'_> {
    const NAME: &'static str = "SoftLayer_Product_Package";
}

impl<'a> ProductPackageService<'a> {
    /// Creates a new service backed by the given transport.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Retrieves the item prices of a package, optionally filtered.
    ///
    /// An object mask limits each price to its id, location group, and a
    /// summarized item reference.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_item_prices(
        &self,
        package_id: i32,
        filter: Option<ObjectFilter>,
    ) -> Result<Vec<ProductItemPrice>, ServiceError> {
        let mask = ObjectMask::from_paths([
            "id",
            "locationGroupId",
            "item.id",
            "item.keyName",
            "item.units",
            "item.description",
            "item.capacity",
        ]);

        fetch(
            self.client,
            Self::NAME,
            "getItemPrices",
            instance_path(Self::NAME, package_id, "getItemPrices"),
            Some(mask),
            filter,
        )
        .await
    }

    /// Retrieves the items of a package, optionally filtered.
    ///
    /// An object mask limits each item to its id, capacity, description,
    /// and a summarized price list with categories.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_items(
        &self,
        package_id: i32,
        filter: Option<ObjectFilter>,
    ) -> Result<Vec<ProductItem>, ServiceError> {
        let mask = ObjectMask::from_paths([
            "id",
            "capacity",
            "description",
            "prices.id",
            "prices.categories.id",
            "prices.categories.name",
        ]);

        fetch(
            self.client,
            Self::NAME,
            "getItems",
            instance_path(Self::NAME, package_id, "getItems"),
            Some(mask),
            filter,
        )
        .await
    }

    /// Retrieves the items of the first package of the given type.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NoPackagesOfType`] if no package of the type
    /// exists, and any error of the underlying lookups otherwise.
    pub async fn get_items_by_type(
        &self,
        package_type: &str,
    ) -> Result<Vec<ProductItem>, ServiceError> {
        let product_package = self.get_one_package_by_type(package_type).await?;
        self.get_items(product_package.id, None).await
    }

    /// Retrieves the first package of the given type.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NoPackagesOfType`] if the lookup returns no
    /// packages (after outlet filtering).
    pub async fn get_one_package_by_type(
        &self,
        package_type: &str,
    ) -> Result<ProductPackage, ServiceError> {
        let product_packages = self.get_packages_by_type(package_type).await?;

        product_packages
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::NoPackagesOfType {
                package_type: package_type.to_string(),
            })
    }

    /// Retrieves all packages of the given type, excluding outlet packages.
    ///
    /// The type is matched server-side with an object filter on
    /// `type.keyName`. Outlet (clearance) packages cannot be excluded
    /// server-side, so any package whose name or description contains the
    /// `OUTLET` marker is dropped here; the relative order of the remaining
    /// packages is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_packages_by_type(
        &self,
        package_type: &str,
    ) -> Result<Vec<ProductPackage>, ServiceError> {
        let mask = ObjectMask::from_paths(["id", "name", "description", "isActive", "type.keyName"]);
        let filter = ObjectFilter::new().with_operation("type.keyName", package_type);

        let mut packages: Vec<ProductPackage> = fetch(
            self.client,
            Self::NAME,
            "getAllObjects",
            collection_path(Self::NAME, "getAllObjects"),
            Some(mask),
            Some(filter),
        )
        .await?;

        packages.retain(|package| !is_outlet_package(package));
        Ok(packages)
    }

    /// Retrieves the order configuration of a package: the item categories
    /// involved in an order and which of them are required.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, a 4xx/5xx status, or
    /// a malformed response body.
    pub async fn get_configuration(
        &self,
        package_id: i32,
    ) -> Result<Vec<ProductPackageOrderConfiguration>, ServiceError> {
        fetch(
            self.client,
            Self::NAME,
            "getConfiguration",
            instance_path(Self::NAME, package_id, "getConfiguration"),
            None,
            None,
        )
        .await
    }
}

/// Returns true if the package is an outlet package: its name or its
/// description contains the marker substring, case-sensitively.
fn is_outlet_package(package: &ProductPackage) -> bool {
    package.name.contains(OUTLET_PACKAGE) || package.description.contains(OUTLET_PACKAGE)
}
