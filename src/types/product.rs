//! Product catalog data types.
//!
//! These structs mirror the `SoftLayer_Product_*` data types for packages,
//! items, and prices. Like every type in this SDK they are decode-owned
//! values with no cross-entity referential integrity: relationships exist
//! only through which endpoint returned which nested JSON.

use serde::{Deserialize, Serialize};

/// A sellable product configuration (e.g. a bare-metal server class).
///
/// See <https://sldn.softlayer.com/reference/datatypes/SoftLayer_Product_Package/>.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductPackage {
    /// The unique identifier of the package.
    pub id: i32,
    /// The package name.
    pub name: String,
    /// A description of the package.
    pub description: String,
    /// Whether the package is active (non-zero) in the catalog.
    pub is_active: i32,
    /// The package type, when the response includes it.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub package_type: Option<ProductPackageType>,
}

/// The type of a product package, identified by keyname
/// (e.g. `BARE_METAL_CPU`, `VIRTUAL_SERVER_INSTANCE`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductPackageType {
    /// The type keyname.
    pub key_name: String,
}

/// A sellable item within a package (RAM, disks, OS licenses, ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductItem {
    /// The unique identifier of the item.
    pub id: i32,
    /// The item capacity (e.g. "32" for 32 GB of RAM).
    pub capacity: String,
    /// A description of the item.
    pub description: String,
    /// Prices available for this item.
    pub prices: Vec<ProductItemPrice>,
}

/// A price attached to a product item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductItemPrice {
    /// The unique identifier of the price.
    pub id: i32,
    /// The location group the price applies to; 0 means the standard price.
    pub location_group_id: i32,
    /// The item the price belongs to, when the response includes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ProductItemRef>,
    /// Categories the price is sold under.
    pub categories: Vec<ProductItemCategory>,
}

/// A summarized item reference nested inside a price.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductItemRef {
    /// The unique identifier of the item.
    pub id: i32,
    /// The item keyname.
    pub key_name: String,
    /// The units the capacity is measured in.
    pub units: String,
    /// A description of the item.
    pub description: String,
    /// The item capacity.
    pub capacity: String,
}

/// A category a product item price is sold under.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductItemCategory {
    /// The unique identifier of the category.
    pub id: i32,
    /// The category name.
    pub name: String,
}

/// One entry of a package's order configuration: which item category is
/// required at which step when ordering from the package.
///
/// See <https://sldn.softlayer.com/reference/datatypes/SoftLayer_Product_Package_Order_Configuration/>.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductPackageOrderConfiguration {
    /// The unique identifier of the configuration entry.
    pub id: i32,
    /// The package this configuration belongs to.
    pub package_id: i32,
    /// The item category this entry covers.
    pub item_category_id: i32,
    /// Whether an item from this category is required to order (non-zero).
    pub is_required: i32,
    /// The order step this category appears in.
    pub order_step_id: i32,
    /// Sort order within the step.
    pub sort: i32,
}
