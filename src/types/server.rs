//! Package server data types.
//!
//! The [`ProductPackageServer`] type contains summarized information for
//! bare metal servers regarding pricing, processor stats, and feature sets.
//!
//! See <https://sldn.softlayer.com/reference/datatypes/SoftLayer_Product_Package_Server/>.

use serde::{Deserialize, Serialize};

/// Summarized bare metal server information from the product catalog.
///
/// Boolean feature fields carry a `Flag` suffix on the wire
/// (e.g. `gpuFlag`, `hourlyBillingFlag`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductPackageServer {
    /// The unique identifier of the package server entry.
    pub id: i32,
    /// The catalog the entry belongs to.
    pub catalog_id: i32,
    /// Comma-separated list of datacenters the server is available in.
    pub datacenters: String,
    /// The default RAM capacity.
    pub default_ram_capacity: String,
    /// Whether the server supports dual path networking.
    #[serde(rename = "dualPathNetworkFlag")]
    pub dual_path_network: bool,
    /// Whether the server has a GPU.
    #[serde(rename = "gpuFlag")]
    pub gpu: bool,
    /// Whether the server can be billed hourly.
    #[serde(rename = "hourlyBillingFlag")]
    pub hourly_billing: bool,
    /// The identifier of the item this entry summarizes.
    pub item_id: i32,
    /// The identifier of the item price.
    pub item_price_id: i32,
    /// The maximum number of drives.
    pub maximum_drive_count: i32,
    /// The maximum port speed.
    pub maximum_port_speed: String,
    /// The maximum RAM capacity.
    pub maximum_ram_capacity: String,
    /// The minimum port speed.
    pub minimum_port_speed: String,
    /// Whether this is an outlet (clearance) entry.
    #[serde(rename = "outletFlag")]
    pub outlet: bool,
    /// The package the entry belongs to.
    pub package_id: i32,
    /// The package type keyname.
    pub package_type: String,
    /// Whether this is a POWER server.
    #[serde(rename = "powerServerFlag")]
    pub power_server: bool,
    /// The preset configuration identifier, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<i32>,
    /// Whether the server is restricted to the private network.
    #[serde(rename = "privateNetworkOnlyFlag")]
    pub private_network_only: bool,
    /// The processor bus speed.
    pub processor_bus_speed: String,
    /// The processor cache size.
    pub processor_cache: String,
    /// The number of cores per processor.
    pub processor_cores: i32,
    /// The number of processors.
    pub processor_count: i32,
    /// The processor manufacturer.
    pub processor_manufacturer: String,
    /// The processor model.
    pub processor_model: String,
    /// The processor name.
    pub processor_name: String,
    /// The number of physical cores per processor.
    pub processor_physical_cores: i32,
    /// The processor clock speed.
    pub processor_speed: String,
    /// The marketing name of the product.
    pub product_name: String,
    /// Whether the server has redundant power supplies.
    #[serde(rename = "redundantPowerFlag")]
    pub redundant_power: bool,
    /// Whether the server is SAP certified.
    #[serde(rename = "sapCertifiedServerFlag")]
    pub sap_certified_server: bool,
    /// The starting hourly price, when hourly billing is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_hourly_price: Option<String>,
    /// The starting monthly price, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_monthly_price: Option<String>,
    /// The total core count across all processors.
    pub total_core_count: i32,
    /// Whether the server supports TXT/TPM.
    #[serde(rename = "txtTpmFlag")]
    pub txt_tpm: bool,
    /// The unit size of the chassis.
    pub unit_size: i32,
}
