//! Location data types.
//!
//! These structs mirror the `SoftLayer_Location*` data types documented at
//! <https://sldn.softlayer.com/reference/datatypes/SoftLayer_Location/>.
//! Instances are created fresh by decoding one HTTP response and are
//! plain immutable values thereafter.

use serde::{Deserialize, Serialize};

/// A physical location such as a datacenter, a room, a rack, or a slot.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    /// The unique identifier of the location.
    pub id: i32,
    /// A longer location description (e.g. "Dallas 5").
    pub long_name: String,
    /// A short location name (e.g. "dal05").
    pub name: String,
}

/// The state of a location.
///
/// SoftLayer uses the following status codes:
/// - `ACTIVE`: currently active and available for public usage
/// - `PLANNED`: planned but not yet active
/// - `RETIRED`: retired and no longer active
///
/// Locations in use should stay in the `ACTIVE` state.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationStatus {
    /// The unique identifier of the status.
    pub id: i32,
    /// The status code string.
    pub status: String,
}

/// A grouping of locations.
///
/// See <https://sldn.softlayer.com/reference/datatypes/SoftLayer_Location_Group/>.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationGroup {
    /// The unique identifier of the group.
    pub id: i32,
    /// A description of the group.
    pub description: String,
    /// The identifier of the group's type.
    pub location_group_type_id: i32,
    /// The group's type, when the response includes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_group_type: Option<LocationGroupType>,
}

/// The type of a location group (e.g. "PRICING", "REGIONAL").
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationGroupType {
    /// The type name.
    pub name: String,
}

/// A regional grouping of locations.
///
/// See <https://sldn.softlayer.com/reference/datatypes/SoftLayer_Location_Group_Regional/>.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationGroupRegional {
    /// The unique identifier of the regional group.
    pub id: i32,
    /// A description of the regional group.
    pub description: String,
    /// The identifier of the group's type.
    pub location_group_type_id: i32,
    /// The group name.
    pub name: String,
    /// The security level of the group, when one is assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_level_id: Option<i32>,
}

/// A region a location belongs to.
///
/// A region is made up of a keyname and a description of that region. The
/// keyname can be used as part of a product order; there is no numeric id.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationRegion {
    /// A description of the region.
    pub description: String,
    /// The region keyname.
    pub keyname: String,
}
