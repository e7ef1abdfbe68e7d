//! Data model layer: plain structs mirroring SoftLayer resource shapes.
//!
//! Every type here is a decode-owned value: created fresh from one HTTP
//! response, immutable and ephemeral thereafter. Field names follow Rust
//! conventions with serde renames mapping them onto the fixed wire names
//! (`longName`, `locationGroupTypeId`, `dualPathNetworkFlag`, ...).

mod location;
mod product;
mod server;

pub use location::{
    Location, LocationGroup, LocationGroupRegional, LocationGroupType, LocationRegion,
    LocationStatus,
};
pub use product::{
    ProductItem, ProductItemCategory, ProductItemPrice, ProductItemRef, ProductPackage,
    ProductPackageOrderConfiguration, ProductPackageType,
};
pub use server::ProductPackageServer;
