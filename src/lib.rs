//! # SoftLayer API Rust SDK
//!
//! A Rust SDK for the SoftLayer (IBM Cloud infrastructure) REST API,
//! providing type-safe configuration, an authenticated async HTTP client,
//! and typed services for locations and product packages.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`SoftLayerConfig`] and [`SoftLayerConfigBuilder`]
//! - Validated newtypes for API credentials and the endpoint URL
//! - An async HTTP client with object-mask and object-filter support
//! - Typed services: [`services::LocationService`],
//!   [`services::LocationGroupRegionalService`],
//!   [`services::ProductPackageService`], and
//!   [`services::ProductPackageServerService`]
//! - Serde data types mirroring the SoftLayer wire format
//!
//! ## Quick Start
//!
//! ```rust
//! use softlayer_api::{SoftLayerConfig, ApiUsername, ApiKey};
//!
//! // Create configuration using the builder pattern
//! let config = SoftLayerConfig::builder()
//!     .username(ApiUsername::new("SL123456").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Calling a Service
//!
//! ```rust,ignore
//! use softlayer_api::{SoftLayerClient, SoftLayerConfig, ApiUsername, ApiKey};
//!
//! let config = SoftLayerConfig::builder()
//!     .username(ApiUsername::new("SL123456")?)
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .build()?;
//!
//! let client = SoftLayerClient::new(&config);
//!
//! for datacenter in client.location_service().get_datacenters().await? {
//!     println!("{}: {}", datacenter.name, datacenter.long_name);
//! }
//! ```
//!
//! ## Filtering Packages by Type
//!
//! ```rust,ignore
//! let packages = client
//!     .product_package_service()
//!     .get_packages_by_type("BARE_METAL_CPU")
//!     .await?;
//! // Outlet packages are excluded from the result.
//! ```
//!
//! ## Making Raw Requests
//!
//! ```rust,ignore
//! use softlayer_api::clients::{HttpClient, HttpMethod, HttpRequest, ObjectMask};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(
//!     HttpMethod::Get,
//!     "SoftLayer_Location/getDatacenters.json",
//! )
//! .mask(ObjectMask::from_paths(["id", "longName", "name"]))
//! .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Each operation issues exactly one HTTP request

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

// Re-export public types at crate root for convenience
pub use client::SoftLayerClient;
pub use config::{ApiKey, ApiUsername, EndpointUrl, SoftLayerConfig, SoftLayerConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, ObjectFilter, ObjectMask,
};

// Re-export the service surface for convenience
pub use services::{
    LocationGroupRegionalService, LocationService, ProductPackageServerService,
    ProductPackageService, Service, ServiceError,
};
