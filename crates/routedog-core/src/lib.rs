//! Route.dog Core - delivery address extraction and geocoding.
//!
//! Takes a photo of delivery paperwork, asks a vision model for the
//! addresses on it, and geocodes each one.
//!
//! # Architecture
//!
//! ```text
//! Image → Vision model (address strings) → Geocoder (one call per string) → Address[]
//! ```
//!
//! A failed extraction is an error. A failed geocode is not: the address is
//! returned with `standardized == original` and zero coordinates.
//!
//! # Usage
//!
//! ```rust,ignore
//! use routedog_core::{AddressService, Config};
//!
//! #[tokio::main]
//! async fn main() -> routedog_core::Result<()> {
//!     let config = Config::load()?;
//!     let service = AddressService::from_config(&config)?;
//!
//!     let address = service.geocode_address("4600 Silver Hill Rd, Washington, DC").await?;
//!     println!("{} -> ({}, {})", address.standardized, address.latitude, address.longitude);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod geocode;
pub mod service;
pub mod types;
pub mod vision;

// Re-exports for convenient access
pub use config::Config;
pub use error::{
    ConfigError, ExtractionError, GeocodingError, Result, RouteDogError, ServiceError,
};
pub use geocode::{CensusGeocoder, Geocoder};
pub use service::{geocode_or_unresolved, AddressService, BatchOptions};
pub use types::{Address, GeocodeAddressRequest, ParseAddressesRequest, ParseAddressesResponse};
pub use vision::{AddressExtractor, ImageInput, OpenAiExtractor};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
