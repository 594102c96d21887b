//! Core data types for Route.dog.
//!
//! These are the records returned to clients and the request bodies they send.

use serde::{Deserialize, Serialize};

/// A delivery address with its geocoding result.
///
/// `original` is always the exact string that was geocoded. When geocoding
/// fails, `standardized` repeats `original` and both coordinates are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Address string as extracted or submitted
    pub original: String,

    /// Standardized form reported by the geocoder
    pub standardized: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Address {
    /// Fallback record for an address the geocoder could not resolve.
    pub fn unresolved(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            standardized: original.clone(),
            original,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    /// Whether this record carries real coordinates.
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }
}

/// Body of `POST /v1/addresses`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseAddressesRequest {
    /// Base64 image, optionally as a `data:image/...;base64,` URL
    pub image: String,
}

/// Response of `POST /v1/addresses`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseAddressesResponse {
    pub addresses: Vec<Address>,
}

/// Body of `PUT /v1/geocode-address`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeAddressRequest {
    pub address: String,
}
