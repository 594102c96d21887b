//! US Census Bureau one-line address geocoder.
//!
//! No authentication. The provider reports coordinates as `x` (longitude)
//! and `y` (latitude).

use super::provider::Geocoder;
use crate::config::GeocodingConfig;
use crate::error::GeocodingError;
use crate::types::Address;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Geocoder backed by `geocoding.geo.census.gov`.
pub struct CensusGeocoder {
    endpoint: String,
    benchmark: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl CensusGeocoder {
    pub fn new(config: &GeocodingConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            benchmark: config.benchmark.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for CensusGeocoder {
    fn default() -> Self {
        Self::new(&GeocodingConfig::default())
    }
}

// --- Response types ---

#[derive(Deserialize)]
struct CensusResponse {
    result: CensusResult,
}

#[derive(Deserialize)]
struct CensusResult {
    #[serde(rename = "addressMatches", default)]
    address_matches: Vec<AddressMatch>,
}

#[derive(Deserialize)]
struct AddressMatch {
    #[serde(rename = "matchedAddress")]
    matched_address: String,
    coordinates: Coordinates,
}

#[derive(Deserialize)]
struct Coordinates {
    /// Longitude
    x: f64,
    /// Latitude
    y: f64,
}

#[async_trait]
impl Geocoder for CensusGeocoder {
    fn name(&self) -> &str {
        "census"
    }

    async fn geocode(&self, address: &str) -> Result<Address, GeocodingError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("address", address),
                ("benchmark", self.benchmark.as_str()),
                ("format", "json"),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| GeocodingError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeocodingError::Status {
                status: status.as_u16(),
            });
        }

        let body: CensusResponse = resp
            .json()
            .await
            .map_err(|e| GeocodingError::Decode(e.to_string()))?;

        let first = body
            .result
            .address_matches
            .into_iter()
            .next()
            .ok_or(GeocodingError::NoMatch)?;

        Ok(Address {
            original: address.to_string(),
            standardized: first.matched_address,
            latitude: first.coordinates.y,
            longitude: first.coordinates.x,
        })
    }
}
