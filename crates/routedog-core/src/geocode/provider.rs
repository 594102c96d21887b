//! Geocoder trait.

use crate::error::GeocodingError;
use crate::types::Address;
use async_trait::async_trait;

/// Trait that all geocoding backends implement.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Backend name for logging (e.g., "census").
    fn name(&self) -> &str;

    /// Resolve one free-form address to its first match.
    ///
    /// The returned record's `original` is `address` verbatim.
    async fn geocode(&self, address: &str) -> Result<Address, GeocodingError>;
}
