//! Geocoding: free-form address string to standardized address and coordinates.

pub(crate) mod census;
pub(crate) mod provider;

pub use census::CensusGeocoder;
pub use provider::Geocoder;
