//! Address service: the two operations exposed over HTTP and the CLI.
//!
//! Extraction failures are hard errors. Geocoding failures are soft: the
//! address is kept with `standardized == original` and zero coordinates.

use crate::config::Config;
use crate::error::{RouteDogError, ServiceError};
use crate::geocode::{CensusGeocoder, Geocoder};
use crate::types::Address;
use crate::vision::{AddressExtractor, ImageInput, OpenAiExtractor};
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;

/// Options for batch geocoding.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Maximum geocoding calls in flight for one image
    pub parallel: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { parallel: 4 }
    }
}

/// Extracts and geocodes addresses. Shared read-only across requests.
pub struct AddressService {
    extractor: Arc<dyn AddressExtractor>,
    geocoder: Arc<dyn Geocoder>,
    options: BatchOptions,
}

impl AddressService {
    pub fn new(
        extractor: Box<dyn AddressExtractor>,
        geocoder: Box<dyn Geocoder>,
        options: BatchOptions,
    ) -> Self {
        Self {
            extractor: Arc::from(extractor),
            geocoder: Arc::from(geocoder),
            options: BatchOptions {
                parallel: options.parallel.max(1),
            },
        }
    }

    /// Build the service with the OpenAI extractor and the Census geocoder.
    ///
    /// Fails if the vision API key cannot be resolved.
    pub fn from_config(config: &Config) -> Result<Self, RouteDogError> {
        let extractor = OpenAiExtractor::from_config(&config.vision)?;
        let geocoder = CensusGeocoder::new(&config.geocoding);
        tracing::debug!(
            extractor = extractor.name(),
            geocoder = geocoder.name(),
            "Address service configured"
        );
        Ok(Self::new(
            Box::new(extractor),
            Box::new(geocoder),
            BatchOptions {
                parallel: config.geocoding.parallel,
            },
        ))
    }

    /// Extract every address in a base64 image and geocode each one.
    ///
    /// Records come back in extraction order, one per extracted string.
    pub async fn parse_addresses(&self, image: &str) -> Result<Vec<Address>, ServiceError> {
        self.parse_image(&ImageInput::from_base64(image)).await
    }

    /// Extract and geocode the addresses in an already-decoded image input.
    ///
    /// An image with no data is rejected before the extractor is called.
    pub async fn parse_image(&self, image: &ImageInput) -> Result<Vec<Address>, ServiceError> {
        if image.data.is_empty() {
            return Err(ServiceError::MissingInput("Image is required"));
        }

        tracing::debug!(
            extractor = self.extractor.name(),
            media_type = %image.media_type,
            timeout_ms = self.extractor.timeout().as_millis() as u64,
            "Extracting addresses from image"
        );
        let extracted = self.extractor.extract(image).await.map_err(|e| {
            tracing::error!(extractor = self.extractor.name(), "Failed to extract addresses: {e}");
            ServiceError::from(e)
        })?;

        tracing::info!(count = extracted.len(), "Extracted addresses from image");
        Ok(self.geocode_batch(extracted).await)
    }

    /// Geocode one address, degrading to a zero-coordinate record on failure.
    pub async fn geocode_address(&self, address: &str) -> Result<Address, ServiceError> {
        if address.is_empty() {
            return Err(ServiceError::MissingInput("Address is required"));
        }
        Ok(self.geocode_or_fallback(address).await)
    }

    /// Geocode each address independently, preserving input order.
    pub async fn geocode_batch(&self, addresses: Vec<String>) -> Vec<Address> {
        stream::iter(addresses)
            .map(move |address| async move { self.geocode_or_fallback(&address).await })
            .buffered(self.options.parallel)
            .collect()
            .await
    }

    async fn geocode_or_fallback(&self, address: &str) -> Address {
        geocode_or_unresolved(self.geocoder.as_ref(), address).await
    }
}

/// Geocode one address; on any failure log it and return [`Address::unresolved`].
pub async fn geocode_or_unresolved(geocoder: &dyn Geocoder, address: &str) -> Address {
    match geocoder.geocode(address).await {
        Ok(geocoded) => geocoded,
        Err(e) => {
            tracing::warn!(
                geocoder = geocoder.name(),
                "Failed to geocode address '{address}': {e}"
            );
            Address::unresolved(address)
        }
    }
}
