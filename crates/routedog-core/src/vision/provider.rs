//! Address extractor trait and image input type.
//!
//! Defines the interface a vision backend implements, plus the fixed
//! instruction sent along with every image.

use crate::error::ExtractionError;
use async_trait::async_trait;
use base64::Engine;
use std::time::Duration;

/// Instruction sent with every image.
pub const EXTRACTION_PROMPT: &str = "Extract all delivery addresses from this image. \
     Return only a JSON array of address strings, no other text. \
     Each address should be a complete street address including street number, \
     street name, city, state/province, and postal code when visible. \
     If no addresses are found, return an empty array.";

/// Media type assumed for payloads that arrive as bare base64.
const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

/// Base64-encoded image ready to send to a vision API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    /// Base64-encoded image bytes, without any data-URL prefix
    pub data: String,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub media_type: String,
}

impl ImageInput {
    /// Create an `ImageInput` from a client-supplied base64 payload.
    ///
    /// A `data:image/...;base64,` prefix is stripped. The declared media type
    /// is not kept, so a prefixed payload and its bare form are identical.
    pub fn from_base64(payload: &str) -> Self {
        let data = match payload.strip_prefix("data:image/") {
            Some(rest) => rest.split_once(',').map_or(payload, |(_, data)| data),
            None => payload,
        };

        Self {
            data: data.to_string(),
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
        }
    }

    /// Create an `ImageInput` from raw bytes and a format string.
    ///
    /// The format is the image format identifier (e.g., "jpeg", "png", "webp").
    pub fn from_bytes(bytes: &[u8], format: &str) -> Self {
        let media_type = match format.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            other => {
                tracing::warn!("Unknown image format '{other}', defaulting to {DEFAULT_MEDIA_TYPE}");
                DEFAULT_MEDIA_TYPE
            }
        };

        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: media_type.to_string(),
        }
    }

    /// Return a data URL suitable for OpenAI-style APIs.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

/// Trait that all vision backends implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the service holds an `Arc<dyn AddressExtractor>`).
#[async_trait]
pub trait AddressExtractor: Send + Sync {
    /// Backend name for logging (e.g., "openai").
    fn name(&self) -> &str;

    /// Extract raw address strings from the image, in model output order.
    async fn extract(&self, image: &ImageInput) -> Result<Vec<String>, ExtractionError>;

    /// Per-request timeout for this backend.
    fn timeout(&self) -> Duration;
}

/// Parse the model's text output as a JSON array of address strings.
pub fn parse_address_list(content: &str) -> Result<Vec<String>, ExtractionError> {
    serde_json::from_str::<Vec<String>>(content.trim())
        .map_err(|e| ExtractionError::MalformedOutput(e.to_string()))
}
