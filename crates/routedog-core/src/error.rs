//! Error types for Route.dog.
//!
//! Errors are split by the collaborator that produced them so callers can
//! tell a hard failure (vision extraction) from a soft one (geocoding).

use thiserror::Error;

/// Top-level error type for Route.dog operations.
#[derive(Error, Debug)]
pub enum RouteDogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Address service errors
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Failure of the vision-model call that turns an image into address strings.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The request never produced an HTTP response (connect, DNS, timeout)
    #[error("vision request failed: {0}")]
    Request(String),

    /// The model API answered with a non-success status
    #[error("vision API error: HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response envelope did not match the chat-completions schema
    #[error("failed to decode vision response: {0}")]
    Decode(String),

    /// The model returned no choices, or a choice without content
    #[error("no response from vision model")]
    EmptyResponse,

    /// The model's text was not a JSON array of strings
    #[error("failed to parse vision output as a JSON array of addresses: {0}")]
    MalformedOutput(String),
}

/// Failure to geocode a single address.
#[derive(Error, Debug)]
pub enum GeocodingError {
    /// The request never produced an HTTP response
    #[error("geocoding request failed: {0}")]
    Request(String),

    /// The geocoder answered with a non-success status
    #[error("geocoding API error: HTTP {status}")]
    Status { status: u16 },

    /// The body did not match the expected result schema
    #[error("failed to decode geocoding response: {0}")]
    Decode(String),

    /// The geocoder returned no candidate matches
    #[error("no geocoding results found")]
    NoMatch,
}

/// Errors surfaced by the address operations.
///
/// Geocoding failures never appear here: they degrade to a fallback record.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A required request field was missing or empty
    #[error("{0}")]
    MissingInput(&'static str),

    /// The vision model could not extract addresses
    #[error("Failed to extract addresses: {0}")]
    Extraction(#[from] ExtractionError),
}

impl ServiceError {
    /// Whether the caller is at fault (4xx) rather than an upstream (5xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingInput(_))
    }
}

/// Convenience type alias for Route.dog results.
pub type Result<T> = std::result::Result<T, RouteDogError>;
