//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// TCP port to listen on
    pub port: u16,

    /// Maximum accepted request body in megabytes (base64 photos are large)
    pub max_body_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_mb: 20,
        }
    }
}

impl ServerConfig {
    /// Body limit in bytes.
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_mb.saturating_mul(1024 * 1024)
    }
}

/// Vision model settings (OpenAI Chat Completions).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Chat completions endpoint
    pub endpoint: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Vision-capable model name
    pub model: String,

    /// Maximum tokens the model may generate
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: "${OPENAI_API_KEY}".to_string(),
            model: "gpt-4o".to_string(),
            max_tokens: 1000,
            timeout_ms: 60_000,
        }
    }
}

/// Geocoder settings (US Census one-line address lookup).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    /// One-line address endpoint
    pub endpoint: String,

    /// Census benchmark identifier
    pub benchmark: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// Max geocoding calls in flight for one image
    pub parallel: usize,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://geocoding.geo.census.gov/geocoder/locations/onelineaddress"
                .to_string(),
            benchmark: "Public_AR_Current".to_string(),
            timeout_ms: 30_000,
            parallel: 4,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
