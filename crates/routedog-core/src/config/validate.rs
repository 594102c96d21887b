//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be > 0".into(),
            ));
        }
        if self.server.max_body_mb == 0 {
            return Err(ConfigError::ValidationError(
                "server.max_body_mb must be > 0".into(),
            ));
        }
        if self.vision.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "vision.endpoint must not be empty".into(),
            ));
        }
        if self.vision.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "vision.model must not be empty".into(),
            ));
        }
        if self.vision.max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "vision.max_tokens must be > 0".into(),
            ));
        }
        if self.vision.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "vision.timeout_ms must be > 0".into(),
            ));
        }
        if self.geocoding.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "geocoding.endpoint must not be empty".into(),
            ));
        }
        if self.geocoding.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "geocoding.timeout_ms must be > 0".into(),
            ));
        }
        if self.geocoding.parallel == 0 {
            return Err(ConfigError::ValidationError(
                "geocoding.parallel must be > 0".into(),
            ));
        }
        Ok(())
    }
}
