//! Configuration management for Route.dog.
//!
//! Configuration is loaded from the platform config directory (or an explicit
//! path) with defaults for every field, so an absent file is a valid setup.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Route.dog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Vision model settings
    pub vision: VisionConfig,

    /// Geocoder settings
    pub geocoding: GeocodingConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.routedog.routedog/config.toml
    /// - Linux: ~/.config/routedog/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\routedog\config\config.toml
    ///
    /// Falls back to ~/.routedog/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "routedog", "routedog")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".routedog").join("config.toml")
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.vision.model, "gpt-4o");
        assert_eq!(config.vision.max_tokens, 1000);
        assert_eq!(config.geocoding.benchmark, "Public_AR_Current");
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[server]"));
        assert!(toml.contains("[vision]"));
        assert!(toml.contains("[geocoding]"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.geocoding.parallel, 4);
    }

    #[test]
    fn test_invalid_toml_values_rejected() {
        let err = Config::from_toml("[geocoding]\nparallel = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[vision]\nmodel = \"gpt-4o-mini\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.vision.model, "gpt-4o-mini");
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }

    #[test]
    fn test_expand_path_without_tilde() {
        assert_eq!(expand_path("/etc/routedog.toml"), PathBuf::from("/etc/routedog.toml"));
    }
}
