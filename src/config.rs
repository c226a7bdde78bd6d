//! Configuration management for the fruit slot service
//!
//! Defaults, optional TOML file, `FRUIT_SLOT_*` environment overrides and
//! validation, applied in that order by [`ConfigLoader::load`].

use crate::errors::{ConfigurationError, FruitSlotResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Top-level service configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FruitSlotConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP listener settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins, `*` for any
    pub allowed_origins: Vec<String>,
    /// Upper bound on handling a single request
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            allowed_origins: vec!["*".to_string()],
            request_timeout_secs: 10,
        }
    }
}

/// Configuration loader with environment variable support
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_string_lossy().to_string());
        self
    }

    /// Load configuration from file and environment variables
    pub fn load(&self) -> FruitSlotResult<FruitSlotConfig> {
        let mut config = match &self.config_path {
            Some(path) => self.load_from_file(path)?,
            None => FruitSlotConfig::default(),
        };

        self.apply_overrides(&mut config, |key| env::var(key).ok())?;
        self.validate(&config)?;

        Ok(config)
    }

    fn load_from_file(&self, path: &str) -> FruitSlotResult<FruitSlotConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::LoadFailed(format!("Failed to read {}: {}", path, e))
        })?;

        toml::from_str(&content).map_err(|e| {
            ConfigurationError::LoadFailed(format!("Failed to parse TOML: {}", e)).into()
        })
    }

    /// Apply `FRUIT_SLOT_*` overrides read through `lookup`
    fn apply_overrides<F>(&self, config: &mut FruitSlotConfig, lookup: F) -> FruitSlotResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("FRUIT_SLOT_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("FRUIT_SLOT_PORT") {
            config.server.port = port.parse().map_err(|_| ConfigurationError::InvalidValue {
                field: "FRUIT_SLOT_PORT".to_string(),
                value: port,
                reason: "Invalid port number".to_string(),
            })?;
        }
        if let Some(timeout) = lookup("FRUIT_SLOT_REQUEST_TIMEOUT") {
            config.server.request_timeout_secs =
                timeout.parse().map_err(|_| ConfigurationError::InvalidValue {
                    field: "FRUIT_SLOT_REQUEST_TIMEOUT".to_string(),
                    value: timeout,
                    reason: "Invalid timeout value".to_string(),
                })?;
        }
        if let Some(origins) = lookup("FRUIT_SLOT_CORS_ORIGINS") {
            config.server.allowed_origins = parse_origins(&origins);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self, config: &FruitSlotConfig) -> FruitSlotResult<()> {
        if config.server.port == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "server.port".to_string(),
                value: "0".to_string(),
                reason: "Port cannot be zero".to_string(),
            }
            .into());
        }

        if config.server.host.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigurationError::InvalidValue {
                field: "server.host".to_string(),
                value: config.server.host.clone(),
                reason: "Host must be an IP address".to_string(),
            }
            .into());
        }

        if config.server.request_timeout_secs == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "server.request_timeout_secs".to_string(),
                value: "0".to_string(),
                reason: "Timeout must be at least one second".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, config: &FruitSlotConfig, path: &str) -> FruitSlotResult<()> {
        let toml_string = toml::to_string_pretty(config).map_err(|e| {
            ConfigurationError::SaveFailed(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, toml_string).map_err(|e| {
            ConfigurationError::SaveFailed(format!("Failed to write to {}: {}", path, e)).into()
        })
    }
}

/// Split a comma-separated origin list
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Generate a sample configuration file
pub fn generate_sample_config(path: &str) -> FruitSlotResult<()> {
    ConfigLoader::new().save(&FruitSlotConfig::default(), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FruitSlotError;
    use std::collections::HashMap;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = FruitSlotConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.allowed_origins, vec!["*".to_string()]);
        assert!(ConfigLoader::new().validate(&config).is_ok());
    }

    #[test]
    fn test_config_validation() {
        let loader = ConfigLoader::new();
        let mut config = FruitSlotConfig::default();

        config.server.port = 0;
        assert!(loader.validate(&config).is_err());

        config.server.port = 8080;
        config.server.request_timeout_secs = 0;
        assert!(loader.validate(&config).is_err());

        config.server.request_timeout_secs = 5;
        config.server.host = "not-an-ip".to_string();
        assert!(loader.validate(&config).is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FRUIT_SLOT_HOST", "127.0.0.1"),
            ("FRUIT_SLOT_PORT", "9090"),
            ("FRUIT_SLOT_REQUEST_TIMEOUT", "3"),
            ("FRUIT_SLOT_CORS_ORIGINS", "http://a.test, http://b.test"),
        ]
        .into_iter()
        .collect();

        let mut config = FruitSlotConfig::default();
        ConfigLoader::new()
            .apply_overrides(&mut config, |key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.request_timeout_secs, 3);
        assert_eq!(config.server.allowed_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = FruitSlotConfig::default();
        let err = ConfigLoader::new()
            .apply_overrides(&mut config, |key| {
                (key == "FRUIT_SLOT_PORT").then(|| "eighty".to_string())
            })
            .unwrap_err();

        match err {
            FruitSlotError::Configuration(ConfigurationError::InvalidValue {
                field, value, ..
            }) => {
                assert_eq!(field, "FRUIT_SLOT_PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_save_and_load_config() -> FruitSlotResult<()> {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        let mut original = FruitSlotConfig::default();
        original.server.port = 9191;
        original.server.allowed_origins = vec!["http://localhost:3000".to_string()];

        let loader = ConfigLoader::new();
        loader.save(&original, path)?;

        let loaded = loader.load_from_file(path)?;
        assert_eq!(loaded, original);

        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: FruitSlotConfig = toml::from_str("[server]\nport = 7000\n").unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.request_timeout_secs, 10);
    }

    #[test]
    fn test_missing_file_fails() {
        let err = ConfigLoader::new()
            .with_path("/nonexistent/fruit-slot.toml")
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load configuration"));
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(parse_origins(" a , ,b "), vec!["a", "b"]);
    }
}
