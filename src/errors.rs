//! Error types for the fruit slot server shell (configuration, sockets)
//!
//! Per-request randomness failures never reach this type. Handlers map them
//! straight to [`crate::api::errors::ApiError`].

/// Root error type for service startup and operation
#[derive(Debug, thiserror::Error)]
pub enum FruitSlotError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Socket and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValue { field: String, value: String, reason: String },

    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),
}

// Convenience type alias for Results
pub type FruitSlotResult<T> = Result<T, FruitSlotError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err: FruitSlotError = ConfigurationError::InvalidValue {
            field: "server.port".to_string(),
            value: "0".to_string(),
            reason: "Port cannot be zero".to_string(),
        }
        .into();

        let text = err.to_string();
        assert!(text.contains("Configuration error"));
        assert!(text.contains("server.port"));
        assert!(text.contains("Port cannot be zero"));
    }

    #[test]
    fn test_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: FruitSlotError = io.into();
        match err {
            FruitSlotError::Io(_) => {}
            _ => panic!("Expected I/O error"),
        }
    }

    #[test]
    fn test_error_source() {
        let err: FruitSlotError = ConfigurationError::LoadFailed("missing".to_string()).into();
        assert!(err.source().is_some());
    }
}
