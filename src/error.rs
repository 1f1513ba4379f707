//! Error types for the lexaffect classifiers
//!
//! Classification itself never fails for well-formed text: every heuristic
//! edge case has a local default. The only error a caller can trigger through
//! the classifiers is [`AffectError::InvalidInput`]. The remaining variants
//! belong to the settings layer and the command-line front end.

use thiserror::Error;

/// Main error type for lexaffect operations
#[derive(Error, Debug)]
pub enum AffectError {
    /// Caller passed something that is not a well-formed string
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML rendering error
    #[error("TOML serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),
}

/// Result type alias for lexaffect operations
pub type Result<T> = std::result::Result<T, AffectError>;

impl AffectError {
    /// Shorthand for an [`AffectError::InvalidInput`]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AffectError::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AffectError::invalid_input("expected a string, got null");
        assert_eq!(err.to_string(), "Invalid input: expected a string, got null");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json");
        assert!(json_err.is_err());

        let err: AffectError = json_err.unwrap_err().into();
        assert!(matches!(err, AffectError::Serialization(_)));
    }
}
