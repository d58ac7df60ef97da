// Lumen error types
//
// Everything the engine rejects is reported through `LumenError`. Rejected
// calls never mutate state, so callers are free to log and carry on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating input or loading configuration
#[derive(Debug, Error)]
pub enum LumenError {
    /// Hex text that is not 3 or 6 hex digits
    #[error("Invalid hex color '{0}': expected 3 or 6 hex digits")]
    InvalidColor(String),

    /// Scene name that matches no known scene
    #[error("Unknown scene '{0}' (expected police, fire or storm)")]
    UnknownScene(String),

    /// Speed multiplier that is zero, negative, NaN or infinite
    #[error("Speed multiplier must be finite and positive, got {0}")]
    InvalidSpeed(f64),

    /// Intensity outside of 0..=100
    #[error("Intensity must be within 0..=100, got {0}")]
    InvalidIntensity(u32),

    /// Configuration file could not be read
    #[error("Failed to read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file is not valid JSON for `EngineConfig`
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for Lumen operations
pub type LumenResult<T> = Result<T, LumenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LumenError::UnknownScene("disco".to_string());
        assert!(err.to_string().contains("disco"));
        assert!(err.to_string().contains("police"));

        let err = LumenError::InvalidSpeed(-1.0);
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: LumenError = json_err.into();
        assert!(matches!(err, LumenError::ConfigParse(_)));
    }

    #[test]
    fn test_config_read_display_includes_path() {
        let err = LumenError::ConfigRead {
            path: PathBuf::from("/tmp/lumen.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/tmp/lumen.json"));
    }
}
