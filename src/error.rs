//! Centralized error handling for statrep.
//!
//! Logic modules use `anyhow` for error propagation with context; this enum
//! is the boundary type returned by the binary and the configuration layer,
//! with `From` conversions so the `?` operator works across both worlds.

use std::fmt;

/// Main error type for statrep operations.
#[derive(Debug)]
pub enum StatrepError {
    /// I/O errors (reading data or configuration files)
    Io(std::io::Error),

    /// Data processing errors (Polars, statistics, plotting)
    Data(String),

    /// Configuration errors (bad JSON, unknown fields)
    Config(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for StatrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Data(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StatrepError {}

impl From<std::io::Error> for StatrepError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for StatrepError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(format!("{err:#}"))
    }
}

impl From<serde_json::Error> for StatrepError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for StatrepError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::Data(err.to_string())
    }
}

/// Result type alias for statrep operations.
pub type Result<T> = std::result::Result<T, StatrepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatrepError::Data("column not found".to_owned());
        assert_eq!(err.to_string(), "Data processing error: column not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "data.csv");
        let err: StatrepError = io.into();
        assert!(err.to_string().contains("data.csv"));
    }
}
