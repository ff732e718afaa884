//! Error types for glyph computations
//!
//! Provides a unified error type for all bucket-glyph crates.

use thiserror::Error;

/// Core error type for glyph and histogram operations
#[derive(Error, Debug)]
pub enum Error {
    /// Argument outside the accepted range (empty sample, zero resolution, bad domain, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No valid result exists for the given inputs
    #[error("Unsatisfiable: {0}")]
    Unsatisfiable(String),

    /// Semantically invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty sample
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidArgument(format!("{operation} requires a non-empty sample"))
    }

    /// Create an error for a zero resolution
    pub fn zero_resolution() -> Self {
        Self::InvalidArgument("resolution must be at least 1".to_string())
    }

    /// Create an error for a domain whose bounds are not strictly increasing
    pub fn invalid_domain(min: f64, max: f64) -> Self {
        Self::InvalidArgument(format!("domain [{min}, {max}] must satisfy min < max"))
    }

    /// Create an error for a value that must be finite and non-negative
    pub fn not_non_negative(name: &str, value: f64) -> Self {
        Self::InvalidArgument(format!("{name} must be finite and non-negative, got {value}"))
    }

    /// Check that `value` is finite and `>= 0`
    pub fn check_non_negative(name: &str, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(Self::not_non_negative(name, value));
        }
        Ok(())
    }
}
