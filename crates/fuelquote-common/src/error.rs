//! Error types for the fuel quote service
//!
//! Provides a unified error type plus the validation errors that map to
//! client-facing rejections.

use thiserror::Error;

/// Result type alias using QuoteError
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Unified error type for quote operations
#[derive(Debug, Error)]
pub enum QuoteError {
    // Input validation errors; these become HTTP 400 at the gateway
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Request input outside the accepted domain
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid customer tier: {tier} (expected 1-14)")]
    InvalidTier { tier: i64 },

    #[error("Invalid country: {0}")]
    UnknownCountry(String),

    #[error("Invalid grid location: {0}")]
    UnknownGridLocation(String),
}

// Implement From for common external error types
impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for QuoteError {
    fn from(err: anyhow::Error) -> Self {
        QuoteError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = QuoteError::Validation(ValidationError::InvalidTier { tier: 15 });
        assert!(err.to_string().contains("15"));
        assert!(err.to_string().contains("customer tier"));
    }

    #[test]
    fn test_unknown_country_display() {
        let err = ValidationError::UnknownCountry("Atlantis".to_string());
        assert_eq!(err.to_string(), "Invalid country: Atlantis");
    }
}
