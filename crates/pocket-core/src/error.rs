//! # Payment Error Types
//!
//! Typed error handling for the pocketapi payment service.
//! All gateway operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid order data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Currency not supported
    #[error("Unsupported currency: {currency}")]
    UnsupportedCurrency { currency: String },

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// HTTP status the error maps to on its own.
    ///
    /// The order endpoint answers 500 for every gateway failure and records
    /// this value in its error log.
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::UnsupportedCurrency { .. } => 400,
            PaymentError::ProviderError { .. } => 502,
            PaymentError::NetworkError(_) => 503,
            PaymentError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PaymentError::InvalidRequest("test".into()).status_code(),
            400
        );
        assert_eq!(
            PaymentError::UnsupportedCurrency {
                currency: "XYZ".into()
            }
            .status_code(),
            400
        );
        assert_eq!(PaymentError::NetworkError("down".into()).status_code(), 503);
    }

    #[test]
    fn test_display_includes_provider() {
        let err = PaymentError::ProviderError {
            provider: "razorpay".into(),
            message: "Authentication failed".into(),
        };
        assert_eq!(
            err.to_string(),
            "Provider error [razorpay]: Authentication failed"
        );
    }
}
