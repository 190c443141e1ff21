//! Error types for SoftLayer API operations.
//!
//! This module provides the error type shared by every client crate,
//! including the mapping from HTTP status codes and SoftLayer fault
//! payloads to typed variants.

use serde::Deserialize;
use thiserror::Error;

/// Main error type for SoftLayer API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The API endpoint is unreachable or temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// A fault declared by the remote API
    #[error("API fault {code}: {message}")]
    ApiFault {
        /// SoftLayer exception class name (e.g. `SoftLayer_Exception_ObjectNotFound`)
        code: String,
        /// Human-readable fault message
        message: String,
    },

    /// Authentication with the API failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Operation timed out
    #[error("Timeout waiting for the API: {0}")]
    Timeout(String),

    /// Failed to encode request parameters
    #[error("Failed to encode request parameters: {0}")]
    Encode(String),

    /// Failed to decode an API response
    #[error("Failed to decode API response: {0}")]
    Decode(String),

    /// Invalid endpoint URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Invalid resource identifier
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// Specialized result type for SoftLayer API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fault payload returned by the SoftLayer REST endpoint on errors.
///
/// The body of a non-2xx response carries the exception class name and
/// message, e.g. `{"error": "Object does not exist", "code":
/// "SoftLayer_Exception_ObjectNotFound"}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiFaultBody {
    /// Human-readable fault message
    pub error: String,
    /// SoftLayer exception class name
    pub code: String,
}

impl ApiFaultBody {
    /// Attempt to parse a fault payload from a response body.
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::ApiFault { .. } => "API_FAULT",
            Self::AuthenticationFailed(_) => "AUTHENTICATION_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Encode(_) => "ENCODE_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
        }
    }

    /// Returns true if a request that failed this way may be retried.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_) | Self::Timeout(_))
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Self {
        Self::InvalidIdentifier(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::ServiceUnavailable("test".to_string()).error_code(),
            "SERVICE_UNAVAILABLE"
        );
        assert_eq!(
            Error::ApiFault {
                code: "SoftLayer_Exception".to_string(),
                message: "msg".to_string()
            }
            .error_code(),
            "API_FAULT"
        );
        assert_eq!(
            Error::AuthenticationFailed("test".to_string()).error_code(),
            "AUTHENTICATION_FAILED"
        );
        assert_eq!(
            Error::NotFound("test".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            Error::InvalidRequest("test".to_string()).error_code(),
            "INVALID_REQUEST"
        );
        assert_eq!(
            Error::ConfigError("test".to_string()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            Error::ValidationError("test".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            Error::HttpError("test".to_string()).error_code(),
            "HTTP_ERROR"
        );
        assert_eq!(Error::Timeout("test".to_string()).error_code(), "TIMEOUT");
        assert_eq!(
            Error::Encode("test".to_string()).error_code(),
            "ENCODE_ERROR"
        );
        assert_eq!(
            Error::Decode("test".to_string()).error_code(),
            "DECODE_ERROR"
        );
        assert_eq!(
            Error::InvalidEndpoint("test".to_string()).error_code(),
            "INVALID_ENDPOINT"
        );
        assert_eq!(
            Error::InvalidIdentifier("test".to_string()).error_code(),
            "INVALID_IDENTIFIER"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::ServiceUnavailable("api.softlayer.com".to_string());
        assert_eq!(err.to_string(), "Service unavailable: api.softlayer.com");

        let err = Error::ApiFault {
            code: "SoftLayer_Exception_ObjectNotFound".to_string(),
            message: "Unable to find object".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API fault SoftLayer_Exception_ObjectNotFound: Unable to find object"
        );
    }

    #[test]
    fn test_fault_body_parse() {
        let body = r#"{"error":"Invalid API token.","code":"SoftLayer_Exception_InvalidLegacyToken"}"#;
        let fault = ApiFaultBody::parse(body).unwrap();
        assert_eq!(fault.error, "Invalid API token.");
        assert_eq!(fault.code, "SoftLayer_Exception_InvalidLegacyToken");
    }

    #[test]
    fn test_fault_body_parse_invalid() {
        assert!(ApiFaultBody::parse("not json").is_none());
        assert!(ApiFaultBody::parse(r#"{"message":"other shape"}"#).is_none());
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::ServiceUnavailable("test".to_string()).is_retryable());
        assert!(Error::Timeout("test".to_string()).is_retryable());
        assert!(!Error::NotFound("test".to_string()).is_retryable());
        assert!(!Error::AuthenticationFailed("test".to_string()).is_retryable());
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let sl_err: Error = err.into();
        assert!(matches!(sl_err, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let sl_err: Error = err.into();
        assert!(matches!(sl_err, Error::Decode(_)));
    }

    #[test]
    fn test_from_uuid_error() {
        let err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
        let sl_err: Error = err.into();
        assert!(matches!(sl_err, Error::InvalidIdentifier(_)));
    }

    #[test]
    fn test_error_clone_and_eq() {
        let err = Error::NotFound("guest 42".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
        assert_ne!(err, Error::NotFound("guest 43".to_string()));
    }
}
