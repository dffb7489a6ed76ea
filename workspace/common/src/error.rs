use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

use crate::ErrorEnvelope;

/// Error types for calls against the transactions API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response carrying a structured error envelope
    #[error("{message}")]
    Api {
        status: u16,
        error: String,
        message: String,
        details: Option<BTreeMap<String, String>>,
    },

    /// Rejected input, either by the server (400/422) or by a client-side check
    #[error("{message}")]
    Validation {
        message: String,
        details: Option<BTreeMap<String, String>>,
    },

    /// A 2xx response whose body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds an error from a non-2xx status and its decoded envelope.
    pub fn from_envelope(status: u16, envelope: ErrorEnvelope) -> Self {
        let message = match (envelope.message.is_empty(), envelope.error.is_empty()) {
            (false, true) => envelope.message,
            (false, false) => format!("{}: {}", envelope.message, envelope.error),
            (true, false) => envelope.error.clone(),
            (true, true) => format!("HTTP error: {}", status),
        };

        let err = if matches!(status, 400 | 422) {
            ApiError::Validation {
                message,
                details: envelope.details,
            }
        } else {
            ApiError::Api {
                status,
                error: envelope.error,
                message,
                details: envelope.details,
            }
        };
        warn!(status, %err, "API returned an error response");
        err
    }

    /// Non-2xx response without a readable body.
    pub fn from_status(status: u16) -> Self {
        Self::from_envelope(status, ErrorEnvelope::default())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short heading used by notifications.
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "Connection Problem",
            ApiError::Api { .. } => "Request Failed",
            ApiError::Validation { .. } => "Invalid Request",
            ApiError::Decode(_) => "Unexpected Response",
        }
    }
}

/// Type alias for Result with ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_is_validation() {
        let envelope = ErrorEnvelope {
            status: Some(400),
            error: "page_size must be <= 100".to_string(),
            message: "Invalid pagination parameters".to_string(),
            details: None,
        };

        let err = ApiError::from_envelope(400, envelope);
        assert_eq!(
            err,
            ApiError::Validation {
                message: "Invalid pagination parameters: page_size must be <= 100".to_string(),
                details: None,
            }
        );
        assert_eq!(err.title(), "Invalid Request");
    }

    #[test]
    fn test_server_error_keeps_status() {
        let envelope = ErrorEnvelope {
            status: Some(500),
            error: String::new(),
            message: "Failed to retrieve transactions".to_string(),
            details: None,
        };

        let err = ApiError::from_envelope(500, envelope);
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "Failed to retrieve transactions");
    }

    #[test]
    fn test_status_without_body() {
        let err = ApiError::from_status(503);
        assert_eq!(err.to_string(), "HTTP error: 503");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_network_error_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(err.status(), None);
    }
}
