//! Error types for the Driftboard client
//!
//! This module defines the error taxonomy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! The taxonomy keeps three failure families apart so callers never have to
//! guess: transport failures (`Http`, `Timeout`), remote-declared failures
//! (`HttpStatus`, `Api`), and malformed-response failures
//! (`MalformedListing`, `JsonParse`). Local precondition failures
//! (`Validation`, `AuthRequired`, `CredentialExpired`) never reach the
//! network.

use crate::types::Direction;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// The main error type for the Driftboard client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Local Precondition Errors (no network call was attempted)
    // ============================================================================
    #[error("Invalid request: {message}")]
    Validation { message: String },

    #[error("This request requires an authenticated client")]
    AuthRequired,

    #[error("Bearer token expired at {expired_at}")]
    CredentialExpired { expired_at: DateTime<Utc> },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Remote-Declared Errors
    // ============================================================================
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Logical error reported inside an otherwise-successful 2xx response
    #[error("API error {code}: {message}")]
    Api {
        code: String,
        message: String,
        field: Option<String>,
    },

    // ============================================================================
    // Response Shape Errors
    // ============================================================================
    #[error("Malformed listing envelope: {message}")]
    MalformedListing { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Pagination Signals
    // ============================================================================
    /// Normal termination signal for cursor walks, not a bug indicator
    #[error("No more pages in the {direction} direction")]
    EndOfStream { direction: Direction },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an API logical error
    pub fn api(code: impl Into<String>, message: impl Into<String>, field: Option<String>) -> Self {
        Self::Api {
            code: code.into(),
            message: message.into(),
            field,
        }
    }

    /// Create a malformed listing error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedListing {
            message: message.into(),
        }
    }

    /// Check if this is the normal end-of-pagination signal
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream { .. })
    }

    /// Check if this error is retryable by the caller.
    ///
    /// The client itself never retries; only the caller knows whether an
    /// operation is safe to repeat.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the Driftboard client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation("path must not be empty");
        assert_eq!(err.to_string(), "Invalid request: path must not be empty");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::api("RATELIMIT", "too fast", None);
        assert_eq!(err.to_string(), "API error RATELIMIT: too fast");

        let err = Error::EndOfStream {
            direction: Direction::Forward,
        };
        assert_eq!(err.to_string(), "No more pages in the forward direction");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(500, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::AuthRequired.is_retryable());
        assert!(!Error::validation("bad").is_retryable());
        assert!(!Error::api("DUPLICATE", "already done", None).is_retryable());
    }

    #[test]
    fn test_end_of_stream_signal() {
        let err = Error::EndOfStream {
            direction: Direction::Backward,
        };
        assert!(err.is_end_of_stream());
        assert!(!err.is_retryable());
        assert!(!Error::AuthRequired.is_end_of_stream());
    }
}
