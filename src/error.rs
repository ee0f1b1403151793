//! Square-specific error types.

use std::time::Duration;

use thiserror::Error;

use crate::models::Error as ApiError;

/// Square-specific errors.
#[derive(Error, Debug)]
pub enum SquareError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Square API returned a structured error response
    #[error("Square API error {status}: {}", first_error(.errors))]
    Api {
        status: u16,
        errors: Vec<ApiError>,
    },

    /// Square API returned a response body that could not be parsed
    #[error("Unexpected response {status}: {body}")]
    Unexpected { status: u16, body: String },

    /// Rate limited
    #[error("Rate limited, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Blocking runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

impl SquareError {
    /// Check if this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::RateLimited { .. } => true,
            Self::Api { status, .. } | Self::Unexpected { status, .. } => {
                *status >= 500 || *status == 429
            }
            _ => false,
        }
    }

    /// Get the suggested retry delay.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(Duration::from_secs(*retry_after)),
            _ => None,
        }
    }
}

fn first_error(errors: &[ApiError]) -> String {
    errors
        .first()
        .map_or_else(|| "no detail".into(), ToString::to_string)
}

/// Result type for Square operations.
pub type SquareResult<T> = Result<T, SquareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = SquareError::Api {
            status: 400,
            errors: vec![ApiError::builder("INVALID_REQUEST_ERROR", "VALUE_TOO_LOW")
                .detail("order amount must be positive")
                .build()],
        };

        assert_eq!(
            err.to_string(),
            "Square API error 400: VALUE_TOO_LOW (INVALID_REQUEST_ERROR): order amount must be positive"
        );
    }

    #[test]
    fn test_error_is_retryable() {
        assert!(SquareError::RateLimited { retry_after: 10 }.is_retryable());
        assert!(SquareError::Api {
            status: 503,
            errors: vec![]
        }
        .is_retryable());
        assert!(!SquareError::Api {
            status: 404,
            errors: vec![]
        }
        .is_retryable());
        assert!(!SquareError::Config("missing token".into()).is_retryable());
    }

    #[test]
    fn test_retry_after() {
        let err = SquareError::RateLimited { retry_after: 12 };
        assert_eq!(err.retry_after(), Some(Duration::from_secs(12)));
        assert_eq!(
            SquareError::Unexpected {
                status: 502,
                body: String::new()
            }
            .retry_after(),
            None
        );
    }
}
