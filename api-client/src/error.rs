//! Error types for the API client

use thiserror::Error;

/// Result type for API client operations
pub type Result<T> = std::result::Result<T, Error>;

/// API client errors
///
/// One variant per failure class: transport, schema, service rejection.
/// Collapsing these into a user-visible message is the caller's concern.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport or connection failure
    #[error("Network error: {0}")]
    Network(String),

    /// Response body does not match the expected schema
    #[error("Decode error: {0}")]
    Decode(String),

    /// Service answered with a non-success status
    #[error("Backend error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Backend {
        /// HTTP status code
        status: u16,
        /// Server-supplied detail message, if the body carried one
        detail: Option<String>,
    },
}

impl Error {
    /// Server detail message, if this is a backend rejection that carried one
    pub fn backend_detail(&self) -> Option<&str> {
        match self {
            Error::Backend {
                detail: Some(detail),
                ..
            } => Some(detail.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = Error::Backend {
            status: 422,
            detail: Some("card_number must be 16 digits".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Backend error 422: card_number must be 16 digits"
        );
    }

    #[test]
    fn test_backend_detail_accessor() {
        let err = Error::Backend {
            status: 500,
            detail: None,
        };
        assert!(err.backend_detail().is_none());
        assert!(Error::Network("refused".into()).backend_detail().is_none());
    }
}
