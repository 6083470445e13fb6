//! Client error types

use thiserror::Error;

/// Client error type
///
/// Every backend interaction resolves to one of three failure classes:
/// the request never completed (`Network`), the backend refused it
/// (`Backend`), or the response body had an unexpected shape
/// (`MalformedResponse`). None of these are fatal; callers surface them
/// inline near the triggering control and never retry automatically.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response with an `{error}` body
    #[error("Backend error ({status}): {message}")]
    Backend {
        status: u16,
        message: String,
        /// Square credentials missing or invalid; direct the user to settings
        needs_setup: bool,
    },

    /// 2xx response whose body could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Message suitable for inline display near the triggering control
    pub fn inline_message(&self) -> String {
        match self {
            ClientError::Backend { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn needs_setup(&self) -> bool {
        matches!(self, ClientError::Backend { needs_setup: true, .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = ClientError::Backend {
            status: 500,
            message: "sync failed".to_string(),
            needs_setup: false,
        };
        assert_eq!(format!("{}", err), "Backend error (500): sync failed");
        assert_eq!(err.inline_message(), "sync failed");
        assert!(!err.needs_setup());
    }

    #[test]
    fn test_needs_setup_flag() {
        let err = ClientError::Backend {
            status: 400,
            message: "Square credentials are not configured".to_string(),
            needs_setup: true,
        };
        assert!(err.needs_setup());
    }
}
