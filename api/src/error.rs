//! Error types for the reservation backend client

use thiserror::Error;

/// Errors that can occur when talking to the reservation backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, TLS)
    #[error("Request failed: {0}")]
    Network(String),

    /// The request did not settle within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Response body could not be parsed as the expected JSON shape
    #[error("Response parsing failed: {0}")]
    Parse(String),

    /// Backend returned a non-2xx status
    ///
    /// `message` is the server-supplied error message when the body carried
    /// one, otherwise the endpoint's fallback message.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the backend (or fallback)
        message: String,
    },
}

impl ApiError {
    /// The message to surface in a user-facing notice.
    ///
    /// For [`ApiError::Api`] this is the server-supplied message verbatim;
    /// other variants map to short transport descriptions.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Timeout => "Request timed out".to_string(),
            Self::Network(message) | Self::Parse(message) => message.clone(),
        }
    }

    /// Whether the backend rejected the call as unauthenticated
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_surfaces_server_text_verbatim() {
        let err = ApiError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn unauthorized_only_matches_401() {
        let unauthorized = ApiError::Api {
            status: 401,
            message: "nope".to_string(),
        };
        let conflict = ApiError::Api {
            status: 409,
            message: "already reserved".to_string(),
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!conflict.is_unauthorized());
        assert!(!ApiError::Timeout.is_unauthorized());
    }
}
