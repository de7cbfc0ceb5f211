//! Error taxonomy for calls to the backend.

use thiserror::Error;

/// Shown for any transport failure; the detail only goes to the log.
pub const NETWORK_MESSAGE: &str = "Unable to reach the server. Check your connection and try again.";
/// Shown for bodies that are not JSON or not the expected shape.
pub const INVALID_RESPONSE_MESSAGE: &str = "The server sent an invalid response.";
/// Used when an error response carries no readable message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";
/// Used when a 401 carries no readable message.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Used when a login attempt is refused without a readable message.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

/// Every request ends in one of these; none of them is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 from the backend. Recovered by signing out and redirecting.
    #[error("{0}")]
    Unauthorized(String),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered, but with a failure (non-2xx or `success: false`).
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The body was not JSON, or JSON of the wrong shape.
    #[error("invalid response: {0}")]
    Parse(String),
}

/// Coarse classification used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Auth,
    Network,
    Api,
    Parse,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unauthorized(_) => ErrorKind::Auth,
            ApiError::Transport(_) => ErrorKind::Network,
            ApiError::Api { .. } => ErrorKind::Api,
            ApiError::Parse(_) => ErrorKind::Parse,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// Message safe to show on screen.
    ///
    /// Semantic errors are shown verbatim; transport and parse errors get a
    /// fixed message so internals never reach the page.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized(message) | ApiError::Api { message, .. } => message.clone(),
            ApiError::Transport(_) => NETWORK_MESSAGE.to_string(),
            ApiError::Parse(_) => INVALID_RESPONSE_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_details() {
        let err = ApiError::Transport("dns error: no such host api.internal".to_string());
        assert_eq!(err.user_message(), NETWORK_MESSAGE);
        assert_eq!(err.kind(), ErrorKind::Network);

        let err = ApiError::Parse("expected value at line 1 column 1".to_string());
        assert_eq!(err.user_message(), INVALID_RESPONSE_MESSAGE);
    }

    #[test]
    fn test_semantic_message_is_verbatim() {
        let err = ApiError::Api {
            status: 200,
            message: "Property not found".to_string(),
        };
        assert_eq!(err.user_message(), "Property not found");
        assert_eq!(err.to_string(), "Property not found");
        assert!(!err.is_auth());
        assert!(ApiError::Unauthorized(SESSION_EXPIRED_MESSAGE.to_string()).is_auth());
    }
}
