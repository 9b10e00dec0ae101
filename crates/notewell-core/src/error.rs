//! Error types for notewell.

use thiserror::Error;

/// Result type alias using notewell's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notewell store operations.
///
/// Every store operation resolves to `Result<T>`; the `Display` output of the
/// error is the user-facing outcome message. Stores run failures through
/// [`Error::or_fallback`] at their boundary so callers can render the message
/// without an error branch of their own.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was missing or empty; caught before any network call.
    #[error("{0}")]
    Validation(String),

    /// The request could not complete (DNS, connect, timeout, body read).
    #[error("Request error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status and (usually) a message
    /// payload. Mutations against an id the server does not recognize
    /// surface here as the server's 404; there is no local existence check.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// 401 from the server. Opaque to the stores; session teardown is the
    /// embedding application's concern.
    #[error("Unauthorized")]
    Unauthorized,

    /// Response body did not match the expected shape.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Substitute a generic per-operation message where the server supplied
    /// none. Server-sourced messages and validation messages pass through
    /// untouched; transport, auth, and decode failures collapse to the
    /// fallback.
    pub fn or_fallback(self, fallback: &str) -> Error {
        match self {
            Error::Validation(_) => self,
            Error::Server { message, .. } if message.is_empty() => Error::Server {
                status: 0,
                message: fallback.to_string(),
            },
            Error::Server { .. } => self,
            Error::Transport(_) | Error::Unauthorized | Error::Serialization(_) => Error::Server {
                status: 0,
                message: fallback.to_string(),
            },
        }
    }

    /// The HTTP status carried by a server failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            Error::Unauthorized => Some(401),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_bare_message() {
        let err = Error::Validation("Title is required".to_string());
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn test_server_display_is_payload_message() {
        let err = Error::Server {
            status: 404,
            message: "Note not found".to_string(),
        };
        assert_eq!(err.to_string(), "Note not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_or_fallback_keeps_server_message() {
        let err = Error::Server {
            status: 422,
            message: "Title is too long".to_string(),
        };
        assert_eq!(
            err.or_fallback("Failed to create note").to_string(),
            "Title is too long"
        );
    }

    #[test]
    fn test_or_fallback_replaces_transport_message() {
        let err = Error::Transport("connection refused".to_string());
        assert_eq!(
            err.or_fallback("Failed to fetch notes").to_string(),
            "Failed to fetch notes"
        );
    }

    #[test]
    fn test_or_fallback_keeps_validation_message() {
        let err = Error::Validation("Name is required".to_string());
        assert_eq!(
            err.or_fallback("Failed to create label").to_string(),
            "Name is required"
        );
    }

    #[test]
    fn test_or_fallback_fills_empty_server_message() {
        let err = Error::Server {
            status: 500,
            message: String::new(),
        };
        assert_eq!(
            err.or_fallback("Failed to update note").to_string(),
            "Failed to update note"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
