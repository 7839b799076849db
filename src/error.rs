//! Error types for entry service calls.

use thiserror::Error;

/// Result type alias for entry service operations.
pub type Result<T> = std::result::Result<T, EntryError>;

/// Failures that can come back from the entry service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The request never produced a response (refused, DNS, timeout, dropped body)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status
    #[error("Server responded with status {status}")]
    Server { status: u16 },

    /// The service answered 2xx but the body was not an entry list
    #[error("Malformed payload: {0}")]
    Payload(String),
}

impl EntryError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn payload(msg: impl Into<String>) -> Self {
        Self::Payload(msg.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Server-side failures: bad status or a body we could not read as entries
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. } | Self::Payload(_))
    }
}

impl From<reqwest::Error> for EntryError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return EntryError::Server {
                status: status.as_u16(),
            };
        }
        if e.is_timeout() {
            EntryError::Transport(format!("Request timed out: {}", e))
        } else if e.is_connect() {
            EntryError::Transport(format!("Connection failed: {}", e))
        } else {
            EntryError::Transport(format!("Request failed: {}", e))
        }
    }
}

impl From<serde_json::Error> for EntryError {
    fn from(e: serde_json::Error) -> Self {
        EntryError::Payload(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(EntryError::transport("refused").is_transport());
        assert!(EntryError::Server { status: 500 }.is_server());
        assert!(EntryError::payload("not a list").is_server());
        assert!(!EntryError::Server { status: 404 }.is_transport());
    }

    #[test]
    fn test_display() {
        let err = EntryError::Server { status: 503 };
        assert_eq!(err.to_string(), "Server responded with status 503");
    }
}
