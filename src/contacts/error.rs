//! Contacts API Errors

use thiserror::Error;

/// Errors returned by the contacts API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactsError {
    /// The backend answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// No response was obtained from the backend
    #[error("Cannot connect to the server. Check that it is running at {origin} ({reason})")]
    Connection { origin: String, reason: String },

    /// The response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ContactsError {
    /// HTTP status for `Http` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ContactsError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, ContactsError::Connection { .. })
    }
}

/// Result type for contacts API operations
pub type ContactsResult<T> = Result<T, ContactsError>;
