//! Error taxonomy for archive backend operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure of a remote archive operation.
///
/// These are never thrown to a global handler: every failing operation surfaces a user-visible
/// notice and otherwise leaves runtime state unchanged.
pub enum ArchiveError {
    /// Network/connectivity failure before an HTTP status was received.
    #[error("network error: {0}")]
    Transport(String),
    /// Non-success response from the archive backend.
    #[error("backend error (status {status}): {message}")]
    Backend {
        /// HTTP status code of the response.
        status: u16,
        /// Response body or status text, truncated for display.
        message: String,
    },
}

impl ArchiveError {
    /// Builds a transport-level error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Builds a backend-level error from a response status and message.
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_message() {
        let err = ArchiveError::backend(404, "path not found");
        assert_eq!(err.to_string(), "backend error (status 404): path not found");

        let err = ArchiveError::transport("connection refused");
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
