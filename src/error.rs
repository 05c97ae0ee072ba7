//! Error types for the DEV publishing SDK.
//!
//! Every failure a publish can run into has its own variant, so callers can tell
//! a configuration problem apart from a bad path or a rejected article. None of
//! them are retried: a publish performs at most one request.
//!
//! ## Error Categories
//!
//! - **Credential Errors**: API key not configured, or not usable as a header value
//! - **Content Errors**: Missing file, unreadable file
//! - **Remote Errors**: The platform answered with a status other than `201 Created`
//! - **Transport Errors**: No response was received at all
//! - **Configuration Errors**: Invalid settings, only raised while building a publisher
//!
//! ## Usage
//!
//! ```rust
//! use devto_pub_rs::PublishError;
//! use devto_pub_rs::error::ErrorSeverity;
//!
//! fn handle_error(error: &PublishError) {
//!     match error.severity() {
//!         ErrorSeverity::Warning => tracing::warn!("{error}"),
//!         ErrorSeverity::Error | ErrorSeverity::Critical => tracing::error!("{error}"),
//!     }
//! }
//! ```

use serde_json::Value;
use std::fmt;

/// Result type alias for publishing operations.
pub type Result<T> = std::result::Result<T, PublishError>;

/// Error type for publishing operations.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The API key could not be resolved
    #[error("API key not found! Check {name}.")]
    CredentialMissing { name: String },

    /// The API key cannot be sent as an HTTP header value
    #[error("API key from {name} contains characters not allowed in an HTTP header")]
    CredentialInvalid { name: String },

    /// File system errors
    #[error("File not found: {path}")]
    ContentNotFound { path: String },

    #[error("Failed to read file: {path}, reason: {reason}")]
    ContentRead { path: String, reason: String },

    /// The endpoint answered, but did not create the article
    #[error("Failed to publish article. Status code: {status}")]
    RemoteRejected {
        status: u16,
        payload: Option<Value>,
    },

    /// The request never produced a response
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Kind of a publish failure, independent of the data it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CredentialMissing,
    CredentialInvalid,
    ContentNotFound,
    ContentReadFailure,
    RemoteRejected,
    TransportFailure,
    Config,
}

impl PublishError {
    /// Returns the failure kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PublishError::CredentialMissing { .. } => ErrorKind::CredentialMissing,
            PublishError::CredentialInvalid { .. } => ErrorKind::CredentialInvalid,
            PublishError::ContentNotFound { .. } => ErrorKind::ContentNotFound,
            PublishError::ContentRead { .. } => ErrorKind::ContentReadFailure,
            PublishError::RemoteRejected { .. } => ErrorKind::RemoteRejected,
            PublishError::Transport(_) => ErrorKind::TransportFailure,
            PublishError::Config { .. } => ErrorKind::Config,
        }
    }

    /// Gets the severity level of the error for logging purposes.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PublishError::Transport(_) => ErrorSeverity::Warning,

            // 401 means the configured key itself is wrong
            PublishError::RemoteRejected { status: 401, .. } => ErrorSeverity::Critical,

            PublishError::ContentNotFound { .. }
            | PublishError::ContentRead { .. }
            | PublishError::RemoteRejected { .. } => ErrorSeverity::Error,

            PublishError::CredentialMissing { .. }
            | PublishError::CredentialInvalid { .. }
            | PublishError::Config { .. } => ErrorSeverity::Critical,
        }
    }

    /// Creates a rejection error from a response status and its decoded body.
    pub fn rejected(status: u16, payload: Option<Value>) -> Self {
        PublishError::RemoteRejected { status, payload }
    }

    /// Creates a content read error.
    pub fn read_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        PublishError::ContentRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config_error(message: impl Into<String>) -> Self {
        PublishError::Config {
            message: message.into(),
        }
    }
}

/// Error severity levels for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Likely transient, the same call may succeed later
    Warning,
    /// The input or the article needs fixing
    Error,
    /// The setup itself is broken
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_kinds() {
        let err = PublishError::CredentialMissing {
            name: "DEV_TO_API_KEY".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::CredentialMissing);

        let err = PublishError::ContentNotFound {
            path: "post.md".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::ContentNotFound);

        let err = PublishError::read_error("post.md", "permission denied");
        assert_eq!(err.kind(), ErrorKind::ContentReadFailure);

        let err = PublishError::rejected(422, None);
        assert_eq!(err.kind(), ErrorKind::RemoteRejected);
    }

    #[test]
    fn test_error_severity() {
        let err = PublishError::config_error("endpoint cannot be empty");
        assert_eq!(err.severity(), ErrorSeverity::Critical);

        let err = PublishError::rejected(422, Some(json!({"error": "title can't be blank"})));
        assert_eq!(err.severity(), ErrorSeverity::Error);

        let err = PublishError::rejected(401, None);
        assert_eq!(err.severity(), ErrorSeverity::Critical);

        let err = PublishError::CredentialInvalid {
            name: "DEV_TO_API_KEY".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().to_string(), "CRITICAL");
    }

    #[test]
    fn test_error_messages() {
        let err = PublishError::ContentNotFound {
            path: "drafts/k8s.md".to_string(),
        };
        assert_eq!(err.to_string(), "File not found: drafts/k8s.md");

        let err = PublishError::rejected(500, None);
        assert_eq!(
            err.to_string(),
            "Failed to publish article. Status code: 500"
        );

        let err = PublishError::CredentialMissing {
            name: "DEV_TO_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("DEV_TO_API_KEY"));
    }

    #[test]
    fn test_error_creation_helpers() {
        match PublishError::read_error("/path/to/file.md", "permission denied") {
            PublishError::ContentRead { path, reason } => {
                assert_eq!(path, "/path/to/file.md");
                assert_eq!(reason, "permission denied");
            }
            _ => panic!("Expected ContentRead error"),
        }

        match PublishError::config_error("invalid configuration") {
            PublishError::Config { message } => assert_eq!(message, "invalid configuration"),
            _ => panic!("Expected Config error"),
        }
    }
}
