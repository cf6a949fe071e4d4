//! Error types for nexus-walker
//!
//! This module defines the error hierarchy for a walk:
//! - Remote listing errors (transport vs. protocol)
//! - Output sink errors
//! - Configuration and CLI errors
//! - Entry validation errors
//!
//! Every error is fatal to the walk. Nothing here is retried or skipped;
//! the first error propagates unchanged to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the nexus-walker application
#[derive(Error, Debug)]
pub enum WalkerError {
    /// Listing request failed
    #[error("Listing error: {0}")]
    Remote(#[from] RemoteError),

    /// Output record could not be written
    #[error("Output error: {0}")]
    Sink(#[from] SinkError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A leaf entry reported a negative size
    #[error("sizeOnDisk < 0 ({size}) for '{resource}'")]
    NegativeSize { resource: String, size: i64 },
}

/// Errors from the remote listing capability
#[derive(Error, Debug, Clone)]
pub enum RemoteError {
    /// The request could not complete (DNS, connect, timeout, body read)
    #[error("Request for '{path}' failed: {reason}")]
    Transport { path: String, reason: String },

    /// The server answered with a non-success status
    #[error("{path}: HTTP {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    /// The response body did not match the listing schema
    #[error("Unexpected listing response for '{path}': {reason}")]
    Decode { path: String, reason: String },
}

impl RemoteError {
    /// Check if the request never produced a response
    pub fn is_transport(&self) -> bool {
        matches!(self, RemoteError::Transport { .. })
    }

    /// Check if the server responded but the response was unusable
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            RemoteError::Status { .. } | RemoteError::Decode { .. }
        )
    }

    /// Returns the listed path associated with this error
    pub fn path(&self) -> &str {
        match self {
            RemoteError::Transport { path, .. } => path,
            RemoteError::Status { path, .. } => path,
            RemoteError::Decode { path, .. } => path,
        }
    }
}

/// Output sink errors
#[derive(Error, Debug)]
pub enum SinkError {
    /// Writing to the destination failed
    #[error("Failed to write record: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// --url missing or empty
    #[error("url is required")]
    MissingUrl,

    /// --repository missing or empty
    #[error("repository is required")]
    MissingRepository,

    /// Base URL could not be used
    #[error("Invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Output path error
    #[error("Invalid output path '{path}': {reason}")]
    InvalidOutputPath { path: PathBuf, reason: String },

    /// Zero request timeout
    #[error("Invalid timeout {secs}s: must be at least 1 second")]
    InvalidTimeout { secs: u64 },
}

/// Result type alias for WalkerError
pub type Result<T> = std::result::Result<T, WalkerError>;

/// Result type alias for RemoteError
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Result type alias for SinkError
pub type SinkResult<T> = std::result::Result<T, SinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_classification() {
        let transport = RemoteError::Transport {
            path: "releases/".into(),
            reason: "connection refused".into(),
        };
        assert!(transport.is_transport());
        assert!(!transport.is_protocol());

        let status = RemoteError::Status {
            path: "releases/".into(),
            status: 404,
            body: "not found".into(),
        };
        assert!(status.is_protocol());
        assert!(!status.is_transport());

        let decode = RemoteError::Decode {
            path: "".into(),
            reason: "missing field `data`".into(),
        };
        assert!(decode.is_protocol());
        assert_eq!(decode.path(), "");
        assert_eq!(transport.path(), "releases/");
    }

    #[test]
    fn test_status_message_includes_path_and_body() {
        let err = RemoteError::Status {
            path: "releases/org/".into(),
            status: 500,
            body: "<html>boom</html>".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("releases/org/"));
        assert!(msg.contains("<html>boom</html>"));
        assert_eq!(err.path(), "releases/org/");
    }

    #[test]
    fn test_error_conversion() {
        let remote = RemoteError::Transport {
            path: "x".into(),
            reason: "dns".into(),
        };
        let walker_err: WalkerError = remote.into();
        assert!(matches!(walker_err, WalkerError::Remote(_)));

        let sink: SinkError = std::io::Error::other("disk full").into();
        let walker_err: WalkerError = sink.into();
        assert!(matches!(walker_err, WalkerError::Sink(SinkError::Io(_))));
    }

    #[test]
    fn test_negative_size_names_resource() {
        let err = WalkerError::NegativeSize {
            resource: "http://nexus/content/a.jar".into(),
            size: -1,
        };
        assert!(err.to_string().contains("http://nexus/content/a.jar"));
    }

    #[test]
    fn test_config_messages() {
        assert_eq!(ConfigError::MissingUrl.to_string(), "url is required");
        assert_eq!(
            ConfigError::MissingRepository.to_string(),
            "repository is required"
        );
    }
}
