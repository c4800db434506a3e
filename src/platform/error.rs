//! Filesystem error types
//!
//! Every variant counts as an access failure: it is never retried and
//! travels up to the session loop, which reports it and starts over.

use std::io;

use thiserror::Error;

/// Errors raised by a [`super::PlatformFs`]
#[derive(Debug, Error)]
pub enum FsError {
    /// The path could not be read, written or listed
    #[error("Cannot access '{path}': {source}")]
    Access {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A listing mask that is not a valid glob
    #[error("Invalid mask '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl FsError {
    #[must_use]
    pub fn access(path: &str, source: io::Error) -> Self {
        Self::Access {
            path: path.to_string(),
            source,
        }
    }

    #[must_use]
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for filesystem operations
pub type Result<T> = std::result::Result<T, FsError>;
