//! Error types for body capture

use std::io;
use thiserror::Error;

/// Result type for body capture
pub type BodyResult<T> = Result<T, BodyError>;

/// Errors that can occur while draining a response body
#[derive(Debug, Error)]
pub enum BodyError {
    /// The body stream failed before reaching its end
    #[error("failed to read response body: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
}

impl BodyError {
    /// The kind of the underlying I/O failure
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            BodyError::Read { source } => source.kind(),
        }
    }
}
