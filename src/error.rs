//! Error types for codiff.
//!
//! Every per-call failure is recoverable: the server surfaces it as an
//! error-flagged tool result instead of letting it cross the call boundary.
//! Only transport or startup failure is fatal to the process.

use thiserror::Error;

/// Main error type for codiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CodiffError {
    /// One of the two inputs was not provided as a string.
    #[error("Both original and modified texts must be provided as strings")]
    InvalidInputFormat,

    /// Unexpected failure during diff computation or payload serialization.
    #[error("{context}: {source}")]
    Internal {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failure reading from or writing to the stdio transport.
    #[error("transport IO error: {0}")]
    Transport(#[from] std::io::Error),
}

/// Convenient Result type for codiff operations.
pub type Result<T> = std::result::Result<T, CodiffError>;

impl From<serde_json::Error> for CodiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal {
            context: "serializing response payload".to_owned(),
            source: err,
        }
    }
}

/// Extension trait for adding context to serialization errors.
///
/// The context string names the payload being rendered when the failure
/// happened, which is the only thing worth knowing for an in-memory
/// serialization error.
pub trait ErrorContext<T> {
    /// Replace the default context with one naming the failing operation.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ErrorContext<T> for std::result::Result<T, serde_json::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|source| CodiffError::Internal {
            context: context.into(),
            source,
        })
    }
}

impl<T> ErrorContext<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|err| match err {
            CodiffError::Internal { source, .. } => CodiffError::Internal {
                context: context.into(),
                source,
            },
            other => other,
        })
    }
}
