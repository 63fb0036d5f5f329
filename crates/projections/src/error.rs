//! Projection error types.

use thiserror::Error;

/// Boxed error produced by an event source.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur during projection processing.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The event source failed while yielding events.
    #[error("Event source error: {0}")]
    Source(#[source] BoxError),
}

impl ProjectionError {
    /// Wraps an event source error.
    pub fn from_source(err: impl Into<BoxError>) -> Self {
        Self::Source(err.into())
    }
}

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
