/// Error types for the visibility engine
///
/// Only infrastructure failures during fact loading surface here. "Cannot
/// view" is always a normal `Decision` return value, never an error, and
/// callers must not conflate the two: a storage outage is not a 403.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
