//! Error handling for the progress engine

use thiserror::Error;

use crate::cache::CacheError;

/// Engine error types
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
