//! Workspace error types.
//!
//! One enum per subsystem, aggregated into [`CampusError`]. Library code
//! returns `CampusResult<T>`; the conversation loop is the only place that
//! converts errors into user-facing text.

mod embedding_error;
mod retrieval_error;
mod source_error;

pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use source_error::SourceError;

/// Top-level error for the Campus workspace.
#[derive(Debug, thiserror::Error)]
pub enum CampusError {
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("source error: {0}")]
    SourceError(#[from] SourceError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type CampusResult<T> = Result<T, CampusError>;
