mod embedding_error;
mod generation_error;
mod storage_error;

pub use embedding_error::EmbeddingError;
pub use generation_error::GenerationError;
pub use storage_error::StorageError;

/// Result alias used across the workspace.
pub type ConcordResult<T> = Result<T, ConcordError>;

/// Top-level error. Subsystem errors convert into it with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ConcordError {
    /// A caller contract violation, e.g. vectors of different lengths.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("statement not found: {id}")]
    StatementNotFound { id: String },

    #[error("project not found: {id}")]
    ProjectNotFound { id: String },

    #[error("report not found: {id}")]
    ReportNotFound { id: String },

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ConcordError {
    /// Shorthand for [`ConcordError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
