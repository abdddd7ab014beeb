use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::services::llm::GenerationError;

/// Custom error types for the interview engine
#[derive(Error, Debug)]
pub enum VivaError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid session: {message}")]
    InvalidSession { message: String },

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl VivaError {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid session error
    pub fn invalid_session<S: Into<String>>(message: S) -> Self {
        Self::InvalidSession {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            VivaError::NotFound { .. } => "not_found",
            VivaError::InvalidSession { .. } => "invalid_session",
            VivaError::Embedding(_) => "embedding",
            VivaError::Generation(_) => "generation",
        }
    }
}

/// Result type alias for the interview engine
pub type Result<T> = std::result::Result<T, VivaError>;
