//! Abstract embedding capability.
//!
//! The engine never talks to an embedding provider directly; callers wire
//! a concrete [`Embedder`] implementation (remote API, local model, ...)
//! behind this trait.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the embedding capability
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("Embedding provider error: {message}")]
    Provider { message: String },

    #[error("Provider returned an empty embedding")]
    Empty,
}

impl EmbeddingError {
    /// Create a provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }
}

/// Provider-agnostic trait for text embedding generation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate a fixed-length embedding vector for a text.
    ///
    /// Implementations must return [`EmbeddingError::Empty`] rather than a
    /// zero-length vector; callers treat an empty result as a failure.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Number of dimensions in the vectors this embedder produces
    fn dimensions(&self) -> usize;
}
