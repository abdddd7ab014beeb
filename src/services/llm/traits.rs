use async_trait::async_trait;

use super::errors::GenerationError;
use super::types::{GenerateRequest, GenerateResponse};

/// Provider-agnostic trait for text generation.
///
/// The orchestrator routes every model call through this trait so that any
/// provider can back the interview flow interchangeably.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a text completion for a prompt.
    ///
    /// Implementations must return [`GenerationError::NoCandidates`] when
    /// the provider produces no usable candidates.
    async fn complete(&self, request: GenerateRequest) -> Result<GenerateResponse, GenerationError>;

    /// Get the model identifier being used
    fn model_name(&self) -> &str;
}
