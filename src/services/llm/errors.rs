use thiserror::Error;

/// Provider-agnostic generation errors
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation provider error: {message}")]
    Provider { message: String },

    #[error("No response candidates returned")]
    NoCandidates,

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}

impl GenerationError {
    /// Create a provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}
