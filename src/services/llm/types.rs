use serde::{Deserialize, Serialize};

/// Request for text generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The prompt text to send to the model
    pub prompt: String,

    /// Maximum tokens to generate (optional, provider defaults apply)
    pub max_tokens: Option<u32>,

    /// Temperature for sampling (0.0 - 1.0, optional)
    pub temperature: Option<f32>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Response from text generation
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenerateResponse {
    /// The generated text content
    pub text: String,

    /// Model used for generation (if reported by provider)
    pub model: Option<String>,

    /// Reason for stopping generation
    pub finish_reason: Option<String>,
}

impl GenerateResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: None,
            finish_reason: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_finish_reason(mut self, reason: impl Into<String>) -> Self {
        self.finish_reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = GenerateRequest::new("ask the first question")
            .with_max_tokens(1024)
            .with_temperature(0.3);

        assert_eq!(request.prompt, "ask the first question");
        assert_eq!(request.max_tokens, Some(1024));
        assert_eq!(request.temperature, Some(0.3));
    }

    #[test]
    fn test_response_builder() {
        let response = GenerateResponse::new("What is the JVM?")
            .with_model("test-model")
            .with_finish_reason("stop");

        assert_eq!(response.text, "What is the JVM?");
        assert_eq!(response.model, Some("test-model".to_string()));
        assert_eq!(response.finish_reason, Some("stop".to_string()));
    }
}
