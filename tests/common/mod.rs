//! Deterministic fakes for the Embedder and Generator capabilities.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use viva::{
    Embedder, EmbeddingError, GenerateRequest, GenerateResponse, GenerationError, Generator,
};

pub const DIMENSIONS: usize = 8;

/// Embeds text by hashing words into a fixed number of buckets. Identical
/// texts embed identically; unrelated texts rarely collide.
pub struct KeywordEmbedder;

#[async_trait]
impl Embedder for KeywordEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vector = vec![0.0f32; DIMENSIONS];
        for word in text.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            word.to_lowercase().hash(&mut hasher);
            let bucket = (hasher.finish() as usize) % DIMENSIONS;
            vector[bucket] += 1.0;
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        DIMENSIONS
    }
}

/// Generator that answers each prompt family with a fixed reply, the way a
/// live interview model would.
pub struct ScriptedGenerator {
    pub validation_verdict: &'static str,
    pub summary_text: &'static str,
}

impl ScriptedGenerator {
    pub fn relevant() -> Self {
        Self {
            validation_verdict: "RELEVANT",
            summary_text: DEFAULT_SUMMARY_TEXT,
        }
    }

    pub fn irrelevant() -> Self {
        Self {
            validation_verdict: "IRRELEVANT",
            summary_text: DEFAULT_SUMMARY_TEXT,
        }
    }
}

pub const DEFAULT_SUMMARY_TEXT: &str = r#"STRONG POINTS:
- Clear communication throughout

WEAK POINTS:
- Missed the JDK/JRE distinction

GRAMMATICAL SCORE: 82

TECHNICAL SCORE: 64

PRACTICE POINTS:
- Review platform independence
"#;

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn complete(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, GenerationError> {
        let reply = if request.prompt.contains("Start the interview") {
            "What is the difference between JDK, JRE, and JVM?"
        } else if request.prompt.contains("Respond with only one word") {
            self.validation_verdict
        } else if request.prompt.contains("Required Output Format") {
            self.summary_text
        } else if request.prompt.contains("Current query:") {
            "Is Java platform-independent? Why?"
        } else {
            return Err(GenerationError::invalid_response("unexpected prompt"));
        };

        Ok(GenerateResponse::new(reply).with_model("scripted"))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
