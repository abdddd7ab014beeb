pub mod embedding;
pub mod models;
pub mod services;
pub mod vector_store;

pub mod config;
pub mod env;
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use config::{Config, InterviewConfig, ScoringPolicy};
pub use embedding::{Embedder, EmbeddingError};
pub use error::{Result, VivaError};
pub use logging::{init_logging, LoggingConfig};
pub use models::{
    ConversationalTurn, InterviewResponse, InterviewSession, InterviewSummary, SessionStatus,
    TurnKind, UNSCORED,
};
pub use services::context::ContextAssembler;
pub use services::interview::{InterviewOrchestrator, SessionRegistry};
pub use services::llm::{GenerateRequest, GenerateResponse, GenerationError, Generator};
pub use services::summary::SummaryParser;
pub use vector_store::{SearchResult, SimilarityStore, TurnMetadata, VectorRecord};
