pub mod context;
pub mod interview;
pub mod llm;
pub mod prompts;
pub mod summary;

pub use context::ContextAssembler;
pub use interview::{InterviewOrchestrator, SessionRegistry};
pub use llm::{GenerateRequest, GenerateResponse, GenerationError, Generator};
pub use summary::SummaryParser;
