//! Abstract text generation capability.
//!
//! All model text in the interview flow (questions, relevance verdicts,
//! summaries) is produced through the [`Generator`] trait. Concrete
//! providers live outside this crate.

mod errors;
mod traits;
mod types;

pub use errors::GenerationError;
pub use traits::Generator;
pub use types::{GenerateRequest, GenerateResponse};

#[cfg(test)]
pub use traits::MockGenerator;
