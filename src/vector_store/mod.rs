//! In-memory similarity index over embedded conversational turns.
//!
//! Records are scoped by (user, session) and searched with a cosine
//! similarity linear scan. Corpora are small and session-bound, so no
//! index structure or persistence is involved.

mod models;
mod store;

pub use models::{SearchResult, TurnMetadata, VectorRecord};
pub use store::SimilarityStore;
