//! Context assembly: turns conversation history into retrieval-augmented
//! prompts.

use std::sync::Arc;

use uuid::Uuid;

use crate::embedding::{Embedder, EmbeddingError};
use crate::error::Result;
use crate::models::ConversationalTurn;
use crate::vector_store::{SearchResult, SimilarityStore, TurnMetadata, VectorRecord};

/// Wraps an [`Embedder`] and a [`SimilarityStore`] to convert turns into
/// stored vectors and queries into ranked context.
pub struct ContextAssembler {
    embedder: Arc<dyn Embedder>,
    store: Arc<SimilarityStore>,
}

impl ContextAssembler {
    pub fn new(embedder: Arc<dyn Embedder>, store: Arc<SimilarityStore>) -> Self {
        tracing::debug!(
            dimensions = embedder.dimensions(),
            "Context assembler initialized"
        );
        Self { embedder, store }
    }

    /// Embed a conversational turn and store it under the given scope.
    ///
    /// The store is never touched when embedding fails; insertion happens
    /// only after a successful, non-empty embedding.
    pub async fn store_turn(
        &self,
        user_id: &str,
        session_id: &str,
        turn: &ConversationalTurn,
    ) -> Result<Uuid> {
        let embedding = self.embed_non_empty(&turn.content).await?;
        let metadata = TurnMetadata::from_turn(turn);

        let record_id = self
            .store
            .insert(embedding, turn.content.clone(), user_id, session_id, metadata);

        tracing::debug!(
            record_id = %record_id,
            user_id,
            session_id,
            kind = %turn.kind,
            "Stored conversational turn"
        );

        Ok(record_id)
    }

    /// Embed a query and return the most relevant stored turns, ranked
    /// descending by similarity.
    pub async fn retrieve_relevant(
        &self,
        user_id: &str,
        session_id: &str,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult>> {
        let query_embedding = self.embed_non_empty(query).await?;
        Ok(self.store.search(&query_embedding, user_id, session_id, top_k))
    }

    /// Render a context-aware prompt from pre-ranked retrieval results.
    ///
    /// Callers must pre-sort `retrieved`; results are emitted in the order
    /// supplied. No context block is emitted when the list is empty.
    pub fn render_prompt(
        &self,
        system_message: &str,
        query: &str,
        retrieved: &[SearchResult],
    ) -> String {
        let mut prompt = String::new();

        if !system_message.is_empty() {
            prompt.push_str("System: ");
            prompt.push_str(system_message);
            prompt.push_str("\n\n");
        }

        if !retrieved.is_empty() {
            prompt.push_str("Previous conversation context:\n");
            for (i, result) in retrieved.iter().enumerate() {
                prompt.push_str(&format!(
                    "{}. [Similarity: {:.3}] {}\n",
                    i + 1,
                    result.similarity,
                    result.record.text
                ));
            }
            prompt.push('\n');
        }

        prompt.push_str("Current query: ");
        prompt.push_str(query);

        prompt
    }

    /// Complete store -> retrieve -> render workflow for one interaction.
    ///
    /// Stores the prior turn if given, retrieves context for the current
    /// query, and renders the final prompt. Any failure in the first two
    /// steps aborts the whole operation.
    pub async fn process_interaction(
        &self,
        user_id: &str,
        session_id: &str,
        prior_turn: Option<&ConversationalTurn>,
        query: &str,
        system_message: &str,
        top_k: usize,
    ) -> Result<String> {
        if let Some(turn) = prior_turn {
            self.store_turn(user_id, session_id, turn).await?;
        }

        let retrieved = self
            .retrieve_relevant(user_id, session_id, query, top_k)
            .await?;

        Ok(self.render_prompt(system_message, query, &retrieved))
    }

    /// The canonical conversation transcript, ascending by insertion time
    pub fn conversation_history(&self, user_id: &str, session_id: &str) -> Vec<VectorRecord> {
        self.store.list_by_session(user_id, session_id)
    }

    async fn embed_non_empty(&self, text: &str) -> Result<Vec<f32>> {
        let embedding = self.embedder.embed(text).await?;
        if embedding.is_empty() {
            return Err(EmbeddingError::Empty.into());
        }
        Ok(embedding)
    }
}
