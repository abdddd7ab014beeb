//! In-memory vector store implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{Result, VivaError};

use super::models::{SearchResult, TurnMetadata, VectorRecord};

/// Concurrency-safe in-memory similarity index.
///
/// Readers (search, listing, count) take a shared lock; writers (insert,
/// delete) take an exclusive lock. The lock is never held across any
/// outbound call.
pub struct SimilarityStore {
    records: RwLock<HashMap<Uuid, VectorRecord>>,
}

impl SimilarityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Store a vector with its source text, ownership scope and metadata.
    ///
    /// Always succeeds; there is no uniqueness constraint on text. Returns
    /// the freshly assigned record identifier.
    pub fn insert(
        &self,
        vector: Vec<f32>,
        text: impl Into<String>,
        user_id: impl Into<String>,
        session_id: impl Into<String>,
        metadata: TurnMetadata,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let record = VectorRecord {
            id,
            vector,
            text: text.into(),
            user_id: user_id.into(),
            session_id: session_id.into(),
            metadata,
            created_at: Utc::now(),
        };

        let mut records = self.records.write().unwrap();
        records.insert(id, record);
        id
    }

    /// Find the most similar records within one (user, session) scope.
    ///
    /// Scans every matching record, sorts descending by cosine similarity
    /// with a stable tie-break, and truncates to `top_k`. Returns all
    /// candidates when `top_k` exceeds the candidate count.
    pub fn search(
        &self,
        query_vector: &[f32],
        user_id: &str,
        session_id: &str,
        top_k: usize,
    ) -> Vec<SearchResult> {
        let records = self.records.read().unwrap();

        let mut candidates: Vec<SearchResult> = records
            .values()
            .filter(|record| record.user_id == user_id && record.session_id == session_id)
            .map(|record| SearchResult {
                similarity: cosine_similarity(query_vector, &record.vector),
                record: record.clone(),
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.similarity
                .total_cmp(&a.similarity)
                .then_with(|| a.record.created_at.cmp(&b.record.created_at))
                .then_with(|| a.record.id.cmp(&b.record.id))
        });

        candidates.truncate(top_k);
        candidates
    }

    /// Retrieve all records for one (user, session) scope, ascending by
    /// insertion time. This is the canonical conversation transcript.
    pub fn list_by_session(&self, user_id: &str, session_id: &str) -> Vec<VectorRecord> {
        let records = self.records.read().unwrap();

        let mut matching: Vec<VectorRecord> = records
            .values()
            .filter(|record| record.user_id == user_id && record.session_id == session_id)
            .cloned()
            .collect();

        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        matching
    }

    /// Remove a record by id
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut records = self.records.write().unwrap();

        if records.remove(&id).is_none() {
            return Err(VivaError::not_found(format!("record {id}")));
        }

        Ok(())
    }

    /// Total record count across all users and sessions (diagnostic only)
    pub fn count(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

impl Default for SimilarityStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Cosine similarity between two vectors.
///
/// Mismatched lengths and zero-magnitude vectors yield 0.0 rather than an
/// error; the producing embedder is the sole source of vectors and is
/// assumed consistent.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot_product = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot_product += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a.sqrt() * norm_b.sqrt())
}
