use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ConversationalTurn, TurnKind};

/// Typed annotations attached to every stored turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnMetadata {
    /// Whether the turn came from the candidate or the model
    pub kind: TurnKind,

    /// When the turn happened
    pub timestamp: DateTime<Utc>,

    /// Relevance verdict for candidate answers, when classified
    pub is_relevant: Option<bool>,

    /// Sequence number for model questions
    pub question_number: Option<u32>,

    /// Open extension map for forward-compatible annotations
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl TurnMetadata {
    /// Build metadata from a turn, stamping the current time
    pub fn from_turn(turn: &ConversationalTurn) -> Self {
        Self {
            kind: turn.kind,
            timestamp: Utc::now(),
            is_relevant: turn.is_relevant,
            question_number: turn.question_number,
            extra: turn.extra.clone(),
        }
    }
}

/// A stored vector with its source text and ownership scope.
///
/// Immutable once stored except for deletion; owned exclusively by the
/// [`SimilarityStore`](super::SimilarityStore).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: Uuid,
    pub vector: Vec<f32>,
    pub text: String,
    pub user_id: String,
    pub session_id: String,
    pub metadata: TurnMetadata,
    pub created_at: DateTime<Utc>,
}

/// A search hit with its cosine similarity score in [-1, 1]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub record: VectorRecord,
    pub similarity: f32,
}
