use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Who issued a conversational turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    /// An answer submitted by the candidate
    UserAnswer,
    /// A question issued by the model
    AiQuestion,
}

impl std::fmt::Display for TurnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnKind::UserAnswer => write!(f, "user_answer"),
            TurnKind::AiQuestion => write!(f, "ai_question"),
        }
    }
}

impl std::str::FromStr for TurnKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user_answer" => Ok(TurnKind::UserAnswer),
            "ai_question" => Ok(TurnKind::AiQuestion),
            _ => Err(format!("Unknown turn kind: {s}")),
        }
    }
}

/// A single utterance in a conversation, before it is embedded and stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationalTurn {
    /// Whether the turn came from the candidate or the model
    pub kind: TurnKind,

    /// The actual text content
    pub content: String,

    /// Relevance verdict for candidate answers, when classified
    pub is_relevant: Option<bool>,

    /// Sequence number for model questions
    pub question_number: Option<u32>,

    /// Forward-compatible annotations carried through to storage
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ConversationalTurn {
    /// Create a new turn with just a kind and content
    pub fn new(kind: TurnKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            is_relevant: None,
            question_number: None,
            extra: BTreeMap::new(),
        }
    }

    /// Tag the turn with a relevance verdict
    pub fn with_relevance(mut self, is_relevant: bool) -> Self {
        self.is_relevant = Some(is_relevant);
        self
    }

    /// Tag the turn with its question sequence number
    pub fn with_question_number(mut self, number: u32) -> Self {
        self.question_number = Some(number);
        self
    }

    /// Attach an open-ended annotation
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
