use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an interview session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Accepting answers and issuing questions
    #[default]
    Active,
    /// Reached the configured question limit
    AutoEnded,
    /// Explicitly closed by the caller
    Ended,
}

impl SessionStatus {
    /// Terminal states never transition back to Active
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::AutoEnded | SessionStatus::Ended)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::AutoEnded => write!(f, "auto_ended"),
            SessionStatus::Ended => write!(f, "ended"),
        }
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(SessionStatus::Active),
            "auto_ended" => Ok(SessionStatus::AutoEnded),
            "ended" => Ok(SessionStatus::Ended),
            _ => Err(format!("Unknown session status: {s}")),
        }
    }
}

/// A live interview session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    pub session_id: String,
    pub user_id: String,
    pub started_at: DateTime<Utc>,
    pub status: SessionStatus,
    /// First question issued by the model
    pub initial_question: String,
    /// Number of questions asked so far
    pub question_count: u32,
    /// Maximum questions before auto-end
    pub max_questions: u32,
}

impl InterviewSession {
    /// Create a new active session with a fresh identifier
    pub fn new(
        user_id: impl Into<String>,
        initial_question: impl Into<String>,
        max_questions: u32,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            started_at: Utc::now(),
            status: SessionStatus::Active,
            initial_question: initial_question.into(),
            question_count: 1,
            max_questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminality() {
        assert!(!SessionStatus::Active.is_terminal());
        assert!(SessionStatus::AutoEnded.is_terminal());
        assert!(SessionStatus::Ended.is_terminal());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            SessionStatus::Active,
            SessionStatus::AutoEnded,
            SessionStatus::Ended,
        ] {
            assert_eq!(status.to_string().parse::<SessionStatus>(), Ok(status));
        }
        assert!("paused".parse::<SessionStatus>().is_err());
    }

    #[test]
    fn test_new_session() {
        let session = InterviewSession::new("u1", "What is the JVM?", 4);

        assert_eq!(session.user_id, "u1");
        assert_eq!(session.status, SessionStatus::Active);
        assert_eq!(session.question_count, 1);
        assert_eq!(session.max_questions, 4);
        assert!(!session.session_id.is_empty());
    }
}
