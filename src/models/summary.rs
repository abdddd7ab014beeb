use serde::{Deserialize, Serialize};

/// Sentinel score meaning "not scored" under the sentinel scoring policy
pub const UNSCORED: i32 = -1;

/// Structured evaluation produced once at session end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub strong_points: Vec<String>,
    pub weak_points: Vec<String>,
    /// 0-100, or UNSCORED
    pub grammatical_score: i32,
    /// 0-100, or UNSCORED
    pub technical_score: i32,
    pub practice_points: Vec<String>,
    /// Whether the majority of answers addressed the questions asked
    pub contextually_relevant: bool,
    /// Number of answers judged off-topic
    pub off_topic_count: u32,
}

/// Response returned by the orchestrator for each continued turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewResponse {
    /// The next question, or a completion message when the session ended
    pub response: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default)]
    pub session_ended: bool,

    /// Included when the session auto-ends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<InterviewSummary>,
}

impl InterviewResponse {
    /// A mid-session response carrying the next question
    pub fn question(text: impl Into<String>) -> Self {
        Self {
            response: text.into(),
            session_id: None,
            session_ended: false,
            summary: None,
        }
    }

    /// A terminal response carrying the final summary
    pub fn ended(message: impl Into<String>, summary: InterviewSummary) -> Self {
        Self {
            response: message.into(),
            session_id: None,
            session_ended: true,
            summary: Some(summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_constructors() {
        let next = InterviewResponse::question("Why is Java platform-independent?");
        assert!(!next.session_ended);
        assert!(next.summary.is_none());

        let summary = InterviewSummary {
            strong_points: vec!["clear explanations".into()],
            weak_points: vec!["terminology".into()],
            grammatical_score: 80,
            technical_score: 75,
            practice_points: vec!["equals vs ==".into()],
            contextually_relevant: true,
            off_topic_count: 0,
        };
        let done = InterviewResponse::ended("Interview complete.", summary.clone());
        assert!(done.session_ended);
        assert_eq!(done.summary, Some(summary));
    }
}
