//! End-to-end interview lifecycle tests against fake capabilities.

mod common;

use std::sync::Arc;

use common::{KeywordEmbedder, ScriptedGenerator};
use viva::{
    ContextAssembler, InterviewConfig, InterviewOrchestrator, ScoringPolicy, SessionRegistry,
    SimilarityStore, VivaError, UNSCORED,
};

fn orchestrator(generator: ScriptedGenerator, config: InterviewConfig) -> InterviewOrchestrator {
    let store = Arc::new(SimilarityStore::new());
    let context = Arc::new(ContextAssembler::new(Arc::new(KeywordEmbedder), store));
    InterviewOrchestrator::new(
        Arc::new(generator),
        context,
        SessionRegistry::new(),
        config,
    )
}

#[tokio::test]
async fn full_interview_runs_to_auto_end() {
    let config = InterviewConfig::new().with_max_questions(2);
    let orchestrator = orchestrator(ScriptedGenerator::relevant(), config);

    let session = orchestrator.start_interview("u1").await.unwrap();
    assert_eq!(session.question_count, 1);
    assert!(session
        .initial_question
        .contains("difference between JDK, JRE, and JVM"));

    let first = orchestrator
        .continue_interview("u1", &session.session_id, "The JDK bundles the compiler.")
        .await
        .unwrap();
    assert!(!first.session_ended);
    assert!(first.response.contains("platform-independent"));

    let second = orchestrator
        .continue_interview("u1", &session.session_id, "Yes, because of bytecode.")
        .await
        .unwrap();
    assert!(second.session_ended);

    let summary = second.summary.expect("auto-end must carry a summary");
    assert_eq!(summary.grammatical_score, 82);
    assert_eq!(summary.technical_score, 64);
    assert!(summary.contextually_relevant);
    assert_eq!(summary.off_topic_count, 0);
    assert_eq!(
        summary.strong_points,
        vec!["Clear communication throughout"]
    );

    // The session no longer exists for either operation
    let err = orchestrator
        .continue_interview("u1", &session.session_id, "one more")
        .await
        .unwrap_err();
    assert!(matches!(err, VivaError::InvalidSession { .. }));
    let err = orchestrator
        .end_interview("u1", &session.session_id)
        .await
        .unwrap_err();
    assert!(matches!(err, VivaError::InvalidSession { .. }));
}

#[tokio::test]
async fn explicit_end_returns_summary_once() {
    let orchestrator = orchestrator(ScriptedGenerator::relevant(), InterviewConfig::default());

    let session = orchestrator.start_interview("u1").await.unwrap();
    orchestrator
        .continue_interview("u1", &session.session_id, "An answer.")
        .await
        .unwrap();

    let summary = orchestrator
        .end_interview("u1", &session.session_id)
        .await
        .unwrap();
    assert!(!summary.strong_points.is_empty());
    assert!(!summary.weak_points.is_empty());
    assert!(!summary.practice_points.is_empty());

    let err = orchestrator
        .end_interview("u1", &session.session_id)
        .await
        .unwrap_err();
    assert!(matches!(err, VivaError::InvalidSession { .. }));
}

#[tokio::test]
async fn end_interview_rejects_unknown_session() {
    let orchestrator = orchestrator(ScriptedGenerator::relevant(), InterviewConfig::default());

    let err = orchestrator
        .end_interview("u1", "no-such-id")
        .await
        .unwrap_err();
    assert!(matches!(err, VivaError::InvalidSession { .. }));
}

#[tokio::test]
async fn off_topic_session_uses_sentinel_scores_when_configured() {
    let config = InterviewConfig::new()
        .with_max_questions(1)
        .with_scoring_policy(ScoringPolicy::SentinelWhenOffTopic);
    let orchestrator = orchestrator(ScriptedGenerator::irrelevant(), config);

    let session = orchestrator.start_interview("u1").await.unwrap();
    let response = orchestrator
        .continue_interview("u1", &session.session_id, "I collect stamps.")
        .await
        .unwrap();

    let summary = response.summary.unwrap();
    assert!(!summary.contextually_relevant);
    assert_eq!(summary.off_topic_count, 1);
    assert_eq!(summary.grammatical_score, UNSCORED);
    assert_eq!(summary.technical_score, UNSCORED);
}

#[tokio::test]
async fn sessions_are_owned_by_their_user() {
    let orchestrator = orchestrator(ScriptedGenerator::relevant(), InterviewConfig::default());

    let session = orchestrator.start_interview("alice").await.unwrap();

    let err = orchestrator
        .continue_interview("bob", &session.session_id, "let me in")
        .await
        .unwrap_err();
    assert!(matches!(err, VivaError::InvalidSession { .. }));

    let err = orchestrator
        .end_interview("bob", &session.session_id)
        .await
        .unwrap_err();
    assert!(matches!(err, VivaError::InvalidSession { .. }));

    // Alice's session is unaffected
    let response = orchestrator
        .continue_interview("alice", &session.session_id, "still here")
        .await
        .unwrap();
    assert!(!response.session_ended);
}
