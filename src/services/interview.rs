//! Interview session state machine.
//!
//! The orchestrator owns the generate -> store -> respond cycle and the
//! session lifecycle (`Active -> AutoEnded | Ended`). All model calls go
//! through the [`Generator`] capability and all retrieval/storage goes
//! through the [`ContextAssembler`]; neither is ever called while a lock
//! is held.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::json;

use crate::config::{InterviewConfig, ScoringPolicy};
use crate::error::{Result, VivaError};
use crate::models::{
    ConversationalTurn, InterviewResponse, InterviewSession, InterviewSummary, SessionStatus,
    TurnKind, UNSCORED,
};
use crate::services::context::ContextAssembler;
use crate::services::llm::{GenerateRequest, GenerationError, Generator};
use crate::services::prompts;
use crate::services::summary::SummaryParser;

/// Outcome of admitting one more answer into a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAdmission {
    /// The question limit was already reached; the session auto-ended and
    /// was removed from the registry
    AutoEnd,
    /// The session continues with an incremented question counter
    Continue {
        question_number: u32,
        /// The upcoming question is the last one
        is_final: bool,
    },
}

/// Registry of live interview sessions.
///
/// Sessions enter on start and leave on reaching a terminal state. The
/// check-state-then-transition sequence for a given session is atomic
/// with respect to other callers: every transition happens inside a
/// single write-lock critical section.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, InterviewSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Register a freshly started session
    pub fn register(&self, session: InterviewSession) {
        let mut sessions = self.sessions.write().unwrap();
        sessions.insert(session.session_id.clone(), session);
    }

    /// Validate that a live, active session exists for this exact
    /// (user, session) pair and return a snapshot of it.
    pub fn snapshot_active(&self, user_id: &str, session_id: &str) -> Result<InterviewSession> {
        let sessions = self.sessions.read().unwrap();
        match sessions.get(session_id) {
            Some(session)
                if session.user_id == user_id && session.status == SessionStatus::Active =>
            {
                Ok(session.clone())
            }
            _ => Err(VivaError::invalid_session("invalid or inactive session")),
        }
    }

    /// Re-validate a session and either increment its question counter or
    /// transition it to `AutoEnded` when the limit was already reached.
    pub fn admit_turn(&self, user_id: &str, session_id: &str) -> Result<TurnAdmission> {
        let mut sessions = self.sessions.write().unwrap();

        let session = match sessions.get_mut(session_id) {
            Some(session)
                if session.user_id == user_id && session.status == SessionStatus::Active =>
            {
                session
            }
            _ => return Err(VivaError::invalid_session("invalid or inactive session")),
        };

        if session.question_count >= session.max_questions {
            session.status = SessionStatus::AutoEnded;
            sessions.remove(session_id);
            return Ok(TurnAdmission::AutoEnd);
        }

        session.question_count += 1;
        Ok(TurnAdmission::Continue {
            question_number: session.question_count,
            is_final: session.question_count >= session.max_questions,
        })
    }

    /// Explicitly close a session in state `Active` or `AutoEnded`,
    /// transitioning it to `Ended` and removing it from the live table.
    pub fn close(&self, user_id: &str, session_id: &str) -> Result<InterviewSession> {
        let mut sessions = self.sessions.write().unwrap();

        match sessions.remove(session_id) {
            Some(mut session)
                if session.user_id == user_id
                    && matches!(
                        session.status,
                        SessionStatus::Active | SessionStatus::AutoEnded
                    ) =>
            {
                if session.status == SessionStatus::Active {
                    session.status = SessionStatus::Ended;
                }
                Ok(session)
            }
            Some(session) => {
                // Wrong owner or terminal state: put it back untouched
                sessions.insert(session.session_id.clone(), session);
                Err(VivaError::invalid_session("invalid or inactive session"))
            }
            None => Err(VivaError::invalid_session("invalid or inactive session")),
        }
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives bounded multi-turn interviews with context-aware questioning,
/// relevance gating and end-of-session evaluation.
pub struct InterviewOrchestrator {
    generator: Arc<dyn Generator>,
    context: Arc<ContextAssembler>,
    registry: SessionRegistry,
    config: InterviewConfig,
}

impl InterviewOrchestrator {
    pub fn new(
        generator: Arc<dyn Generator>,
        context: Arc<ContextAssembler>,
        registry: SessionRegistry,
        config: InterviewConfig,
    ) -> Self {
        Self {
            generator,
            context,
            registry,
            config,
        }
    }

    /// Start a new interview session for a user.
    ///
    /// Generates the opening question and registers the session. A
    /// generation failure aborts session creation entirely; nothing is
    /// registered or stored.
    pub async fn start_interview(&self, user_id: &str) -> Result<InterviewSession> {
        let request = GenerateRequest::new(prompts::OPENING_PROMPT).with_temperature(0.3);
        let question = self.generate(request).await.map_err(|err| {
            tracing::error!(error = %err, user_id, "Unable to generate opening question");
            err
        })?;

        let session = InterviewSession::new(user_id, question.clone(), self.config.max_questions);
        self.registry.register(session.clone());

        let opening_turn = ConversationalTurn::new(TurnKind::AiQuestion, question)
            .with_question_number(1)
            .with_extra("stage", json!("start"));

        if let Err(err) = self
            .context
            .store_turn(user_id, &session.session_id, &opening_turn)
            .await
        {
            tracing::warn!(
                error = %err,
                session_id = %session.session_id,
                "Unable to store opening question"
            );
        }

        tracing::info!(
            session_id = %session.session_id,
            user_id,
            max_questions = session.max_questions,
            "Interview started"
        );

        Ok(session)
    }

    /// Process a candidate answer and produce either the next question or,
    /// when the question limit is reached, the final summary.
    pub async fn continue_interview(
        &self,
        user_id: &str,
        session_id: &str,
        answer_text: &str,
    ) -> Result<InterviewResponse> {
        self.registry.snapshot_active(user_id, session_id)?;

        // Relevance gating against the most recent model question. This is
        // advisory: classification failures default to relevant.
        let history = self.context.conversation_history(user_id, session_id);
        let last_question = history
            .iter()
            .rev()
            .find(|record| record.metadata.kind == TurnKind::AiQuestion)
            .map(|record| record.text.clone());

        let is_relevant = match &last_question {
            Some(question) => self.classify_relevance(question, answer_text).await,
            None => true,
        };

        let answer_turn =
            ConversationalTurn::new(TurnKind::UserAnswer, answer_text).with_relevance(is_relevant);
        self.context
            .store_turn(user_id, session_id, &answer_turn)
            .await?;

        // Re-validate and transition under one write lock; the unlocked
        // classification/storage above may have raced another caller.
        match self.registry.admit_turn(user_id, session_id)? {
            TurnAdmission::AutoEnd => {
                let summary = self.generate_summary(user_id, session_id).await?;
                tracing::info!(session_id, user_id, "Interview auto-ended");

                let mut response = InterviewResponse::ended(prompts::COMPLETION_MESSAGE, summary);
                response.session_id = Some(session_id.to_string());
                Ok(response)
            }
            TurnAdmission::Continue {
                question_number,
                is_final,
            } => {
                let prompt = self
                    .context
                    .process_interaction(
                        user_id,
                        session_id,
                        None,
                        answer_text,
                        prompts::CONTINUATION_PROMPT,
                        self.config.context_top_k,
                    )
                    .await?;

                let prompt = if is_final {
                    prompts::final_question_prompt(&prompt)
                } else {
                    prompt
                };

                let request = GenerateRequest::new(prompt).with_temperature(0.3);
                let question = self.generate(request).await?;

                let question_turn = ConversationalTurn::new(TurnKind::AiQuestion, question.clone())
                    .with_question_number(question_number);
                self.context
                    .store_turn(user_id, session_id, &question_turn)
                    .await?;

                let mut response = InterviewResponse::question(question);
                response.session_id = Some(session_id.to_string());
                Ok(response)
            }
        }
    }

    /// Explicitly end a session and return the final summary.
    pub async fn end_interview(
        &self,
        user_id: &str,
        session_id: &str,
    ) -> Result<InterviewSummary> {
        self.registry.close(user_id, session_id)?;
        tracing::info!(session_id, user_id, "Interview ended");
        self.generate_summary(user_id, session_id).await
    }

    /// Generate the structured evaluation from the full session history.
    async fn generate_summary(
        &self,
        user_id: &str,
        session_id: &str,
    ) -> Result<InterviewSummary> {
        let history = self.context.conversation_history(user_id, session_id);

        let mut transcript = String::from("Interview Conversation:\n");
        let mut total_answers: u32 = 0;
        let mut relevant_answers: u32 = 0;
        let mut off_topic_count: u32 = 0;

        for record in &history {
            match record.metadata.kind {
                TurnKind::UserAnswer => {
                    total_answers += 1;
                    transcript.push_str(&format!("Candidate: {}\n", record.text));
                    // Unclassified answers count as relevant
                    match record.metadata.is_relevant {
                        Some(false) => off_topic_count += 1,
                        _ => relevant_answers += 1,
                    }
                }
                TurnKind::AiQuestion => {
                    transcript.push_str(&format!("Interviewer: {}\n", record.text));
                }
            }
        }

        let contextually_relevant = total_answers > 0
            && (f64::from(relevant_answers) / f64::from(total_answers)) >= 0.5;

        let prompt = if contextually_relevant {
            prompts::summary_prompt_relevant(&transcript, relevant_answers, total_answers)
        } else {
            prompts::summary_prompt_off_topic(&transcript, off_topic_count, total_answers)
        };

        let request = GenerateRequest::new(prompt)
            .with_max_tokens(1024)
            .with_temperature(0.3);
        let response = self.generate(request).await?;

        let mut summary = SummaryParser::parse(&response);
        summary.contextually_relevant = contextually_relevant;
        summary.off_topic_count = off_topic_count;

        if self.config.scoring_policy == ScoringPolicy::SentinelWhenOffTopic
            && !contextually_relevant
        {
            summary.grammatical_score = UNSCORED;
            summary.technical_score = UNSCORED;
        }

        Ok(summary)
    }

    /// Ask the model whether an answer addresses the question. Failures
    /// are logged and swallowed; a flaky classifier never blocks the flow.
    async fn classify_relevance(&self, question: &str, answer: &str) -> bool {
        let request =
            GenerateRequest::new(prompts::validation_prompt(question, answer)).with_temperature(0.0);

        match self.generate(request).await {
            Ok(verdict) => {
                let verdict = verdict.trim().to_uppercase();
                verdict.contains("RELEVANT") && !verdict.contains("IRRELEVANT")
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "Unable to validate response relevance; defaulting to relevant"
                );
                true
            }
        }
    }

    /// Run one generation call and unwrap the text, treating a blank
    /// completion as "no candidates".
    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        let response = self.generator.complete(request).await?;
        if response.text.trim().is_empty() {
            return Err(GenerationError::NoCandidates.into());
        }

        tracing::debug!(
            model = self.generator.model_name(),
            chars = response.text.len(),
            "Generation complete"
        );
        Ok(response.text)
    }
}
