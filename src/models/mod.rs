pub mod session;
pub mod summary;
pub mod turn;

pub use session::{InterviewSession, SessionStatus};
pub use summary::{InterviewResponse, InterviewSummary, UNSCORED};
pub use turn::{ConversationalTurn, TurnKind};
