use thiserror::Error;

use super::models::session::IntakePhase;

/// Domain-level errors for intake operations
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Question {question_id} has no answer option with value '{value}'")]
    UnknownAnswerOption { question_id: String, value: String },

    #[error("Session is already complete; no further answers are accepted")]
    SessionComplete,

    #[error("Invalid phase transition from {from:?} to {to:?}")]
    InvalidPhaseTransition { from: IntakePhase, to: IntakePhase },

    #[error("Question graph is empty")]
    EmptyGraph,
}
