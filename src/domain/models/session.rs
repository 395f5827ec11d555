//! Intake session domain model.
//!
//! The session is the single mutable record of the system: navigation
//! history, the answer log, the derived signal vector and confidence score,
//! and the phase machine. All mutation flows through the sequencer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::signal::SignalVector;

/// Baseline confidence a fresh session starts from, before any answer has
/// been folded in. Both confidence models share this constant.
pub const INITIAL_CONFIDENCE: f64 = 0.35;

/// Session phase, strictly forward on the submit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakePhase {
    /// Landing screen; nothing answered yet.
    Orientation,
    /// Actively answering.
    Loop,
    /// Terminal; no further signal mutation on the submit path.
    Summary,
}

impl Default for IntakePhase {
    fn default() -> Self {
        Self::Orientation
    }
}

impl IntakePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orientation => "orientation",
            Self::Loop => "loop",
            Self::Summary => "summary",
        }
    }

    /// Forward transitions only; `reset` bypasses this by rebuilding the
    /// session, and `go_back` explicitly reopens `Loop` from `Summary`.
    pub fn can_advance_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Orientation, Self::Loop) | (Self::Loop, Self::Summary)
        )
    }
}

/// Which termination rule ended the questioning loop. Carried into the CRM
/// handoff so downstream consumers know why the session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Answer count hit the hard cap.
    HardCap,
    /// Confidence crossed the early-exit threshold with critical signals captured.
    HighConfidence,
    /// High confidence paired with low urgency; further probing not warranted.
    LowUrgency,
    /// Every reachable question (including mandatory anchors) was exhausted.
    GraphExhausted,
}

impl TerminationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HardCap => "hard_cap",
            Self::HighConfidence => "high_confidence",
            Self::LowUrgency => "low_urgency",
            Self::GraphExhausted => "graph_exhausted",
        }
    }
}

/// One recorded answer. The log is ordered by first selection; re-answering
/// a question replaces the record in place so the clamped signal fold stays
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: String,
    pub value: String,
    pub answered_at: DateTime<Utc>,
}

/// The session's mutable record.
///
/// `signals` and `confidence_score` are derived state: they are recomputed
/// from the answer log on every mutation and are never independently set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeSession {
    pub id: Uuid,
    pub current_question_id: String,
    pub history: Vec<String>,
    pub answers: Vec<AnswerRecord>,
    pub phase: IntakePhase,
    pub is_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination: Option<TerminationReason>,
    pub signals: SignalVector,
    pub confidence_score: f64,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IntakeSession {
    /// Fresh session positioned at the graph root.
    pub fn new(root_question_id: impl Into<String>) -> Self {
        let root = root_question_id.into();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            current_question_id: root.clone(),
            history: vec![root],
            answers: Vec::new(),
            phase: IntakePhase::Orientation,
            is_complete: false,
            termination: None,
            signals: SignalVector::neutral(),
            confidence_score: INITIAL_CONFIDENCE,
            started_at: now,
            updated_at: now,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// The recorded answer value for a question, if any.
    pub fn answer_value(&self, question_id: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.value.as_str())
    }

    pub fn has_visited(&self, question_id: &str) -> bool {
        self.history.iter().any(|id| id == question_id)
    }

    /// Record an answer, replacing any earlier record for the same question
    /// in place. Returns true if this was a first-time answer.
    pub fn record_answer(&mut self, question_id: &str, value: impl Into<String>) -> bool {
        let now = Utc::now();
        self.updated_at = now;
        if let Some(existing) = self
            .answers
            .iter_mut()
            .find(|a| a.question_id == question_id)
        {
            existing.value = value.into();
            existing.answered_at = now;
            false
        } else {
            self.answers.push(AnswerRecord {
                question_id: question_id.to_string(),
                value: value.into(),
                answered_at: now,
            });
            true
        }
    }

    /// Advance navigation to a new question.
    pub fn push_question(&mut self, question_id: impl Into<String>) {
        let id = question_id.into();
        self.history.push(id.clone());
        self.current_question_id = id;
        self.updated_at = Utc::now();
    }

    /// Rewind navigation one step. No-op when the history holds only the
    /// root. Reopens the loop if the session had completed.
    pub fn pop_question(&mut self) {
        if self.history.len() <= 1 {
            return;
        }
        self.history.pop();
        if let Some(tail) = self.history.last() {
            self.current_question_id.clone_from(tail);
        }
        if self.is_complete {
            self.is_complete = false;
            self.termination = None;
            self.phase = IntakePhase::Loop;
        }
        self.updated_at = Utc::now();
    }

    /// Whether the visitor has meaningfully started (used by the shell to
    /// offer resume-vs-restart).
    pub fn has_active_session(&self) -> bool {
        self.history.len() > 1 || self.phase != IntakePhase::Orientation
    }
}
