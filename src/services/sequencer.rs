//! Adaptive intake sequencer.
//!
//! `IntakeEngine` owns the session state machine. `submit_answer` is the
//! single mutation entry point: it records the answer, refolds the signal
//! vector from the answer log, recomputes confidence, resolves the next
//! step, and commits everything at once — a reader never observes a
//! half-applied state.

use tracing::{info, warn};

use crate::domain::error::IntakeError;
use crate::domain::models::{
    AnswerRecord, Config, IntakePhase, IntakeSession, QuestionGraph, QuestionNode, ResolverKind,
    SignalVector, TerminationReason, INTENT_QUESTION_ID,
};
use crate::domain::ports::{QuestionResolver, Resolution, ResolveContext};
use crate::services::confidence::ConfidenceModel;
use crate::services::resolver::{DeclarativeResolver, TieredResolver};

/// Result of a successful `submit_answer` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub is_complete: bool,
    pub termination: Option<TerminationReason>,
    pub next_question_id: Option<String>,
    pub confidence: f64,
}

/// Fold the signal vector from the answer log, in selection order, each
/// option's deltas clamped as they apply. Records referencing questions or
/// options absent from the graph contribute nothing.
pub fn fold_signals(graph: &QuestionGraph, answers: &[AnswerRecord]) -> SignalVector {
    answers.iter().fold(SignalVector::neutral(), |acc, record| {
        graph
            .find(&record.question_id)
            .and_then(|node| node.option(&record.value))
            .map_or(acc, |option| acc.apply(&option.deltas))
    })
}

/// The adaptive sequencer state machine.
pub struct IntakeEngine {
    graph: QuestionGraph,
    confidence: ConfidenceModel,
    resolver: Box<dyn QuestionResolver>,
    session: IntakeSession,
}

impl IntakeEngine {
    /// Fresh engine positioned at the graph root.
    pub fn new(graph: QuestionGraph, config: &Config) -> Self {
        let session = IntakeSession::new(graph.root().id.clone());
        Self::with_session(graph, config, session)
    }

    /// Engine over a restored session. An unknown current question id
    /// (corrupted persisted state) fails closed to the graph root.
    pub fn with_session(graph: QuestionGraph, config: &Config, mut session: IntakeSession) -> Self {
        if !graph.contains(&session.current_question_id) {
            warn!(
                question_id = %session.current_question_id,
                "restored session points at an unknown question; falling back to root"
            );
            session.current_question_id = graph.root().id.clone();
        }
        if session.history.last() != Some(&session.current_question_id) {
            session.history.push(session.current_question_id.clone());
        }

        let resolver: Box<dyn QuestionResolver> = match config.sequencer.resolver {
            ResolverKind::Tiered => Box::new(TieredResolver::new(config.sequencer.clone())),
            ResolverKind::Declarative => {
                Box::new(DeclarativeResolver::new(config.sequencer.clone()))
            }
        };

        Self {
            graph,
            confidence: ConfidenceModel::from_config(&config.confidence),
            resolver,
            session,
        }
    }

    /// Leave the landing screen and start the answering loop.
    pub fn begin(&mut self) -> Result<(), IntakeError> {
        match self.session.phase {
            IntakePhase::Orientation => {
                self.session.phase = IntakePhase::Loop;
                Ok(())
            }
            IntakePhase::Loop => Ok(()),
            IntakePhase::Summary => Err(IntakeError::InvalidPhaseTransition {
                from: IntakePhase::Summary,
                to: IntakePhase::Loop,
            }),
        }
    }

    /// Submit the answer for the current question. Atomic: on error the
    /// session is untouched; on success history, answers, signals,
    /// confidence and completion all advance together.
    pub fn submit_answer(&mut self, value: &str) -> Result<SubmitOutcome, IntakeError> {
        if self.session.is_complete {
            return Err(IntakeError::SessionComplete);
        }

        let node = self.current_question().clone();
        if node.option(value).is_none() {
            return Err(IntakeError::UnknownAnswerOption {
                question_id: node.id.clone(),
                value: value.to_string(),
            });
        }

        // Stage every mutation on a scratch copy, commit at the end.
        let mut next = self.session.clone();
        if next.phase == IntakePhase::Orientation {
            next.phase = IntakePhase::Loop;
        }
        next.record_answer(&node.id, value);
        next.signals = fold_signals(&self.graph, &next.answers);
        next.confidence_score = self.confidence.compute(
            next.answered_count(),
            &next.signals,
            next.answer_value(INTENT_QUESTION_ID),
        );

        let resolution = self.resolver.resolve(&ResolveContext {
            graph: &self.graph,
            session: &next,
            last_answer: Some(value),
        });

        let outcome = match resolution {
            Resolution::Ask(id) => {
                next.push_question(id.clone());
                SubmitOutcome {
                    is_complete: false,
                    termination: None,
                    next_question_id: Some(id),
                    confidence: next.confidence_score,
                }
            }
            Resolution::Complete(reason) => {
                next.is_complete = true;
                next.termination = Some(reason);
                next.phase = IntakePhase::Summary;
                info!(
                    reason = reason.as_str(),
                    answered = next.answered_count(),
                    confidence = next.confidence_score,
                    resolver = self.resolver.name(),
                    "intake session complete"
                );
                SubmitOutcome {
                    is_complete: true,
                    termination: Some(reason),
                    next_question_id: None,
                    confidence: next.confidence_score,
                }
            }
        };

        self.session = next;
        Ok(outcome)
    }

    /// Rewind navigation one step. No-op at the root; never errors.
    /// Accumulated answers stay recorded — re-answering a question
    /// replaces its deltas in the fold rather than compounding them.
    pub fn go_back(&mut self) {
        self.session.pop_question();
    }

    /// Restore the engine to a fresh session at the graph root.
    pub fn reset(&mut self) {
        self.session = IntakeSession::new(self.graph.root().id.clone());
    }

    /// The node the session is currently positioned at; unknown ids fail
    /// closed to the root.
    pub fn current_question(&self) -> &QuestionNode {
        self.graph.find_or_root(&self.session.current_question_id)
    }

    pub fn session(&self) -> &IntakeSession {
        &self.session
    }

    pub fn graph(&self) -> &QuestionGraph {
        &self.graph
    }

    pub fn resolver_name(&self) -> &'static str {
        self.resolver.name()
    }
}
