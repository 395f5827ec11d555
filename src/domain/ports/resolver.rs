/// Next-question resolver port (trait) for dependency injection.
///
/// The sequencer delegates "what happens after this answer" to a resolver
/// so the branching strategy (procedural tier cascade vs. declarative rule
/// evaluation) is swappable without touching the state machine.
use crate::domain::models::{IntakeSession, QuestionGraph, TerminationReason};

/// What the resolver decided for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Ask this question next.
    Ask(String),
    /// Stop asking; the session is complete for the given reason.
    Complete(TerminationReason),
}

/// Everything a resolver may observe. Signals, confidence and the answer
/// log are read through the session snapshot, which the sequencer has
/// already updated for the answer being processed.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub graph: &'a QuestionGraph,
    pub session: &'a IntakeSession,
    /// Value of the answer that triggered this resolution, if any.
    pub last_answer: Option<&'a str>,
}

/// Strategy for choosing the next question or terminating.
///
/// Implementations must be total: every reachable session state resolves to
/// either a question id present in the graph or a termination reason.
pub trait QuestionResolver: Send + Sync {
    /// Short name for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Decide the next step for the session.
    fn resolve(&self, ctx: &ResolveContext<'_>) -> Resolution;
}
