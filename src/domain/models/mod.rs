//! Domain models: pure data, no I/O.

pub mod catalog;
pub mod classification;
pub mod config;
pub mod question;
pub mod session;
pub mod signal;

pub use catalog::{builtin_question_graph, builtin_question_nodes, MANDATORY_ANCHORS};
pub use classification::{
    ClassDefinition, Classification, NarrativeSnapshot, OutcomeTrack, PricingBand, SystemClass,
};
pub use config::{
    Config, ConfidenceConfig, ConfidenceModelKind, LoggingConfig, ResolverKind, SequencerConfig,
    StorageConfig,
};
pub use question::{
    AnswerOption, AnswerType, BranchRule, Comparator, Condition, EvalScope, Literal, Operand,
    QuestionCategory, QuestionGraph, QuestionNode, RuleGuard, AMBIGUOUS_INTENT,
    INTENT_QUESTION_ID,
};
pub use session::{
    AnswerRecord, IntakePhase, IntakeSession, TerminationReason, INITIAL_CONFIDENCE,
};
pub use signal::{Signal, SignalDelta, SignalVector, ALL_SIGNALS, NEUTRAL};
