//! Compass - Adaptive Intake Diagnostic Engine
//!
//! Compass drives a branching intake questionnaire: answers fold into a
//! bounded eight-dimensional signal vector, a derived confidence score
//! controls branching depth and termination, and a deterministic classifier
//! maps the final state onto a recommendation bundle.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure business logic and domain models
//! - **Application Layer** (`application`): The shell wiring engine to persistence
//! - **Service Layer** (`services`): Confidence, sequencing, classification
//! - **Infrastructure Layer** (`infrastructure`): Config loading and storage adapters
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use compass::domain::models::{builtin_question_graph, Config};
//! use compass::services::IntakeEngine;
//!
//! let mut engine = IntakeEngine::new(builtin_question_graph(), &Config::default());
//! let outcome = engine.submit_answer("brand").expect("root option exists");
//! assert!(!outcome.is_complete);
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::IntakeFlow;
pub use domain::models::{
    builtin_question_graph, Classification, Config, IntakePhase, IntakeSession, OutcomeTrack,
    PricingBand, QuestionGraph, QuestionNode, SequencerConfig, Signal, SignalDelta, SignalVector,
    SystemClass, TerminationReason,
};
pub use domain::ports::{QuestionResolver, Resolution, ResolveContext, SessionStore};
pub use infrastructure::{ConfigError, ConfigLoader, InMemorySessionStore, JsonFileSessionStore};
pub use services::{classify, ConfidenceModel, IntakeEngine, SubmitOutcome};
