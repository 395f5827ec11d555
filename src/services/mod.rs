//! Service layer: the confidence model, resolver strategies, the
//! sequencer state machine, the classifier, and the CRM handoff builder.

pub mod classifier;
pub mod confidence;
pub mod handoff;
pub mod resolver;
pub mod sequencer;

pub use classifier::classify;
pub use confidence::ConfidenceModel;
pub use handoff::{build_handoff, ContactIdentity, HandoffMetadata, HandoffPayload};
pub use resolver::{DeclarativeResolver, TieredResolver};
pub use sequencer::{fold_signals, IntakeEngine, SubmitOutcome};
