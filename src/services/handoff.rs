//! CRM handoff payload builder.
//!
//! Packages a finished session for the downstream CRM consumer: final
//! signals, classification bundle, the full answer history, and the tag of
//! the termination rule that ended the loop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::{
    AnswerRecord, Classification, IntakeSession, SignalVector, TerminationReason,
};

/// Who the payload is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactIdentity {
    pub name: String,
    pub email: String,
    pub company: String,
}

/// Environment metadata attached to the handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffMetadata {
    pub source: String,
    pub locale: String,
}

impl Default for HandoffMetadata {
    fn default() -> Self {
        Self {
            source: "cli".to_string(),
            locale: std::env::var("LANG").unwrap_or_else(|_| "unknown".to_string()),
        }
    }
}

/// The full CRM handoff record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffPayload {
    pub session_id: Uuid,
    pub lead_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub identity: ContactIdentity,
    pub signals: SignalVector,
    pub confidence_score: f64,
    pub system_class: String,
    pub system_snapshot: String,
    pub primary_bottleneck: String,
    pub priority_sequence: Vec<String>,
    pub pricing_band: String,
    pub track: String,
    pub why_this_path: Vec<String>,
    pub immediate_wins: Vec<String>,
    pub raw_answers: Vec<AnswerRecord>,
    /// Which termination rule ended the loop, when the session completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_reason: Option<TerminationReason>,
    pub metadata: HandoffMetadata,
}

/// Assemble the handoff record from a session and its classification.
pub fn build_handoff(
    identity: ContactIdentity,
    session: &IntakeSession,
    classification: &Classification,
) -> HandoffPayload {
    HandoffPayload {
        session_id: session.id,
        lead_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        identity,
        signals: session.signals,
        confidence_score: session.confidence_score,
        system_class: classification.system_class.as_str().to_string(),
        system_snapshot: classification.narrative.snapshot.clone(),
        primary_bottleneck: classification.bottleneck.clone(),
        priority_sequence: classification.priorities.clone(),
        pricing_band: classification.pricing_band.label().to_string(),
        track: classification.track.as_str().to_string(),
        why_this_path: classification.narrative.why_this_path.clone(),
        immediate_wins: classification.narrative.immediate_wins.clone(),
        raw_answers: session.answers.clone(),
        termination_reason: session.termination,
        metadata: HandoffMetadata::default(),
    }
}
