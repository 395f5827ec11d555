//! Next-question resolution strategies.
//!
//! Both resolvers implement the same contract: evaluate the termination
//! rules in strict priority order, and only if none fire pick the next
//! question. `TieredResolver` is the hand-coded cascade; the
//! `DeclarativeResolver` consults the answered node's branch rules first
//! and falls back to the same cascade, so both converge on identical
//! termination behavior.

use tracing::debug;

use crate::domain::models::{
    EvalScope, IntakeSession, QuestionGraph, SequencerConfig, Signal, SignalVector,
    TerminationReason, MANDATORY_ANCHORS,
};
use crate::domain::ports::{QuestionResolver, Resolution, ResolveContext};

// Tier question ids (graph calibration data).
const BUSINESS_STAGE: &str = "business_stage";
const URGENCY_TIMING: &str = "urgency_timing";
const BRAND_DEPTH: &str = "brand_depth_positioning";
const AUTOMATION_COMPLEXITY: &str = "automation_complexity";
const TECH_DEBT: &str = "tech_debt_assessment";
const REVENUE_BOTTLENECK: &str = "revenue_bottleneck";
const BUDGET_ALLOCATION: &str = "budget_allocation";
const DECISION_AUTHORITY: &str = "decision_authority";

/// Check the three termination rules, in priority order. First match wins.
fn check_termination(
    session: &IntakeSession,
    config: &SequencerConfig,
) -> Option<TerminationReason> {
    // Rule 1: hard cap, regardless of confidence.
    if session.answered_count() >= config.hard_cap {
        return Some(TerminationReason::HardCap);
    }

    let intent = session.answer_value(crate::domain::models::INTENT_QUESTION_ID);

    // Rule 2: high confidence with all critical signals captured.
    if session.confidence_score > config.early_exit_confidence
        && critical_signals_captured(&session.signals, intent, config.critical_margin)
    {
        return Some(TerminationReason::HighConfidence);
    }

    // Rule 3: confident enough about a low-urgency respondent.
    if session.confidence_score > config.soft_exit_confidence
        && session.signals.urgency < config.low_urgency_below
    {
        return Some(TerminationReason::LowUrgency);
    }

    None
}

/// Whether every critical signal deviates from neutral by more than the
/// margin: the fixed core subset plus one signal selected by intent. An
/// unset intent never counts as captured.
fn critical_signals_captured(signals: &SignalVector, intent: Option<&str>, margin: f64) -> bool {
    let Some(intent) = intent else {
        return false;
    };
    let intent_signal = match intent {
        "brand" => Signal::BrandClarity,
        "automation" => Signal::AutomationReadiness,
        // web, build, audit and anything unrecognized probe the platform.
        _ => Signal::TechnicalDebt,
    };
    let critical = [
        Signal::BusinessMaturity,
        Signal::Urgency,
        Signal::DecisionAuthority,
        intent_signal,
    ];
    critical
        .iter()
        .all(|s| (signals.get(*s) - crate::domain::models::NEUTRAL).abs() > margin)
}

/// Propose a question only if the graph has it and the session has not
/// visited it yet.
fn propose(graph: &QuestionGraph, session: &IntakeSession, id: &str) -> Option<String> {
    (graph.contains(id) && !session.has_visited(id)).then(|| id.to_string())
}

/// The confidence-bucketed depth cascade (rule 4).
fn tier_cascade(ctx: &ResolveContext<'_>, config: &SequencerConfig) -> Option<String> {
    let session = ctx.session;
    let confidence = session.confidence_score;
    let intent = session.answer_value(crate::domain::models::INTENT_QUESTION_ID);

    // Tier "core": foundational calibration.
    if confidence < config.depth_tier_floor {
        if let Some(id) = propose(ctx.graph, session, BUSINESS_STAGE) {
            return Some(id);
        }
        if let Some(id) = propose(ctx.graph, session, URGENCY_TIMING) {
            return Some(id);
        }
    }

    // Tier "depth": intent-driven specialization.
    if confidence >= config.depth_tier_floor && confidence < config.closing_tier_floor {
        if intent == Some("brand") {
            if let Some(id) = propose(ctx.graph, session, BRAND_DEPTH) {
                return Some(id);
            }
        }
        if intent == Some("automation") {
            if let Some(id) = propose(ctx.graph, session, AUTOMATION_COMPLEXITY) {
                return Some(id);
            }
        }
        if intent == Some("build")
            || intent == Some("web")
            || session.signals.technical_debt > config.elevated_tech_debt
        {
            if let Some(id) = propose(ctx.graph, session, TECH_DEBT) {
                return Some(id);
            }
        }
        // High-maturity adaptive depth.
        if session.signals.business_maturity > config.high_maturity {
            if let Some(id) = propose(ctx.graph, session, REVENUE_BOTTLENECK) {
                return Some(id);
            }
        }
    }

    // Tier "closing": resource and mandate anchors.
    if confidence >= config.closing_tier_floor {
        if let Some(id) = propose(ctx.graph, session, BUDGET_ALLOCATION) {
            return Some(id);
        }
        if let Some(id) = propose(ctx.graph, session, DECISION_AUTHORITY) {
            return Some(id);
        }
    }

    None
}

/// Rule 5: a session never completes with a mandatory anchor unvisited.
fn missing_anchor(ctx: &ResolveContext<'_>) -> Option<String> {
    MANDATORY_ANCHORS
        .iter()
        .find_map(|anchor| propose(ctx.graph, ctx.session, anchor))
}

/// Hand-coded tier cascade resolver (default strategy).
#[derive(Debug, Clone, Default)]
pub struct TieredResolver {
    config: SequencerConfig,
}

impl TieredResolver {
    pub const fn new(config: SequencerConfig) -> Self {
        Self { config }
    }
}

impl QuestionResolver for TieredResolver {
    fn name(&self) -> &'static str {
        "tiered"
    }

    fn resolve(&self, ctx: &ResolveContext<'_>) -> Resolution {
        if let Some(reason) = check_termination(ctx.session, &self.config) {
            return Resolution::Complete(reason);
        }
        if let Some(id) = tier_cascade(ctx, &self.config) {
            debug!(next = %id, "tier cascade selected next question");
            return Resolution::Ask(id);
        }
        if let Some(id) = missing_anchor(ctx) {
            debug!(next = %id, "mandatory anchor outstanding");
            return Resolution::Ask(id);
        }
        Resolution::Complete(TerminationReason::GraphExhausted)
    }
}

/// Declarative resolver: evaluates the answered node's branch rules as
/// data before falling back to the tier cascade. Branch rules can only
/// route to unvisited questions that exist in the graph.
#[derive(Debug, Clone, Default)]
pub struct DeclarativeResolver {
    config: SequencerConfig,
}

impl DeclarativeResolver {
    pub const fn new(config: SequencerConfig) -> Self {
        Self { config }
    }

    fn evaluate_rules(ctx: &ResolveContext<'_>) -> Option<String> {
        let node = ctx.graph.find(&ctx.session.current_question_id)?;
        let scope = EvalScope::of(ctx.session);
        for rule in &node.branching_rules {
            if !rule.matches(&scope) {
                continue;
            }
            if let Some(id) = propose(ctx.graph, ctx.session, &rule.next_question_id) {
                return Some(id);
            }
        }
        None
    }
}

impl QuestionResolver for DeclarativeResolver {
    fn name(&self) -> &'static str {
        "declarative"
    }

    fn resolve(&self, ctx: &ResolveContext<'_>) -> Resolution {
        if let Some(reason) = check_termination(ctx.session, &self.config) {
            return Resolution::Complete(reason);
        }
        if let Some(id) = Self::evaluate_rules(ctx) {
            debug!(next = %id, "branch rule selected next question");
            return Resolution::Ask(id);
        }
        if let Some(id) = tier_cascade(ctx, &self.config) {
            return Resolution::Ask(id);
        }
        if let Some(id) = missing_anchor(ctx) {
            return Resolution::Ask(id);
        }
        Resolution::Complete(TerminationReason::GraphExhausted)
    }
}
