//! Deterministic classification of a finished session.
//!
//! Pure decision tree over the final signal vector: no I/O, no randomness,
//! and total — every branch carries a default so no reachable input falls
//! through unclassified.

use crate::domain::models::{
    Classification, NarrativeSnapshot, OutcomeTrack, PricingBand, SignalVector, SystemClass,
};

// Threshold constants (designer-calibrated).
const TECH_DEBT_CRITICAL: f64 = 70.0;
const TECH_DEBT_ELEVATED: f64 = 60.0;
const BRAND_CLARITY_LOW: f64 = 30.0;
const BRAND_CLARITY_WEAK: f64 = 40.0;
const AUTOMATION_LOW: f64 = 40.0;
const GROWTH_CEILING_HIGH: f64 = 75.0;
const URGENCY_HIGH: f64 = 70.0;
const MATURITY_ESTABLISHED: f64 = 60.0;
const CONFIDENCE_STRATEGY: f64 = 0.7;

/// Map the final state onto the discrete recommendation bundle.
pub fn classify(signals: &SignalVector, confidence: f64, intent: Option<&str>) -> Classification {
    let system_class = system_class(signals, intent);
    let track = outcome_track(signals, confidence);
    let bottleneck = bottleneck_label(signals, system_class);
    let priorities = build_priorities(signals, system_class);
    let pricing_band = pricing_band(signals);
    let narrative = NarrativeSnapshot {
        snapshot: system_class.definition().description.to_string(),
        why_this_path: why_this_path(signals),
        immediate_wins: immediate_wins(),
    };

    Classification {
        system_class,
        track,
        bottleneck,
        priorities,
        pricing_band,
        narrative,
    }
}

/// System archetype selection. Intent dominates; signal thresholds pick up
/// the rest, with the fragmented-operator class as the default.
pub fn system_class(signals: &SignalVector, intent: Option<&str>) -> SystemClass {
    if intent == Some("brand") {
        return SystemClass::BrandChassis;
    }
    if intent == Some("automation") || signals.automation_readiness < AUTOMATION_LOW {
        return SystemClass::AutomationArm;
    }
    if signals.technical_debt > TECH_DEBT_CRITICAL {
        return SystemClass::PlatformRack;
    }
    if signals.growth_ceiling > GROWTH_CEILING_HIGH {
        return SystemClass::GrowthTurbo;
    }
    SystemClass::WebTransmission
}

/// Engagement track decision tree.
pub fn outcome_track(signals: &SignalVector, confidence: f64) -> OutcomeTrack {
    if signals.technical_debt > TECH_DEBT_CRITICAL || signals.brand_clarity < BRAND_CLARITY_LOW {
        OutcomeTrack::DiagnosticAudit
    } else if signals.business_maturity > MATURITY_ESTABLISHED && confidence > CONFIDENCE_STRATEGY
    {
        OutcomeTrack::StrategySession
    } else {
        OutcomeTrack::GuidedStarter
    }
}

/// Dominant bottleneck, checked independently of the track decision.
pub fn bottleneck_label(signals: &SignalVector, class: SystemClass) -> String {
    if signals.technical_debt > TECH_DEBT_CRITICAL {
        "Legacy Infrastructure Fragility".to_string()
    } else if signals.brand_clarity < BRAND_CLARITY_LOW {
        "Positioning Fragmentation".to_string()
    } else if signals.urgency > URGENCY_HIGH {
        "Market-Entry Latency".to_string()
    } else {
        class.definition().bottleneck.to_string()
    }
}

/// Up to three recommendations, most impactful first. Signal-triggered
/// items lead; the class sequence pads to length.
pub fn build_priorities(signals: &SignalVector, class: SystemClass) -> Vec<String> {
    let mut priorities: Vec<String> = Vec::new();
    if signals.technical_debt > TECH_DEBT_CRITICAL {
        priorities.push("Digital Core Refactor".to_string());
    }
    if signals.brand_clarity < BRAND_CLARITY_WEAK {
        priorities.push("Brand Modernization".to_string());
    }
    if signals.automation_readiness < AUTOMATION_LOW {
        priorities.push("Workflow Simplification".to_string());
    }
    for step in class.definition().priority_sequence {
        if priorities.len() >= 3 {
            break;
        }
        if !priorities.iter().any(|p| p == step) {
            priorities.push(step.to_string());
        }
    }
    priorities.truncate(3);
    priorities
}

/// Pricing band from budget elasticity.
pub fn pricing_band(signals: &SignalVector) -> PricingBand {
    let budget = signals.budget_elasticity;
    if budget < 40.0 {
        PricingBand::Foundational
    } else if budget < 60.0 {
        PricingBand::ScaleReady
    } else if budget < 80.0 {
        PricingBand::DeepIntervention
    } else {
        PricingBand::Enterprise
    }
}

/// Deterministic proof bullets; no numeric scores exposed.
pub fn why_this_path(signals: &SignalVector) -> Vec<String> {
    let mut points = Vec::new();

    if signals.urgency > URGENCY_HIGH {
        points.push(
            "Timeline alignment confirms immediate execution capacity for high-priority targets."
                .to_string(),
        );
    } else {
        points.push(
            "Strategic window identified for structural hardening ahead of planned expansion."
                .to_string(),
        );
    }

    if signals.technical_debt > TECH_DEBT_ELEVATED {
        points.push(
            "Direct resolution of technical bottlenecks required to restore operational velocity."
                .to_string(),
        );
    } else if signals.automation_readiness < AUTOMATION_LOW {
        points.push(
            "Codification of manual logic identified as the primary lever for throughput growth."
                .to_string(),
        );
    }

    if signals.brand_clarity < BRAND_CLARITY_WEAK {
        points.push(
            "Identity-to-market sync confirmed as a critical path for high-tier trust acquisition."
                .to_string(),
        );
    } else {
        points.push(
            "Engineering foundations mapped to existing operational volume for sustained stability."
                .to_string(),
        );
    }

    points
}

/// Fixed first-sprint outcomes shared by every track.
pub fn immediate_wins() -> Vec<String> {
    vec![
        "Constraint map finalized and shared with the leadership board.".to_string(),
        "System surfaces ranked by immediate impact on conversion.".to_string(),
        "First automation candidate selected for the initial build sprint.".to_string(),
        "Structural tracking baseline created for zero-latency monitoring.".to_string(),
    ]
}
