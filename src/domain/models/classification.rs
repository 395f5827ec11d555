//! Classification output domain model.
//!
//! Discrete labels the classifier maps a final signal vector onto: the
//! system class (machine archetype shown by downstream visual consumers),
//! the engagement track, and the pricing band.

use serde::{Deserialize, Serialize};

/// Discrete system archetype for a diagnosed business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemClass {
    BrandChassis,
    WebTransmission,
    AutomationArm,
    PlatformRack,
    GrowthTurbo,
}

/// Static definition bundle for a system class. Serialize-only: these are
/// compiled-in constants, never read back from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    pub name: &'static str,
    /// Codename consumed by the machine visualization layer.
    pub machine_name: &'static str,
    pub description: &'static str,
    pub bottleneck: &'static str,
    pub priority_sequence: [&'static str; 3],
}

impl SystemClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BrandChassis => "BRAND_CHASSIS",
            Self::WebTransmission => "WEB_TRANSMISSION",
            Self::AutomationArm => "AUTOMATION_ARM",
            Self::PlatformRack => "PLATFORM_RACK",
            Self::GrowthTurbo => "GROWTH_TURBO",
        }
    }

    /// The designer-authored definition bundle for this class.
    pub fn definition(&self) -> &'static ClassDefinition {
        match self {
            Self::BrandChassis => &BRAND_CHASSIS,
            Self::WebTransmission => &WEB_TRANSMISSION,
            Self::AutomationArm => &AUTOMATION_ARM,
            Self::PlatformRack => &PLATFORM_RACK,
            Self::GrowthTurbo => &GROWTH_TURBO,
        }
    }
}

static BRAND_CHASSIS: ClassDefinition = ClassDefinition {
    name: "Brand-Strong / System-Weak Chassis",
    machine_name: "V01_IDENTITY_CORE",
    description: "High visual fidelity masking structural operational gaps.",
    bottleneck: "Perception-Delivery Divergence",
    priority_sequence: [
        "Back-end Synchronization",
        "Workflow Mapping",
        "Core Refactor",
    ],
};

static WEB_TRANSMISSION: ClassDefinition = ClassDefinition {
    name: "Fragmented Operator System",
    machine_name: "T02_TRANS_ENGINE",
    description: "Manual coordination slowing high-potential output.",
    bottleneck: "Manual Labor Dependency",
    priority_sequence: [
        "Workflow Codification",
        "Logic Automation",
        "System Unification",
    ],
};

static AUTOMATION_ARM: ClassDefinition = ClassDefinition {
    name: "Overbuilt / Under-Coordinated Stack",
    machine_name: "A03_AUTOMATION_HUB",
    description: "Complex toolset without a unified management layer.",
    bottleneck: "Tool Sprawl Friction",
    priority_sequence: [
        "Centralized Governance",
        "License Consolidation",
        "Data Flow Sync",
    ],
};

static PLATFORM_RACK: ClassDefinition = ClassDefinition {
    name: "Enterprise Drag System",
    machine_name: "P04_PLATFORM_CORE",
    description: "Legacy gravity preventing rapid structural agility.",
    bottleneck: "Architectural Inertia",
    priority_sequence: ["Decoupling", "Modularization", "Process Pruning"],
};

static GROWTH_TURBO: ClassDefinition = ClassDefinition {
    name: "Scaling Bottleneck Engine",
    machine_name: "G05_GROWTH_TURBO",
    description: "Demand-heavy environment with constricted throughput.",
    bottleneck: "Operational Constraint",
    priority_sequence: [
        "Horizontal Scaling",
        "Latency Reduction",
        "Edge Optimization",
    ],
};

/// Engagement track recommended for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeTrack {
    /// Structural problems first; audit before building.
    DiagnosticAudit,
    /// Mature business with a confident read; straight to strategy.
    StrategySession,
    /// Everyone else: guided foundational engagement.
    GuidedStarter,
}

impl OutcomeTrack {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DiagnosticAudit => "diagnostic_audit",
            Self::StrategySession => "strategy_session",
            Self::GuidedStarter => "guided_starter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DiagnosticAudit => "Diagnostic Audit",
            Self::StrategySession => "Strategy Session",
            Self::GuidedStarter => "Guided Starter",
        }
    }
}

/// Pricing band derived from budget elasticity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingBand {
    Foundational,
    ScaleReady,
    DeepIntervention,
    Enterprise,
}

impl PricingBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Foundational => "$15k — $30k (Foundational)",
            Self::ScaleReady => "$30k — $75k (Scale Ready)",
            Self::DeepIntervention => "$75k — $150k (Deep Intervention)",
            Self::Enterprise => "$150k+ (Enterprise Infrastructure)",
        }
    }
}

/// Full classifier output for a finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub system_class: SystemClass,
    pub track: OutcomeTrack,
    pub bottleneck: String,
    /// At most three entries, most impactful first.
    pub priorities: Vec<String>,
    pub pricing_band: PricingBand,
    pub narrative: NarrativeSnapshot,
}

/// Deterministic proof bullets and action plan, without numeric scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeSnapshot {
    pub snapshot: String,
    pub why_this_path: Vec<String>,
    pub immediate_wins: Vec<String>,
}
