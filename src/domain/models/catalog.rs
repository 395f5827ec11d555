//! Built-in question catalog.
//!
//! The designer-authored decision graph, shipped as a constant. Ids, option
//! values and delta magnitudes are calibration data; changing them changes
//! how sessions route and terminate.
//!
//! Graph shape:
//! 1. Root anchor: intent & identity
//! 2. Calibration anchor: business maturity
//! 3. Specialized diagnostic modules (adaptive, intent/signal gated)
//! 4. Constraint anchors: urgency & resource allocation
//! 5. Final anchor: decision mandate

use super::question::{
    AnswerOption, AnswerType, BranchRule, Comparator, Condition, Literal, QuestionCategory,
    QuestionGraph, QuestionNode, RuleGuard,
};
use super::signal::{Signal, SignalDelta};

/// Question ids that must be visited before any session may complete.
pub const MANDATORY_ANCHORS: [&str; 3] = ["business_stage", "urgency_timing", "decision_authority"];

fn delta(signal: Signal, value: f64) -> SignalDelta {
    SignalDelta::new(signal, value)
}

/// The built-in question nodes, root first.
#[allow(clippy::too_many_lines)]
pub fn builtin_question_nodes() -> Vec<QuestionNode> {
    vec![
        // --- Root anchor ---
        QuestionNode {
            id: "primary_intent".to_string(),
            category: QuestionCategory::Intent,
            prompt: "Initialize system diagnostic: What is your primary objective?".to_string(),
            sub_prompt: Some(
                "This selection calibrates the adaptive pathing engine and signal weighting."
                    .to_string(),
            ),
            answer_type: AnswerType::Single,
            confidence_impact: 0.15,
            options: vec![
                AnswerOption::new(
                    "brand",
                    "Brand Evolution & Positioning",
                    vec![delta(Signal::BrandClarity, 10.0)],
                ),
                AnswerOption::new(
                    "web",
                    "High-Performance Web/eCom",
                    vec![delta(Signal::TechnicalDebt, 5.0)],
                ),
                AnswerOption::new(
                    "build",
                    "Full-Stack Platform Engineering",
                    vec![delta(Signal::TechnicalDebt, 15.0)],
                ),
                AnswerOption::new(
                    "automation",
                    "Workflow & Business Automation",
                    vec![delta(Signal::AutomationReadiness, 10.0)],
                ),
                AnswerOption::new(
                    "audit",
                    "System Recovery / General Audit",
                    vec![
                        delta(Signal::TechnicalDebt, 10.0),
                        delta(Signal::BrandClarity, -5.0),
                    ],
                ),
            ],
            branching_rules: vec![BranchRule {
                when: RuleGuard::all_of(vec![Condition::new(
                    "intent".to_string(),
                    Comparator::Eq,
                    Literal::Text("automation".to_string()),
                )]),
                next_question_id: "automation_complexity".to_string(),
            }],
        },
        // --- Calibration anchor ---
        QuestionNode {
            id: "business_stage".to_string(),
            category: QuestionCategory::Maturity,
            prompt: "Define operational maturity.".to_string(),
            sub_prompt: Some(
                "System complexity must scale proportionally with business velocity.".to_string(),
            ),
            answer_type: AnswerType::Single,
            confidence_impact: 0.1,
            options: vec![
                AnswerOption::new(
                    "pre",
                    "Pre-Revenue / Founding Stage",
                    vec![delta(Signal::BusinessMaturity, -20.0)],
                ),
                AnswerOption::new(
                    "operating",
                    "Post-Seed / Operational",
                    vec![delta(Signal::BusinessMaturity, 10.0)],
                ),
                AnswerOption::new(
                    "scaling",
                    "Series A+ / Rapid Scaling",
                    vec![
                        delta(Signal::BusinessMaturity, 25.0),
                        delta(Signal::Urgency, 10.0),
                    ],
                ),
                AnswerOption::new(
                    "enterprise",
                    "Enterprise / Market Authority",
                    vec![
                        delta(Signal::BusinessMaturity, 45.0),
                        delta(Signal::AutomationReadiness, -10.0),
                    ],
                ),
            ],
            branching_rules: vec![BranchRule {
                when: RuleGuard::all_of(vec![Condition::new(
                    "businessMaturity".to_string(),
                    Comparator::Gt,
                    Literal::Number(65.0),
                )]),
                next_question_id: "revenue_bottleneck".to_string(),
            }],
        },
        // --- Adaptive module: revenue bottleneck (high maturity only) ---
        QuestionNode {
            id: "revenue_bottleneck".to_string(),
            category: QuestionCategory::Maturity,
            prompt: "Identify the primary growth ceiling.".to_string(),
            sub_prompt: Some(
                "At your scale, small friction points create massive revenue leakage.".to_string(),
            ),
            answer_type: AnswerType::Single,
            confidence_impact: 0.15,
            options: vec![
                AnswerOption::new(
                    "cac",
                    "Acquisition / CAC Inefficiency",
                    vec![delta(Signal::GrowthCeiling, 20.0)],
                ),
                AnswerOption::new(
                    "retention",
                    "LTV / Retention Friction",
                    vec![delta(Signal::GrowthCeiling, 30.0)],
                ),
                AnswerOption::new(
                    "margins",
                    "Operational Margin Erosion",
                    vec![delta(Signal::AutomationReadiness, -20.0)],
                ),
                AnswerOption::new(
                    "infra",
                    "Infrastructure Fragility",
                    vec![delta(Signal::TechnicalDebt, 25.0)],
                ),
            ],
            branching_rules: vec![],
        },
        // --- Specialized module: automation ---
        QuestionNode {
            id: "automation_complexity".to_string(),
            category: QuestionCategory::Automation,
            prompt: "Map the entropy: Where is manual friction highest?".to_string(),
            sub_prompt: Some(
                "We analyze high-variance manual processes to locate high-ROI automation nodes."
                    .to_string(),
            ),
            answer_type: AnswerType::Single,
            confidence_impact: 0.12,
            options: vec![
                AnswerOption::new(
                    "crm",
                    "Data Silos / CRM Syncing",
                    vec![delta(Signal::AutomationReadiness, 5.0)],
                ),
                AnswerOption::new(
                    "fulfillment",
                    "Internal Ops / Fulfillment",
                    vec![delta(Signal::AutomationReadiness, 15.0)],
                ),
                AnswerOption::new(
                    "support",
                    "Customer Support Workflows",
                    vec![delta(Signal::AutomationReadiness, 20.0)],
                ),
                AnswerOption::new(
                    "reporting",
                    "Legacy Manual Reporting",
                    vec![
                        delta(Signal::AutomationReadiness, 25.0),
                        delta(Signal::TechnicalDebt, 5.0),
                    ],
                ),
            ],
            branching_rules: vec![],
        },
        // --- Specialized module: brand ---
        QuestionNode {
            id: "brand_depth_positioning".to_string(),
            category: QuestionCategory::Brand,
            prompt: "Evaluate market resonance and clarity.".to_string(),
            sub_prompt: Some(
                "Brand systems function as the trust-layer of your digital architecture."
                    .to_string(),
            ),
            answer_type: AnswerType::Single,
            confidence_impact: 0.1,
            options: vec![
                AnswerOption::new(
                    "strong",
                    "Cohesive & Distinct",
                    vec![delta(Signal::BrandClarity, 30.0)],
                ),
                AnswerOption::new(
                    "fragmented",
                    "Functional but Fragmented",
                    vec![delta(Signal::BrandClarity, 0.0)],
                ),
                AnswerOption::new(
                    "legacy",
                    "Legacy / Misaligned",
                    vec![delta(Signal::BrandClarity, -20.0)],
                ),
                AnswerOption::new(
                    "none",
                    "Non-Existent / Early Stealth",
                    vec![delta(Signal::BrandClarity, -40.0)],
                ),
            ],
            branching_rules: vec![],
        },
        // --- Specialized module: tech debt ---
        QuestionNode {
            id: "tech_debt_assessment".to_string(),
            category: QuestionCategory::Build,
            prompt: "Assess the agility of the current technical core.".to_string(),
            sub_prompt: Some("Rigid systems cannot sustain rapid product evolution.".to_string()),
            answer_type: AnswerType::Single,
            confidence_impact: 0.12,
            options: vec![
                AnswerOption::new(
                    "modern",
                    "Modern / Headless / Cloud-Native",
                    vec![delta(Signal::TechnicalDebt, -30.0)],
                ),
                AnswerOption::new(
                    "mono",
                    "Monolithic / Legacy CMS",
                    vec![delta(Signal::TechnicalDebt, 15.0)],
                ),
                AnswerOption::new(
                    "brittle",
                    "Brittle / No Documentation",
                    vec![delta(Signal::TechnicalDebt, 40.0)],
                ),
                AnswerOption::new(
                    "zero",
                    "Starting from Zero (Greenfield)",
                    vec![delta(Signal::TechnicalDebt, -10.0)],
                ),
            ],
            branching_rules: vec![],
        },
        // --- Urgency anchor ---
        QuestionNode {
            id: "urgency_timing".to_string(),
            category: QuestionCategory::Intent,
            prompt: "Define the required window for systemic impact.".to_string(),
            sub_prompt: Some(
                "Timelines dictate engineering methodology: Speed vs. Theoretical Depth."
                    .to_string(),
            ),
            answer_type: AnswerType::Single,
            confidence_impact: 0.05,
            options: vec![
                AnswerOption::new(
                    "urgent",
                    "Immediate (Critical Intervention)",
                    vec![delta(Signal::Urgency, 45.0)],
                ),
                AnswerOption::new(
                    "strategic",
                    "Strategic (Next Quarter)",
                    vec![delta(Signal::Urgency, 15.0)],
                ),
                AnswerOption::new(
                    "planned",
                    "Planned (Long-term Evolution)",
                    vec![delta(Signal::Urgency, -10.0)],
                ),
            ],
            branching_rules: vec![],
        },
        // --- Resource anchor (late module) ---
        QuestionNode {
            id: "budget_allocation".to_string(),
            category: QuestionCategory::Budget,
            prompt: "Calibrate capital allocation.".to_string(),
            sub_prompt: Some(
                "System complexity is restricted by the available resource envelope.".to_string(),
            ),
            answer_type: AnswerType::Single,
            confidence_impact: 0.08,
            options: vec![
                AnswerOption::new(
                    "tier1",
                    "$15k — $30k (Foundational)",
                    vec![delta(Signal::BudgetElasticity, -20.0)],
                ),
                AnswerOption::new(
                    "tier2",
                    "$30k — $75k (Scale Ready)",
                    vec![delta(Signal::BudgetElasticity, 10.0)],
                ),
                AnswerOption::new(
                    "tier3",
                    "$75k — $150k (Deep Intervention)",
                    vec![delta(Signal::BudgetElasticity, 25.0)],
                ),
                AnswerOption::new(
                    "tier4",
                    "$150k+ (Enterprise Infrastructure)",
                    vec![delta(Signal::BudgetElasticity, 50.0)],
                ),
            ],
            branching_rules: vec![],
        },
        // --- Final anchor ---
        QuestionNode {
            id: "decision_authority".to_string(),
            category: QuestionCategory::Decision,
            prompt: "Identify the technical mandate holder.".to_string(),
            sub_prompt: Some(
                "Direct access to decision authority is required for high-velocity engineering."
                    .to_string(),
            ),
            answer_type: AnswerType::Single,
            confidence_impact: 0.1,
            options: vec![
                AnswerOption::new(
                    "principal",
                    "Founder / CEO / Principal",
                    vec![delta(Signal::DecisionAuthority, 50.0)],
                ),
                AnswerOption::new(
                    "exec",
                    "CMO / CTO / VP Level",
                    vec![delta(Signal::DecisionAuthority, 30.0)],
                ),
                AnswerOption::new(
                    "lead",
                    "Product Lead / Dept Manager",
                    vec![delta(Signal::DecisionAuthority, 15.0)],
                ),
                AnswerOption::new(
                    "board",
                    "Strategic Steering Committee",
                    vec![delta(Signal::DecisionAuthority, 5.0)],
                ),
            ],
            branching_rules: vec![],
        },
    ]
}

/// The built-in graph, root first.
pub fn builtin_question_graph() -> QuestionGraph {
    QuestionGraph::new(builtin_question_nodes()).expect("built-in catalog is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::question::INTENT_QUESTION_ID;

    #[test]
    fn test_root_is_intent_question() {
        let graph = builtin_question_graph();
        assert_eq!(graph.root().id, INTENT_QUESTION_ID);
    }

    #[test]
    fn test_branch_rule_targets_exist() {
        let graph = builtin_question_graph();
        for node in graph.nodes() {
            for rule in &node.branching_rules {
                assert!(
                    graph.contains(&rule.next_question_id),
                    "dangling branch target {} on {}",
                    rule.next_question_id,
                    node.id
                );
            }
        }
    }

    #[test]
    fn test_mandatory_anchors_exist() {
        let graph = builtin_question_graph();
        for anchor in MANDATORY_ANCHORS {
            assert!(graph.contains(anchor), "missing anchor {anchor}");
        }
    }

    #[test]
    fn test_every_node_has_options() {
        for node in builtin_question_nodes() {
            assert!(!node.options.is_empty(), "node {} has no options", node.id);
            // Option values are unique within a node.
            let mut values: Vec<_> = node.options.iter().map(|o| o.value.clone()).collect();
            values.sort();
            values.dedup();
            assert_eq!(values.len(), node.options.len());
        }
    }
}
