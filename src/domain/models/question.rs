//! Question graph domain model.
//!
//! A static, designer-authored directed graph of question nodes. Each node
//! offers answer options carrying signal deltas, plus optional declarative
//! branch rules. Nodes are loaded once and never mutated at runtime.

use serde::{Deserialize, Serialize};

use super::session::IntakeSession;
use super::signal::{Signal, SignalDelta, SignalVector};
use crate::domain::error::IntakeError;

/// Id of the root intent question; its answer selects specialization
/// branches and feeds the intent-clarity term of the confidence model.
pub const INTENT_QUESTION_ID: &str = "primary_intent";

/// Intent value that counts as ambiguous (half credit for intent clarity).
pub const AMBIGUOUS_INTENT: &str = "audit";

/// Category tag for a question node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Intent,
    Maturity,
    Automation,
    Brand,
    Build,
    Budget,
    Decision,
}

/// How many options may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    Single,
    Multi,
}

/// One selectable answer. Choosing it applies its deltas exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub deltas: Vec<SignalDelta>,
}

impl AnswerOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, deltas: Vec<SignalDelta>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            deltas,
        }
    }
}

/// Left-hand operand of a condition: a signal dimension, a derived session
/// quantity, or a recorded answer value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operand {
    Signal(Signal),
    Confidence,
    AnsweredCount,
    Intent,
    /// Answer value of an arbitrary question id.
    Answer(String),
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        match s.as_str() {
            "confidence" => Self::Confidence,
            "answeredCount" => Self::AnsweredCount,
            "intent" => Self::Intent,
            other => Signal::from_str(other).map_or_else(|| Self::Answer(s.clone()), Self::Signal),
        }
    }
}

impl From<Operand> for String {
    fn from(op: Operand) -> Self {
        match op {
            Operand::Signal(s) => s.as_str().to_string(),
            Operand::Confidence => "confidence".to_string(),
            Operand::AnsweredCount => "answeredCount".to_string(),
            Operand::Intent => "intent".to_string(),
            Operand::Answer(id) => id,
        }
    }
}

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
}

/// Right-hand literal of a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    Text(String),
}

/// Everything a condition can observe, borrowed from the live session.
#[derive(Debug, Clone, Copy)]
pub struct EvalScope<'a> {
    pub signals: &'a SignalVector,
    pub confidence: f64,
    pub answered_count: usize,
    pub intent: Option<&'a str>,
    pub session: &'a IntakeSession,
}

impl<'a> EvalScope<'a> {
    /// Borrow the evaluation scope from a session snapshot.
    pub fn of(session: &'a IntakeSession) -> Self {
        Self {
            signals: &session.signals,
            confidence: session.confidence_score,
            answered_count: session.answered_count(),
            intent: session.answer_value(INTENT_QUESTION_ID),
            session,
        }
    }
}

/// A guard comparing one observed quantity against a literal.
///
/// Evaluation is total: ordering comparators against non-numeric operands
/// evaluate to false instead of erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub left: Operand,
    pub op: Comparator,
    pub right: Literal,
}

impl Condition {
    pub fn new(left: impl Into<Operand>, op: Comparator, right: Literal) -> Self {
        Self {
            left: left.into(),
            op,
            right,
        }
    }

    pub fn evaluate(&self, scope: &EvalScope<'_>) -> bool {
        let numeric_left = match &self.left {
            Operand::Signal(signal) => Some(scope.signals.get(*signal)),
            Operand::Confidence => Some(scope.confidence),
            #[allow(clippy::cast_precision_loss)]
            Operand::AnsweredCount => Some(scope.answered_count as f64),
            Operand::Intent | Operand::Answer(_) => None,
        };

        if let (Some(left), Literal::Number(right)) = (numeric_left, &self.right) {
            return match self.op {
                Comparator::Gt => left > *right,
                Comparator::Gte => left >= *right,
                Comparator::Lt => left < *right,
                Comparator::Lte => left <= *right,
                Comparator::Eq => (left - right).abs() < f64::EPSILON,
                Comparator::Ne => (left - right).abs() >= f64::EPSILON,
            };
        }

        let text_left = match &self.left {
            Operand::Intent => scope.intent,
            Operand::Answer(id) => scope.session.answer_value(id),
            _ => None,
        };
        let Literal::Text(right) = &self.right else {
            return false;
        };
        match self.op {
            Comparator::Eq => text_left == Some(right.as_str()),
            Comparator::Ne => text_left != Some(right.as_str()),
            // Ordering comparisons are not defined over answer values.
            _ => false,
        }
    }
}

/// Conjunction/disjunction guard of a branch rule. An absent list is
/// vacuously satisfied; a present `any` list needs at least one match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleGuard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<Condition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any: Option<Vec<Condition>>,
}

impl RuleGuard {
    pub fn all_of(conditions: Vec<Condition>) -> Self {
        Self {
            all: Some(conditions),
            any: None,
        }
    }

    pub fn is_satisfied(&self, scope: &EvalScope<'_>) -> bool {
        let all_met = self
            .all
            .as_ref()
            .is_none_or(|cs| cs.iter().all(|c| c.evaluate(scope)));
        let any_met = self
            .any
            .as_ref()
            .is_none_or(|cs| cs.iter().any(|c| c.evaluate(scope)));
        all_met && any_met
    }
}

/// Declarative graph edge: when the guard holds, route to the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRule {
    pub when: RuleGuard,
    pub next_question_id: String,
}

impl BranchRule {
    pub fn matches(&self, scope: &EvalScope<'_>) -> bool {
        self.when.is_satisfied(scope)
    }
}

/// A node in the question graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionNode {
    pub id: String,
    pub category: QuestionCategory,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_prompt: Option<String>,
    pub answer_type: AnswerType,
    /// Designer-assigned weight; informational for downstream display.
    pub confidence_impact: f64,
    pub options: Vec<AnswerOption>,
    #[serde(default)]
    pub branching_rules: Vec<BranchRule>,
}

impl QuestionNode {
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// The static question graph. The first node is the root; unknown ids fail
/// closed to it rather than erroring.
#[derive(Debug, Clone)]
pub struct QuestionGraph {
    nodes: Vec<QuestionNode>,
}

impl QuestionGraph {
    pub fn new(nodes: Vec<QuestionNode>) -> Result<Self, IntakeError> {
        if nodes.is_empty() {
            return Err(IntakeError::EmptyGraph);
        }
        Ok(Self { nodes })
    }

    /// The entry question (non-empty enforced at construction).
    pub fn root(&self) -> &QuestionNode {
        &self.nodes[0]
    }

    pub fn find(&self, id: &str) -> Option<&QuestionNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up a node, falling back to the root on an unknown id. Corrupted
    /// persisted state must land on the root, not crash the flow.
    pub fn find_or_root(&self, id: &str) -> &QuestionNode {
        self.find(id).unwrap_or_else(|| self.root())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn nodes(&self) -> &[QuestionNode] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> QuestionNode {
        QuestionNode {
            id: id.to_string(),
            category: QuestionCategory::Intent,
            prompt: format!("prompt {id}"),
            sub_prompt: None,
            answer_type: AnswerType::Single,
            confidence_impact: 0.1,
            options: vec![AnswerOption::new("yes", "Yes", vec![])],
            branching_rules: vec![],
        }
    }

    #[test]
    fn test_empty_graph_rejected() {
        assert!(matches!(
            QuestionGraph::new(vec![]),
            Err(IntakeError::EmptyGraph)
        ));
    }

    #[test]
    fn test_unknown_id_falls_back_to_root() {
        let graph = QuestionGraph::new(vec![node("a"), node("b")]).unwrap();
        assert_eq!(graph.find_or_root("missing").id, "a");
        assert_eq!(graph.find_or_root("b").id, "b");
    }

    #[test]
    fn test_condition_numeric_comparison() {
        let session = IntakeSession::new("primary_intent");
        let scope = EvalScope::of(&session);

        let cond = Condition::new(
            "businessMaturity".to_string(),
            Comparator::Gte,
            Literal::Number(50.0),
        );
        assert!(cond.evaluate(&scope));

        let cond = Condition::new(
            "businessMaturity".to_string(),
            Comparator::Gt,
            Literal::Number(50.0),
        );
        assert!(!cond.evaluate(&scope));
    }

    #[test]
    fn test_condition_intent_equality() {
        let mut session = IntakeSession::new(INTENT_QUESTION_ID);
        session.record_answer(INTENT_QUESTION_ID, "automation");
        let scope = EvalScope::of(&session);

        let eq = Condition::new(
            "intent".to_string(),
            Comparator::Eq,
            Literal::Text("automation".to_string()),
        );
        assert!(eq.evaluate(&scope));

        let ne = Condition::new(
            "intent".to_string(),
            Comparator::Ne,
            Literal::Text("brand".to_string()),
        );
        assert!(ne.evaluate(&scope));
    }

    #[test]
    fn test_condition_is_total_on_type_mismatch() {
        let session = IntakeSession::new(INTENT_QUESTION_ID);
        let scope = EvalScope::of(&session);

        // Ordering an unanswered text operand: false, not an error.
        let cond = Condition::new(
            "intent".to_string(),
            Comparator::Gt,
            Literal::Text("brand".to_string()),
        );
        assert!(!cond.evaluate(&scope));

        // Numeric literal against a text operand: false.
        let cond = Condition::new(
            "intent".to_string(),
            Comparator::Eq,
            Literal::Number(3.0),
        );
        assert!(!cond.evaluate(&scope));
    }

    #[test]
    fn test_rule_guard_all_and_any() {
        let mut session = IntakeSession::new(INTENT_QUESTION_ID);
        session.record_answer(INTENT_QUESTION_ID, "brand");
        let scope = EvalScope::of(&session);

        let guard = RuleGuard {
            all: Some(vec![Condition::new(
                "answeredCount".to_string(),
                Comparator::Gte,
                Literal::Number(1.0),
            )]),
            any: Some(vec![
                Condition::new(
                    "intent".to_string(),
                    Comparator::Eq,
                    Literal::Text("brand".to_string()),
                ),
                Condition::new(
                    "intent".to_string(),
                    Comparator::Eq,
                    Literal::Text("web".to_string()),
                ),
            ]),
        };
        assert!(guard.is_satisfied(&scope));

        let empty = RuleGuard::default();
        assert!(empty.is_satisfied(&scope));
    }

    #[test]
    fn test_operand_serde_round_trip() {
        let op: Operand = "growthCeiling".to_string().into();
        assert_eq!(op, Operand::Signal(Signal::GrowthCeiling));
        let op: Operand = "business_stage".to_string().into();
        assert_eq!(op, Operand::Answer("business_stage".to_string()));
        let back: String = Operand::Confidence.into();
        assert_eq!(back, "confidence");
    }
}
