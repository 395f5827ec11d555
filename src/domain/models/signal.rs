//! Signal vector domain model.
//!
//! Eight bounded dimensions summarizing a prospect's business state. Every
//! answer option carries deltas against these dimensions; the vector is the
//! fold of all applied deltas, clamped to [0, 100] after each application.

use serde::{Deserialize, Serialize};

/// Neutral midpoint every dimension starts at.
pub const NEUTRAL: f64 = 50.0;

/// Inclusive bounds for every signal dimension.
pub const SIGNAL_MIN: f64 = 0.0;
/// Upper bound for every signal dimension.
pub const SIGNAL_MAX: f64 = 100.0;

/// One of the eight diagnostic dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Signal {
    BusinessMaturity,
    BrandClarity,
    TechnicalDebt,
    AutomationReadiness,
    GrowthCeiling,
    Urgency,
    BudgetElasticity,
    DecisionAuthority,
}

/// All dimensions, in canonical order.
pub const ALL_SIGNALS: [Signal; 8] = [
    Signal::BusinessMaturity,
    Signal::BrandClarity,
    Signal::TechnicalDebt,
    Signal::AutomationReadiness,
    Signal::GrowthCeiling,
    Signal::Urgency,
    Signal::BudgetElasticity,
    Signal::DecisionAuthority,
];

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessMaturity => "businessMaturity",
            Self::BrandClarity => "brandClarity",
            Self::TechnicalDebt => "technicalDebt",
            Self::AutomationReadiness => "automationReadiness",
            Self::GrowthCeiling => "growthCeiling",
            Self::Urgency => "urgency",
            Self::BudgetElasticity => "budgetElasticity",
            Self::DecisionAuthority => "decisionAuthority",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "businessMaturity" => Some(Self::BusinessMaturity),
            "brandClarity" => Some(Self::BrandClarity),
            "technicalDebt" => Some(Self::TechnicalDebt),
            "automationReadiness" => Some(Self::AutomationReadiness),
            "growthCeiling" => Some(Self::GrowthCeiling),
            "urgency" => Some(Self::Urgency),
            "budgetElasticity" => Some(Self::BudgetElasticity),
            "decisionAuthority" => Some(Self::DecisionAuthority),
            _ => None,
        }
    }
}

/// A signed adjustment to one signal, owned by an answer option and applied
/// at most once, when that option is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalDelta {
    pub signal: Signal,
    pub value: f64,
}

impl SignalDelta {
    pub const fn new(signal: Signal, value: f64) -> Self {
        Self { signal, value }
    }
}

/// The eight-dimensional signal state.
///
/// Invariant: every field is in [0, 100] at all times. Mutation happens only
/// through [`SignalVector::apply`], which clamps after each delta; the sole
/// absolute write is initialization/reset to the all-neutral vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignalVector {
    pub business_maturity: f64,
    pub brand_clarity: f64,
    pub technical_debt: f64,
    pub automation_readiness: f64,
    pub growth_ceiling: f64,
    pub urgency: f64,
    pub budget_elasticity: f64,
    pub decision_authority: f64,
}

impl Default for SignalVector {
    fn default() -> Self {
        Self::neutral()
    }
}

fn clamp(v: f64) -> f64 {
    if v.is_nan() {
        // NaN must never propagate out of the store boundary.
        return NEUTRAL;
    }
    v.clamp(SIGNAL_MIN, SIGNAL_MAX)
}

impl SignalVector {
    /// The all-50 starting vector.
    pub const fn neutral() -> Self {
        Self {
            business_maturity: NEUTRAL,
            brand_clarity: NEUTRAL,
            technical_debt: NEUTRAL,
            automation_readiness: NEUTRAL,
            growth_ceiling: NEUTRAL,
            urgency: NEUTRAL,
            budget_elasticity: NEUTRAL,
            decision_authority: NEUTRAL,
        }
    }

    pub fn get(&self, signal: Signal) -> f64 {
        match signal {
            Signal::BusinessMaturity => self.business_maturity,
            Signal::BrandClarity => self.brand_clarity,
            Signal::TechnicalDebt => self.technical_debt,
            Signal::AutomationReadiness => self.automation_readiness,
            Signal::GrowthCeiling => self.growth_ceiling,
            Signal::Urgency => self.urgency,
            Signal::BudgetElasticity => self.budget_elasticity,
            Signal::DecisionAuthority => self.decision_authority,
        }
    }

    fn set(&mut self, signal: Signal, value: f64) {
        let slot = match signal {
            Signal::BusinessMaturity => &mut self.business_maturity,
            Signal::BrandClarity => &mut self.brand_clarity,
            Signal::TechnicalDebt => &mut self.technical_debt,
            Signal::AutomationReadiness => &mut self.automation_readiness,
            Signal::GrowthCeiling => &mut self.growth_ceiling,
            Signal::Urgency => &mut self.urgency,
            Signal::BudgetElasticity => &mut self.budget_elasticity,
            Signal::DecisionAuthority => &mut self.decision_authority,
        };
        *slot = clamp(value);
    }

    /// Apply deltas cumulatively in list order, clamping after each one.
    /// Returns a new vector; the receiver is untouched.
    pub fn apply(&self, deltas: &[SignalDelta]) -> Self {
        let mut next = *self;
        for delta in deltas {
            next.set(delta.signal, next.get(delta.signal) + delta.value);
        }
        next
    }

    /// Values in canonical dimension order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.business_maturity,
            self.brand_clarity,
            self.technical_debt,
            self.automation_readiness,
            self.growth_ceiling,
            self.urgency,
            self.budget_elasticity,
            self.decision_authority,
        ]
    }

    /// Normalized distance from total neutrality, in [0, 1].
    ///
    /// `sum(|v - 50|) / (8 * 50)` — a proxy for how much real signal the
    /// session has extracted so far. Exactly 0.0 for the neutral vector.
    pub fn variance(&self) -> f64 {
        let total: f64 = self.values().iter().map(|v| (v - NEUTRAL).abs()).sum();
        total / (8.0 * NEUTRAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_vector() {
        let v = SignalVector::neutral();
        assert!(v.values().iter().all(|&x| (x - 50.0).abs() < f64::EPSILON));
        assert_eq!(v.variance(), 0.0);
    }

    #[test]
    fn test_apply_single_delta() {
        let v = SignalVector::neutral()
            .apply(&[SignalDelta::new(Signal::TechnicalDebt, 40.0)]);
        assert_eq!(v.technical_debt, 90.0);
        assert_eq!(v.business_maturity, 50.0);
        assert_eq!(v.brand_clarity, 50.0);
    }

    #[test]
    fn test_apply_clamps_upper_bound() {
        let v = SignalVector::neutral()
            .apply(&[SignalDelta::new(Signal::Urgency, 45.0)])
            .apply(&[SignalDelta::new(Signal::Urgency, 45.0)]);
        assert_eq!(v.urgency, 100.0);
    }

    #[test]
    fn test_apply_clamps_lower_bound() {
        let v = SignalVector::neutral().apply(&[SignalDelta::new(Signal::BrandClarity, -80.0)]);
        assert_eq!(v.brand_clarity, 0.0);
    }

    #[test]
    fn test_deltas_apply_in_list_order() {
        // +60 clamps at 100, then -30 lands at 70. Order matters.
        let v = SignalVector::neutral().apply(&[
            SignalDelta::new(Signal::GrowthCeiling, 60.0),
            SignalDelta::new(Signal::GrowthCeiling, -30.0),
        ]);
        assert_eq!(v.growth_ceiling, 70.0);
    }

    #[test]
    fn test_variance_normalized() {
        let mut v = SignalVector::neutral();
        v = v.apply(&[SignalDelta::new(Signal::TechnicalDebt, 50.0)]);
        // One dimension fully displaced: 50 / 400.
        assert!((v.variance() - 0.125).abs() < 1e-9);
    }

    #[test]
    fn test_nan_delta_does_not_escape() {
        let v = SignalVector::neutral().apply(&[SignalDelta::new(Signal::Urgency, f64::NAN)]);
        assert!(v.urgency.is_finite());
    }

    #[test]
    fn test_signal_round_trip() {
        for signal in ALL_SIGNALS {
            assert_eq!(Signal::from_str(signal.as_str()), Some(signal));
        }
        assert_eq!(Signal::from_str("notASignal"), None);
    }
}
