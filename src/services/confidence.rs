//! Confidence scoring.
//!
//! Derives the [0, 1] confidence scalar from the answer count, the signal
//! vector, and the declared intent. Two formulas exist in production use;
//! the weighted blend is the default and the progress-linear form stays
//! selectable through configuration. Keeping the formula here, out of any
//! UI or shell code, keeps it independently testable.

use crate::domain::models::{
    ConfidenceConfig, ConfidenceModelKind, SignalVector, AMBIGUOUS_INTENT, INITIAL_CONFIDENCE,
};

/// Service computing the consolidated confidence score.
#[derive(Debug, Clone)]
pub struct ConfidenceModel {
    kind: ConfidenceModelKind,
    progress_saturation: usize,
    progress_weight: f64,
    variance_weight: f64,
    intent_weight: f64,
}

impl Default for ConfidenceModel {
    fn default() -> Self {
        Self::from_config(&ConfidenceConfig::default())
    }
}

impl ConfidenceModel {
    pub fn from_config(config: &ConfidenceConfig) -> Self {
        Self {
            kind: config.model,
            progress_saturation: config.progress_saturation.max(1),
            progress_weight: config.progress_weight,
            variance_weight: config.variance_weight,
            intent_weight: config.intent_weight,
        }
    }

    /// Score a fresh session starts from.
    pub const fn baseline(&self) -> f64 {
        INITIAL_CONFIDENCE
    }

    /// Compute the confidence score.
    ///
    /// Monotonically non-decreasing in `answered_count` holding signals and
    /// intent fixed, and always finite — zero answers score the formula's
    /// floor, never NaN.
    pub fn compute(
        &self,
        answered_count: usize,
        signals: &SignalVector,
        intent: Option<&str>,
    ) -> f64 {
        let progress = self.progress(answered_count);
        match self.kind {
            ConfidenceModelKind::Weighted => {
                let score = self.progress_weight * progress
                    + self.variance_weight * signals.variance()
                    + self.intent_weight * intent_clarity(intent);
                score.clamp(0.0, 1.0)
            }
            ConfidenceModelKind::ProgressLinear => {
                (INITIAL_CONFIDENCE + (1.0 - INITIAL_CONFIDENCE) * progress).clamp(0.0, 1.0)
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn progress(&self, answered_count: usize) -> f64 {
        answered_count.min(self.progress_saturation) as f64 / self.progress_saturation as f64
    }
}

/// How specific the declared intent is: unset gets no credit, the audit
/// sentinel counts as half, anything else is fully specific.
fn intent_clarity(intent: Option<&str>) -> f64 {
    match intent {
        None => 0.0,
        Some(value) if value.is_empty() || value == AMBIGUOUS_INTENT => 0.5,
        Some(_) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Signal, SignalDelta};

    fn weighted() -> ConfidenceModel {
        ConfidenceModel::from_config(&ConfidenceConfig::default())
    }

    fn progress_linear() -> ConfidenceModel {
        ConfidenceModel::from_config(&ConfidenceConfig {
            model: ConfidenceModelKind::ProgressLinear,
            ..ConfidenceConfig::default()
        })
    }

    #[test]
    fn test_zero_answers_is_finite() {
        let signals = SignalVector::neutral();
        let score = weighted().compute(0, &signals, None);
        assert!(score.is_finite());
        assert!(score >= 0.0);
        assert_eq!(score, 0.0); // neutral signals, no intent, no progress
    }

    #[test]
    fn test_monotone_in_answered_count() {
        let signals = SignalVector::neutral();
        for model in [weighted(), progress_linear()] {
            let mut prev = model.compute(0, &signals, Some("brand"));
            for n in 1..=14 {
                let next = model.compute(n, &signals, Some("brand"));
                assert!(next >= prev, "model must not decrease at n={n}");
                prev = next;
            }
        }
    }

    #[test]
    fn test_progress_saturates_at_twelve() {
        let signals = SignalVector::neutral();
        let model = progress_linear();
        assert_eq!(
            model.compute(12, &signals, None),
            model.compute(20, &signals, None)
        );
        assert!((model.compute(12, &signals, None) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_variance_raises_confidence() {
        let model = weighted();
        let neutral = SignalVector::neutral();
        let moved = neutral.apply(&[SignalDelta::new(Signal::TechnicalDebt, 40.0)]);
        assert!(model.compute(3, &moved, None) > model.compute(3, &neutral, None));
    }

    #[test]
    fn test_intent_clarity_tiers() {
        let model = weighted();
        let signals = SignalVector::neutral();
        let none = model.compute(4, &signals, None);
        let ambiguous = model.compute(4, &signals, Some("audit"));
        let specific = model.compute(4, &signals, Some("automation"));
        assert!(none < ambiguous);
        assert!(ambiguous < specific);
        // Ambiguous sentinel is exactly half the intent credit.
        assert!((ambiguous - none - 0.35 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_reference_values() {
        let model = weighted();
        let signals = SignalVector::neutral();
        // 6/12 progress, zero variance, specific intent:
        // 0.35*0.5 + 0.30*0.0 + 0.35*1.0 = 0.525
        let score = model.compute(6, &signals, Some("brand"));
        assert!((score - 0.525).abs() < 1e-9);
    }

    #[test]
    fn test_progress_linear_baseline() {
        let model = progress_linear();
        let signals = SignalVector::neutral();
        assert!((model.compute(0, &signals, None) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounded() {
        let model = weighted();
        let mut signals = SignalVector::neutral();
        for signal in crate::domain::models::ALL_SIGNALS {
            signals = signals.apply(&[SignalDelta::new(signal, 100.0)]);
        }
        let score = model.compute(50, &signals, Some("brand"));
        assert!(score <= 1.0);
    }
}
