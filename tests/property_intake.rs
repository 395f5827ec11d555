//! Property-based suites for the intake engine and classifier.

use compass::domain::models::{builtin_question_graph, Config, ResolverKind};
use compass::services::{classify, IntakeEngine};
use compass::SignalVector;
use proptest::prelude::*;

fn assert_signal_bounded(value: f64) {
    assert!(
        (0.0..=100.0).contains(&value) && value.is_finite(),
        "signal out of bounds: {value}"
    );
}

/// Drive an engine with arbitrary option picks and arbitrary go-backs,
/// checking the core invariants at every step.
fn drive(engine: &mut IntakeEngine, picks: &[(usize, bool)]) {
    for (pick, back) in picks {
        if engine.session().is_complete {
            break;
        }
        if *back {
            engine.go_back();
        }
        let question = engine.current_question().clone();
        let option = &question.options[pick % question.options.len()];
        engine
            .submit_answer(&option.value)
            .expect("catalog option must be accepted");

        let session = engine.session();
        // Clamping invariant: every signal stays within bounds at every step.
        for value in session.signals.values() {
            assert_signal_bounded(value);
        }
        // History/answers consistency.
        assert!(!session.history.is_empty());
        assert_eq!(session.history.last(), Some(&session.current_question_id));
    }
}

proptest! {
    /// Property: the answer count never exceeds the hard cap, with or
    /// without interleaved go-backs.
    #[test]
    fn prop_answer_count_never_exceeds_cap(
        picks in proptest::collection::vec((0usize..8, any::<bool>()), 1..40)
    ) {
        let mut engine = IntakeEngine::new(builtin_question_graph(), &Config::default());
        drive(&mut engine, &picks);
        prop_assert!(engine.session().answered_count() <= 12);
    }

    /// Property: without go-backs every submission answers a fresh
    /// question, so twelve picks guarantee termination.
    #[test]
    fn prop_forward_sessions_terminate(
        picks in proptest::collection::vec(0usize..8, 12..20)
    ) {
        let mut engine = IntakeEngine::new(builtin_question_graph(), &Config::default());
        let forward: Vec<(usize, bool)> = picks.iter().map(|p| (*p, false)).collect();
        drive(&mut engine, &forward);
        prop_assert!(engine.session().is_complete);
        prop_assert!(engine.session().termination.is_some());
    }

    /// Property: both resolver strategies hold the same invariants.
    #[test]
    fn prop_declarative_resolver_holds_invariants(
        picks in proptest::collection::vec((0usize..8, any::<bool>()), 1..40)
    ) {
        let mut config = Config::default();
        config.sequencer.resolver = ResolverKind::Declarative;
        let mut engine = IntakeEngine::new(builtin_question_graph(), &config);
        drive(&mut engine, &picks);
        prop_assert!(engine.session().answered_count() <= 12);
    }

    /// Property: classification is pure and total over the signal space.
    #[test]
    fn prop_classification_idempotent_and_total(
        values in proptest::array::uniform8(0.0f64..=100.0),
        confidence in 0.0f64..=1.0,
        intent_pick in proptest::option::of(0usize..5),
    ) {
        let signals = SignalVector {
            business_maturity: values[0],
            brand_clarity: values[1],
            technical_debt: values[2],
            automation_readiness: values[3],
            growth_ceiling: values[4],
            urgency: values[5],
            budget_elasticity: values[6],
            decision_authority: values[7],
        };
        let intents = ["brand", "web", "build", "automation", "audit"];
        let intent = intent_pick.map(|i| intents[i]);

        let first = classify(&signals, confidence, intent);
        let second = classify(&signals, confidence, intent);
        prop_assert_eq!(&first, &second);

        // Total: every input lands on a populated bundle.
        prop_assert!(!first.bottleneck.is_empty());
        prop_assert!(!first.priorities.is_empty());
        prop_assert!(first.priorities.len() <= 3);
        prop_assert!(!first.narrative.why_this_path.is_empty());
    }

    /// Property: confidence stays within [0, 1] for any reachable state.
    #[test]
    fn prop_confidence_bounded(
        picks in proptest::collection::vec((0usize..8, any::<bool>()), 1..30)
    ) {
        let mut engine = IntakeEngine::new(builtin_question_graph(), &Config::default());
        drive(&mut engine, &picks);
        let confidence = engine.session().confidence_score;
        prop_assert!((0.0..=1.0).contains(&confidence));
    }
}
