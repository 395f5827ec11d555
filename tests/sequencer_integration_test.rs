//! End-to-end walkthroughs of the intake sequencer against the built-in
//! question graph.

use compass::domain::models::{
    builtin_question_graph, Config, IntakePhase, ResolverKind, SignalVector,
};
use compass::services::IntakeEngine;

fn engine() -> IntakeEngine {
    IntakeEngine::new(builtin_question_graph(), &Config::default())
}

/// Drive the engine to completion by always picking the first option.
fn drive_to_completion(engine: &mut IntakeEngine) -> usize {
    let mut submissions = 0;
    while !engine.session().is_complete {
        let value = engine.current_question().options[0].value.clone();
        engine.submit_answer(&value).expect("valid option");
        submissions += 1;
        assert!(submissions <= 12, "must terminate within the hard cap");
    }
    submissions
}

#[test]
fn fresh_session_matches_documented_baseline() {
    let engine = engine();
    let session = engine.session();
    assert_eq!(session.phase, IntakePhase::Orientation);
    assert!(!session.is_complete);
    assert_eq!(session.signals, SignalVector::neutral());
    assert!((session.confidence_score - 0.35).abs() < f64::EPSILON);
    assert_eq!(session.history.len(), 1);
}

#[test]
fn single_delta_only_moves_its_signal() {
    let mut engine = engine();
    engine.submit_answer("automation").unwrap();
    let signals = engine.session().signals;
    assert_eq!(signals.automation_readiness, 60.0);
    assert_eq!(signals.business_maturity, 50.0);
    assert_eq!(signals.brand_clarity, 50.0);
    assert_eq!(signals.technical_debt, 50.0);
}

#[test]
fn brand_path_reaches_brand_depth_module() {
    let mut engine = engine();
    engine.submit_answer("brand").unwrap();

    while !engine.session().is_complete {
        let value = engine.current_question().options[0].value.clone();
        engine.submit_answer(&value).unwrap();
    }
    let history = &engine.session().history;
    assert!(
        history.iter().any(|id| id == "brand_depth_positioning"),
        "brand intent must unlock the brand module, history: {history:?}"
    );
}

#[test]
fn mandatory_anchors_always_visited() {
    for intent in ["brand", "web", "build", "automation", "audit"] {
        let mut engine = engine();
        engine.submit_answer(intent).unwrap();
        drive_to_completion(&mut engine);
        let history = &engine.session().history;
        for anchor in ["business_stage", "urgency_timing", "decision_authority"] {
            assert!(
                history.iter().any(|id| id == anchor),
                "intent {intent} completed without anchor {anchor}: {history:?}"
            );
        }
    }
}

#[test]
fn completed_session_reports_termination_reason() {
    let mut engine = engine();
    drive_to_completion(&mut engine);
    let session = engine.session();
    assert_eq!(session.phase, IntakePhase::Summary);
    assert!(session.is_complete);
    assert!(session.termination.is_some());
}

#[test]
fn go_back_at_root_is_a_silent_noop() {
    let mut engine = engine();
    let before = engine.session().clone();
    engine.go_back();
    assert_eq!(engine.session(), &before);
}

#[test]
fn go_back_then_different_answer_replaces_signal_contribution() {
    let mut engine = engine();
    engine.submit_answer("build").unwrap();
    assert_eq!(engine.session().signals.technical_debt, 65.0);

    engine.go_back();
    assert_eq!(engine.session().current_question_id, "primary_intent");

    engine.submit_answer("brand").unwrap();
    let signals = engine.session().signals;
    assert_eq!(signals.technical_debt, 50.0);
    assert_eq!(signals.brand_clarity, 60.0);
}

#[test]
fn both_resolvers_visit_anchor_set() {
    for resolver in [ResolverKind::Tiered, ResolverKind::Declarative] {
        let mut config = Config::default();
        config.sequencer.resolver = resolver;
        let mut engine = IntakeEngine::new(builtin_question_graph(), &config);
        engine.submit_answer("automation").unwrap();
        drive_to_completion(&mut engine);
        let history = &engine.session().history;
        assert!(history.iter().any(|id| id == "decision_authority"));
    }
}

#[test]
fn history_tail_always_tracks_current_question() {
    let mut engine = engine();
    engine.submit_answer("web").unwrap();
    for _ in 0..3 {
        let session = engine.session();
        assert_eq!(
            session.history.last(),
            Some(&session.current_question_id)
        );
        if engine.session().is_complete {
            break;
        }
        let value = engine.current_question().options[0].value.clone();
        engine.submit_answer(&value).unwrap();
    }
    engine.go_back();
    let session = engine.session();
    assert_eq!(session.history.last(), Some(&session.current_question_id));
    assert!(!session.history.is_empty());
}
