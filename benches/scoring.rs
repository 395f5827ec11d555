//! Benchmarks for the confidence and classification hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use compass::domain::models::{ConfidenceConfig, Signal, SignalDelta, SignalVector};
use compass::services::{classify, ConfidenceModel};

fn displaced_signals() -> SignalVector {
    SignalVector::neutral().apply(&[
        SignalDelta::new(Signal::TechnicalDebt, 30.0),
        SignalDelta::new(Signal::BusinessMaturity, 20.0),
        SignalDelta::new(Signal::Urgency, 40.0),
        SignalDelta::new(Signal::BrandClarity, -15.0),
    ])
}

fn bench_confidence(c: &mut Criterion) {
    let model = ConfidenceModel::from_config(&ConfidenceConfig::default());
    let signals = displaced_signals();
    c.bench_function("confidence_weighted", |b| {
        b.iter(|| model.compute(black_box(7), black_box(&signals), black_box(Some("build"))));
    });
}

fn bench_classify(c: &mut Criterion) {
    let signals = displaced_signals();
    c.bench_function("classify_full_bundle", |b| {
        b.iter(|| classify(black_box(&signals), black_box(0.72), black_box(Some("build"))));
    });
}

criterion_group!(benches, bench_confidence, bench_classify);
criterion_main!(benches);
