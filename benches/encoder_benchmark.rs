use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use triage::{FeatureEncoder, SymptomVocabulary};

fn bench_encoding(c: &mut Criterion) {
    let vocabulary = SymptomVocabulary::new();
    let encoder = FeatureEncoder::new(Arc::new(SymptomVocabulary::new()));

    let small: Vec<String> = vec!["itching".to_string(), "skin_rash".to_string()];
    let large: Vec<String> = vocabulary
        .names()
        .iter()
        .take(40)
        .map(|s| s.to_string())
        .collect();

    let mut group = c.benchmark_group("Encoding");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("two_symptoms", |b| {
        b.iter(|| encoder.encode(black_box(&small)).unwrap())
    });

    group.bench_function("forty_symptoms", |b| {
        b.iter(|| encoder.encode(black_box(&large)).unwrap())
    });

    group.finish();
}

fn bench_vocabulary_lookup(c: &mut Criterion) {
    let vocabulary = SymptomVocabulary::new();
    c.bench_function("vocabulary_lookup", |b| {
        b.iter(|| vocabulary.index_of(black_box("yellow_crust_ooze")))
    });
}

criterion_group!(benches, bench_encoding, bench_vocabulary_lookup);
criterion_main!(benches);
