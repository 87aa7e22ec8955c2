use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tfidf_recommender::{Recommender, RecommenderConfig, Snapshot};

const DOCS: usize = 5_000;
const TERMS: usize = 20_000;
const TERMS_PER_DOC: usize = 300;

/// Synthetic corpus, xorshift-seeded so every run sees the same matrix
fn build_snapshot() -> Snapshot<f32> {
    let mut state = 0x2545_F491u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };

    let mut triplets = Vec::with_capacity(DOCS * TERMS_PER_DOC);
    for doc in 0..DOCS {
        for _ in 0..TERMS_PER_DOC {
            let term = next() as usize % TERMS;
            let weight = (next() % 1000) as f32 / 1000.0;
            triplets.push((doc, term, weight));
        }
    }
    let titles = (0..DOCS).map(|i| format!("doc{i}"));
    let terms = (0..TERMS).map(|i| format!("term{i}"));
    Snapshot::from_parts(titles, terms, triplets).expect("synthetic snapshot")
}

fn query_benchmark(c: &mut Criterion) {
    let snapshot = Arc::new(build_snapshot());
    let engine = Recommender::new(Arc::clone(&snapshot));
    let sequential = Recommender::with_config(
        snapshot,
        RecommenderConfig { parallel_threshold: usize::MAX, ..Default::default() },
    );

    c.bench_function("top_k_all", |b| {
        b.iter(|| engine.top_k_all(black_box(25)));
    });

    c.bench_function("search", |b| {
        b.iter(|| engine.search(black_box("term42"), 10));
    });

    let seeds = ["doc1", "doc7", "doc300"];
    c.bench_function("recommend_parallel", |b| {
        b.iter(|| engine.recommend_for(black_box(&seeds), 10));
    });
    c.bench_function("recommend_sequential", |b| {
        b.iter(|| sequential.recommend_for(black_box(&seeds), 10));
    });
}

criterion_group!(benches, query_benchmark);
criterion_main!(benches);
