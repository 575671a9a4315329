//! Criterion benchmarks for Tuplesim.
//!
//! - Word analysis
//! - Synonym generalization
//! - Shingle set construction and comparison

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use tuplesim::analysis::analyzer::tokenize;
use tuplesim::analysis::synonym::{SynonymDictionary, SynonymGeneralizer};
use tuplesim::similarity::ntuple::NTupleComparator;
use tuplesim::similarity::shingle::ShingleSet;

const WORDS: &[&str] = &[
    "search", "engine", "quick", "fast", "rapid", "big", "large", "huge", "text", "document",
    "compare", "similar", "run", "jog", "sprint", "house", "home", "data", "memory", "window",
];

const SYNONYMS: &str = "quick fast rapid\nbig large huge\nrun jog sprint\nhouse home\n";

/// Generate a pseudo-random document of `len` words.
fn generate_document(len: usize, seed: usize) -> String {
    (0..len)
        .map(|i| WORDS[(i * 7 + seed * 13 + i / 3) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_analysis(c: &mut Criterion) {
    let document = generate_document(10_000, 1);
    let generalizer = SynonymGeneralizer::new(SynonymDictionary::parse(SYNONYMS));

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(document.len() as u64));

    group.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(&document))));
    group.bench_function("generalize_text", |b| {
        b.iter(|| generalizer.generalize_text(black_box(&document)).unwrap())
    });

    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let generalizer = SynonymGeneralizer::new(SynonymDictionary::parse(SYNONYMS));
    let a = generalizer
        .generalize_text(&generate_document(10_000, 1))
        .unwrap();
    let b = generalizer
        .generalize_text(&generate_document(10_000, 2))
        .unwrap();

    let mut group = c.benchmark_group("similarity");
    group.throughput(Throughput::Elements(a.len() as u64));

    for n in [2, 3, 5] {
        let comparator = NTupleComparator::new(n).unwrap();
        group.bench_function(format!("shingle_set_n{n}"), |bench| {
            bench.iter(|| ShingleSet::build(black_box(&a), n).unwrap())
        });
        group.bench_function(format!("compare_n{n}"), |bench| {
            bench.iter(|| comparator.compare(black_box(&a), black_box(&b)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analysis, bench_similarity);
criterion_main!(benches);
