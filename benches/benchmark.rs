use criterion::{Criterion, criterion_group, criterion_main};
use kmertag::builder::{BuildConfig, KmerGraphBuilder};
use kmertag::dot::{parse_str, to_dot_string};
use kmertag::ingest::{AlignedRow, Alignment};
use kmertag::model::KmerGraph;
use kmertag::query::{MatchStrategy, QueryEngine};
use kmertag::simulate::MockDataGenerator;
use std::hint::black_box;

const NUM_ORGANISMS: usize = 3;
const REFERENCE_LEN: usize = 2_000;
const READ_LEN: usize = 100;
const NUM_READS: usize = 200;

fn references() -> Vec<Alignment> {
    let mut generator = MockDataGenerator::new(42);
    (0..NUM_ORGANISMS)
        .map(|i| {
            let seq = String::from_utf8(generator.random_sequence(REFERENCE_LEN)).unwrap();
            Alignment::from_rows(format!("org{i}"), vec![AlignedRow::new("seq0", seq)]).unwrap()
        })
        .collect()
}

fn build(alignments: &[Alignment]) -> KmerGraph {
    let mut builder = KmerGraphBuilder::new(BuildConfig::new()).unwrap();
    for alignment in alignments {
        builder.add_alignment(alignment).unwrap();
    }
    builder.finish()
}

fn reads(alignments: &[Alignment]) -> Vec<String> {
    (0..NUM_READS)
        .map(|i| {
            let seq = &alignments[i % alignments.len()].rows()[0].seq;
            let start = (i * 37) % (seq.len() - READ_LEN);
            seq[start..start + READ_LEN].to_string()
        })
        .collect()
}

fn graph_construction(c: &mut Criterion) {
    let alignments = references();
    c.bench_function("build", |b| {
        b.iter(|| build(black_box(&alignments)));
    });

    let graph = build(&alignments);
    c.bench_function("write", |b| {
        b.iter(|| to_dot_string(black_box(&graph)));
    });

    let dot = to_dot_string(&graph);
    c.bench_function("parse", |b| {
        b.iter(|| parse_str(black_box(&dot)).unwrap());
    });
}

fn read_queries(c: &mut Criterion) {
    let alignments = references();
    let graph = build(&alignments);
    let reads = reads(&alignments);

    for (name, strategy) in [
        ("query_bfs", MatchStrategy::BreadthFirst),
        ("query_dfs", MatchStrategy::BranchResuming),
    ] {
        let engine = QueryEngine::new(&graph).with_strategy(strategy);
        c.bench_function(name, |b| {
            b.iter(|| {
                for read in &reads {
                    black_box(engine.query(read));
                }
            });
        });
    }
}

criterion_group!(regression, graph_construction);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = read_queries
}
criterion_main!(regression, reporting);
