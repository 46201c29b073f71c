use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use regina::solver::{
    engine::SolverEngine,
    strategy::{SearchOptions, Strategy},
};

fn counting_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("N-Queens Counting");

    for n in [6usize, 8, 10].iter() {
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.tag(), n), n, |b, &n| {
                let engine = SolverEngine::new();
                b.iter(|| {
                    let stats = engine.count_solutions(black_box(n), strategy).unwrap();
                    assert!(stats.solutions > 0);
                });
            });
        }
    }
    group.finish();
}

fn trace_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("N-Queens Trace Materialization");
    let board_size = 6; // Small enough that the full trace stays cheap to build

    for strategy in Strategy::ALL {
        group.bench_function(strategy.tag(), |b| {
            let engine = SolverEngine::new();
            b.iter(|| {
                let trace = engine
                    .search(black_box(board_size), strategy, SearchOptions::default())
                    .unwrap();
                assert!(!trace.is_empty());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, counting_benchmarks, trace_benchmarks);
criterion_main!(benches);
