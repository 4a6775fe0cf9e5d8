use clearpass::solver::{BruteForceSolver, OffsetSolver, SieveSolver};
use clearpass::types::Firewall;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE: &str = "0: 3\n1: 2\n4: 4\n6: 4\n";

/// A firewall shaped like a typical puzzle input: 41 layers up to depth 88.
fn puzzle_firewall() -> Firewall {
    let pairs = [
        (0, 3), (1, 2), (2, 4), (4, 6), (6, 5), (8, 6), (10, 6), (12, 8), (14, 8),
        (16, 6), (18, 8), (20, 8), (22, 8), (24, 12), (26, 8), (28, 12), (30, 8),
        (32, 12), (34, 12), (36, 14), (38, 10), (40, 12), (42, 14), (44, 10),
        (46, 14), (48, 12), (50, 14), (52, 12), (54, 9), (56, 14), (58, 12),
        (60, 12), (64, 14), (66, 12), (70, 14), (76, 20), (78, 17), (80, 14),
        (84, 14), (86, 14), (88, 18),
    ];
    Firewall::from_pairs(pairs).expect("valid firewall")
}

fn run_all_benchmarks(c: &mut Criterion) {
    let sample: Firewall = SAMPLE.parse().expect("valid sample");
    let puzzle = puzzle_firewall();

    let sieve = SieveSolver::default();
    let brute = BruteForceSolver::default();

    let mut group_sample = c.benchmark_group("solve_sample");
    group_sample.bench_function("sieve", |b| b.iter(|| sieve.solve(black_box(&sample))));
    group_sample.bench_function("brute", |b| b.iter(|| brute.solve(black_box(&sample))));
    group_sample.finish();

    let mut group_puzzle = c.benchmark_group("solve_puzzle");
    group_puzzle.bench_function("sieve", |b| b.iter(|| sieve.solve(black_box(&puzzle))));
    group_puzzle.sample_size(10);
    group_puzzle.bench_function("brute", |b| b.iter(|| brute.solve(black_box(&puzzle))));
    group_puzzle.finish();

    c.bench_function("parse_puzzle", |b| {
        let text = puzzle.to_string();
        b.iter(|| black_box(&text).parse::<Firewall>())
    });
}

criterion_group!(benches, run_all_benchmarks);
criterion_main!(benches);
