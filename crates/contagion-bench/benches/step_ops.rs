//! Criterion benchmarks for seeding and day stepping.

use std::hint::black_box;

use contagion_bench::{reference_profile, stress_profile, warm_simulation};
use contagion_engine::{seed_population, step};
use contagion_test_utils::seeded_rng;
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: one day on the 1000-person reference grid mid-epidemic.
fn bench_step_reference(c: &mut Criterion) {
    let sim = warm_simulation(reference_profile(), 42, 5).unwrap();
    let probs = *sim.transition_probs();
    let grid = sim.grid().clone();
    let mut rng = seeded_rng(7);

    c.bench_function("step_reference_1k", |b| {
        b.iter(|| black_box(step(&grid, &probs, &mut rng)));
    });
}

/// Benchmark: one day on the 100K-person stress grid.
fn bench_step_stress(c: &mut Criterion) {
    let sim = warm_simulation(stress_profile(), 42, 10).unwrap();
    let probs = *sim.transition_probs();
    let grid = sim.grid().clone();
    let mut rng = seeded_rng(7);

    c.bench_function("step_stress_100k", |b| {
        b.iter(|| black_box(step(&grid, &probs, &mut rng)));
    });
}

/// Benchmark: build and seed the 100K-person grid.
fn bench_seed_stress(c: &mut Criterion) {
    let config = stress_profile();
    let ratios = config.seed_ratios().unwrap();
    let mut rng = seeded_rng(3);

    c.bench_function("seed_stress_100k", |b| {
        b.iter(|| black_box(seed_population(config.population, &ratios, &mut rng).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_step_reference,
    bench_step_stress,
    bench_seed_stress
);
criterion_main!(benches);
