//! Criterion micro-benchmarks for lattice operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kmc_bench::EDGE;
use kmc_lattice::Lattice;
use kmc_test_utils::simple_cubic_lattice;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn populated(count: usize) -> Lattice {
    let mut lattice = simple_cubic_lattice(EDGE);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    lattice.populate(count, &mut rng).unwrap();
    lattice
}

/// Benchmark: enumerate candidate jumps at 10% fill (occupied-site scan).
fn bench_potential_jumps_sparse(c: &mut Criterion) {
    let lattice = populated(410);

    c.bench_function("potential_jumps_sparse", |b| {
        b.iter(|| black_box(lattice.potential_jumps()));
    });
}

/// Benchmark: enumerate candidate jumps at 90% fill (vacant-site scan).
fn bench_potential_jumps_dense(c: &mut Criterion) {
    let lattice = populated(3686);

    c.bench_function("potential_jumps_dense", |b| {
        b.iter(|| black_box(lattice.potential_jumps()));
    });
}

/// Benchmark: sample 1000 events and waiting times from one transition set.
fn bench_sample_1000(c: &mut Criterion) {
    let lattice = populated(410);
    let transitions = lattice.transitions().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    c.bench_function("sample_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(transitions.sample(&mut rng).unwrap());
            }
        });
    });
}

/// Benchmark: wrap every coordinate of a 4096-site lattice.
fn bench_enforce_periodic_boundary(c: &mut Criterion) {
    let mut lattice = simple_cubic_lattice(EDGE);

    c.bench_function("enforce_periodic_boundary_4k", |b| {
        b.iter(|| {
            lattice.enforce_periodic_boundary();
            black_box(lattice.sites().len());
        });
    });
}

criterion_group!(
    benches,
    bench_potential_jumps_sparse,
    bench_potential_jumps_dense,
    bench_sample_1000,
    bench_enforce_periodic_boundary
);
criterion_main!(benches);
