//! Criterion benchmarks for the xorshift generator and the shuffle.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use sortviz_bench::{reference_len, stress_len};
use sortviz_rng::{shuffle_with, DrawMode, XorShift32};

fn bench_advance(c: &mut Criterion) {
    let mut rng = XorShift32::new(42);
    c.bench_function("xorshift_advance", |b| b.iter(|| black_box(rng.advance())));
}

fn bench_next_in_range(c: &mut Criterion) {
    let mut rng = XorShift32::new(42);
    c.bench_function("xorshift_next_in_range", |b| {
        b.iter(|| black_box(rng.next_in_range(black_box(0), black_box(99))))
    });
}

/// Both draw modes over the reference and stress sizes.
fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    for (name, mode) in [("uniform", DrawMode::Uniform), ("legacy", DrawMode::Legacy)] {
        for len in [reference_len(), stress_len()] {
            let top = len as u32;
            group.bench_function(format!("{name}_{len}"), |b| {
                let mut rng = XorShift32::new(7);
                b.iter_batched(
                    || (1..=top).collect::<Vec<u32>>(),
                    |mut data| {
                        shuffle_with(&mut data, &mut rng, mode);
                        black_box(data)
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_advance, bench_next_in_range, bench_shuffle);
criterion_main!(benches);
