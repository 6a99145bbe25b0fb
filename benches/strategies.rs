use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use primecount::{count_primes_with, Strategy};

const BOUND: u32 = 20_000;

pub fn strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");

    for (name, strategy) in [
        ("local", Strategy::Local),
        ("atomic", Strategy::Atomic),
        ("mutex", Strategy::Mutex),
        ("channel", Strategy::Channel),
        ("unsynchronized", Strategy::Unsynchronized),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| count_primes_with(black_box(BOUND), 2, strategy))
        });
    }

    group.finish();
}

criterion_group!(benches, strategies);
criterion_main!(benches);
