//! Ring buffer micro-benchmarks: wrapping writes, write/read cycles, and
//! snapshot cost at a few representative capacities.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ringbuffer::RingBuffer;
use std::hint::black_box;

fn push_wrapping_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_wrapping");

    for cap in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(cap), &cap, |b, &cap| {
            let mut ring = RingBuffer::new(cap);
            let mut n = 0u64;
            b.iter(|| {
                n = n.wrapping_add(1);
                ring.push(black_box(n));
            });
        });
    }

    group.finish();
}

fn push_pop_cycle_benchmark(c: &mut Criterion) {
    c.bench_function("push_pop_cycle", |b| {
        let mut ring = RingBuffer::new(256);
        let mut n = 0u64;
        b.iter(|| {
            n = n.wrapping_add(1);
            ring.push(black_box(n));
            black_box(ring.pop());
        });
    });
}

fn snapshot_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for cap in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(cap), &cap, |b, &cap| {
            let mut ring = RingBuffer::new(cap);
            for n in 0..cap as u64 * 2 {
                ring.push(n);
            }
            b.iter(|| black_box(ring.snapshot()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    push_wrapping_benchmark,
    push_pop_cycle_benchmark,
    snapshot_benchmark
);
criterion_main!(benches);
