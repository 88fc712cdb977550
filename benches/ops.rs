//! Micro-operation benchmarks for both sequence variants.
//!
//! Run with: `cargo bench --bench ops`
//!
//! Measures per-operation latency for append, indexed access, and end
//! operations under identical conditions.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use seqkit::seq::{ArraySeq, ConcurrentLinkedDeque, LinkedDeque};

const OPS: u64 = 10_000;

// ============================================================================
// Append throughput
// ============================================================================

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("array_seq_push", |b| {
        b.iter(|| {
            let mut seq = ArraySeq::with_capacity(OPS as usize);
            for i in 0..OPS {
                seq.push(black_box(i));
            }
            seq
        })
    });

    // Exercises the linear-increment growth path.
    group.bench_function("array_seq_push_from_zero_capacity", |b| {
        b.iter(|| {
            let mut seq = ArraySeq::with_capacity(0);
            for i in 0..OPS {
                seq.push(black_box(i));
            }
            seq
        })
    });

    group.bench_function("linked_deque_push_back", |b| {
        b.iter(|| {
            let mut deque = LinkedDeque::new();
            for i in 0..OPS {
                deque.push_back(black_box(i));
            }
            deque
        })
    });

    group.finish();
}

// ============================================================================
// Indexed access
// ============================================================================

fn bench_indexed_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_get");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("array_seq_get", |b| {
        let seq: ArraySeq<u64> = (0..OPS).collect();
        b.iter(|| {
            for i in 0..OPS {
                black_box(seq.get(black_box(i as usize)).ok());
            }
        })
    });

    group.bench_function("linked_deque_get_nearer_end", |b| {
        let deque: LinkedDeque<u64> = (0..OPS).collect();
        b.iter(|| {
            black_box(deque.get(black_box(0)).ok());
            black_box(deque.get(black_box((OPS / 2) as usize)).ok());
            black_box(deque.get(black_box((OPS - 1) as usize)).ok());
        })
    });

    group.finish();
}

// ============================================================================
// Deque end operations
// ============================================================================

fn bench_deque_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque_ends");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("linked_deque_push_front_poll_last", |b| {
        b.iter(|| {
            let mut deque = LinkedDeque::new();
            for i in 0..OPS {
                deque.push_front(black_box(i));
            }
            while deque.poll_last().is_some() {}
            deque
        })
    });

    group.bench_function("concurrent_linked_deque_push_front_poll_last", |b| {
        b.iter(|| {
            let deque = ConcurrentLinkedDeque::new();
            for i in 0..OPS {
                deque.push_front(black_box(i));
            }
            while deque.poll_last().is_some() {}
            deque
        })
    });

    group.finish();
}

criterion_group!(benches, bench_append, bench_indexed_get, bench_deque_ends);
criterion_main!(benches);
