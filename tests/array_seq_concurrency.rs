// ==============================================
// ARRAY SEQ CONCURRENCY TESTS (integration)
// ==============================================
//
// Multi-threaded exercises for ConcurrentArraySeq: lost-update races on the
// shared buffer and reader consistency across reallocation. These require
// real threads and cannot live inline.

#![cfg(feature = "concurrency")]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use seqkit::seq::ConcurrentArraySeq;

// ==============================================
// Parallel appends across reallocation
// ==============================================
//
// Starting from capacity 0 forces the linear-increment growth path under
// contention. Every push takes an exclusive acquisition, so no append can be
// lost to a concurrent reallocation.

mod parallel_appends {
    use super::*;

    const NUM_WORKERS: usize = 10;
    const ITERATIONS: usize = 100;

    #[test]
    fn concurrent_appends_survive_growth() {
        let seq: Arc<ConcurrentArraySeq<usize>> = Arc::new(ConcurrentArraySeq::with_capacity(0));
        let barrier = Arc::new(Barrier::new(NUM_WORKERS));

        let handles: Vec<_> = (0..NUM_WORKERS)
            .map(|tid| {
                let seq = seq.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for i in 0..ITERATIONS {
                        seq.push(tid * ITERATIONS + i);
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(seq.len(), NUM_WORKERS * ITERATIONS);

        let snapshot = seq.to_vec();
        for value in 0..NUM_WORKERS * ITERATIONS {
            assert_eq!(
                snapshot.iter().filter(|v| **v == value).count(),
                1,
                "value {value} appended other than exactly once"
            );
        }
    }
}

// ==============================================
// Disjoint parallel writes via set()
// ==============================================
//
// The buffer is preloaded with a sentinel; each worker owns a disjoint index
// range and overwrites it with the index value. No write may leak outside
// its range and no sentinel may survive.

mod disjoint_sets {
    use super::*;

    const NUM_WORKERS: usize = 8;
    const SLICE: usize = 125;

    #[test]
    fn concurrent_set_keeps_disjoint_ranges_intact() {
        let total = NUM_WORKERS * SLICE;
        let seq: Arc<ConcurrentArraySeq<usize>> = Arc::new(ConcurrentArraySeq::with_capacity(0));
        seq.append_all(std::iter::repeat_n(usize::MAX, total));

        let barrier = Arc::new(Barrier::new(NUM_WORKERS));
        let handles: Vec<_> = (0..NUM_WORKERS)
            .map(|tid| {
                let seq = seq.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for index in tid * SLICE..(tid + 1) * SLICE {
                        seq.set(index, index).unwrap();
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        let expected: Vec<usize> = (0..total).collect();
        assert_eq!(seq.to_vec(), expected);
    }
}

// ==============================================
// Atomic remove_value under racing removers
// ==============================================
//
// Two copies of each value are preloaded and two workers each remove every
// value once. Because the search and the removal share one critical section,
// exactly two removals succeed per value and the sequence drains to empty.

mod racing_removers {
    use super::*;

    const ITERATIONS: usize = 100;

    #[test]
    fn concurrent_remove_value_never_double_counts() {
        let seq: Arc<ConcurrentArraySeq<usize>> = Arc::new(ConcurrentArraySeq::new());
        seq.append_all(0..ITERATIONS);
        seq.append_all(0..ITERATIONS);

        let barrier = Arc::new(Barrier::new(2));
        let missed = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let seq = seq.clone();
                let barrier = barrier.clone();
                let missed = missed.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for value in 0..ITERATIONS {
                        if seq.remove_value(&value).is_err() {
                            missed.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(
            missed.load(Ordering::Relaxed),
            0,
            "a remove_value lost its match to the racing remover"
        );
        assert!(seq.is_empty());
    }
}

// ==============================================
// Reader consistency during clear/refill
// ==============================================
//
// A reader takes snapshots while a writer alternates clear() and a batched
// refill. Each snapshot must be a single generation of the refill, never a
// mix.

mod snapshot_consistency {
    use super::*;

    #[test]
    fn snapshots_are_consistent_during_clear_and_refill() {
        let seq: Arc<ConcurrentArraySeq<usize>> = Arc::new(ConcurrentArraySeq::new());
        let stop = Arc::new(AtomicBool::new(false));
        let inconsistencies = Arc::new(AtomicUsize::new(0));

        seq.append_all(0..100);

        let seq_r = seq.clone();
        let stop_r = stop.clone();
        let inconsistencies_r = inconsistencies.clone();
        let reader = thread::spawn(move || {
            while !stop_r.load(Ordering::Relaxed) {
                let snapshot = seq_r.to_vec();
                for (index, value) in snapshot.iter().enumerate() {
                    if *value != index {
                        inconsistencies_r.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
        });

        let seq_w = seq.clone();
        let stop_w = stop.clone();
        let writer = thread::spawn(move || {
            for _ in 0..200 {
                seq_w.clear();
                seq_w.append_all(0..100);
            }
            stop_w.store(true, Ordering::Relaxed);
        });

        reader.join().unwrap();
        writer.join().unwrap();

        assert_eq!(
            inconsistencies.load(Ordering::Relaxed),
            0,
            "to_vec observed a half-applied refill"
        );
    }
}
