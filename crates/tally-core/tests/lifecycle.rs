//! Counter lifecycle scenarios and concurrent access.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;

use tally_core::{CounterError, CounterRegistry, ErrorKind};

#[test]
fn create_a_counter() {
    let reg = CounterRegistry::new();
    assert_eq!(reg.create("foo"), Ok(0));
}

#[test]
fn duplicate_a_counter() {
    let reg = CounterRegistry::new();
    assert_eq!(reg.create("bar"), Ok(0));
    assert_eq!(
        reg.create("bar"),
        Err(CounterError::AlreadyExists("bar".into()))
    );
}

#[test]
fn update_a_counter() {
    let reg = CounterRegistry::new();
    assert_eq!(reg.create("zen"), Ok(0));
    assert_eq!(reg.increment("zen"), Ok(1));
}

#[test]
fn delete_a_counter() {
    let reg = CounterRegistry::new();
    assert_eq!(reg.create("ben"), Ok(0));
    assert_eq!(reg.delete("ben"), Ok(()));
    assert_eq!(
        reg.increment("ben"),
        Err(CounterError::NotFound("ben".into()))
    );
    assert_eq!(reg.delete("ben"), Err(CounterError::NotFound("ben".into())));
}

#[test]
fn never_created_names_are_not_found() {
    let reg = CounterRegistry::new();
    assert_eq!(reg.increment("nope").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(reg.delete("nope").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(reg.get("nope").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn n_increments_yield_n() {
    let reg = CounterRegistry::new();
    reg.create("n").unwrap();
    for expected in 1..=250u64 {
        assert_eq!(reg.increment("n").unwrap(), expected);
    }
    assert_eq!(reg.get("n").unwrap(), 250);
}

#[test]
fn counters_are_independent() {
    let reg = CounterRegistry::new();
    reg.create("a").unwrap();
    reg.create("b").unwrap();
    reg.increment("a").unwrap();
    reg.increment("a").unwrap();
    reg.increment("b").unwrap();
    reg.delete("a").unwrap();

    assert_eq!(reg.get("b").unwrap(), 1);
    assert_eq!(reg.len(), 1);
}

#[test]
fn concurrent_increments_are_not_lost() {
    const THREADS: usize = 16;
    const PER_THREAD: u64 = 1_000;

    let reg = CounterRegistry::new();
    reg.create("hot").unwrap();
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                barrier.wait();
                for _ in 0..PER_THREAD {
                    reg.increment("hot").unwrap();
                }
            });
        }
    });

    assert_eq!(reg.get("hot").unwrap(), THREADS as u64 * PER_THREAD);
}

#[test]
fn concurrent_create_has_one_winner() {
    const THREADS: usize = 32;

    let reg = CounterRegistry::new();
    let barrier = Barrier::new(THREADS);
    let wins = AtomicUsize::new(0);
    let conflicts = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                barrier.wait();
                match reg.create("race") {
                    Ok(0) => wins.fetch_add(1, Ordering::Relaxed),
                    Err(CounterError::AlreadyExists(_)) => conflicts.fetch_add(1, Ordering::Relaxed),
                    other => panic!("unexpected outcome: {other:?}"),
                };
            });
        }
    });

    assert_eq!(wins.load(Ordering::Relaxed), 1);
    assert_eq!(conflicts.load(Ordering::Relaxed), THREADS - 1);
    assert_eq!(reg.len(), 1);
}

#[test]
fn delete_racing_increment_leaves_consistent_state() {
    const INCREMENTERS: usize = 8;
    const ROUNDS: usize = 200;

    let reg = CounterRegistry::new();
    let ok_increments = AtomicUsize::new(0);

    for _ in 0..ROUNDS {
        reg.create("flap").unwrap();
        let barrier = Barrier::new(INCREMENTERS + 1);

        thread::scope(|s| {
            for _ in 0..INCREMENTERS {
                s.spawn(|| {
                    barrier.wait();
                    match reg.increment("flap") {
                        Ok(v) => {
                            assert!((1..=INCREMENTERS as u64).contains(&v));
                            ok_increments.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
                    }
                });
            }
            s.spawn(|| {
                barrier.wait();
                reg.delete("flap").unwrap();
            });
        });

        assert!(reg.is_empty());
        assert_eq!(reg.get("flap").unwrap_err().kind(), ErrorKind::NotFound);
    }

    assert!(ok_increments.load(Ordering::Relaxed) <= INCREMENTERS * ROUNDS);
}
