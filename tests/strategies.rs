//! Cross-strategy agreement: the same workload over the same total span
//! must produce the same aggregate no matter how the work is divided or
//! where it runs.

use parabench::{
    split, Harness, NaiveThreadPool, RayonThreadPool, SharedQueueThreadPool, Span, Tally,
    Workload, WorkerCommand,
};

/// A harness whose process strategy drives the quick binary in worker mode.
fn harness(workers: usize) -> Harness {
    let command = WorkerCommand::new(env!("CARGO_BIN_EXE_parabench-quick")).arg("--worker");
    Harness::with_worker_command(command, workers).unwrap()
}

fn count(tally: Tally) -> u64 {
    match tally {
        Tally::Count(n) => n,
        Tally::Sum(x) => panic!("expected a count, got sum {x}"),
    }
}

fn sum(tally: Tally) -> f64 {
    match tally {
        Tally::Sum(x) => x,
        Tally::Count(n) => panic!("expected a sum, got count {n}"),
    }
}

#[test]
fn prime_count_is_strategy_independent() {
    let h = harness(4);
    let span = Span::new(2, 50_000);

    let inline = count(h.run_inline(Workload::Primes, span).unwrap().tally);
    let shared = count(
        h.run_threads::<SharedQueueThreadPool>(Workload::Primes, span)
            .unwrap()
            .tally,
    );
    let naive = count(
        h.run_threads::<NaiveThreadPool>(Workload::Primes, span)
            .unwrap()
            .tally,
    );
    let rayon = count(
        h.run_threads::<RayonThreadPool>(Workload::Primes, span)
            .unwrap()
            .tally,
    );
    let processes = count(h.run_processes(Workload::Primes, span).unwrap().tally);

    assert_eq!(inline, 5_133);
    assert_eq!(shared, inline);
    assert_eq!(naive, inline);
    assert_eq!(rayon, inline);
    assert_eq!(processes, inline);
}

#[test]
fn fibonacci_sum_is_strategy_independent() {
    let h = harness(3);
    let span = Span::new(0, 10_000);

    let inline = count(h.run_inline(Workload::Fib, span).unwrap().tally);
    let threads = count(
        h.run_threads::<SharedQueueThreadPool>(Workload::Fib, span)
            .unwrap()
            .tally,
    );
    let processes = count(h.run_processes(Workload::Fib, span).unwrap().tally);

    assert_eq!(threads, inline);
    assert_eq!(processes, inline);
}

#[test]
fn trig_sum_agrees_within_tolerance() {
    let h = harness(4);
    let workload = Workload::Trig { with_sqrt: true };
    let span = Span::new(0, 100_000);

    let inline = sum(h.run_inline(workload, span).unwrap().tally);
    let threads = sum(
        h.run_threads::<SharedQueueThreadPool>(workload, span)
            .unwrap()
            .tally,
    );
    let processes = sum(h.run_processes(workload, span).unwrap().tally);

    let tolerance = 1e-6 * inline.abs();
    assert!((threads - inline).abs() <= tolerance);
    assert!((processes - inline).abs() <= tolerance);
}

#[test]
fn partitioned_prime_counts_sum_to_the_single_call() {
    for (total, parts) in [(50u64, 4usize), (200_000, 8)] {
        let span = Span::new(0, total);
        let whole = match Workload::Primes.run(span) {
            Tally::Count(n) => n,
            other => panic!("unexpected tally {other:?}"),
        };
        let pieces: u64 = split(span, parts)
            .into_iter()
            .map(|piece| match Workload::Primes.run(piece) {
                Tally::Count(n) => n,
                other => panic!("unexpected tally {other:?}"),
            })
            .sum();
        assert_eq!(pieces, whole, "T={total}, N={parts}");
    }
}

#[test]
fn replicated_process_run_multiplies_the_work() {
    let h = harness(2);
    let span = Span::new(0, 1_000);

    let single = count(h.run_inline(Workload::Fib, span).unwrap().tally);
    let replicated = count(h.run_processes_replicated(Workload::Fib, span).unwrap().tally);

    assert_eq!(replicated, single * 2);
}
