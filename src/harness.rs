use std::time::{Duration, Instant};

use crossbeam::channel;

use crate::common::WorkOrder;
use crate::partition::{split, Span};
use crate::pool::ThreadPool;
use crate::process::{ProcessPool, WorkerCommand};
use crate::workloads::{Tally, Workload};
use crate::{BenchError, Result};

/// One timed run of a workload under a single execution strategy.
#[derive(Debug, Clone, Copy)]
pub struct Trial {
    /// Aggregate result across all partitions.
    pub tally: Tally,
    /// Wall-clock duration of the run, including pool setup and teardown.
    pub elapsed: Duration,
}

impl Trial {
    /// Speedup of this trial relative to a baseline: baseline duration
    /// divided by this trial's duration.
    pub fn speedup_over(&self, baseline: &Trial) -> f64 {
        baseline.elapsed.as_secs_f64() / self.elapsed.as_secs_f64()
    }
}

/// Runs workloads under the three execution strategies.
///
/// The worker count and the command used to launch worker processes are
/// explicit state here; nothing is read from the environment once a
/// harness exists. Pools of either kind are created, used, and torn down
/// within a single run, and every run's duration includes that overhead,
/// matching what a caller of the strategy would actually pay.
pub struct Harness {
    workers: usize,
    worker_command: WorkerCommand,
}

impl Harness {
    /// A harness that launches worker processes by re-invoking the current
    /// executable with `--worker`.
    ///
    /// # Errors
    ///
    /// Returns an error if `workers` is zero or the current executable
    /// cannot be determined.
    pub fn new(workers: usize) -> Result<Self> {
        Harness::with_worker_command(WorkerCommand::current_exe()?, workers)
    }

    /// A harness with an explicit worker-process command, used by tests and
    /// callers embedding the library.
    ///
    /// # Errors
    ///
    /// Returns an error if `workers` is zero.
    pub fn with_worker_command(worker_command: WorkerCommand, workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(BenchError::PoolConfig(
                "worker count must be at least 1".to_owned(),
            ));
        }
        Ok(Harness {
            workers,
            worker_command,
        })
    }

    /// Configured worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs the workload inline: one call over the full span, on the
    /// caller's thread.
    pub fn run_inline(&self, workload: Workload, span: Span) -> Result<Trial> {
        let started = Instant::now();
        let tally = workload.run(span);
        Ok(Trial {
            tally,
            elapsed: started.elapsed(),
        })
    }

    /// Runs the workload on a thread pool, one partition per worker.
    pub fn run_threads<P: ThreadPool>(&self, workload: Workload, span: Span) -> Result<Trial> {
        let spans = split(span, self.workers);
        self.scatter_threads::<P>(workload, spans)
    }

    /// Runs one full copy of the span per worker on a thread pool.
    ///
    /// The replicated form measures aggregate throughput of identical
    /// tasks rather than division of one task.
    pub fn run_threads_replicated<P: ThreadPool>(
        &self,
        workload: Workload,
        span: Span,
    ) -> Result<Trial> {
        self.scatter_threads::<P>(workload, vec![span; self.workers])
    }

    /// Runs the workload on a pool of worker processes, one partition per
    /// worker.
    pub fn run_processes(&self, workload: Workload, span: Span) -> Result<Trial> {
        let spans = split(span, self.workers);
        self.scatter_processes(workload, spans)
    }

    /// Runs one full copy of the span per worker process.
    pub fn run_processes_replicated(&self, workload: Workload, span: Span) -> Result<Trial> {
        self.scatter_processes(workload, vec![span; self.workers])
    }

    /// Submits one job per span to a fresh pool `P` and folds the tallies
    /// gathered back over a channel.
    fn scatter_threads<P: ThreadPool>(&self, workload: Workload, spans: Vec<Span>) -> Result<Trial> {
        let started = Instant::now();
        let pool = P::new(self.workers as u32)?;
        let (tx, rx) = channel::bounded(spans.len());

        let jobs = spans.len();
        for span in spans {
            let tx = tx.clone();
            pool.spawn(move || {
                let tally = workload.run(span);
                // Receiver only disappears if the harness itself bailed.
                let _ = tx.send(tally);
            });
        }
        drop(tx);

        let mut total = workload.zero();
        for _ in 0..jobs {
            let tally = rx
                .recv()
                .map_err(|_| BenchError::WorkerFailed("worker died before reporting".to_owned()))?;
            total = total.accumulate(tally)?;
        }

        Ok(Trial {
            tally: total,
            elapsed: started.elapsed(),
        })
    }

    /// Sends one order per span to a fresh process pool and folds the
    /// returned tallies.
    fn scatter_processes(&self, workload: Workload, spans: Vec<Span>) -> Result<Trial> {
        let started = Instant::now();
        let mut pool = ProcessPool::spawn(&self.worker_command, self.workers)?;

        let orders: Vec<WorkOrder> = spans
            .into_iter()
            .map(|span| WorkOrder { workload, span })
            .collect();
        let tallies = pool.run(&orders)?;
        pool.join()?;

        let mut total = workload.zero();
        for tally in tallies {
            total = total.accumulate(tally)?;
        }

        Ok(Trial {
            tally: total,
            elapsed: started.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{NaiveThreadPool, RayonThreadPool, SharedQueueThreadPool};

    fn harness(workers: usize) -> Harness {
        // Worker command is irrelevant for the thread strategies.
        Harness::with_worker_command(WorkerCommand::new("unused"), workers).unwrap()
    }

    #[test]
    fn inline_counts_primes() {
        let trial = harness(4)
            .run_inline(Workload::Primes, Span::new(2, 100))
            .unwrap();
        assert_eq!(trial.tally, Tally::Count(25));
    }

    #[test]
    fn thread_pools_agree_with_inline() {
        let h = harness(4);
        let span = Span::new(2, 5_000);
        let baseline = h.run_inline(Workload::Primes, span).unwrap();

        let shared = h
            .run_threads::<SharedQueueThreadPool>(Workload::Primes, span)
            .unwrap();
        let naive = h.run_threads::<NaiveThreadPool>(Workload::Primes, span).unwrap();
        let rayon = h.run_threads::<RayonThreadPool>(Workload::Primes, span).unwrap();

        assert_eq!(shared.tally, baseline.tally);
        assert_eq!(naive.tally, baseline.tally);
        assert_eq!(rayon.tally, baseline.tally);
    }

    #[test]
    fn replicated_run_multiplies_the_work() {
        let h = harness(3);
        let span = Span::new(0, 1_000);
        let single = h.run_inline(Workload::Fib, span).unwrap();
        let replicated = h
            .run_threads_replicated::<SharedQueueThreadPool>(Workload::Fib, span)
            .unwrap();

        match (single.tally, replicated.tally) {
            (Tally::Count(one), Tally::Count(three)) => assert_eq!(three, one * 3),
            other => panic!("unexpected tallies: {other:?}"),
        }
    }

    #[test]
    fn zero_workers_is_rejected() {
        assert!(harness_result(0).is_err());
    }

    fn harness_result(workers: usize) -> Result<Harness> {
        Harness::with_worker_command(WorkerCommand::new("unused"), workers)
    }
}
