use crate::Result;

/// A fixed-size pool of worker threads for executing jobs concurrently.
///
/// Implementors accept fire-and-forget jobs; callers that need the results
/// collect them over a channel, one message per submitted job. A job that
/// panics simply never sends, so the caller observes a closed channel
/// instead of a deadlock.
pub trait ThreadPool {
    /// Creates a new thread pool with the given number of threads.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created (e.g., zero size).
    fn new(threads: u32) -> Result<Self>
    where
        Self: Sized;

    /// Spawns a function into the thread pool.
    ///
    /// The function will be executed by one of the threads in the pool.
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static;
}

mod naive;
mod rayon_pool;
mod shared_queue;

pub use self::naive::NaiveThreadPool;
pub use self::rayon_pool::RayonThreadPool;
pub use self::shared_queue::SharedQueueThreadPool;

#[cfg(test)]
mod tests {
    use crossbeam::channel;

    use super::*;

    fn runs_all_jobs<P: ThreadPool>() {
        let pool = P::new(4).unwrap();
        let (tx, rx) = channel::unbounded();
        for i in 0..32u64 {
            let tx = tx.clone();
            pool.spawn(move || {
                tx.send(i).unwrap();
            });
        }
        drop(tx);
        let mut seen: Vec<u64> = rx.iter().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..32u64).collect::<Vec<_>>());
    }

    #[test]
    fn shared_queue_runs_all_jobs() {
        runs_all_jobs::<SharedQueueThreadPool>();
    }

    #[test]
    fn naive_runs_all_jobs() {
        runs_all_jobs::<NaiveThreadPool>();
    }

    #[test]
    fn rayon_runs_all_jobs() {
        runs_all_jobs::<RayonThreadPool>();
    }

    #[test]
    fn shared_queue_survives_a_panicking_job() {
        let pool = SharedQueueThreadPool::new(2).unwrap();
        let (tx, rx) = channel::unbounded();
        pool.spawn(|| panic!("job blew up"));
        for _ in 0..8 {
            let tx = tx.clone();
            pool.spawn(move || {
                tx.send(()).unwrap();
            });
        }
        drop(tx);
        assert_eq!(rx.iter().count(), 8);
    }

    #[test]
    fn zero_threads_is_rejected() {
        assert!(SharedQueueThreadPool::new(0).is_err());
        assert!(RayonThreadPool::new(0).is_err());
    }
}
