use super::ThreadPool;
use crate::{BenchError, Result};

/// A thread pool backed by the `rayon` library.
///
/// Uses rayon's work-stealing scheduler for task distribution.
pub struct RayonThreadPool {
    pool: rayon::ThreadPool,
}

impl ThreadPool for RayonThreadPool {
    fn new(threads: u32) -> Result<Self> {
        if threads == 0 {
            return Err(BenchError::PoolConfig(
                "thread count must be at least 1".to_owned(),
            ));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads as usize)
            .build()
            .map_err(|e| BenchError::PoolConfig(e.to_string()))?;
        Ok(RayonThreadPool { pool })
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.pool.spawn(job);
    }
}
