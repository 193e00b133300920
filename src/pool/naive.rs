use super::ThreadPool;
use crate::Result;

/// A naive pool that spawns a fresh thread for every job.
///
/// No threads are reused, so every submission pays full spawn cost. Kept as
/// a baseline to compare the real pools against.
pub struct NaiveThreadPool;

impl ThreadPool for NaiveThreadPool {
    fn new(_threads: u32) -> Result<Self> {
        Ok(NaiveThreadPool)
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        std::thread::spawn(job);
    }
}
