use std::thread;

use crossbeam::channel::{self, Receiver, Sender};
use log::{debug, error};

use super::ThreadPool;
use crate::{BenchError, Result};

/// A fixed-size thread pool fed by a shared job queue.
///
/// Workers pull jobs from a single MPMC channel. A panicking job is caught
/// so the worker keeps draining the queue; the job's own result channel
/// (held inside the closure) is dropped, which is how callers learn of the
/// failure. Dropping the pool closes the queue and lets workers exit once
/// it drains.
pub struct SharedQueueThreadPool {
    tx: Sender<Box<dyn FnOnce() + Send + 'static>>,
}

impl ThreadPool for SharedQueueThreadPool {
    fn new(threads: u32) -> Result<Self> {
        if threads == 0 {
            return Err(BenchError::PoolConfig(
                "thread count must be at least 1".to_owned(),
            ));
        }

        let (tx, rx) = channel::unbounded::<Box<dyn FnOnce() + Send + 'static>>();

        for id in 0..threads {
            let rx = rx.clone();
            spawn_worker(id, rx);
        }

        Ok(SharedQueueThreadPool { tx })
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.tx
            .send(Box::new(job))
            .expect("thread pool has no active threads");
    }
}

/// Spawns a single worker thread that pulls jobs from the receiver until
/// the channel closes.
fn spawn_worker(id: u32, rx: Receiver<Box<dyn FnOnce() + Send + 'static>>) {
    thread::Builder::new()
        .name(format!("bench-worker-{id}"))
        .spawn(move || loop {
            match rx.recv() {
                Ok(job) => {
                    debug!("Worker {id} executing job");
                    if std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)).is_err() {
                        error!("Worker {id} job panicked, continuing");
                    }
                }
                Err(_) => {
                    debug!("Worker {id}: queue closed, shutting down");
                    return;
                }
            }
        })
        .expect("failed to spawn worker thread");
}
