#![deny(missing_docs)]

//! CPU-bound workload benchmarks under three execution strategies.
//!
//! This library times pure numeric workloads (primality counting,
//! trigonometric accumulation, Fibonacci summation) run inline, on a
//! fixed-size thread pool, and on a pool of worker processes, to compare
//! how each strategy scales. Work is divided by a static range
//! partitioner; results are plain scalars folded by summation, so no state
//! is shared between workers.

mod common;
mod error;
mod harness;
mod partition;
mod process;

/// Thread pool implementations for the thread-backed strategy.
pub mod pool;
/// Console reporting helpers for the benchmark binaries.
pub mod report;
/// Worker-process serve loop for the process-backed strategy.
pub mod worker;
/// The CPU-bound workload functions and their dispatch types.
pub mod workloads;

pub use common::{WorkOrder, WorkReport};
pub use error::{BenchError, Result};
pub use harness::{Harness, Trial};
pub use partition::{split, Span};
pub use pool::{NaiveThreadPool, RayonThreadPool, SharedQueueThreadPool, ThreadPool};
pub use process::{ProcessPool, WorkerCommand};
pub use workloads::{Tally, Workload};
