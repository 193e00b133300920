use std::io;
use thiserror::Error;

/// Error type for benchmark operations.
#[derive(Error, Debug)]
pub enum BenchError {
    /// IO error while spawning or talking to a worker process.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error on the worker wire protocol.
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A pool could not be built with the requested configuration.
    #[error("Invalid pool configuration: {0}")]
    PoolConfig(String),

    /// A worker reported a failure or died before reporting a result.
    #[error("Worker failed: {0}")]
    WorkerFailed(String),

    /// A count tally and a sum tally were combined.
    #[error("Mismatched tally kinds")]
    MixedTallies,

    /// Other error with a message.
    #[error("{0}")]
    StringError(String),
}

/// Result type alias for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;
