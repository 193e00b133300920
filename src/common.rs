use serde::{Deserialize, Serialize};

use crate::partition::Span;
use crate::workloads::{Tally, Workload};

/// Work order sent from the harness to a worker process.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkOrder {
    /// The workload to evaluate.
    pub workload: Workload,
    /// The span of work units to cover.
    pub span: Span,
}

/// Report sent back from a worker process for one order.
#[derive(Debug, Serialize, Deserialize)]
pub enum WorkReport {
    /// The order completed with this tally.
    Ok(Tally),
    /// The order failed with an error message.
    Err(String),
}
