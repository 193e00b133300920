//! Child-process side of the process-pool strategy.
//!
//! A worker reads a stream of JSON work orders from stdin, evaluates each
//! one, and writes a JSON report per order to stdout. EOF on stdin ends the
//! loop, so the parent shuts a worker down simply by closing the pipe.

use std::io::{self, BufWriter, Write};
use std::panic;

use log::debug;
use serde_json::Deserializer;

use crate::common::{WorkOrder, WorkReport};
use crate::Result;

/// Serves work orders on stdin until EOF, reporting on stdout.
///
/// A panic inside a workload is caught and reported as an `Err` for that
/// order rather than killing the worker, so the parent sees the failure
/// when it collects results.
pub fn serve() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let orders = Deserializer::from_reader(stdin.lock()).into_iter::<WorkOrder>();

    for order in orders {
        let order = order?;
        debug!("Worker received order: {:?}", order);

        let report = match panic::catch_unwind(|| order.workload.run(order.span)) {
            Ok(tally) => WorkReport::Ok(tally),
            Err(_) => WorkReport::Err(format!("workload panicked on {:?}", order.span)),
        };

        serde_json::to_writer(&mut writer, &report)?;
        writer.flush()?;
    }

    Ok(())
}
