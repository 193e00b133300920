use std::env;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use log::debug;
use serde::Deserialize;
use serde_json::de::IoRead;
use serde_json::Deserializer;

use crate::common::{WorkOrder, WorkReport};
use crate::workloads::Tally;
use crate::{BenchError, Result};

/// Command line used to launch a worker process.
#[derive(Debug, Clone)]
pub struct WorkerCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl WorkerCommand {
    /// A command with no arguments for the given program.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        WorkerCommand {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The current executable re-invoked with `--worker`, the convention
    /// every benchmark binary understands.
    pub fn current_exe() -> Result<Self> {
        Ok(WorkerCommand::new(env::current_exe()?).arg("--worker"))
    }
}

/// Parent-side handle to one worker process.
///
/// Orders are streamed to the child's stdin as JSON; one report per order
/// comes back on its stdout. The handle reads reports in submission order.
struct WorkerHandle {
    child: Child,
    reader: Deserializer<IoRead<ChildStdout>>,
    writer: BufWriter<ChildStdin>,
}

impl WorkerHandle {
    /// Spawns the worker with piped stdin/stdout.
    fn spawn(command: &WorkerCommand) -> Result<Self> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;
        debug!("Spawned worker process {}", child.id());

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| BenchError::WorkerFailed("no stdin handle".to_owned()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| BenchError::WorkerFailed("no stdout handle".to_owned()))?;

        Ok(WorkerHandle {
            child,
            reader: Deserializer::from_reader(stdout),
            writer: BufWriter::new(stdin),
        })
    }

    /// Sends one order to the worker.
    fn submit(&mut self, order: &WorkOrder) -> Result<()> {
        serde_json::to_writer(&mut self.writer, order)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Reads the next report from the worker.
    fn collect(&mut self) -> Result<Tally> {
        match WorkReport::deserialize(&mut self.reader)? {
            WorkReport::Ok(tally) => Ok(tally),
            WorkReport::Err(msg) => Err(BenchError::WorkerFailed(msg)),
        }
    }

    /// Closes the worker's stdin and waits for it to exit.
    fn shutdown(self) -> Result<()> {
        let WorkerHandle {
            mut child,
            reader,
            writer,
        } = self;
        drop(writer);
        drop(reader);
        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(BenchError::WorkerFailed(format!(
                "worker exited with {status}"
            )))
        }
    }
}

/// A fixed-size pool of worker processes.
///
/// Work items and results cross the process boundary as plain JSON values,
/// so anything submitted here must be expressible as a `WorkOrder`.
pub struct ProcessPool {
    members: Vec<WorkerHandle>,
}

impl ProcessPool {
    /// Spawns `size` worker processes from the given command.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or any spawn fails.
    pub fn spawn(command: &WorkerCommand, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(BenchError::PoolConfig(
                "process count must be at least 1".to_owned(),
            ));
        }

        let members = (0..size)
            .map(|_| WorkerHandle::spawn(command))
            .collect::<Result<Vec<_>>>()?;
        Ok(ProcessPool { members })
    }

    /// Number of worker processes in the pool.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Distributes the orders round-robin, then collects one tally per
    /// order, blocking until every worker has answered.
    ///
    /// Tallies come back in order-submission order. Any failing order
    /// aborts the whole batch.
    pub fn run(&mut self, orders: &[WorkOrder]) -> Result<Vec<Tally>> {
        let size = self.members.len();
        for (i, order) in orders.iter().enumerate() {
            self.members[i % size].submit(order)?;
        }

        // Each worker answers its own orders in the order they were sent,
        // so reading back with the same round-robin walk lines up.
        let mut tallies = Vec::with_capacity(orders.len());
        for i in 0..orders.len() {
            tallies.push(self.members[i % size].collect()?);
        }
        Ok(tallies)
    }

    /// Shuts every worker down and waits for them to exit.
    pub fn join(self) -> Result<()> {
        for member in self.members {
            member.shutdown()?;
        }
        Ok(())
    }
}
