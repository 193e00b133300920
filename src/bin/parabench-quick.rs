//! Quick benchmark suite: small workloads for fast feedback.

use std::process::exit;

use clap::Parser;
use log::error;

use parabench::{
    report, BenchError, Harness, NaiveThreadPool, RayonThreadPool, Result,
    SharedQueueThreadPool, Span, ThreadPool, Workload,
};

/// Iterations of the math task. Each pool worker runs a full copy.
const MATH_OPS: u64 = 500_000;
/// Fixed worker count for the replicated math test.
const MATH_WORKERS: usize = 4;
/// Upper bound of the prime-counting test.
const PRIME_LIMIT: u64 = 50_000;

#[derive(Parser)]
#[command(name = "parabench-quick", version, about = "Quick CPU parallelism benchmark")]
struct Cli {
    /// Worker count for the partitioned tests (defaults to hardware threads)
    #[arg(long, value_name = "N")]
    workers: Option<usize>,

    /// Thread pool implementation: "shared", "naive", or "rayon"
    #[arg(long, default_value = "shared", value_name = "POOL-NAME")]
    pool: String,

    /// Serve work orders on stdin (used by the process-pool strategy)
    #[arg(long, hide = true)]
    worker: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let outcome = if cli.worker {
        parabench::worker::serve()
    } else {
        run(cli)
    };

    if let Err(e) = outcome {
        error!("{}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let workers = cli.workers.unwrap_or_else(num_cpus::get);

    match cli.pool.as_str() {
        "shared" => run_suite::<SharedQueueThreadPool>(workers),
        "naive" => run_suite::<NaiveThreadPool>(workers),
        "rayon" => run_suite::<RayonThreadPool>(workers),
        other => Err(BenchError::StringError(format!(
            "Invalid pool: {other}. Must be 'shared', 'naive', or 'rayon'."
        ))),
    }
}

fn run_suite<P: ThreadPool>(workers: usize) -> Result<()> {
    report::banner("Multithreading vs Multiprocessing CPU Test");
    println!("Available processors: {}", num_cpus::get());
    report::blank();

    math_test::<P>()?;
    prime_test::<P>(workers)?;

    report::section("KEY FINDINGS");
    println!("- Threads: real parallel speedup; no runtime lock serializes them");
    println!("- Processes: also parallel, but pay spawn and JSON transfer costs");
    println!("- At this workload size the process overhead is clearly visible");
    Ok(())
}

/// Replicated math task: every worker computes the full span once.
fn math_test<P: ThreadPool>() -> Result<()> {
    report::section("Simple CPU Test (Math Operations)");

    let harness = Harness::new(MATH_WORKERS)?;
    let workload = Workload::Trig { with_sqrt: false };
    let span = Span::new(0, MATH_OPS);

    let single = harness.run_inline(workload, span)?;
    report::outcome("Single thread", &single);

    let threads = harness.run_threads_replicated::<P>(workload, span)?;
    report::outcome(&format!("{MATH_WORKERS} threads"), &threads);
    report::speedup("Threading", &single, &threads);

    let processes = harness.run_processes_replicated(workload, span)?;
    report::outcome(&format!("{MATH_WORKERS} processes"), &processes);
    report::speedup("Multiprocessing", &single, &processes);

    report::blank();
    Ok(())
}

/// Partitioned prime count over `[2, PRIME_LIMIT)`.
fn prime_test<P: ThreadPool>(workers: usize) -> Result<()> {
    report::section("Prime Number Test");

    let harness = Harness::new(workers)?;
    let span = Span::new(2, PRIME_LIMIT);

    let single = harness.run_inline(Workload::Primes, span)?;
    report::outcome("Single-threaded", &single);

    let threads = harness.run_threads::<P>(Workload::Primes, span)?;
    report::outcome(&format!("Multi-threaded ({workers} workers)"), &threads);
    report::speedup("Threading", &single, &threads);

    let processes = harness.run_processes(Workload::Primes, span)?;
    report::outcome(&format!("Multi-process ({workers} workers)"), &processes);
    report::speedup("Multiprocessing", &single, &processes);

    report::blank();
    Ok(())
}
