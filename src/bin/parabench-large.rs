//! Large benchmark suite: bigger spans, where per-task overhead fades and
//! the strategies show their asymptotic behavior.

use std::process::exit;

use clap::Parser;
use log::error;

use parabench::{
    report, BenchError, Harness, NaiveThreadPool, RayonThreadPool, Result,
    SharedQueueThreadPool, Span, ThreadPool, Workload,
};

/// Iterations of the math task. Each pool worker runs a full copy.
const MATH_OPS: u64 = 5_000_000;
/// Fixed worker count for the replicated math test.
const MATH_WORKERS: usize = 4;
/// Upper bound of the prime-counting test.
const PRIME_LIMIT: u64 = 2_000_000;
/// Number of Fibonacci summation indices.
const FIB_ITERATIONS: u64 = 1_000_000;

#[derive(Parser)]
#[command(
    name = "parabench-large",
    version,
    about = "Large-scale CPU parallelism benchmark"
)]
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
    report::banner("Large-Scale Multithreading vs Multiprocessing Test");
    println!("Available processors: {}", num_cpus::get());
    report::blank();

    math_test::<P>()?;
    prime_test::<P>(workers)?;
    fibonacci_test::<P>(workers)?;

    report::section("LARGE-SCALE TEST FINDINGS");
    println!("With larger workloads:");
    println!("- Threading: near-linear scaling across cores");
    println!("- Multiprocessing: comparable scaling; spawn cost is amortized");
    println!("- Process overhead: less significant with larger tasks");
    Ok(())
}

/// Replicated math task: every worker computes the full span once.
fn math_test<P: ThreadPool>() -> Result<()> {
    report::section("Large CPU Test (Math Operations)");
    println!("Processing {MATH_OPS} math operations per task...");

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

fn prime_test<P: ThreadPool>(workers: usize) -> Result<()> {
    report::section("Large Prime Number Test");
    println!("Finding primes up to {PRIME_LIMIT}...");

    let harness = Harness::new(workers)?;
    let span = Span::new(2, PRIME_LIMIT);

    let single = harness.run_inline(Workload::Primes, span)?;
    report::outcome("Single-threaded", &single);

    let threads = harness.run_threads::<P>(Workload::Primes, span)?;
    report::outcome("Multi-threaded", &threads);
    report::speedup("Threading", &single, &threads);

    let processes = harness.run_processes(Workload::Primes, span)?;
    report::outcome("Multi-process", &processes);
    report::speedup("Multiprocessing", &single, &processes);

    report::blank();
    Ok(())
}

fn fibonacci_test<P: ThreadPool>(workers: usize) -> Result<()> {
    report::section("Fibonacci Test");
    println!("Computing fibonacci sums over {FIB_ITERATIONS} indices...");

    let harness = Harness::new(workers)?;
    let span = Span::new(0, FIB_ITERATIONS);

    let single = harness.run_inline(Workload::Fib, span)?;
    report::outcome("Single-threaded", &single);

    let threads = harness.run_threads::<P>(Workload::Fib, span)?;
    report::outcome("Multi-threaded", &threads);
    report::speedup("Threading", &single, &threads);

    let processes = harness.run_processes(Workload::Fib, span)?;
    report::outcome("Multi-process", &processes);
    report::speedup("Multiprocessing", &single, &processes);

    report::blank();
    Ok(())
}
