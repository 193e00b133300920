//! CPU-intensive benchmark suite: the prime range scales with the worker
//! count, so every worker always has a full partition of real work.

use std::process::exit;

use clap::Parser;
use log::error;

use parabench::{
    report, BenchError, Harness, NaiveThreadPool, RayonThreadPool, Result,
    SharedQueueThreadPool, Span, ThreadPool, Trial, Workload,
};

/// Prime-range units per worker; the total range is this times the worker
/// count.
const PRIMES_PER_WORKER: u64 = 1_000_000;
/// Iterations of the math-operations test.
const MATH_OPS: u64 = 10_000_000;

#[derive(Parser)]
#[command(
    name = "parabench-cpu",
    version,
    about = "CPU-intensive parallelism benchmark"
)]
struct Cli {
    /// Worker count (defaults to hardware threads)
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
    report::banner("Multithreading vs Multiprocessing CPU Performance Test");
    println!("Available processors: {}", num_cpus::get());
    report::blank();

    let harness = Harness::new(workers)?;
    let span = Span::new(2, PRIMES_PER_WORKER * workers as u64);

    report::section("Single-threaded execution");
    let single = harness.run_inline(Workload::Primes, span)?;
    report::outcome("Single-threaded", &single);
    report::blank();

    report::section("Multi-threaded execution");
    println!("Using {workers} threads");
    let threads = harness.run_threads::<P>(Workload::Primes, span)?;
    report::outcome("Multi-threaded", &threads);
    report::blank();

    report::section("Multi-process execution");
    println!("Using {workers} processes");
    let processes = harness.run_processes(Workload::Primes, span)?;
    report::outcome("Multi-process", &processes);
    report::blank();

    summary(&single, &threads, &processes);
    math_test::<P>(&harness)?;

    report::section("Key Observations");
    println!("1. Threads divide the range and scale with available cores");
    println!("2. Processes scale too; their fixed cost shrinks as partitions grow");
    println!("3. There is no interpreter lock here, so neither strategy is serialized");
    Ok(())
}

fn summary(single: &Trial, threads: &Trial, processes: &Trial) {
    report::section("Performance Summary");
    println!("Single-threaded: {:.3}s (baseline)", single.elapsed.as_secs_f64());
    println!(
        "Multi-threaded: {:.3}s (speedup: {:.2}x)",
        threads.elapsed.as_secs_f64(),
        threads.speedup_over(single)
    );
    println!(
        "Multi-process: {:.3}s (speedup: {:.2}x)",
        processes.elapsed.as_secs_f64(),
        processes.speedup_over(single)
    );
    report::blank();
}

/// Partitioned math operations, the √-inclusive variant.
fn math_test<P: ThreadPool>(harness: &Harness) -> Result<()> {
    report::section("CPU-bound math operations test");

    let workload = Workload::Trig { with_sqrt: true };
    let span = Span::new(0, MATH_OPS);

    let single = harness.run_inline(workload, span)?;
    report::outcome("Single-threaded math", &single);

    let threads = harness.run_threads::<P>(workload, span)?;
    report::outcome("Multi-threaded math", &threads);
    report::speedup("Threading", &single, &threads);

    let processes = harness.run_processes(workload, span)?;
    report::outcome("Multi-process math", &processes);
    report::speedup("Multiprocessing", &single, &processes);

    report::blank();
    Ok(())
}
