//! Console reporting for the benchmark binaries.
//!
//! The report format is fixed: a banner, `=== section ===` headers, one
//! result/time line per strategy, and speedup lines relative to the
//! single-threaded baseline. Everything goes to stdout; logging stays on
//! stderr.

use crate::harness::Trial;

/// Prints the top-of-report banner with an underline.
pub fn banner(title: &str) {
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
}

/// Prints a `=== section ===` header.
pub fn section(title: &str) {
    println!("=== {title} ===");
}

/// Prints one strategy's result and elapsed time.
pub fn outcome(label: &str, trial: &Trial) {
    println!(
        "{label} - Result: {}, Time: {:.3}s",
        trial.tally,
        trial.elapsed.as_secs_f64()
    );
}

/// Prints the speedup of `trial` over `baseline`.
pub fn speedup(label: &str, baseline: &Trial, trial: &Trial) {
    println!("{label} speedup: {:.2}x", trial.speedup_over(baseline));
}

/// Prints a blank separator line.
pub fn blank() {
    println!();
}
