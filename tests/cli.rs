//! CLI behavior of the benchmark binaries.

use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn quick_suite_prints_sections_and_speedups() {
    let mut cmd = Command::cargo_bin("parabench-quick").unwrap();
    cmd.args(["--workers", "2"])
        .assert()
        .success()
        .stdout(contains("=== Simple CPU Test (Math Operations) ==="))
        .stdout(contains("=== Prime Number Test ==="))
        .stdout(contains("Threading speedup:"))
        .stdout(contains("Multiprocessing speedup:"))
        .stdout(contains("=== KEY FINDINGS ==="));
}

#[test]
fn quick_suite_reports_the_known_prime_count() {
    let mut cmd = Command::cargo_bin("parabench-quick").unwrap();
    cmd.args(["--workers", "2"])
        .assert()
        .success()
        .stdout(contains("Result: 5133"));
}

#[test]
fn invalid_pool_name_is_rejected() {
    let mut cmd = Command::cargo_bin("parabench-quick").unwrap();
    cmd.args(["--pool", "bogus"])
        .assert()
        .failure()
        .stderr(contains("Invalid pool"));
}

#[test]
fn zero_workers_is_rejected() {
    let mut cmd = Command::cargo_bin("parabench-quick").unwrap();
    cmd.args(["--workers", "0"])
        .assert()
        .failure()
        .stderr(contains("worker count"));
}

#[test]
fn worker_mode_answers_orders_on_stdin() {
    let orders = concat!(
        r#"{"workload":"Primes","span":{"start":2,"end":10}}"#,
        r#"{"workload":"Fib","span":{"start":0,"end":5}}"#,
        r#"{"workload":{"Trig":{"with_sqrt":false}},"span":{"start":5,"end":5}}"#,
    );

    let mut cmd = Command::cargo_bin("parabench-quick").unwrap();
    cmd.arg("--worker")
        .write_stdin(orders)
        .assert()
        .success()
        .stdout(contains(r#"{"Ok":{"Count":4}}"#))
        .stdout(contains(r#"{"Ok":{"Count":7}}"#))
        .stdout(contains(r#"{"Ok":{"Sum":0.0}}"#));
}

#[test]
fn cpu_suite_help_describes_the_benchmark() {
    let mut cmd = Command::cargo_bin("parabench-cpu").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("CPU-intensive parallelism benchmark"))
        .stdout(contains("--workers"))
        .stdout(contains("--pool"));
}

#[test]
fn large_suite_help_describes_the_benchmark() {
    let mut cmd = Command::cargo_bin("parabench-large").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("Large-scale CPU parallelism benchmark"));
}
