/// The index modulus applied by `fib_sum`, bounding per-term cost.
const FIB_MOD: u64 = 40;

/// Computes the `n`th Fibonacci number iteratively.
///
/// Deliberately O(n) with no memoization: the per-call loop is the CPU work
/// the benchmark measures. Callers keep `n` below 40 via `fib_sum`'s
/// modulus, so the result fits comfortably in a `u64`.
pub fn fibonacci(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 2..=n {
        let next = a + b;
        a = b;
        b = next;
    }
    b
}

/// Sums `fibonacci(i mod 40)` for `i` in `[start, end)`.
pub fn fib_sum(start: u64, end: u64) -> u64 {
    (start..end).map(|i| fibonacci(i % FIB_MOD)).sum()
}
