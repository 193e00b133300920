/// Accumulates sin(i)·cos(i) for `i` in `[start, end)`.
///
/// With `with_sqrt`, each step also adds √i. The ranges used by the
/// benchmark suites are non-negative, so the square root is always defined.
pub fn trig_sum(start: u64, end: u64, with_sqrt: bool) -> f64 {
    let mut result = 0.0;
    for i in start..end {
        let x = i as f64;
        result += x.sin() * x.cos();
        if with_sqrt {
            result += x.sqrt();
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::trig_sum;

    #[test]
    fn empty_range_sums_to_zero() {
        assert_eq!(trig_sum(5, 5, false), 0.0);
        assert_eq!(trig_sum(5, 5, true), 0.0);
    }

    #[test]
    fn single_step_matches_direct_evaluation() {
        let got = trig_sum(1, 2, false);
        assert!((got - 1f64.sin() * 1f64.cos()).abs() < 1e-12);

        let got = trig_sum(4, 5, true);
        assert!((got - (4f64.sin() * 4f64.cos() + 2.0)).abs() < 1e-12);
    }

    #[test]
    fn split_ranges_sum_to_the_whole() {
        let whole = trig_sum(0, 10_000, true);
        let halves = trig_sum(0, 5_000, true) + trig_sum(5_000, 10_000, true);
        assert!((whole - halves).abs() <= 1e-6 * whole.abs());
    }
}
