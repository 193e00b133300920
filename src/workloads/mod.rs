use std::fmt;

use serde::{Deserialize, Serialize};

use crate::partition::Span;
use crate::{BenchError, Result};

mod fib;
mod primes;
mod trig;

pub use self::fib::{fib_sum, fibonacci};
pub use self::primes::{count_primes_in_range, is_prime};
pub use self::trig::trig_sum;

/// A CPU-bound workload evaluated over a span of work units.
///
/// Workloads are pure and stateless: evaluating one touches no shared data,
/// so partitions of a span can be computed on any worker in any order. The
/// enum is serializable so an order can be shipped to a worker process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Workload {
    /// Count primes in the span by trial division.
    Primes,
    /// Accumulate sin(i)·cos(i), plus √i in the `with_sqrt` variant.
    Trig {
        /// Include the √i term in each step.
        with_sqrt: bool,
    },
    /// Sum Fibonacci numbers, each index reduced mod 40.
    Fib,
}

impl Workload {
    /// Evaluates the workload over one span, producing a single tally.
    pub fn run(self, span: Span) -> Tally {
        match self {
            Workload::Primes => Tally::Count(count_primes_in_range(span.start, span.end)),
            Workload::Trig { with_sqrt } => Tally::Sum(trig_sum(span.start, span.end, with_sqrt)),
            Workload::Fib => Tally::Count(fib_sum(span.start, span.end)),
        }
    }

    /// The identity tally for this workload's result kind.
    pub fn zero(self) -> Tally {
        match self {
            Workload::Primes | Workload::Fib => Tally::Count(0),
            Workload::Trig { .. } => Tally::Sum(0.0),
        }
    }
}

/// The scalar result of evaluating a workload over one span.
///
/// Tallies aggregate by summation, which is associative and commutative, so
/// partition boundaries do not affect the total (up to floating-point
/// rounding for `Sum`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tally {
    /// An exact integer count.
    Count(u64),
    /// A floating-point accumulation.
    Sum(f64),
}

impl Tally {
    /// Folds another tally of the same kind into this one.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::MixedTallies` if the kinds differ, which only
    /// happens when a worker answers with the wrong result kind.
    pub fn accumulate(self, other: Tally) -> Result<Tally> {
        match (self, other) {
            (Tally::Count(a), Tally::Count(b)) => Ok(Tally::Count(a + b)),
            (Tally::Sum(a), Tally::Sum(b)) => Ok(Tally::Sum(a + b)),
            _ => Err(BenchError::MixedTallies),
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tally::Count(n) => write!(f, "{n}"),
            Tally::Sum(x) => write!(f, "{x:.6}"),
        }
    }
}
