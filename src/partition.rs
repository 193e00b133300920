use serde::{Deserialize, Serialize};

/// A half-open range `[start, end)` of work units assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// First unit, inclusive.
    pub start: u64,
    /// One past the last unit.
    pub end: u64,
}

impl Span {
    /// Creates a span over `[start, end)`.
    pub fn new(start: u64, end: u64) -> Self {
        Span { start, end }
    }

    /// Number of units in the span.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no units.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Splits a span into exactly `parts` contiguous, disjoint sub-spans.
///
/// Every sub-span has width `len / parts`, except the last, which extends
/// to the true end and absorbs the remainder. The sub-spans cover the input
/// exactly: no gaps, no overlaps.
///
/// # Panics
///
/// Panics if `parts` is zero.
pub fn split(span: Span, parts: usize) -> Vec<Span> {
    assert!(parts > 0, "cannot split a span into zero parts");

    let width = span.len() / parts as u64;
    (0..parts)
        .map(|i| {
            let start = span.start + i as u64 * width;
            let end = if i == parts - 1 {
                span.end
            } else {
                start + width
            };
            Span { start, end }
        })
        .collect()
}
