// ============================================================================
// Sequence Module
// Per-cursor values: start + increment * index
// ============================================================================

use crate::numeric::{add, multiply};

/// Value at `index` of the sequence starting at `start`.
///
/// Computed as `add(multiply(increment, index), start)`. The multiplication
/// runs first so the product carries the increment's accuracy before the
/// start's accuracy joins in the addition.
///
/// # Example
/// ```
/// use increment::sequence::next_value;
///
/// assert_eq!(next_value(0.0, 0.1, 3), 0.3);
/// assert_eq!(next_value(1.0, 1.0, 2), 3.0);
/// ```
#[inline]
pub fn next_value(start: f64, increment: f64, index: usize) -> f64 {
    add(multiply(increment, index as f64), start)
}

/// Lazy, unbounded iterator over [`next_value`] for index 0, 1, 2, ...
///
/// Nothing is materialized; zip it with cursors or `take(n)`.
#[derive(Debug, Clone)]
pub struct Sequence {
    start: f64,
    increment: f64,
    index: usize,
}

impl Sequence {
    pub fn new(start: f64, increment: f64) -> Self {
        Self {
            start,
            increment,
            index: 0,
        }
    }

    /// Index of the next value to be yielded.
    pub fn position(&self) -> usize {
        self.index
    }
}

impl Iterator for Sequence {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        let value = next_value(self.start, self.increment, self.index);
        self.index = self.index.checked_add(1)?;
        Some(value)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<f64> {
        self.index = self.index.checked_add(n)?;
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_value_integers() {
        assert_eq!(next_value(0.0, 1.0, 0), 0.0);
        assert_eq!(next_value(0.0, 1.0, 1), 1.0);
        assert_eq!(next_value(0.0, 1.0, 2), 2.0);
        assert_eq!(next_value(1.0, 1.0, 0), 1.0);
        assert_eq!(next_value(1.0, 1.0, 1), 2.0);
    }

    #[test]
    fn test_next_value_keeps_accuracy() {
        assert_eq!(next_value(0.0, 0.1, 1), 0.1);
        assert_eq!(next_value(0.0, 0.1, 3), 0.3);
        assert_eq!(next_value(0.05, 0.1, 2), 0.25);
        assert_eq!(next_value(10.0, -0.5, 3), 8.5);
    }

    #[test]
    fn test_sequence_matches_next_value() {
        let values: Vec<f64> = Sequence::new(1.5, 0.2).take(4).collect();
        assert_eq!(values, vec![1.5, 1.7, 1.9, 2.1]);
    }

    #[test]
    fn test_sequence_nth() {
        let mut sequence = Sequence::new(0.0, 2.0);
        assert_eq!(sequence.nth(3), Some(6.0));
        assert_eq!(sequence.position(), 4);
        assert_eq!(sequence.next(), Some(8.0));
    }
}
