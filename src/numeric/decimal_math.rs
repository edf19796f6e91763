// ============================================================================
// Decimal Math
// Float arithmetic rounded to the visual precision of its operands
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Number of digits after the decimal point in the canonical text of `n`.
///
/// The canonical text is Rust's `Display` for `f64` (shortest round-trip,
/// never exponential), so `2.0` has accuracy 0, `1.25` has 2 and `1e-7`
/// has 7. Non-finite values have accuracy 0.
///
/// # Example
/// ```
/// use increment::numeric::accuracy;
///
/// assert_eq!(accuracy(3.0), 0);
/// assert_eq!(accuracy(-0.25), 2);
/// ```
#[inline]
pub fn accuracy(n: f64) -> u32 {
    text_accuracy(&n.to_string())
}

fn text_accuracy(text: &str) -> u32 {
    match text.find('.') {
        Some(pos) => u32::try_from(text.len() - pos - 1).unwrap_or(u32::MAX),
        None => 0,
    }
}

/// Multiply and round to the larger accuracy of the two operands.
///
/// `multiply(1.1, 2.2)` is `2.4`, not `2.4200000000000004`.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    round_to_accuracy(a * b, accuracy(a).max(accuracy(b)))
}

/// Add and round to the larger accuracy of the two operands.
///
/// `add(0.1, 0.2)` is `0.3`.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    round_to_accuracy(a + b, accuracy(a).max(accuracy(b)))
}

/// Divide and round to the larger accuracy of the two operands.
///
/// Division by zero yields the IEEE result (infinity or NaN).
#[inline]
pub fn divide(a: f64, b: f64) -> f64 {
    round_to_accuracy(a / b, accuracy(a).max(accuracy(b)))
}

/// Round `value` to `digits` fractional digits, midpoint away from zero.
///
/// The value is returned unchanged when it is not finite, when it already
/// has no more than `digits` fractional digits, or when it cannot be held
/// by a `Decimal` at that scale.
pub fn round_to_accuracy(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let text = value.to_string();
    if digits >= text_accuracy(&text) {
        return value;
    }
    if digits > MAX_DECIMAL_SCALE {
        tracing::trace!(value, digits, "accuracy exceeds decimal scale, keeping raw value");
        return value;
    }

    let decimal = match Decimal::from_str(&text) {
        Ok(decimal) => decimal,
        Err(err) => {
            tracing::trace!(value, %err, "value outside decimal range, keeping raw value");
            return value;
        }
    };

    let rounded = decimal.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);

    // Going back through text gives the same f64 a user typing the digits would get
    rounded.to_string().parse().unwrap_or(value)
}
