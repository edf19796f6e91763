// ============================================================================
// Numeric Module
// Accuracy-preserving arithmetic on binary floating-point values
// ============================================================================
//
// This module provides:
// - accuracy(): fractional digit count of a value's canonical decimal text
// - add/multiply/divide: float operations rounded to the operands' accuracy
//
// Design principles:
// - Values stay f64; accuracy is recomputed from each operand, never stored
// - Non-finite values propagate untouched (no panics, no errors)
// - Rounding happens in rust_decimal with midpoint-away-from-zero

mod decimal_math;

pub use decimal_math::{accuracy, add, divide, multiply, round_to_accuracy};
