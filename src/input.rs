//! Input validation for the numeric boundary.
//!
//! The Ackermann function is defined over natural numbers only. Callers reach
//! the crate through an `f64` boundary, so the gate has to reject NaN, both
//! infinities, negative values and fractional values before the engine ever
//! sees an argument.

/// Convert `x` to a natural number, if it is one.
///
/// Returns `Some` iff `x` is finite, non-negative, has no fractional part,
/// and is losslessly representable as `u64`.
pub fn as_natural(x: f64) -> Option<u64> {
    // u64::MAX as f64 rounds up to exactly 2^64, so the bound must be strict
    // or the cast below would saturate
    if x.is_finite() && x >= 0.0 && x.fract() == 0.0 && x < u64::MAX as f64 {
        Some(x as u64)
    } else {
        None
    }
}

/// Check whether `x` is an eligible natural-number argument.
pub fn is_natural(x: f64) -> bool {
    as_natural(x).is_some()
}
