//! Recursive reference implementation.
//!
//! Direct transcription of the three-case recurrence, used only to
//! cross-check the iterative engine in tests. Recursion depth and call count
//! grow hyper-exponentially, so inputs beyond small bounds (roughly `m >= 4`)
//! are expected to exhaust the host call stack; that is an accepted
//! limitation of the oracle, not a defect. The engine is the production path.

use crate::input::as_natural;

/// Evaluate `A(m, n)` recursively, with the same input gate and sentinel
/// convention as the iterative entry point: invalid input yields `0`.
pub fn compute_recursive(m: f64, n: f64) -> u64 {
    match (as_natural(m), as_natural(n)) {
        (Some(m), Some(n)) => ack(m, n),
        _ => 0,
    }
}

fn ack(m: u64, n: u64) -> u64 {
    if m == 0 {
        n + 1
    } else if n == 0 {
        ack(m - 1, 1)
    } else {
        ack(m - 1, ack(m, n - 1))
    }
}
