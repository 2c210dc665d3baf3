//! Cross-validation of the iterative engine against the recursive oracle.
//!
//! The oracle is a direct transcription of the recurrence and only survives
//! small inputs, so the grid stays inside m <= 3, n <= 6.

use ackermann_engine::{compute, compute_recursive, Engine};

#[test]
fn test_engine_matches_oracle_on_grid() {
    let mut engine = Engine::new();
    for m in 0..=3u64 {
        for n in 0..=6u64 {
            let iterative = engine.eval(m, n);
            let recursive = compute_recursive(m as f64, n as f64);
            assert_eq!(
                iterative, recursive,
                "A({}, {}) disagrees: engine {} vs oracle {}",
                m, n, iterative, recursive
            );
        }
    }
}

#[test]
fn test_known_values() {
    assert_eq!(compute(0.0, 0.0), 1);
    assert_eq!(compute(1.0, 1.0), 3);
    assert_eq!(compute(2.0, 2.0), 7);
    assert_eq!(compute(2.0, 3.0), 9);
    assert_eq!(compute(3.0, 3.0), 61);
}

#[test]
fn test_strictly_increasing_in_n() {
    let mut engine = Engine::new();
    for m in 0..=3u64 {
        for n in 0..6u64 {
            assert!(
                engine.eval(m, n + 1) > engine.eval(m, n),
                "A({}, {}) not strictly below A({}, {})",
                m, n, m, n + 1
            );
        }
    }
}

#[test]
fn test_non_decreasing_in_m() {
    let mut engine = Engine::new();
    for n in 0..=6u64 {
        for m in 0..3u64 {
            assert!(
                engine.eval(m + 1, n) >= engine.eval(m, n),
                "A({}, {}) decreased against A({}, {})",
                m + 1, n, m, n
            );
        }
    }
}

#[test]
fn test_invalid_inputs_yield_sentinel_in_both() {
    let cases: &[(f64, f64)] = &[
        (-1.0, 0.0),
        (1.5, 2.0),
        (f64::NAN, 1.0),
        (1.0, f64::NAN),
        (f64::INFINITY, 0.0),
        (0.0, f64::NEG_INFINITY),
    ];
    for &(m, n) in cases {
        assert_eq!(compute(m, n), 0, "compute({}, {}) not rejected", m, n);
        assert_eq!(
            compute_recursive(m, n),
            0,
            "compute_recursive({}, {}) not rejected",
            m, n
        );
    }
}

#[test]
fn test_integral_floats_are_accepted() {
    // the boundary is f64; 3.0 is the natural number 3
    assert_eq!(compute(3.0, 3.0), compute_recursive(3.0, 3.0));
}
