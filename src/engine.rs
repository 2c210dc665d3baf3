//! Iterative Ackermann evaluator.
//!
//! The engine simulates the recursive definition of the Ackermann-Peter
//! function with an explicit, heap-resident frame stack instead of host call
//! frames, so evaluation depth is bounded by heap and time rather than by the
//! host call stack. Every resolved call is memoized in a table owned by the
//! engine, which persists across calls on the same engine instance.
//!
//! # Recurrence
//!
//! ```text
//! A(0, n) = n + 1
//! A(m, 0) = A(m-1, 1)
//! A(m, n) = A(m-1, A(m, n-1))
//! ```
//!
//! # Stack discipline
//!
//! Each pending call is a tagged frame carrying its own discriminant. A call
//! with two nested sub-calls passes through three stages: `Call` (not yet
//! expanded), `AwaitInner` (inner child `A(m, n-1)` dispatched), and
//! `AwaitFinal` (one child outstanding whose value is the final answer for
//! the pair). Read bottom-to-top, the stack is always a valid partial
//! unwinding of the recursive call tree, with finished subtrees replaced by
//! `Value` frames.

use std::ops::ControlFlow;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::input::as_natural;
use crate::memo::MemoTable;

/// Result of a checked evaluation
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur at the evaluation boundary
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Argument is not a finite, non-negative integer
    InvalidArgument { name: &'static str, value: f64 },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { name, value } => {
                write!(f, "invalid argument {}: {} is not a natural number", name, value)
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// A unit of pending work on the explicit stack.
///
/// `Call`, `AwaitInner` and `AwaitFinal` are the progress stages of an
/// unresolved call; `Value` is a resolved result waiting to be consumed by
/// the frame beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// An unexpanded request to compute `A(m, n)`
    Call { m: u64, n: u64 },
    /// `A(m, n-1)` has been dispatched; its value feeds the outer step
    /// `A(m-1, <inner>)`
    AwaitInner { m: u64, n: u64 },
    /// Exactly one child outstanding; that child's value is the final
    /// answer for `(m, n)` and is memoized on arrival
    AwaitFinal { m: u64, n: u64 },
    /// A resolved value awaiting consumption
    Value(u64),
}

/// Counters describing the work an engine has performed so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Stack-machine transitions executed
    pub steps: u64,
    /// Deepest frame stack observed
    pub max_depth: usize,
    /// Calls answered directly from the memo table
    pub memo_hits: u64,
    /// Calls that required expansion
    pub memo_misses: u64,
    /// Resolved cells currently in the memo table
    pub resolved_entries: usize,
}

/// Explicit-stack evaluator owning a persistent memo table.
///
/// The engine is fully synchronous and single-threaded; `compute` runs to
/// completion before returning, and its cost is unbounded in the worst case
/// (Ackermann growth), so callers in latency-sensitive contexts should bound
/// `m` and `n` externally. Each engine owns its own table, so independent
/// engines never interfere.
#[derive(Debug, Default)]
pub struct Engine {
    memo: MemoTable,
    stack: SmallVec<[Frame; 32]>,
    steps: u64,
    max_depth: usize,
    memo_hits: u64,
    memo_misses: u64,
}

impl Engine {
    /// Create an engine with an empty memo table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `A(m, n)` for already-validated natural arguments.
    ///
    /// Terminates for every input: each transition strictly decreases a
    /// well-founded measure on the `(m, n)` pairs reachable from the initial
    /// call. The result is memoized before returning.
    pub fn eval(&mut self, m: u64, n: u64) -> u64 {
        if let Some(v) = self.memo.get(m, n) {
            self.memo_hits += 1;
            trace!(target: "ackermann_engine::engine", m, n, value = v, "memo hit, no evaluation");
            return v;
        }

        self.memo.ensure_rows(m);
        self.stack.clear();
        self.stack.push(Frame::Call { m, n });
        let value = self.run();
        debug!(
            target: "ackermann_engine::engine",
            m, n, value,
            steps = self.steps,
            "evaluation complete"
        );
        value
    }

    /// Checked entry point: validates both arguments and reports rejection
    /// as a distinguishable error instead of the legacy sentinel.
    pub fn try_compute(&mut self, m: f64, n: f64) -> EvalResult<u64> {
        let m_nat = as_natural(m).ok_or(EvalError::InvalidArgument { name: "m", value: m })?;
        let n_nat = as_natural(n).ok_or(EvalError::InvalidArgument { name: "n", value: n })?;
        Ok(self.eval(m_nat, n_nat))
    }

    /// Legacy entry point: returns the sentinel `0` on invalid input.
    ///
    /// `A(m, n) >= 1` for all naturals, so `0` never collides with a real
    /// result; callers that need to distinguish rejection from a computed
    /// value should use [`Engine::try_compute`].
    pub fn compute(&mut self, m: f64, n: f64) -> u64 {
        match self.try_compute(m, n) {
            Ok(v) => v,
            Err(err) => {
                debug!(target: "ackermann_engine::engine", %err, "rejecting input, returning sentinel 0");
                0
            }
        }
    }

    /// The engine's memo table.
    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    /// Work counters accumulated over the engine's lifetime.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            steps: self.steps,
            max_depth: self.max_depth,
            memo_hits: self.memo_hits,
            memo_misses: self.memo_misses,
            resolved_entries: self.memo.resolved_entries(),
        }
    }

    /// Run the stack machine to completion.
    fn run(&mut self) -> u64 {
        loop {
            match self.step() {
                ControlFlow::Continue(()) => continue,
                ControlFlow::Break(value) => return value,
            }
        }
    }

    /// Execute a single transition of the stack machine.
    ///
    /// The top of the stack is always a `Call` or a `Value`; await frames
    /// only ever sit beneath the frame they are waiting on.
    fn step(&mut self) -> ControlFlow<u64> {
        self.steps += 1;
        self.max_depth = self.max_depth.max(self.stack.len());

        let top = self.stack.len() - 1;
        match self.stack[top] {
            Frame::Call { m, n } => {
                if let Some(v) = self.memo.get(m, n) {
                    self.memo_hits += 1;
                    trace!(target: "ackermann_engine::engine", m, n, value = v, "memo hit");
                    self.stack[top] = Frame::Value(v);
                } else if m == 0 {
                    self.memo_misses += 1;
                    let v = n + 1;
                    trace!(target: "ackermann_engine::engine", m, n, value = v, "base case");
                    self.memo.set(0, n, v);
                    self.stack[top] = Frame::Value(v);
                } else if n == 0 {
                    self.memo_misses += 1;
                    trace!(target: "ackermann_engine::engine", m, n, "expand A(m-1, 1)");
                    self.stack[top] = Frame::AwaitFinal { m, n: 0 };
                    self.stack.push(Frame::Call { m: m - 1, n: 1 });
                } else {
                    self.memo_misses += 1;
                    trace!(target: "ackermann_engine::engine", m, n, "expand inner A(m, n-1)");
                    self.stack[top] = Frame::AwaitInner { m, n };
                    self.stack.push(Frame::Call { m, n: n - 1 });
                }
                ControlFlow::Continue(())
            }
            Frame::Value(v) => {
                if top == 0 {
                    // Single value frame left: the original call is resolved
                    // and was memoized when its final value was produced.
                    return ControlFlow::Break(v);
                }
                self.stack.pop();
                let below = self.stack.len() - 1;
                match self.stack[below] {
                    Frame::AwaitInner { m, n } => {
                        trace!(
                            target: "ackermann_engine::engine",
                            m, n, inner = v, "inner resolved, expand outer A(m-1, inner)"
                        );
                        self.stack[below] = Frame::AwaitFinal { m, n };
                        self.stack.push(Frame::Call { m: m - 1, n: v });
                    }
                    Frame::AwaitFinal { m, n } => {
                        trace!(target: "ackermann_engine::engine", m, n, value = v, "call resolved");
                        self.memo.set(m, n, v);
                        self.stack[below] = Frame::Value(v);
                    }
                    Frame::Call { .. } | Frame::Value(_) => {
                        unreachable!("value frame can only rest on an await frame")
                    }
                }
                ControlFlow::Continue(())
            }
            Frame::AwaitInner { .. } | Frame::AwaitFinal { .. } => {
                unreachable!("await frame can never be on top of the stack")
            }
        }
    }
}

/// One-shot evaluation with a fresh engine (and a fresh memo table) per call.
///
/// Invalid input yields the sentinel `0`. Callers that evaluate repeatedly
/// should hold an [`Engine`] instead, to reuse its memo table across calls.
pub fn compute(m: f64, n: f64) -> u64 {
    Engine::new().compute(m, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_case_row_zero() {
        let mut engine = Engine::new();
        for n in 0..10 {
            assert_eq!(engine.eval(0, n), n + 1);
        }
    }

    #[test]
    fn test_known_values() {
        let mut engine = Engine::new();
        assert_eq!(engine.eval(0, 0), 1);
        assert_eq!(engine.eval(1, 1), 3);
        assert_eq!(engine.eval(2, 2), 7);
        assert_eq!(engine.eval(2, 3), 9);
        assert_eq!(engine.eval(3, 3), 61);
    }

    #[test]
    fn test_row_formulas() {
        // A(1, n) = n + 2, A(2, n) = 2n + 3, A(3, n) = 2^(n+3) - 3
        let mut engine = Engine::new();
        for n in 0..8 {
            assert_eq!(engine.eval(1, n), n + 2);
            assert_eq!(engine.eval(2, n), 2 * n + 3);
            assert_eq!(engine.eval(3, n), (1u64 << (n + 3)) - 3);
        }
    }

    #[test]
    fn test_repeated_eval_is_idempotent() {
        let mut engine = Engine::new();
        let first = engine.eval(3, 4);
        let steps_after_first = engine.stats().steps;
        let second = engine.eval(3, 4);
        assert_eq!(first, second);
        // second call is a pure memo hit, no transitions executed
        assert_eq!(engine.stats().steps, steps_after_first);
    }

    #[test]
    fn test_memo_populated_along_the_way() {
        let mut engine = Engine::new();
        engine.eval(2, 2);
        // the final and its sub-calls are all cached
        assert_eq!(engine.memo().get(2, 2), Some(7));
        assert_eq!(engine.memo().get(2, 1), Some(5));
        assert_eq!(engine.memo().get(1, 0), Some(2));
        // row 0 is only ever reached with inner results, and those are
        // always >= 1, so (0, 0) stays unset while (0, 1) resolves
        assert_eq!(engine.memo().get(0, 1), Some(2));
        assert_eq!(engine.memo().get(0, 0), None);
    }

    #[test]
    fn test_memo_reused_across_calls() {
        let mut engine = Engine::new();
        engine.eval(2, 3);
        let resolved = engine.stats().resolved_entries;
        // a smaller call is answered entirely from the table
        engine.eval(2, 1);
        assert_eq!(engine.stats().resolved_entries, resolved);
    }

    #[test]
    fn test_try_compute_rejects_invalid() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.try_compute(-1.0, 0.0),
            Err(EvalError::InvalidArgument { name: "m", value: -1.0 })
        );
        assert_eq!(
            engine.try_compute(1.0, 2.5),
            Err(EvalError::InvalidArgument { name: "n", value: 2.5 })
        );
        assert!(engine.try_compute(f64::NAN, 1.0).is_err());
        assert_eq!(engine.try_compute(2.0, 2.0), Ok(7));
    }

    #[test]
    fn test_compute_sentinel_on_invalid() {
        let mut engine = Engine::new();
        assert_eq!(engine.compute(-1.0, 0.0), 0);
        assert_eq!(engine.compute(1.5, 2.0), 0);
        assert_eq!(engine.compute(f64::NAN, 1.0), 0);
        assert_eq!(engine.compute(1.0, f64::INFINITY), 0);
        assert_eq!(engine.compute(3.0, 3.0), 61);
    }

    #[test]
    fn test_stats_track_work() {
        let mut engine = Engine::new();
        assert_eq!(engine.stats(), EngineStats::default());
        engine.eval(2, 2);
        let stats = engine.stats();
        assert!(stats.steps > 0);
        assert!(stats.max_depth >= 2);
        assert!(stats.memo_misses > 0);
        assert!(stats.resolved_entries > 0);
    }

    #[test]
    fn test_one_shot_compute() {
        assert_eq!(compute(2.0, 3.0), 9);
        assert_eq!(compute(-1.0, 0.0), 0);
    }

    #[test]
    fn test_independent_engines_do_not_interfere() {
        let mut a = Engine::new();
        let mut b = Engine::new();
        a.eval(3, 3);
        assert_eq!(b.stats().resolved_entries, 0);
        assert_eq!(b.eval(1, 1), 3);
    }
}
