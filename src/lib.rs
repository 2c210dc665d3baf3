/// Ackermann Engine - non-recursive Ackermann-Peter evaluator
///
/// This library evaluates the Ackermann-Peter function `A(m, n)` without
/// consuming the host call stack: call/return semantics are encoded as
/// explicit frames on a heap-resident stack, and every resolved sub-call is
/// cached in a memo table that lives as long as the owning engine.
///
/// # Architecture
///
/// - **`input`** - validates the numeric boundary (finite, non-negative,
///   integral arguments only).
/// - **`memo`** - sparse two-level `(m, n) -> A(m, n)` cache with a set-once
///   invariant; grows lazily, never shrinks.
/// - **`engine`** - the stack machine. Pending calls are tagged frames
///   (`Call`, `AwaitInner`, `AwaitFinal`); each transition either expands a
///   call into its child or consumes a resolved `Value` into the frame
///   beneath it, until a single value remains.
/// - **`oracle`** - the textbook recursive implementation, kept only as a
///   cross-check at small inputs.
///
/// # Example
///
/// ```rust
/// use ackermann_engine::Engine;
///
/// let mut engine = Engine::new();
/// assert_eq!(engine.eval(3, 3), 61);
/// // the table persists: this call is a pure memo hit
/// assert_eq!(engine.eval(3, 3), 61);
/// ```
///
/// # Error convention
///
/// The one-shot entry points `compute` and `compute_recursive` preserve the
/// legacy convention of returning the sentinel `0` on invalid input; since
/// `A(m, n) >= 1` for all naturals, the sentinel never collides with a real
/// result. [`Engine::try_compute`] reports rejection as an explicit
/// [`EvalError`] instead.
///
/// # Cost warning
///
/// Ackermann growth is hyper-exponential. The engine trades the host
/// call-stack limit for heap and time, so `m >= 4` with nontrivial `n` is
/// still out of practical reach; bound arguments externally in
/// latency-sensitive contexts.
pub mod engine;
pub mod input;
pub mod memo;
pub mod oracle;

// Re-export commonly used types
pub use engine::{compute, Engine, EngineStats, EvalError, EvalResult, Frame};
pub use memo::MemoTable;
pub use oracle::compute_recursive;
