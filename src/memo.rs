//! Memo table for computed Ackermann values.
//!
//! The table is a sparse two-level cache mapping `(m, n)` to `A(m, n)`. Rows
//! and cells are created lazily on first access and the table never shrinks;
//! it lives exactly as long as the engine that owns it.
//!
//! # Set-once invariant
//!
//! The function is deterministic, so a cell, once set, never changes. An
//! attempt to overwrite a cell with a different value is a programming error
//! in the engine and is caught by a debug assertion.

/// Sparse two-level cache of resolved `(m, n) -> A(m, n)` entries.
#[derive(Debug, Default, Clone)]
pub struct MemoTable {
    /// `rows[m][n]` holds `A(m, n)` once resolved
    rows: Vec<Vec<Option<u64>>>,
}

impl MemoTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Look up a cached value. Absence is not an error.
    pub fn get(&self, m: u64, n: u64) -> Option<u64> {
        self.rows
            .get(m as usize)?
            .get(n as usize)
            .copied()
            .flatten()
    }

    /// Store a resolved value, growing rows `0..=m` and the column as needed.
    pub fn set(&mut self, m: u64, n: u64, value: u64) {
        self.ensure_rows(m);
        let row = &mut self.rows[m as usize];
        let n = n as usize;
        if row.len() <= n {
            row.resize(n + 1, None);
        }
        match row[n] {
            Some(existing) => {
                debug_assert_eq!(
                    existing, value,
                    "memo cell ({}, {}) rewritten with a different value",
                    m, n
                );
            }
            None => row[n] = Some(value),
        }
    }

    /// Pre-grow the table so rows `0..=m` exist as (possibly empty) rows.
    /// Idempotent; purely a capacity operation.
    pub fn ensure_rows(&mut self, m: u64) {
        let wanted = m as usize + 1;
        if self.rows.len() < wanted {
            self.rows.resize_with(wanted, Vec::new);
        }
    }

    /// Number of rows currently present.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cell `(m, n)` holds a resolved value.
    pub fn is_set(&self, m: u64, n: u64) -> bool {
        self.get(m, n).is_some()
    }

    /// Count of resolved cells across all rows.
    pub fn resolved_entries(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }
}
