//! Full dynamic-programming table of LCS lengths.
//!
//! Rows are indexed by prefixes of `a` (0..=n) and columns by prefixes of `b`
//! (0..=m). The whole grid is kept because the backward enumeration may visit
//! any cell, so unlike a length-only LCS we cannot roll two rows.
//!
//! Cells live in one contiguous row-major buffer.

use crate::error::LcsError;

/// A DP coordinate `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// `get(i, j)` is the LCS length of `a[0..i)` and `b[0..j)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>, // length = rows * cols
}

impl LengthTable {
    /// Fill the table for `a` (rows) against `b` (columns).
    ///
    /// Empty inputs are valid and give an all-zero table. Fails when
    /// `(a.len() + 1) * (b.len() + 1)` cells cannot be addressed or allocated.
    pub fn build<S: PartialEq>(a: &[S], b: &[S]) -> Result<Self, LcsError> {
        let too_large = || LcsError::TableTooLarge {
            rows: a.len().saturating_add(1),
            cols: b.len().saturating_add(1),
        };
        let rows = a.len().checked_add(1).ok_or_else(too_large)?;
        let cols = b.len().checked_add(1).ok_or_else(too_large)?;
        let len = rows.checked_mul(cols).ok_or_else(too_large)?;
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("build_length_table", rows, cols);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(LcsError::oom("length table"))?;
        // Row 0 is the empty prefix of `a`.
        cells.resize(cols, 0);

        for i in 1..rows {
            let ch = &a[i - 1];
            let up_row = (i - 1) * cols;
            cells.push(0);
            for j in 1..cols {
                let value = if *ch == b[j - 1] {
                    cells[up_row + j - 1] + 1
                } else {
                    let up = cells[up_row + j];
                    let left = cells[i * cols + j - 1];
                    up.max(left)
                };
                cells.push(value);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows, `a.len() + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `b.len() + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// # Panics
    /// Panics if `(i, j)` lies outside the table.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        self.cells[i * self.cols + j]
    }

    #[inline]
    pub fn at(&self, cell: Cell) -> u32 {
        self.get(cell.row, cell.col)
    }

    /// Row `i` as a slice of `cols()` values.
    pub fn row(&self, i: usize) -> &[u32] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Length of the LCS of the full inputs, `get(n, m)`.
    #[inline]
    pub fn lcs_len(&self) -> u32 {
        *self.cells.last().unwrap_or(&0)
    }
}
