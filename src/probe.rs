//! Convergence lookahead used at branch points.
//!
//! From a tie cell the traversal can go up or left. Walking each side forward
//! (greedily, with a bias toward its own direction on further ties) until the
//! first matching cell tells us where that side would next extend the
//! candidate. When both sides reach the same cell they will produce the same
//! candidate from there on, so only one of them is explored.

use crate::table::{Cell, LengthTable};

/// Tie-breaking direction used by [`next_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// On a tie, decrement the row.
    Up,
    /// On a tie, decrement the column.
    Left,
}

/// Walk toward the origin from `(i, j)` and return the first cell where
/// `a[i-1] == b[j-1]`, or `None` if a boundary is reached first.
///
/// Non-matching cells step toward the strictly larger predecessor; equal
/// predecessors are resolved by `preference`.
pub fn next_match<S: PartialEq>(
    table: &LengthTable,
    a: &[S],
    b: &[S],
    mut i: usize,
    mut j: usize,
    preference: Preference,
) -> Option<Cell> {
    debug_assert!(i < table.rows() && j < table.cols());
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            return Some(Cell::new(i, j));
        }
        let up = table.get(i - 1, j);
        let left = table.get(i, j - 1);
        if up > left {
            i -= 1;
        } else if left > up {
            j -= 1;
        } else {
            match preference {
                Preference::Up => i -= 1,
                Preference::Left => j -= 1,
            }
        }
    }
    None
}

/// Outcome of probing both sides of a branch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fork {
    /// Both probes found the same match cell.
    Converged(Cell),
    /// The probes disagree, or at least one found no match.
    Diverged { up: Option<Cell>, left: Option<Cell> },
}

/// Probe both continuations of the tie at `(i, j)`.
///
/// Requires `i > 0 && j > 0`.
pub fn probe_fork<S: PartialEq>(
    table: &LengthTable,
    a: &[S],
    b: &[S],
    i: usize,
    j: usize,
) -> Fork {
    let up = next_match(table, a, b, i - 1, j, Preference::Up);
    let left = next_match(table, a, b, i, j - 1, Preference::Left);
    match (up, left) {
        (Some(u), Some(l)) if u == l => Fork::Converged(u),
        _ => Fork::Diverged { up, left },
    }
}
