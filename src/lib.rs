//! Distinct Longest Common Subsequences
//!
//! Most LCS routines return one longest common subsequence. This crate returns
//! all of them: every *distinct* sequence of maximal length that occurs, in
//! order, in both inputs.
//!
//! ## Core idea
//! 1. Fill the classic `(n+1) × (m+1)` [`LengthTable`].
//! 2. Walk it backward from `(n, m)`, extending a candidate on matches and
//!    splitting on ties.
//! 3. At each tie, probe both sides for their next match
//!    ([`probe::next_match`]); if they meet at the same cell the two sides
//!    would spell the same subsequence, so only one is explored.
//! 4. Collect finished candidates in a deduplicating [`ResultSet`].
//!
//! ## Quick start
//! ```
//! use distinct_lcs::{compute_distinct_lcs, utils::symbols};
//!
//! let found = compute_distinct_lcs(&symbols("ABCBDAB"), &symbols("BDCABA")).unwrap();
//! assert_eq!(found.length, 4);
//! assert_eq!(found.subsequences.to_strings(), ["BCAB", "BCBA", "BDAB"]);
//! ```
//!
//! Symbols can be any `Copy + Eq + Hash` type: `char`, `u8`, token ids.
//!
//! ## Cargo features
//! - `parallel`: [`Enumerator::run_parallel`] explores split branches on the
//!   rayon pool.
//! - `tracing`: spans around table construction and enumeration, and trace
//!   events at every branch point.

pub mod builder;
pub mod engine;
pub mod error;
pub mod probe;
pub mod results;
pub mod table;
pub mod traits;
pub mod utils;

use std::hash::Hash;

pub use crate::builder::EnumeratorBuilder;
pub use crate::engine::{DistinctLcs, Enumerator};
pub use crate::error::LcsError;
pub use crate::results::ResultSet;
pub use crate::table::{Cell, LengthTable};
pub use crate::traits::TraversalObserver;

/// Build the LCS length table for `a` (rows) against `b` (columns).
pub fn compute_length_table<S: PartialEq>(a: &[S], b: &[S]) -> Result<LengthTable, LcsError> {
    LengthTable::build(a, b)
}

/// Compute the LCS length of `a` and `b` and every distinct subsequence of
/// that length.
///
/// When the inputs share no symbol the result holds exactly one member, the
/// empty sequence.
pub fn compute_distinct_lcs<S>(a: &[S], b: &[S]) -> Result<DistinctLcs<S>, LcsError>
where
    S: Copy + Eq + Hash,
{
    Enumerator::new(a, b)?.run()
}
