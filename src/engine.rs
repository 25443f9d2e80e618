//! Backward enumeration of every distinct LCS.
//!
//! Starting at `(n, m)` the walk follows only moves that preserve the maximal
//! length: diagonals on matches, the strictly larger predecessor otherwise,
//! and both predecessors on a tie unless the convergence probe shows they
//! meet at the same next match. Each branch owns its candidate buffer, built
//! back to front and reversed once the walk reaches row 0, column 0, or a
//! cell whose length is already 0.
//!
//! [`Enumerator::run`] drives the walk from an explicit worklist so the call
//! stack stays flat no matter how long the inputs are. With the `parallel`
//! feature, [`Enumerator::run_parallel`] forks sibling branches with
//! `rayon::join` and merges their result sets at the join.

use std::hash::Hash;

use crate::error::LcsError;
use crate::probe::{probe_fork, Fork};
use crate::results::ResultSet;
use crate::table::{Cell, LengthTable};
use crate::traits::{NoopObserver, Transition, TraversalObserver};
use crate::utils::is_subsequence;
#[cfg(feature = "parallel")]
use rayon::join;

/// Move taken from a non-tie cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// To `(i - 1, j)`.
    Up,
    /// To `(i, j - 1)`.
    Left,
}

/// Maximal common subsequence length together with every distinct
/// subsequence of that length.
#[derive(Clone, Debug)]
pub struct DistinctLcs<S> {
    pub length: usize,
    pub subsequences: ResultSet<S>,
}

/// Enumerator over one pair of sequences.
///
/// Typical usage:
/// ```
/// use distinct_lcs::Enumerator;
///
/// let found = Enumerator::new(&b"ABCBDAB"[..], &b"BDCABA"[..])
///     .unwrap()
///     .run()
///     .unwrap();
/// assert_eq!(found.length, 4);
/// assert_eq!(
///     found.subsequences.into_sorted_vec(),
///     vec![b"BCAB".to_vec(), b"BCBA".to_vec(), b"BDAB".to_vec()]
/// );
/// ```
pub struct Enumerator<'a, S, O = NoopObserver> {
    a: &'a [S],
    b: &'a [S],
    table: LengthTable,
    observer: O,
}

/// Pending branch on the worklist.
struct Frame<S> {
    i: usize,
    j: usize,
    candidate: Vec<S>,
}

/// Outcome of one step from a cell.
enum Next {
    Continue(usize, usize),
    Split,
    Boundary,
}

impl<'a, S: Copy + Eq + Hash> Enumerator<'a, S, NoopObserver> {
    /// Build the length table for `a` against `b` with no observer and no
    /// length cap. Use [`EnumeratorBuilder`](crate::EnumeratorBuilder) to
    /// configure either.
    pub fn new(a: &'a [S], b: &'a [S]) -> Result<Self, LcsError> {
        let table = LengthTable::build(a, b)?;
        Ok(Self::from_parts(a, b, table, NoopObserver))
    }
}

impl<'a, S, O> Enumerator<'a, S, O>
where
    S: Copy + Eq + Hash,
    O: TraversalObserver<S>,
{
    pub(crate) fn from_parts(a: &'a [S], b: &'a [S], table: LengthTable, observer: O) -> Self {
        debug_assert_eq!(table.rows(), a.len() + 1);
        debug_assert_eq!(table.cols(), b.len() + 1);
        Self {
            a,
            b,
            table,
            observer,
        }
    }

    /// The length table the walk reads from.
    pub fn table(&self) -> &LengthTable {
        &self.table
    }

    pub fn into_table(self) -> LengthTable {
        self.table
    }

    /// Length every enumerated subsequence will have.
    pub fn lcs_len(&self) -> usize {
        self.table.lcs_len() as usize
    }

    /// Enumerate every distinct LCS.
    ///
    /// Branches are processed depth-first with the up side of a split ahead
    /// of the left side, so observers see the same order a recursive walk
    /// would produce.
    pub fn run(&self) -> Result<DistinctLcs<S>, LcsError> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "enumerate",
            rows = self.table.rows(),
            cols = self.table.cols(),
            lcs_len = self.lcs_len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut results = ResultSet::new();
        let mut worklist = vec![Frame {
            i: self.a.len(),
            j: self.b.len(),
            candidate: self.new_candidate()?,
        }];

        while let Some(Frame {
            mut i,
            mut j,
            mut candidate,
        }) = worklist.pop()
        {
            loop {
                match self.advance(i, j, &mut candidate) {
                    Next::Continue(ni, nj) => {
                        i = ni;
                        j = nj;
                    }
                    Next::Split => {
                        let left = self.fork_candidate(&candidate)?;
                        worklist.push(Frame {
                            i,
                            j: j - 1,
                            candidate: left,
                        });
                        i -= 1;
                    }
                    Next::Boundary => {
                        self.complete(candidate, &mut results)?;
                        break;
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(distinct = results.len(), "enumeration finished");

        Ok(DistinctLcs {
            length: self.lcs_len(),
            subsequences: results,
        })
    }

    /// Take one transition from `(i, j)`, extending `candidate` on a match.
    fn advance(&self, i: usize, j: usize, candidate: &mut Vec<S>) -> Next {
        // A zero cell has no match left on any path to the origin, so every
        // route from here spells the candidate as it stands.
        if i == 0 || j == 0 || self.table.get(i, j) == 0 {
            return Next::Boundary;
        }
        let cell = Cell::new(i, j);
        let symbol = self.a[i - 1];
        if symbol == self.b[j - 1] {
            // Capacity was reserved for the full LCS length up front.
            candidate.push(symbol);
            self.observer
                .on_transition(Transition::Matched { cell, symbol });
            return Next::Continue(i - 1, j - 1);
        }

        let up = self.table.get(i - 1, j);
        let left = self.table.get(i, j - 1);
        if up == left {
            let fork = probe_fork(&self.table, self.a, self.b, i, j);
            #[cfg(feature = "tracing")]
            tracing::trace!(row = i, col = j, ?fork, "branch point");
            match fork {
                Fork::Converged(at) => {
                    self.observer
                        .on_transition(Transition::Converged { cell, at });
                    Next::Continue(i - 1, j)
                }
                Fork::Diverged { up, left } => {
                    self.observer
                        .on_transition(Transition::Branched { cell, up, left });
                    Next::Split
                }
            }
        } else if up > left {
            self.observer.on_transition(Transition::Stepped {
                cell,
                direction: Direction::Up,
            });
            Next::Continue(i - 1, j)
        } else {
            self.observer.on_transition(Transition::Stepped {
                cell,
                direction: Direction::Left,
            });
            Next::Continue(i, j - 1)
        }
    }

    /// Reverse a finished candidate into forward order and record it.
    fn complete(
        &self,
        mut candidate: Vec<S>,
        results: &mut ResultSet<S>,
    ) -> Result<(), LcsError> {
        candidate.reverse();
        debug_assert_eq!(candidate.len(), self.lcs_len());
        debug_assert!(is_subsequence(&candidate, self.a) && is_subsequence(&candidate, self.b));

        if results.contains(&candidate) {
            self.observer.on_transition(Transition::Completed {
                subsequence: &candidate,
                inserted: false,
            });
            return Ok(());
        }
        self.observer.on_transition(Transition::Completed {
            subsequence: &candidate,
            inserted: true,
        });
        let inserted = results.try_insert(candidate)?;
        debug_assert!(inserted);
        Ok(())
    }

    fn new_candidate(&self) -> Result<Vec<S>, LcsError> {
        let mut candidate = Vec::new();
        candidate
            .try_reserve_exact(self.lcs_len())
            .map_err(LcsError::oom("candidate buffer"))?;
        Ok(candidate)
    }

    /// Independent copy of `candidate` for the other side of a split.
    fn fork_candidate(&self, candidate: &[S]) -> Result<Vec<S>, LcsError> {
        let mut copy = self.new_candidate()?;
        copy.extend_from_slice(candidate);
        Ok(copy)
    }
}

#[cfg(feature = "parallel")]
impl<'a, S, O> Enumerator<'a, S, O>
where
    S: Copy + Eq + Hash + Send + Sync,
    O: TraversalObserver<S> + Sync,
{
    /// Enumerate every distinct LCS, exploring the two sides of each split on
    /// the rayon pool.
    ///
    /// Produces the same set as [`run`](Self::run). Observer events from
    /// sibling branches may interleave.
    pub fn run_parallel(&self) -> Result<DistinctLcs<S>, LcsError> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "enumerate_parallel",
            rows = self.table.rows(),
            cols = self.table.cols(),
            lcs_len = self.lcs_len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let candidate = self.new_candidate()?;
        let subsequences = self.walk_parallel(self.a.len(), self.b.len(), candidate)?;
        Ok(DistinctLcs {
            length: self.lcs_len(),
            subsequences,
        })
    }

    /// Follow one branch until it completes or splits; a split recurses on
    /// both sides, so depth is bounded by the number of splits on a path.
    fn walk_parallel(
        &self,
        mut i: usize,
        mut j: usize,
        mut candidate: Vec<S>,
    ) -> Result<ResultSet<S>, LcsError> {
        loop {
            match self.advance(i, j, &mut candidate) {
                Next::Continue(ni, nj) => {
                    i = ni;
                    j = nj;
                }
                Next::Split => {
                    let left_candidate = self.fork_candidate(&candidate)?;
                    let (up, left) = join(
                        || self.walk_parallel(i - 1, j, candidate),
                        || self.walk_parallel(i, j - 1, left_candidate),
                    );
                    let mut merged = up?;
                    merged.merge(left?);
                    return Ok(merged);
                }
                Next::Boundary => {
                    let mut results = ResultSet::new();
                    self.complete(candidate, &mut results)?;
                    return Ok(results);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn sorted(a: &str, b: &str) -> (usize, Vec<String>) {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let found = Enumerator::new(&a, &b).unwrap().run().unwrap();
        (found.length, found.subsequences.to_strings())
    }

    #[test]
    fn matches_never_branch() {
        assert_eq!(sorted("ABC", "ABC"), (3, vec!["ABC".to_string()]));
        assert_eq!(sorted("AA", "AA"), (2, vec!["AA".to_string()]));
    }

    #[test]
    fn no_common_symbols_yields_single_empty_member() {
        assert_eq!(sorted("", "XYZ"), (0, vec![String::new()]));
        assert_eq!(sorted("XYZ", ""), (0, vec![String::new()]));
        assert_eq!(sorted("AB", "CD"), (0, vec![String::new()]));
    }

    #[test]
    fn disjoint_alphabets_finish_without_splitting() {
        let a = vec![b'X'; 64];
        let b = vec![b'Y'; 64];
        let splits = RefCell::new(0usize);
        let observer = crate::traits::FnObserver(|t: Transition<'_, u8>| {
            if let Transition::Branched { .. } = t {
                *splits.borrow_mut() += 1;
            }
        });
        let found = crate::EnumeratorBuilder::new(&a, &b)
            .with_observer(&observer)
            .build()
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(found.length, 0);
        assert_eq!(found.subsequences.into_sorted_vec(), vec![Vec::<u8>::new()]);
        assert_eq!(splits.into_inner(), 0);
    }

    #[test]
    fn ties_split_into_distinct_results() {
        assert_eq!(
            sorted("AGCAT", "GAC"),
            (2, vec!["AC".to_string(), "GA".to_string(), "GC".to_string()])
        );
        assert_eq!(
            sorted("ABCBDAB", "BDCABA"),
            (
                4,
                vec!["BCAB".to_string(), "BCBA".to_string(), "BDAB".to_string()]
            )
        );
    }

    #[test]
    fn swapped_symbols_give_both_orders() {
        assert_eq!(
            sorted("AB", "BA"),
            (1, vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn converging_tie_explores_one_side() {
        // AXB vs AYB: the only tie, at (2, 2), resolves to the A/A match from
        // both sides, so exactly one boundary is reached.
        let events = RefCell::new(Vec::new());
        let observer = crate::traits::FnObserver(|t: Transition<'_, u8>| {
            events.borrow_mut().push(format!("{t:?}"));
        });
        let found = crate::EnumeratorBuilder::new(&b"AXB"[..], &b"AYB"[..])
            .with_observer(&observer)
            .build()
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(found.subsequences.into_sorted_vec(), vec![b"AB".to_vec()]);
        let events = events.into_inner();
        assert!(events.iter().any(|e| e.starts_with("Converged")));
        assert!(!events.iter().any(|e| e.starts_with("Branched")));
        assert_eq!(
            events.iter().filter(|e| e.starts_with("Completed")).count(),
            1
        );
    }

    #[test]
    fn table_is_exposed_unchanged() {
        let e = Enumerator::new(&b"AGCAT"[..], &b"GAC"[..]).unwrap();
        assert_eq!(e.lcs_len(), 2);
        assert_eq!(e.table().row(4), &[0, 1, 2, 2]);
        let t = e.into_table();
        assert_eq!((t.rows(), t.cols()), (6, 4));
    }

    thread_local! {
        static SYMBOL_HASHES: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
    }

    /// Symbol that counts how often it is hashed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Counted(u8);

    impl Hash for Counted {
        fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
            SYMBOL_HASHES.with(|n| n.set(n.get() + 1));
            self.0.hash(state);
        }
    }

    fn hashes_during(f: impl FnOnce()) -> usize {
        SYMBOL_HASHES.with(|n| n.set(0));
        f();
        SYMBOL_HASHES.with(|n| n.get())
    }

    #[test]
    fn completion_hashes_candidate_once_per_set_operation() {
        let (x, y) = (Counted(b'A'), Counted(b'B'));
        let (a, b) = ([x, y], [y, x]);
        let e = Enumerator::new(&a, &b).unwrap();
        let mut results = ResultSet::new();
        results.insert_if_absent(vec![x]);

        // New member: one lookup and one insertion.
        assert_eq!(hashes_during(|| e.complete(vec![y], &mut results).unwrap()), 2);
        // Duplicate: the lookup alone.
        assert_eq!(hashes_during(|| e.complete(vec![y], &mut results).unwrap()), 1);
        assert_eq!(results.len(), 2);
    }
}
