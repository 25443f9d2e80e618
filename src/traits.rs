//! Observation hook for the backward traversal.
//!
//! The enumerator never prints. Callers that want to watch it work (for
//! debugging, teaching, or counting work done) implement
//! [`TraversalObserver`] and pass it through the builder. Every transition the
//! enumerator takes is reported exactly once, in the order it is taken.
//!
//! Under `run_parallel` sibling branches report concurrently, so the relative
//! order of events from different branches is unspecified.

use crate::engine::Direction;
use crate::table::Cell;

/// A single step of the backward traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<'a, S> {
    /// `a[i-1] == b[j-1]`: `symbol` was appended and the walk moved diagonally.
    Matched { cell: Cell, symbol: S },
    /// Tie whose probes disagreed (or one side found no match); both
    /// predecessors are explored.
    Branched {
        cell: Cell,
        up: Option<Cell>,
        left: Option<Cell>,
    },
    /// Tie whose probes met at `at`; only the up predecessor is explored.
    Converged { cell: Cell, at: Cell },
    /// No tie; the walk followed the strictly larger predecessor.
    Stepped { cell: Cell, direction: Direction },
    /// A branch reached the boundary. `inserted` is false for a duplicate.
    Completed { subsequence: &'a [S], inserted: bool },
}

/// Receives every [`Transition`] taken by an enumeration run.
pub trait TraversalObserver<S> {
    fn on_transition(&self, transition: Transition<'_, S>);
}

/// Observer that ignores everything. The default for every run.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<S> TraversalObserver<S> for NoopObserver {
    #[inline]
    fn on_transition(&self, _transition: Transition<'_, S>) {}
}

impl<S, T: TraversalObserver<S> + ?Sized> TraversalObserver<S> for &T {
    fn on_transition(&self, transition: Transition<'_, S>) {
        (**self).on_transition(transition)
    }
}

/// Wraps a closure as an observer.
///
/// ```
/// use distinct_lcs::{traits::{FnObserver, Transition}, EnumeratorBuilder};
/// use std::cell::Cell;
///
/// let completed = Cell::new(0);
/// let observer = FnObserver(|t: Transition<'_, u8>| {
///     if let Transition::Completed { .. } = t {
///         completed.set(completed.get() + 1);
///     }
/// });
/// let found = EnumeratorBuilder::new(&b"ABCBDAB"[..], &b"BDCABA"[..])
///     .with_observer(&observer)
///     .build()
///     .unwrap()
///     .run()
///     .unwrap();
/// assert!(completed.get() >= found.subsequences.len());
/// ```
pub struct FnObserver<F>(pub F);

impl<S, F> TraversalObserver<S> for FnObserver<F>
where
    F: Fn(Transition<'_, S>),
{
    fn on_transition(&self, transition: Transition<'_, S>) {
        (self.0)(transition)
    }
}
