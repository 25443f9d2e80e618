//! Deduplicating accumulator for completed subsequences.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::error::LcsError;

/// Set of distinct completed subsequences.
///
/// Equality is exact symbol-for-symbol comparison, so the order in which
/// branches finish does not matter.
#[derive(Clone, Debug)]
pub struct ResultSet<S> {
    members: FxHashSet<Vec<S>>,
}

impl<S: Eq + Hash> ResultSet<S> {
    pub fn new() -> Self {
        Self {
            members: FxHashSet::default(),
        }
    }

    /// Insert `candidate` unless an equal sequence is already present.
    ///
    /// Returns `true` if the candidate was new.
    pub fn insert_if_absent(&mut self, candidate: Vec<S>) -> bool {
        self.members.insert(candidate)
    }

    /// [`insert_if_absent`](Self::insert_if_absent) that reports a set which
    /// cannot grow instead of aborting. The candidate is hashed once.
    pub(crate) fn try_insert(&mut self, candidate: Vec<S>) -> Result<bool, LcsError> {
        self.members
            .try_reserve(1)
            .map_err(LcsError::oom("result set"))?;
        Ok(self.members.insert(candidate))
    }

    pub fn contains(&self, candidate: &[S]) -> bool {
        self.members.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &[S]> + '_ {
        self.members.iter().map(Vec::as_slice)
    }

    /// Absorb every member of `other`; used where parallel branches join.
    pub fn merge(&mut self, other: ResultSet<S>) {
        if self.members.len() < other.members.len() {
            let mut other = other;
            std::mem::swap(&mut self.members, &mut other.members);
            self.members.extend(other.members);
        } else {
            self.members.extend(other.members);
        }
    }

    /// Members sorted lexicographically, for stable presentation.
    pub fn into_sorted_vec(self) -> Vec<Vec<S>>
    where
        S: Ord,
    {
        let mut out: Vec<Vec<S>> = self.members.into_iter().collect();
        out.sort_unstable();
        out
    }
}

impl<S: Eq + Hash> Default for ResultSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash> IntoIterator for ResultSet<S> {
    type Item = Vec<S>;
    type IntoIter = std::collections::hash_set::IntoIter<Vec<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<S: Eq + Hash> FromIterator<Vec<S>> for ResultSet<S> {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl ResultSet<char> {
    /// Members as owned strings, sorted.
    pub fn to_strings(&self) -> Vec<String> {
        let mut out: Vec<String> = self.iter().map(|s| s.iter().collect()).collect();
        out.sort_unstable();
        out
    }
}
