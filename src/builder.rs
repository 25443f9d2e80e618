use std::hash::Hash;

use crate::error::{LcsError, Side};
use crate::table::LengthTable;
use crate::traits::{NoopObserver, TraversalObserver};
use crate::Enumerator;

/// Configures an [`Enumerator`] before its length table is built.
///
/// The algorithm has no inherent length limit; `with_max_len` is where a
/// caller states its own policy. Inputs over the cap are rejected, never
/// truncated.
pub struct EnumeratorBuilder<'a, S, O = NoopObserver> {
    a: &'a [S],
    b: &'a [S],
    max_len: Option<usize>,
    observer: O,
}

impl<'a, S> EnumeratorBuilder<'a, S, NoopObserver> {
    pub fn new(a: &'a [S], b: &'a [S]) -> Self {
        Self {
            a,
            b,
            max_len: None,
            observer: NoopObserver,
        }
    }
}

impl<'a, S, O> EnumeratorBuilder<'a, S, O> {
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_observer<P>(self, observer: P) -> EnumeratorBuilder<'a, S, P> {
        EnumeratorBuilder {
            a: self.a,
            b: self.b,
            max_len: self.max_len,
            observer,
        }
    }

    pub fn build(self) -> Result<Enumerator<'a, S, O>, LcsError>
    where
        S: Copy + Eq + Hash,
        O: TraversalObserver<S>,
    {
        if let Some(max) = self.max_len {
            for (side, len) in [(Side::A, self.a.len()), (Side::B, self.b.len())] {
                if len > max {
                    return Err(LcsError::InputTooLong { side, len, max });
                }
            }
        }
        let table = LengthTable::build(self.a, self.b)?;
        Ok(Enumerator::from_parts(self.a, self.b, table, self.observer))
    }
}
