//! Error type shared by every fallible operation in the crate.
//!
//! The recurrence and the traversal are total functions of their inputs, so
//! the only failures are policy rejections made by the caller (length caps)
//! and allocation failures. Neither leaves partial results behind.

use std::collections::TryReserveError;

/// Which of the two input sequences an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LcsError {
    /// An input exceeded the length cap configured on the builder.
    #[error("sequence {side} has length {len}, exceeding the configured maximum of {max}")]
    InputTooLong { side: Side, len: usize, max: usize },

    /// `(rows * cols)` does not fit in `usize`.
    #[error("length table of {rows}x{cols} cells cannot be addressed")]
    TableTooLarge { rows: usize, cols: usize },

    /// An allocation failed; the computation for this call was abandoned.
    #[error("out of memory while allocating {context}")]
    OutOfMemory {
        context: &'static str,
        #[source]
        source: TryReserveError,
    },
}

impl LcsError {
    pub(crate) fn oom(context: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| LcsError::OutOfMemory { context, source }
    }
}
