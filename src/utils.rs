//! Assorted utilities and helpers.

/// Returns true if `needle` occurs in `haystack` in order, not necessarily
/// contiguously. The empty sequence is a subsequence of everything.
pub fn is_subsequence<S: PartialEq>(needle: &[S], haystack: &[S]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|x| rest.any(|y| y == x))
}

/// Split a string into the `char` symbols the enumerator works on.
#[inline]
pub fn symbols(s: &str) -> Vec<char> {
    s.chars().collect()
}
