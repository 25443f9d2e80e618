//! Example: every distinct LCS of two strings.
//!
//! Run with:
//! `cargo run --example distinct`

use distinct_lcs::{compute_distinct_lcs, utils::symbols};

fn main() {
    for (a, b) in [("ABCBDAB", "BDCABA"), ("AGCAT", "GAC"), ("AA", "AA")] {
        let found = match compute_distinct_lcs(&symbols(a), &symbols(b)) {
            Ok(found) => found,
            Err(err) => {
                eprintln!("{a} / {b}: {err}");
                continue;
            }
        };
        println!(
            "{a} / {b}: length {}, {} distinct",
            found.length,
            found.subsequences.len()
        );
        for s in found.subsequences.to_strings() {
            println!("  {s}");
        }
    }
}
