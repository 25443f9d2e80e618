use std::env;
use std::io::{self, BufRead, Write};

use distinct_lcs::traits::{FnObserver, Transition};
use distinct_lcs::{EnumeratorBuilder, LcsError, LengthTable};

/// Length cap applied when `--max-len` is not given.
const DEFAULT_MAX_LEN: usize = 100;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("find_lcs: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let (first, second) = match read_inputs(&options) {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("find_lcs: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&options, &first, &second) {
        eprintln!("find_lcs: {err}");
        std::process::exit(1);
    }
}

fn run(options: &Options, first: &str, second: &str) -> Result<(), LcsError> {
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();

    println!("String 1: {first}");
    println!("String 2: {second}");
    println!();

    let trace = FnObserver(|t: Transition<'_, char>| eprintln!("{}", describe(&t)));
    let builder = EnumeratorBuilder::new(&a, &b).with_max_len(options.max_len);
    let found = if options.trace {
        let enumerator = builder.with_observer(&trace).build()?;
        if options.show_table {
            print_table(enumerator.table(), &a, &b);
        }
        enumerator.run()?
    } else {
        let enumerator = builder.build()?;
        if options.show_table {
            print_table(enumerator.table(), &a, &b);
        }
        enumerator.run()?
    };

    println!("Max sequence length = {}", found.length);
    println!("Sequence count = {}", found.subsequences.len());
    println!();
    for (idx, s) in found.subsequences.to_strings().iter().enumerate() {
        println!("Subsequence {} = {s}", idx + 1);
    }
    Ok(())
}

fn describe(t: &Transition<'_, char>) -> String {
    match t {
        Transition::Matched { cell, symbol } => {
            format!("match '{symbol}' at ({}, {})", cell.row, cell.col)
        }
        Transition::Branched { cell, up, left } => format!(
            "branch at ({}, {}): up -> {}, left -> {}",
            cell.row,
            cell.col,
            fmt_cell(*up),
            fmt_cell(*left)
        ),
        Transition::Converged { cell, at } => format!(
            "prune at ({}, {}): both sides converge at ({}, {})",
            cell.row, cell.col, at.row, at.col
        ),
        Transition::Stepped { cell, direction } => {
            format!("step {direction:?} from ({}, {})", cell.row, cell.col)
        }
        Transition::Completed {
            subsequence,
            inserted,
        } => {
            let s: String = subsequence.iter().collect();
            if *inserted {
                format!("found \"{s}\"")
            } else {
                format!("duplicate \"{s}\"")
            }
        }
    }
}

fn fmt_cell(cell: Option<distinct_lcs::Cell>) -> String {
    match cell {
        Some(c) => format!("({}, {})", c.row, c.col),
        None => "none".to_string(),
    }
}

/// Render the table with `b` across the top and `a` down the side.
fn print_table(table: &LengthTable, a: &[char], b: &[char]) {
    let width = table.lcs_len().to_string().len().max(1);
    let mut out = String::new();
    out.push_str(&" ".repeat(2 + width + 1));
    for ch in b {
        out.push_str(&format!("{ch:>width$} "));
    }
    out.push('\n');
    for (i, row) in table.iter_rows().enumerate() {
        let label = if i == 0 { ' ' } else { a[i - 1] };
        out.push_str(&format!("{label} "));
        for v in row {
            out.push_str(&format!("{v:>width$} "));
        }
        out.push('\n');
    }
    println!("==== LENGTH TABLE ====");
    println!();
    println!("{out}");
}

fn read_inputs(options: &Options) -> Result<(String, String), String> {
    match (&options.first, &options.second) {
        (Some(a), Some(b)) => Ok((a.clone(), b.clone())),
        (Some(a), None) => Ok((a.clone(), prompt(2)?)),
        _ => Ok((prompt(1)?, prompt(2)?)),
    }
}

fn prompt(which: usize) -> Result<String, String> {
    print!("Input string {which}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("failed to flush stdout: {e}"))?;
    read_sequence(&mut io::stdin().lock(), which)
}

/// Read one line as sequence `which`. End of input is an error, not an empty
/// sequence; an empty line is still accepted.
fn read_sequence(input: &mut impl BufRead, which: usize) -> Result<String, String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("failed to read input: {e}"))?;
    if read == 0 {
        return Err(format!("no input for sequence {which}"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

struct Options {
    first: Option<String>,
    second: Option<String>,
    max_len: usize,
    show_table: bool,
    trace: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut positional = Vec::new();
        let mut max_len = DEFAULT_MAX_LEN;
        let mut show_table = true;
        let mut trace = false;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--max-len=") {
                max_len = parse_len(value)?;
            } else if arg == "--max-len" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --max-len".to_string())?
                    .into();
                max_len = parse_len(&value)?;
            } else if arg == "--no-table" {
                show_table = false;
            } else if arg == "--trace" {
                trace = true;
            } else if arg.starts_with("--") {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                positional.push(arg);
            }
        }

        if positional.len() > 2 {
            return Err(format!(
                "expected at most two sequences, got {}",
                positional.len()
            ));
        }
        let mut positional = positional.into_iter();
        Ok(Self {
            first: positional.next(),
            second: positional.next(),
            max_len,
            show_table,
            trace,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: find_lcs [options] [SEQUENCE_A [SEQUENCE_B]]

Prints every distinct longest common subsequence of two sequences.
Sequences not given on the command line are read from stdin.

Options:
  --max-len <N>     Reject sequences longer than N characters (default: {DEFAULT_MAX_LEN})
  --no-table        Do not print the length table
  --trace           Print every traversal step to stderr
  -h, --help        Print this help message

Examples:
  find_lcs ABCBDAB BDCABA
  find_lcs --trace --no-table AGCAT GAC
"
        );
    }
}

fn parse_len(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "max length must be a non-negative integer".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_and_flags() {
        let args = ["--max-len", "8", "AB", "--no-table", "BA"];
        let opts = Options::parse(args.into_iter()).unwrap();
        assert_eq!(opts.first.as_deref(), Some("AB"));
        assert_eq!(opts.second.as_deref(), Some("BA"));
        assert_eq!(opts.max_len, 8);
        assert!(!opts.show_table);
        assert!(!opts.trace);
    }

    #[test]
    fn rejects_unknown_and_extra_arguments() {
        assert!(Options::parse(["--bogus"].into_iter()).is_err());
        assert!(Options::parse(["A", "B", "C"].into_iter()).is_err());
        assert!(Options::parse(["--max-len=x"].into_iter()).is_err());
    }

    #[test]
    fn end_of_input_is_not_an_empty_sequence() {
        let mut input: &[u8] = b"AGCAT\r\n\nGAC";
        assert_eq!(read_sequence(&mut input, 1).unwrap(), "AGCAT");
        assert_eq!(read_sequence(&mut input, 2).unwrap(), "");
        assert_eq!(read_sequence(&mut input, 1).unwrap(), "GAC");
        assert_eq!(
            read_sequence(&mut input, 2).unwrap_err(),
            "no input for sequence 2"
        );
    }

    #[test]
    fn describes_completed_duplicates() {
        let t = Transition::Completed {
            subsequence: &['G', 'A'],
            inserted: false,
        };
        assert_eq!(describe(&t), "duplicate \"GA\"");
    }
}
