// wordgrid-clean: Print the grid form of each word.
//
// Uppercases and drops everything except A-Z and the accented capitals the
// grids accept. Words with nothing left print as an empty line.
//
// Usage:
//   wordgrid-clean [WORD...]

use std::io::{self, Write};

use clap::Parser;
use wordgrid_core::normalize::clean_word;

/// Normalize words (arguments, or one per line on stdin).
#[derive(Parser, Debug)]
#[command(name = "wordgrid-clean")]
#[command(version, about, long_about = None)]
struct Args {
    /// Words to normalize; reads stdin when none are given
    words: Vec<String>,
}

fn main() {
    let args = Args::parse();
    wordgrid_cli::init_tracing(false);

    let words = wordgrid_cli::words_or_stdin(&args.words)
        .unwrap_or_else(|e| wordgrid_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in &words {
        let _ = writeln!(out, "{}", clean_word(word));
    }
}
