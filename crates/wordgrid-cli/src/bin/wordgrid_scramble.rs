// wordgrid-scramble: Scramble words for anagram puzzles.
//
// Each word is normalized, then shuffled with seed + its position, so the
// same list and seed always give the same output.
//
// Usage:
//   wordgrid-scramble [--seed N] [--show-answer] [WORD...]

use std::io::{self, Write};

use clap::Parser;
use wordgrid_core::normalize::clean_word;
use wordgrid_core::shuffle::scramble_word;

/// Scramble words (arguments, or one per line on stdin).
#[derive(Parser, Debug)]
#[command(name = "wordgrid-scramble")]
#[command(version, about, long_about = None)]
struct Args {
    /// Words to scramble; reads stdin when none are given
    words: Vec<String>,

    /// Random seed
    #[arg(short, long, default_value_t = 1)]
    seed: u32,

    /// Print `SCRAMBLED<TAB>ANSWER` pairs
    #[arg(long)]
    show_answer: bool,

    /// Log at debug level to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    wordgrid_cli::init_tracing(args.verbose);

    let words = wordgrid_cli::words_or_stdin(&args.words)
        .unwrap_or_else(|e| wordgrid_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for (i, word) in words.iter().enumerate() {
        let answer = clean_word(word);
        if answer.is_empty() {
            tracing::warn!(%word, "no letters left after normalization");
            continue;
        }
        let scrambled = scramble_word(&answer, args.seed.wrapping_add(i as u32));
        let _ = if args.show_answer {
            writeln!(out, "{scrambled}\t{answer}")
        } else {
            writeln!(out, "{scrambled}")
        };
    }
}
