// wordgrid-search: Generate a word search from a word list.
//
// Reads `word - definition` lines from FILE (or stdin) and prints the
// puzzle grid and word list, or the answer key with --answers.
//
// Usage:
//   wordgrid-search [--size N] [--seed N] [--answers] [--json] [FILE]

use std::path::PathBuf;

use clap::Parser;
use wordgrid_layout::activity::Activity;
use wordgrid_layout::render::render_activity;
use wordgrid_layout::word_search::generate_word_search;

/// Generate a printable word search.
#[derive(Parser, Debug)]
#[command(name = "wordgrid-search")]
#[command(version, about, long_about = None)]
struct Args {
    /// Word list file (`-` or absent reads stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Grid side length (clamped to 10..=25)
    #[arg(short = 'n', long, default_value_t = 15)]
    size: usize,

    /// Random seed
    #[arg(short, long, default_value_t = 1)]
    seed: u32,

    /// Print the answer key instead of the puzzle
    #[arg(short, long)]
    answers: bool,

    /// Print the layout as JSON
    #[arg(long)]
    json: bool,

    /// Log placement decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    wordgrid_cli::init_tracing(args.verbose);

    let words = wordgrid_cli::load_words(args.input.as_deref())
        .unwrap_or_else(|e| wordgrid_cli::fatal(&e.to_string()));

    let ws = generate_word_search(&words, args.size, args.seed);
    for pair in ws.unplaced(&words) {
        tracing::warn!(word = %pair.word, "word did not fit in the grid");
    }

    if args.json {
        let json = serde_json::to_string_pretty(&ws)
            .unwrap_or_else(|e| wordgrid_cli::fatal(&e.to_string()));
        println!("{json}");
    } else {
        print!("{}", render_activity(&Activity::WordSearch(ws), args.answers));
    }
}
