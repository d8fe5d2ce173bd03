// wordgrid-crossword: Generate a crossword from a word list.
//
// Reads `word - definition` lines from FILE (or stdin). Definitions become
// the clues. Words that find no crossing are left out and logged.
//
// Usage:
//   wordgrid-crossword [--seed N] [--answers] [--json] [FILE]

use std::path::PathBuf;

use clap::Parser;
use wordgrid_layout::activity::Activity;
use wordgrid_layout::crossword::generate_crossword;
use wordgrid_layout::render::render_activity;

/// Generate a printable crossword.
#[derive(Parser, Debug)]
#[command(name = "wordgrid-crossword")]
#[command(version, about, long_about = None)]
struct Args {
    /// Word list file (`-` or absent reads stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Random seed
    #[arg(short, long, default_value_t = 1)]
    seed: u32,

    /// Print the filled grid instead of the blank puzzle
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

    let layout = generate_crossword(&words, args.seed);
    for pair in layout.unplaced(&words) {
        tracing::warn!(word = %pair.word, "word has no legal crossing");
    }

    if args.json {
        let json = serde_json::to_string_pretty(&layout)
            .unwrap_or_else(|e| wordgrid_cli::fatal(&e.to_string()));
        println!("{json}");
    } else {
        print!("{}", render_activity(&Activity::Crossword(layout), args.answers));
    }
}
