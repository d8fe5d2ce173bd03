// wordgrid-pack: Print a worksheet from saved settings.
//
// Loads the settings snapshot (see `wordgrid_cli::settings`), applies any
// command-line overrides, and prints one activity or all six. With --save
// the effective settings are written back so the same worksheet can be
// regenerated later.
//
// Usage:
//   wordgrid-pack [--settings FILE] [--words FILE] [--activity KIND|all]
//                 [--seed N] [--size N] [--title TEXT] [--answers] [--json] [--save]

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use wordgrid_cli::settings::{Settings, load_settings, save_settings};
use wordgrid_cli::{CliError, Result};
use wordgrid_layout::activity::{Activity, generate_activity, generate_pack};
use wordgrid_layout::render::render_activity;

/// Print a vocabulary worksheet.
#[derive(Parser, Debug)]
#[command(name = "wordgrid-pack")]
#[command(version, about, long_about = None)]
struct Args {
    /// Settings file (default: $WORDGRID_SETTINGS, ~/.wordgrid/settings.json, ./wordgrid.json)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Replace the saved word list with this file (`-` reads stdin)
    #[arg(short, long, value_name = "FILE")]
    words: Option<PathBuf>,

    /// Activity to print: word-search, crossword, matching, anagram, fill-in,
    /// flashcards or all
    #[arg(short, long, value_name = "KIND")]
    activity: Option<String>,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u32>,

    /// Word search grid side length
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Worksheet title
    #[arg(short, long)]
    title: Option<String>,

    /// Print answer keys
    #[arg(long)]
    answers: bool,

    /// Print the activities as JSON
    #[arg(long)]
    json: bool,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save: bool,

    /// Log at debug level to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Worksheet<'a> {
    title: &'a str,
    activities: &'a [Activity],
}

fn apply_overrides(settings: &mut Settings, args: &Args) -> Result<()> {
    if let Some(path) = &args.words {
        settings.words = wordgrid_cli::load_words(Some(path))?;
    }
    if let Some(value) = &args.activity {
        settings.activity = wordgrid_cli::parse_activity_choice(value)?;
    }
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(size) = args.size {
        settings.grid_size = size;
    }
    if let Some(title) = &args.title {
        settings.title = title.clone();
    }
    if args.answers {
        settings.show_answers = true;
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let (mut settings, path) = load_settings(args.settings.as_deref())?;
    apply_overrides(&mut settings, args)?;
    if settings.words.is_empty() {
        return Err(CliError::NoWords);
    }

    let options = settings.options();
    let activities = match settings.activity {
        Some(kind) => vec![generate_activity(kind, &settings.words, &options)],
        None => generate_pack(&settings.words, &options),
    };

    if args.json {
        let sheet = Worksheet {
            title: &settings.title,
            activities: &activities,
        };
        println!("{}", serde_json::to_string_pretty(&sheet)?);
    } else {
        println!("{}", settings.title);
        println!();
        for activity in &activities {
            println!("{}", render_activity(activity, settings.show_answers));
        }
    }

    if args.save {
        save_settings(&settings, &path)?;
        eprintln!("saved settings to {}", path.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    wordgrid_cli::init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        wordgrid_cli::fatal(&e.to_string());
    }
}
