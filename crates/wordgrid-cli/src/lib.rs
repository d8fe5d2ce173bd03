// wordgrid-cli: shared utilities for CLI tools.

use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};
use std::process;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordgrid_core::word::{WordListError, WordPair, parse_word_list};
use wordgrid_layout::activity::{ActivityKind, ParseActivityKindError};

pub mod settings;

/// Errors reported by the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings file {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("word list: {0}")]
    WordList(#[from] WordListError),

    #[error(transparent)]
    Activity(#[from] ParseActivityKindError),

    #[error("no words given (pass a word list file, pipe one on stdin, or use --settings)")]
    NoWords,
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Install a stderr subscriber. `RUST_LOG` wins; otherwise `warn`, or
/// `debug` when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Load a word list from `path`, or from stdin when `path` is `None` or `-`.
pub fn load_words(path: Option<&Path>) -> Result<Vec<WordPair>> {
    let text = match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).map_err(|source| CliError::Read {
                path: p.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut text = String::new();
            io::stdin().lock().read_to_string(&mut text)?;
            text
        }
    };
    let words = parse_word_list(&text)?;
    if words.is_empty() {
        return Err(CliError::NoWords);
    }
    tracing::debug!(words = words.len(), "loaded word list");
    Ok(words)
}

/// Words from the command line, or one per non-empty stdin line when none
/// are given.
pub fn words_or_stdin(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    read_lines(io::stdin().lock())
}

/// Trimmed, non-empty lines of `reader`.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Parse an `--activity` value. `all` selects every activity (`None`).
pub fn parse_activity_choice(
    value: &str,
) -> std::result::Result<Option<ActivityKind>, ParseActivityKindError> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    value.parse().map(Some)
}
