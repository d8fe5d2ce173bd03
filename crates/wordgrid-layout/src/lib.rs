//! Puzzle layout engine for vocabulary worksheets.
//!
//! Every generator is a pure function of its word list and a `u32` seed: the
//! same inputs always produce the same worksheet.
//!
//! - [`word_search`]: square letter grid with words hidden in eight directions
//! - [`crossword`]: interlocking layout, cropped and numbered
//! - [`activity`]: matching, anagram, fill-in and flashcard activities, plus
//!   the [`Activity`] enum covering all six
//! - [`render`]: plain-text output for printing
//! - [`handle`]: [`WorksheetGenerator`], which owns a word list and options

pub mod activity;
pub mod crossword;
mod grid;
pub mod handle;
pub mod render;
pub mod word_search;

pub use activity::{Activity, ActivityKind, GeneratorOptions, generate_activity, generate_pack};
pub use crossword::{CrosswordLayout, GridCell, Orientation, PlacedCrosswordWord, generate_crossword};
pub use handle::WorksheetGenerator;
pub use render::render_activity;
pub use word_search::{Direction, PlacedWord, WordSearch, generate_word_search};
