// WorksheetGenerator: one word list, one set of options, every activity.
//
// The generator owns the words and the options and hands out activities on
// demand. Each call builds its own random stream from the stored seed, so
// calling `crossword()` twice gives the same layout and the order of calls
// does not matter.

use tracing::debug;

use wordgrid_core::word::{WordListError, WordPair, parse_word_list};

use crate::activity::{
    Activity, ActivityKind, Anagrams, FillIn, Flashcards, GeneratorOptions, Matching,
    generate_activity, generate_anagrams, generate_fill_in, generate_flashcards,
    generate_matching, generate_pack,
};
use crate::crossword::{CrosswordLayout, generate_crossword};
use crate::render::render_activity;
use crate::word_search::{WordSearch, clamp_grid_size, generate_word_search};

/// Top-level handle that owns a word list and generator options.
#[derive(Debug, Clone, Default)]
pub struct WorksheetGenerator {
    words: Vec<WordPair>,
    options: GeneratorOptions,
}

impl WorksheetGenerator {
    /// Create a generator with default options.
    pub fn new(words: Vec<WordPair>) -> Self {
        Self::with_options(words, GeneratorOptions::default())
    }

    /// Create a generator with explicit options. The grid size is clamped.
    pub fn with_options(words: Vec<WordPair>, options: GeneratorOptions) -> Self {
        let mut generator = Self { words, options };
        generator.set_grid_size(options.grid_size);
        generator
    }

    /// Create a generator from word list text (see [`parse_word_list`]).
    pub fn from_text(text: &str) -> Result<Self, WordListError> {
        let words = parse_word_list(text)?;
        debug!(words = words.len(), "loaded word list");
        Ok(Self::new(words))
    }

    // =========================================================================
    // Activities
    // =========================================================================

    pub fn word_search(&self) -> WordSearch {
        generate_word_search(&self.words, self.options.grid_size, self.options.seed)
    }

    pub fn crossword(&self) -> CrosswordLayout {
        generate_crossword(&self.words, self.options.seed)
    }

    pub fn matching(&self) -> Matching {
        generate_matching(&self.words, self.options.seed)
    }

    pub fn anagrams(&self) -> Anagrams {
        generate_anagrams(&self.words, self.options.seed)
    }

    pub fn fill_in(&self) -> FillIn {
        generate_fill_in(&self.words, self.options.seed)
    }

    pub fn flashcards(&self) -> Flashcards {
        generate_flashcards(&self.words)
    }

    /// Generate one activity by kind.
    pub fn activity(&self, kind: ActivityKind) -> Activity {
        generate_activity(kind, &self.words, &self.options)
    }

    /// Generate all six activities.
    pub fn pack(&self) -> Vec<Activity> {
        generate_pack(&self.words, &self.options)
    }

    /// Generate and render one activity as printable text.
    pub fn render(&self, kind: ActivityKind, show_answers: bool) -> String {
        render_activity(&self.activity(kind), show_answers)
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn set_seed(&mut self, seed: u32) {
        self.options.seed = seed;
    }

    /// Set the word search side length, clamped to the supported range.
    pub fn set_grid_size(&mut self, size: usize) {
        self.options.grid_size = clamp_grid_size(size);
    }

    /// Replace the word list.
    pub fn set_words(&mut self, words: Vec<WordPair>) {
        self.words = words;
    }

    pub fn words(&self) -> &[WordPair] {
        &self.words
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    pub fn seed(&self) -> u32 {
        self.options.seed
    }

    pub fn grid_size(&self) -> usize {
        self.options.grid_size
    }

    /// Crate version.
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
