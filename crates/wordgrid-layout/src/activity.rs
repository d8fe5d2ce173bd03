// Worksheet activities built from one word list.
//
// Word search and crossword come from the layout engine. The other four
// activities only reorder or scramble the list, using the same seeded
// shuffle so every worksheet can be regenerated from its seed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use wordgrid_core::shuffle::{scramble_word, shuffle_array};
use wordgrid_core::word::WordPair;

use crate::crossword::{CrosswordLayout, generate_crossword};
use crate::word_search::{WordSearch, generate_word_search};

// ---------------------------------------------------------------------------
// Kinds and options
// ---------------------------------------------------------------------------

/// The six printable activity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    WordSearch,
    Crossword,
    Matching,
    Anagram,
    FillIn,
    Flashcards,
}

impl ActivityKind {
    /// Every kind, in pack order.
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::WordSearch,
        ActivityKind::Crossword,
        ActivityKind::Matching,
        ActivityKind::Anagram,
        ActivityKind::FillIn,
        ActivityKind::Flashcards,
    ];

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::WordSearch => "word-search",
            ActivityKind::Crossword => "crossword",
            ActivityKind::Matching => "matching",
            ActivityKind::Anagram => "anagram",
            ActivityKind::FillIn => "fill-in",
            ActivityKind::Flashcards => "flashcards",
        }
    }

    /// Heading printed above the activity.
    pub fn title(self) -> &'static str {
        match self {
            ActivityKind::WordSearch => "Word Search",
            ActivityKind::Crossword => "Crossword",
            ActivityKind::Matching => "Matching",
            ActivityKind::Anagram => "Anagrams",
            ActivityKind::FillIn => "Fill in the Blanks",
            ActivityKind::Flashcards => "Flashcards",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an activity name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown activity `{0}` (expected word-search, crossword, matching, anagram, fill-in or flashcards)"
)]
pub struct ParseActivityKindError(pub String);

impl FromStr for ActivityKind {
    type Err = ParseActivityKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "word-search" | "wordsearch" | "search" | "ws" => Ok(ActivityKind::WordSearch),
            "crossword" | "cw" => Ok(ActivityKind::Crossword),
            "matching" | "match" => Ok(ActivityKind::Matching),
            "anagram" | "anagrams" | "scramble" => Ok(ActivityKind::Anagram),
            "fill-in" | "fillin" | "fill" => Ok(ActivityKind::FillIn),
            "flashcards" | "flashcard" | "cards" => Ok(ActivityKind::Flashcards),
            _ => Err(ParseActivityKindError(s.to_string())),
        }
    }
}

/// Parameters shared by every activity generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// Seed for every random choice.
    pub seed: u32,
    /// Word search side length (clamped to 10..=25 at generation).
    pub grid_size: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            seed: 1,
            grid_size: 15,
        }
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingItem {
    pub number: u32,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingChoice {
    pub label: String,
    pub definition: String,
}

/// Words numbered in input order, definitions shuffled and lettered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matching {
    pub items: Vec<MatchingItem>,
    pub choices: Vec<MatchingChoice>,
    /// `answers[i]` is the choice label matching `items[i]`.
    pub answers: Vec<String>,
}

/// Spreadsheet-style label: A..Z, AA, AB, ...
pub fn choice_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    label.iter().rev().collect()
}

pub fn generate_matching(words: &[WordPair], seed: u32) -> Matching {
    let indices: Vec<usize> = (0..words.len()).collect();
    let order = shuffle_array(&indices, seed);

    let mut answers = vec![String::new(); words.len()];
    let choices = order
        .iter()
        .enumerate()
        .map(|(position, &source)| {
            let label = choice_label(position);
            answers[source] = label.clone();
            MatchingChoice {
                label,
                definition: words[source].definition.clone(),
            }
        })
        .collect();

    let items = words
        .iter()
        .enumerate()
        .map(|(i, pair)| MatchingItem {
            number: i as u32 + 1,
            word: pair.word.clone(),
        })
        .collect();

    Matching {
        items,
        choices,
        answers,
    }
}

// ---------------------------------------------------------------------------
// Anagrams
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnagramItem {
    pub id: u32,
    pub scrambled: String,
    /// Normalized answer.
    pub answer: String,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anagrams {
    pub items: Vec<AnagramItem>,
}

/// Scramble every word; word `i` uses seed `seed + i` so each shuffles
/// independently.
pub fn generate_anagrams(words: &[WordPair], seed: u32) -> Anagrams {
    let items = words
        .iter()
        .enumerate()
        .filter_map(|(i, pair)| {
            let answer = pair.normalized();
            if answer.is_empty() {
                return None;
            }
            Some(AnagramItem {
                id: pair.id,
                scrambled: scramble_word(&answer, seed.wrapping_add(i as u32)),
                answer,
                hint: pair.definition.clone(),
            })
        })
        .collect();
    Anagrams { items }
}

// ---------------------------------------------------------------------------
// Fill in the blanks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillInItem {
    pub number: u32,
    /// The definition the learner completes.
    pub prompt: String,
    pub answer: String,
    /// Width of the blank, in characters of the answer.
    pub blank_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillIn {
    pub items: Vec<FillInItem>,
    /// The answers, shuffled.
    pub word_bank: Vec<String>,
}

pub fn generate_fill_in(words: &[WordPair], seed: u32) -> FillIn {
    let items = words
        .iter()
        .enumerate()
        .map(|(i, pair)| FillInItem {
            number: i as u32 + 1,
            prompt: pair.definition.clone(),
            answer: pair.word.clone(),
            blank_len: pair.word.chars().count(),
        })
        .collect();
    let bank: Vec<String> = words.iter().map(|p| p.word.clone()).collect();
    FillIn {
        items,
        word_bank: shuffle_array(&bank, seed),
    }
}

// ---------------------------------------------------------------------------
// Flashcards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: u32,
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcards {
    pub cards: Vec<Flashcard>,
}

pub fn generate_flashcards(words: &[WordPair]) -> Flashcards {
    let cards = words
        .iter()
        .map(|pair| Flashcard {
            id: pair.id,
            front: pair.word.clone(),
            back: pair.definition.clone(),
        })
        .collect();
    Flashcards { cards }
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// One generated activity of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "kebab-case")]
pub enum Activity {
    WordSearch(WordSearch),
    Crossword(CrosswordLayout),
    Matching(Matching),
    Anagram(Anagrams),
    FillIn(FillIn),
    Flashcards(Flashcards),
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::WordSearch(_) => ActivityKind::WordSearch,
            Activity::Crossword(_) => ActivityKind::Crossword,
            Activity::Matching(_) => ActivityKind::Matching,
            Activity::Anagram(_) => ActivityKind::Anagram,
            Activity::FillIn(_) => ActivityKind::FillIn,
            Activity::Flashcards(_) => ActivityKind::Flashcards,
        }
    }
}

/// Generate one activity. Each call seeds its own stream from `options`.
pub fn generate_activity(
    kind: ActivityKind,
    words: &[WordPair],
    options: &GeneratorOptions,
) -> Activity {
    debug!(%kind, words = words.len(), seed = options.seed, "generating activity");
    match kind {
        ActivityKind::WordSearch => {
            Activity::WordSearch(generate_word_search(words, options.grid_size, options.seed))
        }
        ActivityKind::Crossword => Activity::Crossword(generate_crossword(words, options.seed)),
        ActivityKind::Matching => Activity::Matching(generate_matching(words, options.seed)),
        ActivityKind::Anagram => Activity::Anagram(generate_anagrams(words, options.seed)),
        ActivityKind::FillIn => Activity::FillIn(generate_fill_in(words, options.seed)),
        ActivityKind::Flashcards => Activity::Flashcards(generate_flashcards(words)),
    }
}

/// Generate all six activities in [`ActivityKind::ALL`] order.
pub fn generate_pack(words: &[WordPair], options: &GeneratorOptions) -> Vec<Activity> {
    ActivityKind::ALL
        .iter()
        .map(|&kind| generate_activity(kind, words, options))
        .collect()
}
