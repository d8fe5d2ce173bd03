//! Shared types and seeded utilities for wordgrid.
//!
//! Everything here is pure and deterministic: the same seed and input always
//! produce the same output.
//!
//! # Modules
//!
//! - [`word`] -- `WordPair` and word list parsing
//! - [`normalize`] -- uppercase/strip words to the puzzle alphabet
//! - [`random`] -- the seeded linear congruential generator
//! - [`shuffle`] -- seeded Fisher-Yates shuffle and word scrambling

pub mod normalize;
pub mod random;
pub mod shuffle;
pub mod word;

pub use normalize::clean_word;
pub use random::SeededRandom;
pub use shuffle::{scramble_word, shuffle_array};
pub use word::{WordListError, WordPair, assign_missing_ids, parse_word_list};
