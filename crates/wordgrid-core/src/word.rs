// Word/definition pairs and word list parsing.

use serde::{Deserialize, Serialize};

use crate::normalize::clean_word;

/// Separators tried, in order, when splitting a word list line.
const SEPARATORS: &[&str] = &["\t", " - ", ":", "="];

/// A vocabulary entry supplied by the user.
///
/// The engine only reads word pairs; a list changes by being replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    /// Unique, stable identifier within one list. `0` means unassigned.
    #[serde(default)]
    pub id: u32,

    /// The word as the user typed it (display form).
    pub word: String,

    /// Definition or clue shown to the learner.
    #[serde(default)]
    pub definition: String,
}

impl WordPair {
    /// Create a new word pair.
    pub fn new(id: u32, word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
            definition: definition.into(),
        }
    }

    /// The grid form of the word. Derived per call, never stored.
    pub fn normalized(&self) -> String {
        clean_word(&self.word)
    }
}

/// Error returned when word list text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordListError {
    /// The line has no recognized separator between word and definition.
    #[error("line {line}: expected `word - definition` (tab, ` - `, `:` or `=` separated)")]
    MissingSeparator { line: usize },

    /// The word part of the line is blank.
    #[error("line {line}: word is empty")]
    EmptyWord { line: usize },
}

/// Parse word list text into word pairs.
///
/// One pair per line. Blank lines and lines starting with `#` are skipped.
/// Ids are assigned from 1 in reading order.
pub fn parse_word_list(text: &str) -> Result<Vec<WordPair>, WordListError> {
    let mut pairs = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = index + 1;
        let (word, definition) =
            split_line(line).ok_or(WordListError::MissingSeparator { line: line_no })?;
        if word.is_empty() {
            return Err(WordListError::EmptyWord { line: line_no });
        }
        let id = pairs.len() as u32 + 1;
        pairs.push(WordPair::new(id, word, definition));
    }
    Ok(pairs)
}

/// Give every pair with id `0` a fresh id, counting from 1 and skipping
/// ids already in use. Pairs that already have an id keep it.
pub fn assign_missing_ids(pairs: &mut [WordPair]) {
    let mut used: Vec<u32> = pairs.iter().map(|p| p.id).filter(|&id| id != 0).collect();
    used.sort_unstable();
    let mut next = 1u32;
    for pair in pairs.iter_mut().filter(|p| p.id == 0) {
        while used.binary_search(&next).is_ok() {
            next += 1;
        }
        pair.id = next;
        next += 1;
    }
}

/// Split one line at the first separator (by priority) it contains.
fn split_line(line: &str) -> Option<(&str, &str)> {
    SEPARATORS.iter().find_map(|sep| {
        line.split_once(sep)
            .map(|(word, definition)| (word.trim(), definition.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_form() {
        let pair = WordPair::new(1, "Ice cream", "a frozen dessert");
        assert_eq!(pair.normalized(), "ICECREAM");
        assert_eq!(pair.word, "Ice cream");
    }

    #[test]
    fn parse_all_separators() {
        let text = "cat\ta small pet\ndog - a loyal pet\nsol: the sun\nagua = water\n";
        let pairs = parse_word_list(text).unwrap();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], WordPair::new(1, "cat", "a small pet"));
        assert_eq!(pairs[1], WordPair::new(2, "dog", "a loyal pet"));
        assert_eq!(pairs[2], WordPair::new(3, "sol", "the sun"));
        assert_eq!(pairs[3], WordPair::new(4, "agua", "water"));
    }

    #[test]
    fn hyphenated_word_keeps_its_hyphen() {
        // ` - ` is matched before `:`, and a bare `-` is never a separator
        let pairs = parse_word_list("t-shirt - a casual top").unwrap();
        assert_eq!(pairs[0].word, "t-shirt");
        assert_eq!(pairs[0].definition, "a casual top");
    }

    #[test]
    fn tab_wins_over_colon() {
        let pairs = parse_word_list("time\t12:30 or so").unwrap();
        assert_eq!(pairs[0].word, "time");
        assert_eq!(pairs[0].definition, "12:30 or so");
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let text = "# animals\n\ncat - meows\n   \n# end\n";
        let pairs = parse_word_list(text).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].id, 1);
    }

    #[test]
    fn missing_separator_reports_line() {
        let err = parse_word_list("cat - meows\n\nbird").unwrap_err();
        assert_eq!(err, WordListError::MissingSeparator { line: 3 });
        assert!(err.to_string().starts_with("line 3"));
    }

    #[test]
    fn empty_word_is_rejected() {
        let err = parse_word_list(" : nothing").unwrap_err();
        assert_eq!(err, WordListError::EmptyWord { line: 1 });
    }

    #[test]
    fn trailing_dash_is_not_a_separator() {
        let err = parse_word_list("cat -  ").unwrap_err();
        assert_eq!(err, WordListError::MissingSeparator { line: 1 });
    }

    #[test]
    fn empty_definition_is_allowed() {
        let pairs = parse_word_list("cat:").unwrap();
        assert_eq!(pairs[0].definition, "");
    }

    #[test]
    fn serde_shape() {
        let pair = WordPair::new(7, "gato", "cat");
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"id":7,"word":"gato","definition":"cat"}"#);
        let back: WordPair = serde_json::from_str(r#"{"id":7,"word":"gato"}"#).unwrap();
        assert_eq!(back.definition, "");
    }

    #[test]
    fn id_defaults_when_missing() {
        let pairs: Vec<WordPair> =
            serde_json::from_str(r#"[{"word":"cat"},{"word":"dog"}]"#).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].id, 0);
        assert_eq!(pairs[1].word, "dog");
    }

    #[test]
    fn missing_ids_are_numbered_around_existing_ones() {
        let mut pairs: Vec<WordPair> =
            serde_json::from_str(r#"[{"word":"cat"},{"id":2,"word":"dog"},{"word":"fish"}]"#)
                .unwrap();
        assign_missing_ids(&mut pairs);
        let ids: Vec<u32> = pairs.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let mut pairs = vec![WordPair::new(1, "a", ""), WordPair::new(0, "b", "")];
        assign_missing_ids(&mut pairs);
        assert_eq!(pairs[1].id, 2);
    }
}
