// Word normalization: uppercase and strip to the puzzle alphabet.
//
// Puzzle grids only ever hold the 26 basic Latin capitals plus the Spanish
// accented vowels and Ñ. Everything else a user may type into a word list
// (spaces, hyphens, digits, apostrophes, other scripts) is dropped.

// ---------------------------------------------------------------------------
// Puzzle alphabet
// ---------------------------------------------------------------------------

/// Accented capitals allowed in addition to `A`-`Z`: Ñ Á É Í Ó Ú Ü
const ACCENTED_CAPITALS: &[char] = &[
    '\u{00D1}', '\u{00C1}', '\u{00C9}', '\u{00CD}', '\u{00D3}', '\u{00DA}', '\u{00DC}',
];

/// Letters used to fill empty word-search cells, in draw order.
pub const FILL_ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Check whether an (already uppercased) character may appear in a grid.
pub fn is_puzzle_letter(c: char) -> bool {
    c.is_ascii_uppercase() || ACCENTED_CAPITALS.contains(&c)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Uppercase a word and keep only puzzle letters.
///
/// Uppercasing uses the full Unicode mapping before filtering, so a
/// character that expands (`ß` becomes `SS`) contributes every resulting
/// letter. Never fails; empty input gives empty output.
///
/// ```
/// use wordgrid_core::normalize::clean_word;
/// assert_eq!(clean_word("Café-123"), "CAFÉ");
/// ```
pub fn clean_word(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .filter(|&c| is_puzzle_letter(c))
        .collect()
}

/// Normalize a word and return its letters for indexed access.
pub fn clean_letters(word: &str) -> Vec<char> {
    clean_word(word).chars().collect()
}
