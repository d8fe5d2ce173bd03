// Word search placement.
//
// Words go into a square grid along any of eight directions. Overlaps are
// allowed where the letters agree. Words that cannot be placed within the
// attempt budget are dropped, and every cell left empty is filled with a
// random capital letter drawn from the same seeded stream.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use wordgrid_core::normalize::FILL_ALPHABET;
use wordgrid_core::random::SeededRandom;
use wordgrid_core::word::WordPair;

use crate::grid::{Canvas, longest_first};

/// Smallest grid side accepted; smaller requests are raised to this.
pub const MIN_GRID_SIZE: usize = 10;

/// Largest grid side accepted; larger requests are lowered to this.
pub const MAX_GRID_SIZE: usize = 25;

/// Placement attempts per word before it is dropped.
pub const MAX_ATTEMPTS: usize = 100;

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// A unit step on the grid. Never `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

/// The eight compass directions, in draw order.
///
/// The order is part of the seed contract: a direction is chosen by index.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { dx: 1, dy: 0 },
    Direction { dx: 0, dy: 1 },
    Direction { dx: 1, dy: 1 },
    Direction { dx: 1, dy: -1 },
    Direction { dx: -1, dy: 0 },
    Direction { dx: 0, dy: -1 },
    Direction { dx: -1, dy: -1 },
    Direction { dx: -1, dy: 1 },
];

impl Direction {
    /// Human-readable name, as printed in answer keys.
    pub fn name(self) -> &'static str {
        match (self.dx, self.dy) {
            (1, 0) => "right",
            (0, 1) => "down",
            (1, 1) => "down-right",
            (1, -1) => "up-right",
            (-1, 0) => "left",
            (0, -1) => "up",
            (-1, -1) => "up-left",
            (-1, 1) => "down-left",
            _ => "none",
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A word successfully placed in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    /// Normalized word as it appears in the grid.
    pub word: String,
    /// Start column.
    pub x: usize,
    /// Start row.
    pub y: usize,
    pub dx: i32,
    pub dy: i32,
}

impl PlacedWord {
    pub fn direction(&self) -> Direction {
        Direction {
            dx: self.dx,
            dy: self.dy,
        }
    }

    /// Grid coordinates `(x, y)` covered by the word, first letter first.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.word.chars().count() as isize)
            .map(|k| {
                (
                    (self.x as isize + self.dx as isize * k) as usize,
                    (self.y as isize + self.dy as isize * k) as usize,
                )
            })
            .collect()
    }
}

/// A generated word search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSearch {
    /// Side length of the square grid.
    pub size: usize,
    /// `size` rows of `size` capital letters.
    pub grid: Vec<Vec<char>>,
    /// Placements in the order they were made (longest word first).
    pub placed_words: Vec<PlacedWord>,
}

impl WordSearch {
    /// Letter at column `x`, row `y`.
    pub fn letter_at(&self, x: usize, y: usize) -> Option<char> {
        self.grid.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Input words that did not make it into the grid, in input order.
    ///
    /// Placement itself never reports drops; this compares after the fact.
    pub fn unplaced<'a>(&self, words: &'a [WordPair]) -> Vec<&'a WordPair> {
        missing_words(words, self.placed_words.iter().map(|p| p.word.as_str()))
    }
}

/// Words from `words` not accounted for by `placed` (a multiset of
/// normalized forms).
pub(crate) fn missing_words<'a, 'p>(
    words: &'a [WordPair],
    placed: impl Iterator<Item = &'p str>,
) -> Vec<&'a WordPair> {
    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for word in placed {
        *remaining.entry(word).or_insert(0) += 1;
    }
    words
        .iter()
        .filter(|pair| {
            let normalized = pair.normalized();
            match remaining.get_mut(normalized.as_str()) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    false
                }
                _ => true,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Clamp a requested grid size into `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
pub fn clamp_grid_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

/// Generate a word search.
///
/// Words are placed longest first. Each gets up to [`MAX_ATTEMPTS`] random
/// (direction, start) draws; a draw succeeds when the whole path is in
/// bounds and every cell is empty or already holds the same letter. Words
/// that never fit are dropped without error. Finally every empty cell is
/// filled row-major with a random letter `A`-`Z`.
///
/// The same `words`, `grid_size` and `seed` always produce the same result.
pub fn generate_word_search(words: &[WordPair], grid_size: usize, seed: u32) -> WordSearch {
    let size = clamp_grid_size(grid_size);
    let mut rng = SeededRandom::new(seed);
    let mut canvas = Canvas::square(size);
    let mut placed_words = Vec::new();

    for (pair, letters) in longest_first(words) {
        if letters.is_empty() {
            continue;
        }
        match place_word(&mut canvas, &letters, &mut rng) {
            Some(placed) => {
                trace!(word = %placed.word, x = placed.x, y = placed.y, dx = placed.dx, dy = placed.dy, "placed");
                placed_words.push(placed);
            }
            None => debug!(id = pair.id, word = %pair.word, "no room in word search, dropping word"),
        }
    }

    let grid = canvas.into_rows_filled(|| FILL_ALPHABET[rng.next_index(FILL_ALPHABET.len())]);

    debug!(
        size,
        seed,
        requested = words.len(),
        placed = placed_words.len(),
        "word search generated"
    );

    WordSearch {
        size,
        grid,
        placed_words,
    }
}

/// Try up to `MAX_ATTEMPTS` random placements for one word.
fn place_word(canvas: &mut Canvas, letters: &[char], rng: &mut SeededRandom) -> Option<PlacedWord> {
    let size = canvas.width();
    let last = letters.len() as isize - 1;

    for _ in 0..MAX_ATTEMPTS {
        let direction = DIRECTIONS[rng.next_index(DIRECTIONS.len())];
        let x = rng.next_index(size) as isize;
        let y = rng.next_index(size) as isize;
        let (dx, dy) = (direction.dx as isize, direction.dy as isize);

        if !canvas.in_bounds(x + dx * last, y + dy * last) {
            continue;
        }
        if !path_accepts(canvas, letters, x, y, dx, dy) {
            continue;
        }

        canvas.write_run(letters, x, y, dx, dy);
        return Some(PlacedWord {
            word: letters.iter().collect(),
            x: x as usize,
            y: y as usize,
            dx: direction.dx,
            dy: direction.dy,
        });
    }
    None
}

/// Every cell on the path is empty or already holds the matching letter.
fn path_accepts(canvas: &Canvas, letters: &[char], x: isize, y: isize, dx: isize, dy: isize) -> bool {
    letters.iter().enumerate().all(|(k, &letter)| {
        let k = k as isize;
        match canvas.get(x + dx * k, y + dy * k) {
            None => true,
            Some(existing) => existing == letter,
        }
    })
}
