// Crossword placement.
//
// Greedy intersection search on a fixed 40x40 canvas. The longest word goes
// across the middle; every later word takes the first legal crossing found
// by a row-major scan of filled cells. The result is cropped to the used
// area plus one cell of padding and clue numbers are assigned by start cell.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use wordgrid_core::random::SeededRandom;
use wordgrid_core::word::WordPair;

use crate::grid::{Canvas, longest_first};
use crate::word_search::missing_words;

/// Side length of the working canvas.
pub const CANVAS_SIZE: usize = 40;

/// Empty cells kept around the placed letters after cropping.
pub const PADDING: usize = 1;

/// Direction a crossword entry runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    /// Unit step `(dx, dy)` along the entry.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Across => (1, 0),
            Orientation::Down => (0, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Across => "across",
            Orientation::Down => "down",
        }
    }
}

/// One cell of the cropped grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Letter in the cell, or `None` for a blocked cell.
    #[serde(rename = "char")]
    pub ch: Option<char>,
    pub x: usize,
    pub y: usize,
}

/// A word placed in the crossword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedCrosswordWord {
    /// Id of the source `WordPair`.
    pub id: u32,
    /// Normalized answer.
    pub word: String,
    /// The definition, shown as the clue.
    pub clue: String,
    /// Start column (cropped coordinates).
    pub x: usize,
    /// Start row (cropped coordinates).
    pub y: usize,
    pub direction: Orientation,
    /// Clue number, shared with any other entry starting on the same cell.
    pub number: u32,
}

impl PlacedCrosswordWord {
    /// Grid coordinates `(x, y)` covered by the entry, first letter first.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (dx, dy) = self.direction.step();
        (0..self.word.chars().count())
            .map(|k| {
                (
                    self.x + dx as usize * k,
                    self.y + dy as usize * k,
                )
            })
            .collect()
    }
}

/// A cropped, numbered crossword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosswordLayout {
    /// `height` rows of `width` cells.
    pub grid: Vec<Vec<GridCell>>,
    /// Entries in placement order.
    pub placed_words: Vec<PlacedCrosswordWord>,
    pub width: usize,
    pub height: usize,
}

impl CrosswordLayout {
    fn empty() -> Self {
        Self {
            grid: Vec::new(),
            placed_words: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// True when no word could be placed.
    pub fn is_empty(&self) -> bool {
        self.placed_words.is_empty()
    }

    /// Letter at column `x`, row `y`, if that cell is open.
    pub fn letter_at(&self, x: usize, y: usize) -> Option<char> {
        self.grid.get(y).and_then(|row| row.get(x)).and_then(|cell| cell.ch)
    }

    /// Across entries ordered by clue number.
    pub fn across(&self) -> Vec<&PlacedCrosswordWord> {
        self.entries(Orientation::Across)
    }

    /// Down entries ordered by clue number.
    pub fn down(&self) -> Vec<&PlacedCrosswordWord> {
        self.entries(Orientation::Down)
    }

    fn entries(&self, direction: Orientation) -> Vec<&PlacedCrosswordWord> {
        let mut entries: Vec<&PlacedCrosswordWord> = self
            .placed_words
            .iter()
            .filter(|w| w.direction == direction)
            .collect();
        entries.sort_by_key(|w| w.number);
        entries
    }

    /// Clue number printed in the cell at `(x, y)`, if an entry starts there.
    pub fn number_at(&self, x: usize, y: usize) -> Option<u32> {
        self.placed_words
            .iter()
            .find(|w| w.x == x && w.y == y)
            .map(|w| w.number)
    }

    /// Input words that did not make it into the grid, in input order.
    pub fn unplaced<'a>(&self, words: &'a [WordPair]) -> Vec<&'a WordPair> {
        missing_words(words, self.placed_words.iter().map(|p| p.word.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// A candidate start cell and orientation on the working canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Spot {
    x: isize,
    y: isize,
    orientation: Orientation,
}

/// A placement on the working canvas, before cropping.
struct Placement<'a> {
    pair: &'a WordPair,
    word: String,
    spot: Spot,
}

/// Generate a crossword.
///
/// Placement is first-fit, not best-fit: a word that finds no legal crossing
/// in scan order is dropped, even if some other arrangement would have fit
/// it. Empty input gives a 0x0 layout.
pub fn generate_crossword(words: &[WordPair], seed: u32) -> CrosswordLayout {
    let mut rng = SeededRandom::new(seed);
    let mut canvas = Canvas::square(CANVAS_SIZE);
    let mut placements: Vec<Placement<'_>> = Vec::new();

    for (pair, letters) in longest_first(words) {
        if letters.is_empty() {
            continue;
        }
        let spot = if placements.is_empty() {
            centre_spot(letters.len())
        } else {
            find_crossing(&canvas, &letters, &mut rng)
        };
        let Some(spot) = spot else {
            debug!(id = pair.id, word = %pair.word, "no legal crossing, dropping word");
            continue;
        };

        let (dx, dy) = spot.orientation.step();
        canvas.write_run(&letters, spot.x, spot.y, dx, dy);
        let word: String = letters.iter().collect();
        trace!(%word, x = spot.x, y = spot.y, direction = spot.orientation.name(), "placed");
        placements.push(Placement { pair, word, spot });
    }

    let layout = crop_and_number(&canvas, &placements);
    debug!(
        seed,
        requested = words.len(),
        placed = layout.placed_words.len(),
        width = layout.width,
        height = layout.height,
        "crossword generated"
    );
    layout
}

/// Horizontal spot centred on the canvas for the first word.
fn centre_spot(len: usize) -> Option<Spot> {
    if len > CANVAS_SIZE {
        return None;
    }
    Some(Spot {
        x: ((CANVAS_SIZE - len) / 2) as isize,
        y: (CANVAS_SIZE / 2) as isize,
        orientation: Orientation::Across,
    })
}

/// Scan filled cells row-major and return the first legal crossing.
fn find_crossing(canvas: &Canvas, letters: &[char], rng: &mut SeededRandom) -> Option<Spot> {
    for y in 0..canvas.height() as isize {
        for x in 0..canvas.width() as isize {
            let Some(existing) = canvas.get(x, y) else {
                continue;
            };
            for (index, _) in letters.iter().enumerate().filter(|(_, c)| **c == existing) {
                let Some(orientation) = infer_orientation(canvas, x, y, rng) else {
                    continue;
                };
                let index = index as isize;
                let spot = match orientation {
                    Orientation::Across => Spot { x: x - index, y, orientation },
                    Orientation::Down => Spot { x, y: y - index, orientation },
                };
                if can_place(canvas, letters, spot) {
                    return Some(spot);
                }
            }
        }
    }
    None
}

/// Pick the orientation for a word crossing the filled cell at `(x, y)`.
///
/// A cell with a horizontal neighbour is part of an across word, so the new
/// word must run down, and vice versa. A cell with no neighbours takes a
/// coin flip; a cell with both already sits on a crossing.
fn infer_orientation(
    canvas: &Canvas,
    x: isize,
    y: isize,
    rng: &mut SeededRandom,
) -> Option<Orientation> {
    let horizontal = canvas.is_filled(x - 1, y) || canvas.is_filled(x + 1, y);
    let vertical = canvas.is_filled(x, y - 1) || canvas.is_filled(x, y + 1);
    match (horizontal, vertical) {
        (true, false) => Some(Orientation::Down),
        (false, true) => Some(Orientation::Across),
        (false, false) => Some(if rng.next_bool() {
            Orientation::Across
        } else {
            Orientation::Down
        }),
        (true, true) => None,
    }
}

/// Check a candidate against bounds, overlaps and adjacency rules.
fn can_place(canvas: &Canvas, letters: &[char], spot: Spot) -> bool {
    let (dx, dy) = spot.orientation.step();
    // Perpendicular offset: across checks above/below, down checks left/right.
    let (px, py) = (dy, dx);

    for (k, &letter) in letters.iter().enumerate() {
        let cx = spot.x + dx * k as isize;
        let cy = spot.y + dy * k as isize;
        if !canvas.in_bounds(cx, cy) {
            return false;
        }
        match canvas.get(cx, cy) {
            Some(existing) if existing != letter => return false,
            Some(_) => {}
            None => {
                if canvas.is_filled(cx + px, cy + py) || canvas.is_filled(cx - px, cy - py) {
                    return false;
                }
            }
        }
    }

    let len = letters.len() as isize;
    let before = canvas.is_filled(spot.x - dx, spot.y - dy);
    let after = canvas.is_filled(spot.x + dx * len, spot.y + dy * len);
    !before && !after
}

// ---------------------------------------------------------------------------
// Crop and number
// ---------------------------------------------------------------------------

fn crop_and_number(canvas: &Canvas, placements: &[Placement<'_>]) -> CrosswordLayout {
    let Some((min_x, min_y, max_x, max_y)) = canvas.filled_bounds() else {
        return CrosswordLayout::empty();
    };

    let origin_x = min_x as isize - PADDING as isize;
    let origin_y = min_y as isize - PADDING as isize;
    let width = max_x - min_x + 1 + 2 * PADDING;
    let height = max_y - min_y + 1 + 2 * PADDING;

    let grid: Vec<Vec<GridCell>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| GridCell {
                    ch: canvas.get(origin_x + x as isize, origin_y + y as isize),
                    x,
                    y,
                })
                .collect()
        })
        .collect();

    let starts: Vec<(usize, usize)> = placements
        .iter()
        .map(|p| {
            (
                (p.spot.x - origin_x) as usize,
                (p.spot.y - origin_y) as usize,
            )
        })
        .collect();
    let numbers = number_starts(&starts);

    let placed_words = placements
        .iter()
        .zip(&starts)
        .map(|(p, &(x, y))| PlacedCrosswordWord {
            id: p.pair.id,
            word: p.word.clone(),
            clue: p.pair.definition.clone(),
            x,
            y,
            direction: p.spot.orientation,
            number: numbers[&(x, y)],
        })
        .collect();

    CrosswordLayout {
        grid,
        placed_words,
        width,
        height,
    }
}

/// Number distinct start cells `(x, y)` in row-major order, from 1.
fn number_starts(starts: &[(usize, usize)]) -> HashMap<(usize, usize), u32> {
    let mut cells: Vec<(usize, usize)> = starts.to_vec();
    cells.sort_by_key(|&(x, y)| (y, x));
    cells.dedup();
    cells
        .into_iter()
        .enumerate()
        .map(|(i, cell)| (cell, i as u32 + 1))
        .collect()
}
