// Working grid buffer shared by the placers.
//
// A flat, row-major buffer of optional letters owned by exactly one
// generation call. Coordinates are signed so callers can look one cell past
// an edge without special-casing; anything out of bounds reads as empty.

use wordgrid_core::normalize::clean_letters;
use wordgrid_core::word::WordPair;

pub(crate) struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl Canvas {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub(crate) fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Letter at `(x, y)`; `None` when empty or out of bounds.
    pub(crate) fn get(&self, x: isize, y: isize) -> Option<char> {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width + x as usize]
        } else {
            None
        }
    }

    pub(crate) fn is_filled(&self, x: isize, y: isize) -> bool {
        self.get(x, y).is_some()
    }

    /// Write a run of letters starting at `(x, y)` stepping by `(dx, dy)`.
    ///
    /// The caller has already validated that the whole run is in bounds.
    pub(crate) fn write_run(&mut self, letters: &[char], x: isize, y: isize, dx: isize, dy: isize) {
        for (k, &letter) in letters.iter().enumerate() {
            let cx = x + dx * k as isize;
            let cy = y + dy * k as isize;
            debug_assert!(self.in_bounds(cx, cy));
            self.cells[cy as usize * self.width + cx as usize] = Some(letter);
        }
    }

    /// Inclusive bounding box `(min_x, min_y, max_x, max_y)` of filled cells.
    pub(crate) fn filled_bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                continue;
            }
            let (x, y) = (i % self.width, i / self.width);
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
        bounds
    }

    /// Consume the buffer into rows, filling empty cells row-major from `fill`.
    pub(crate) fn into_rows_filled(self, mut fill: impl FnMut() -> char) -> Vec<Vec<char>> {
        let width = self.width;
        let cells: Vec<char> = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(&mut fill))
            .collect();
        cells.chunks(width.max(1)).map(<[char]>::to_vec).collect()
    }
}

/// Pair each word with its normalized letters, longest first.
///
/// The sort is stable, so words of equal length keep their input order.
pub(crate) fn longest_first(words: &[WordPair]) -> Vec<(&WordPair, Vec<char>)> {
    let mut terms: Vec<(&WordPair, Vec<char>)> = words
        .iter()
        .map(|pair| (pair, clean_letters(&pair.word)))
        .collect();
    terms.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    terms
}
