//! Property tests over random word lists and seeds.

use proptest::prelude::*;

use wordgrid_core::normalize::FILL_ALPHABET;
use wordgrid_core::shuffle::{scramble_word, shuffle_array};
use wordgrid_core::word::WordPair;
use wordgrid_layout::crossword::{CrosswordLayout, Orientation, generate_crossword};
use wordgrid_layout::word_search::{MAX_GRID_SIZE, MIN_GRID_SIZE, generate_word_search};

fn pairs(words: &[String]) -> Vec<WordPair> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| WordPair::new(i as u32 + 1, w.as_str(), format!("clue {i}")))
        .collect()
}

fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

/// Every filled cell belongs to at least one placed entry.
fn all_letters_covered(layout: &CrosswordLayout) -> bool {
    let mut covered = vec![vec![false; layout.width]; layout.height];
    for entry in &layout.placed_words {
        for (x, y) in entry.cells() {
            covered[y][x] = true;
        }
    }
    layout
        .grid
        .iter()
        .flatten()
        .all(|cell| cell.ch.is_none() || covered[cell.y][cell.x])
}

/// Maximal runs of two or more letters along `orientation`, as
/// `(x, y, letters)` with the start cell in cropped coordinates.
fn letter_runs(layout: &CrosswordLayout, orientation: Orientation) -> Vec<(usize, usize, String)> {
    let (lines, len) = match orientation {
        Orientation::Across => (layout.height, layout.width),
        Orientation::Down => (layout.width, layout.height),
    };
    let at = |line: usize, k: usize| match orientation {
        Orientation::Across => (k, line),
        Orientation::Down => (line, k),
    };

    let mut runs = Vec::new();
    for line in 0..lines {
        let mut k = 0;
        while k < len {
            let start = k;
            let mut run = String::new();
            while k < len {
                let (x, y) = at(line, k);
                match layout.letter_at(x, y) {
                    Some(c) => run.push(c),
                    None => break,
                }
                k += 1;
            }
            if run.chars().count() >= 2 {
                let (x, y) = at(line, start);
                runs.push((x, y, run));
            }
            k += 1;
        }
    }
    runs
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // -- shuffling --

    #[test]
    fn shuffle_is_a_permutation(values in prop::collection::vec(any::<u16>(), 0..30), seed in any::<u32>()) {
        let shuffled = shuffle_array(&values, seed);
        let mut a = values.clone();
        let mut b = shuffled.clone();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
        prop_assert_eq!(shuffle_array(&values, seed), shuffled);
    }

    #[test]
    fn scramble_keeps_letters(word in "[A-Z]{0,12}", seed in any::<u32>()) {
        let scrambled = scramble_word(&word, seed);
        prop_assert_eq!(sorted_chars(&scrambled), sorted_chars(&word));
    }

    // -- word search --

    #[test]
    fn word_search_is_deterministic(
        words in prop::collection::vec("[a-z]{1,8}", 0..8),
        size in 0usize..40,
        seed in any::<u32>(),
    ) {
        let pairs = pairs(&words);
        prop_assert_eq!(
            generate_word_search(&pairs, size, seed),
            generate_word_search(&pairs, size, seed)
        );
    }

    #[test]
    fn word_search_grid_is_full_and_legal(
        words in prop::collection::vec("[a-z]{1,12}", 0..10),
        size in 0usize..40,
        seed in any::<u32>(),
    ) {
        let pairs = pairs(&words);
        let ws = generate_word_search(&pairs, size, seed);

        prop_assert!((MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&ws.size));
        prop_assert_eq!(ws.grid.len(), ws.size);
        for row in &ws.grid {
            prop_assert_eq!(row.len(), ws.size);
            for c in row {
                prop_assert!(FILL_ALPHABET.contains(c));
            }
        }

        for placed in &ws.placed_words {
            let read: String = placed
                .cells()
                .into_iter()
                .map(|(x, y)| ws.grid[y][x])
                .collect();
            prop_assert_eq!(&read, &placed.word);
        }

        prop_assert_eq!(
            ws.placed_words.len() + ws.unplaced(&pairs).len(),
            pairs.len()
        );
    }

    // -- crossword --

    #[test]
    fn crossword_is_deterministic(
        words in prop::collection::vec("[a-z]{1,8}", 0..8),
        seed in any::<u32>(),
    ) {
        let pairs = pairs(&words);
        prop_assert_eq!(generate_crossword(&pairs, seed), generate_crossword(&pairs, seed));
    }

    #[test]
    fn crossword_entries_read_back(
        words in prop::collection::vec("[a-h]{2,9}", 1..10),
        seed in any::<u32>(),
    ) {
        let pairs = pairs(&words);
        let layout = generate_crossword(&pairs, seed);

        // The first word always fits.
        prop_assert!(!layout.is_empty());
        prop_assert_eq!(layout.grid.len(), layout.height);
        for row in &layout.grid {
            prop_assert_eq!(row.len(), layout.width);
        }

        // Padding ring stays open.
        for x in 0..layout.width {
            prop_assert!(layout.grid[0][x].ch.is_none());
            prop_assert!(layout.grid[layout.height - 1][x].ch.is_none());
        }
        for y in 0..layout.height {
            prop_assert!(layout.grid[y][0].ch.is_none());
            prop_assert!(layout.grid[y][layout.width - 1].ch.is_none());
        }

        for entry in &layout.placed_words {
            let read: String = entry
                .cells()
                .into_iter()
                .map(|(x, y)| layout.letter_at(x, y).unwrap_or('?'))
                .collect();
            prop_assert_eq!(&read, &entry.word);
        }
        prop_assert!(all_letters_covered(&layout));
        prop_assert_eq!(
            layout.placed_words.len() + layout.unplaced(&pairs).len(),
            pairs.len()
        );
    }

    #[test]
    fn crossword_numbers_are_row_major(
        words in prop::collection::vec("[a-f]{2,7}", 1..10),
        seed in any::<u32>(),
    ) {
        let layout = generate_crossword(&pairs(&words), seed);

        let mut starts: Vec<(usize, usize, u32)> = layout
            .placed_words
            .iter()
            .map(|p| (p.y, p.x, p.number))
            .collect();
        starts.sort_unstable();
        starts.dedup();

        // Distinct starts are numbered 1..=n in (row, column) order.
        for (i, &(_, _, number)) in starts.iter().enumerate() {
            prop_assert_eq!(number, i as u32 + 1);
        }
    }

    #[test]
    fn crossword_runs_are_entries(
        words in prop::collection::vec("[a-e]{2,8}", 1..12),
        seed in any::<u32>(),
    ) {
        let layout = generate_crossword(&pairs(&words), seed);

        // Words only touch where they cross, so every line of adjacent
        // letters is exactly one placed entry.
        for orientation in [Orientation::Across, Orientation::Down] {
            for (x, y, run) in letter_runs(&layout, orientation) {
                let found = layout.placed_words.iter().any(|p| {
                    p.direction == orientation && p.x == x && p.y == y && p.word == run
                });
                prop_assert!(
                    found,
                    "{} run {:?} at ({}, {}) is not a placed entry",
                    orientation.name(), run, x, y
                );
            }
        }
    }
}
