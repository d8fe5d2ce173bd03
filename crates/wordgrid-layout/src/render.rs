// Plain-text rendering of activities for printing.
//
// Output is monospace text with no trailing whitespace on any line. Answer
// keys are rendered by the same functions with `show_answers` set.

use std::fmt::Write;

use crate::activity::{Activity, Anagrams, FillIn, Flashcards, Matching};
use crate::crossword::CrosswordLayout;
use crate::word_search::WordSearch;

/// Placeholder for grid cells that are not part of any answer.
const HIDDEN: char = '.';

/// A crossword cell no word passes through.
const BLOCKED: &str = "####";

/// Render any activity with its heading.
pub fn render_activity(activity: &Activity, show_answers: bool) -> String {
    let kind = activity.kind();
    let heading = if show_answers {
        format!("{} (answers)", kind.title())
    } else {
        kind.title().to_string()
    };
    let body = match activity {
        Activity::WordSearch(ws) => render_word_search(ws, show_answers),
        Activity::Crossword(cw) => render_crossword(cw, show_answers),
        Activity::Matching(m) => render_matching(m, show_answers),
        Activity::Anagram(a) => render_anagrams(a, show_answers),
        Activity::FillIn(f) => render_fill_in(f, show_answers),
        Activity::Flashcards(f) => render_flashcards(f),
    };
    format!("{heading}\n{}\n\n{body}", "=".repeat(heading.chars().count()))
}

/// Join lines, trimming trailing whitespace, ending with a newline.
fn finish(lines: Vec<String>) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Word search
// ---------------------------------------------------------------------------

/// Letters separated by spaces; with answers, non-answer cells are hidden.
pub fn render_word_search(ws: &WordSearch, show_answers: bool) -> String {
    // Shaped like the grid itself; placements pointing outside it are ignored.
    let mut answer_cells: Vec<Vec<bool>> =
        ws.grid.iter().map(|row| vec![false; row.len()]).collect();
    if show_answers {
        for placed in &ws.placed_words {
            for (x, y) in placed.cells() {
                if let Some(cell) = answer_cells.get_mut(y).and_then(|row| row.get_mut(x)) {
                    *cell = true;
                }
            }
        }
    }

    let mut lines: Vec<String> = ws
        .grid
        .iter()
        .zip(&answer_cells)
        .map(|(row, marks)| {
            row.iter()
                .zip(marks)
                .map(|(&c, &marked)| {
                    if show_answers && !marked {
                        HIDDEN.to_string()
                    } else {
                        c.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    lines.push(String::new());
    lines.push("Find these words:".to_string());
    // One line per placement; repeated words keep placement order.
    let mut placements: Vec<_> = ws.placed_words.iter().collect();
    placements.sort_by(|a, b| a.word.cmp(&b.word));
    for placed in placements {
        let mut line = format!("  {}", placed.word);
        if show_answers {
            let _ = write!(
                line,
                "  row {}, column {}, {}",
                placed.y + 1,
                placed.x + 1,
                placed.direction().name()
            );
        }
        lines.push(line);
    }
    finish(lines)
}

// ---------------------------------------------------------------------------
// Crossword
// ---------------------------------------------------------------------------

/// Four characters per cell: `[12]` for a numbered open cell, `[  ]` for an
/// open cell, `####` for a blocked one. With answers the letter is shown.
pub fn render_crossword(layout: &CrosswordLayout, show_answers: bool) -> String {
    if layout.is_empty() {
        return finish(vec!["(no words could be placed)".to_string()]);
    }

    let mut lines: Vec<String> = layout
        .grid
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell.ch {
                    None => BLOCKED.to_string(),
                    Some(letter) if show_answers => format!("[ {letter}]"),
                    Some(_) => match layout.number_at(cell.x, cell.y) {
                        Some(n) => format!("[{n:>2}]"),
                        None => "[  ]".to_string(),
                    },
                })
                .collect::<String>()
        })
        .collect();

    for (heading, entries) in [("Across", layout.across()), ("Down", layout.down())] {
        if entries.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(heading.to_string());
        for entry in entries {
            let len = entry.word.chars().count();
            let mut line = format!("  {:>2}. {} ({len})", entry.number, entry.clue);
            if show_answers {
                let _ = write!(line, "  {}", entry.word);
            }
            lines.push(line);
        }
    }
    finish(lines)
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

pub fn render_matching(matching: &Matching, show_answers: bool) -> String {
    let left: Vec<String> = matching
        .items
        .iter()
        .zip(&matching.answers)
        .map(|(item, answer)| {
            let blank = if show_answers {
                format!("{answer:^5}")
            } else {
                "_____".to_string()
            };
            format!("{:>2}. {} {blank}", item.number, item.word)
        })
        .collect();
    let width = left.iter().map(|s| s.chars().count()).max().unwrap_or(0);

    let rows = left.len().max(matching.choices.len());
    let lines = (0..rows)
        .map(|i| {
            let l = left.get(i).map(String::as_str).unwrap_or("");
            let r = matching
                .choices
                .get(i)
                .map(|c| format!("{}. {}", c.label, c.definition))
                .unwrap_or_default();
            format!("{l:<width$}    {r}")
        })
        .collect();
    finish(lines)
}

// ---------------------------------------------------------------------------
// Anagrams
// ---------------------------------------------------------------------------

pub fn render_anagrams(anagrams: &Anagrams, show_answers: bool) -> String {
    let width = anagrams
        .items
        .iter()
        .map(|i| i.scrambled.chars().count())
        .max()
        .unwrap_or(0);
    let lines = anagrams
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let answer = if show_answers {
                item.answer.clone()
            } else {
                "_".repeat(item.answer.chars().count() + 2)
            };
            let mut line = format!("{:>2}. {:<width$}  {answer}", i + 1, item.scrambled);
            if !item.hint.is_empty() {
                let _ = write!(line, "  ({})", item.hint);
            }
            line
        })
        .collect();
    finish(lines)
}

// ---------------------------------------------------------------------------
// Fill in the blanks
// ---------------------------------------------------------------------------

pub fn render_fill_in(fill: &FillIn, show_answers: bool) -> String {
    let mut lines = vec![format!("Word bank: {}", fill.word_bank.join(", ")), String::new()];
    for item in &fill.items {
        let blank = if show_answers {
            item.answer.clone()
        } else {
            "_".repeat(item.blank_len + 2)
        };
        lines.push(format!("{:>2}. {blank}  {}", item.number, item.prompt));
    }
    finish(lines)
}

// ---------------------------------------------------------------------------
// Flashcards
// ---------------------------------------------------------------------------

/// One boxed card per word pair: front on the left, back on the right, so a
/// printed sheet can be cut along the rules and folded down the middle.
pub fn render_flashcards(cards: &Flashcards) -> String {
    let front_w = cards
        .cards
        .iter()
        .map(|c| c.front.chars().count())
        .max()
        .unwrap_or(0);
    let back_w = cards
        .cards
        .iter()
        .map(|c| c.back.chars().count())
        .max()
        .unwrap_or(0);
    let rule = format!("+{}+{}+", "-".repeat(front_w + 2), "-".repeat(back_w + 2));

    let mut lines = vec![rule.clone()];
    for card in &cards.cards {
        lines.push(format!("| {:<front_w$} | {:<back_w$} |", card.front, card.back));
        lines.push(rule.clone());
    }
    finish(lines)
}
