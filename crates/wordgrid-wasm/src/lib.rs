// WASM bindings for wordgrid.
//
// Exports the layout engine as free functions, plus a `WasmWorksheet` class
// wrapping `WorksheetGenerator` for front ends that keep one word list
// around. Word lists cross the boundary as arrays of `{id, word, definition}`
// objects (`id` optional); results come back as plain JS objects built with
// serde-wasm-bindgen (empty cells as `null`). A word list that is not an
// array of word pairs is treated as empty, so the engine functions never
// throw on bad input.
//
// Usage from JavaScript:
//
//   const words = [{ id: 1, word: "gato", definition: "cat" }];
//   generateWordSearch(words, 15, 42);   // => { size, grid, placedWords }
//   generateCrossword(words, 42);        // => { grid, placedWords, width, height }
//   scrambleWord("CAT", 1);              // => "TAC"
//   shuffleArray([1, 2, 3, 4, 5], 1);    // => [1, 4, 5, 3, 2]
//   cleanWord("Café-123");               // => "CAFÉ"
//   const pack = generatePack(words, 42, 15);
//   renderText(pack[0], false);          // => printable text

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use wordgrid_core::normalize::clean_word;
use wordgrid_core::shuffle::{scramble_word, shuffle_array};
use wordgrid_core::word::{WordPair, assign_missing_ids};
use wordgrid_layout::activity::{
    Activity, ActivityKind, GeneratorOptions, generate_activity, generate_pack,
};
use wordgrid_layout::crossword::generate_crossword;
use wordgrid_layout::handle::WorksheetGenerator;
use wordgrid_layout::render::render_activity;
use wordgrid_layout::word_search::generate_word_search;

// ============================================================================
// Conversion helpers
// ============================================================================

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Convert a JS word list, falling back to an empty list. Missing ids are
/// numbered from 1.
fn words_from_js(value: JsValue) -> Vec<WordPair> {
    words_or_empty(serde_wasm_bindgen::from_value(value))
}

fn words_or_empty<E: std::fmt::Display>(converted: Result<Vec<WordPair>, E>) -> Vec<WordPair> {
    let mut words = match converted {
        Ok(words) => words,
        Err(e) => {
            tracing::warn!(error = %e, "word list is not an array of word pairs, using an empty list");
            Vec::new()
        }
    };
    assign_missing_ids(&mut words);
    words
}

fn parse_kind(kind: &str) -> Result<ActivityKind, JsError> {
    kind.parse::<ActivityKind>()
        .map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// Engine functions
// ============================================================================

/// Generate a word search. `gridSize` is clamped to 10..=25.
#[wasm_bindgen(js_name = "generateWordSearch")]
pub fn generate_word_search_js(
    words: JsValue,
    grid_size: usize,
    seed: u32,
) -> Result<JsValue, JsError> {
    let words = words_from_js(words);
    to_js(&generate_word_search(&words, grid_size, seed))
}

/// Generate a cropped, numbered crossword.
#[wasm_bindgen(js_name = "generateCrossword")]
pub fn generate_crossword_js(words: JsValue, seed: u32) -> Result<JsValue, JsError> {
    let words = words_from_js(words);
    to_js(&generate_crossword(&words, seed))
}

#[wasm_bindgen(js_name = "scrambleWord")]
pub fn scramble_word_js(word: &str, seed: u32) -> String {
    scramble_word(word, seed)
}

/// Return a shuffled copy of any JS array. The input is left untouched;
/// anything that is not an array gives an empty array.
#[wasm_bindgen(js_name = "shuffleArray")]
pub fn shuffle_array_js(list: &JsValue, seed: u32) -> js_sys::Array {
    if !js_sys::Array::is_array(list) {
        return js_sys::Array::new();
    }
    let items: Vec<JsValue> = js_sys::Array::from(list).iter().collect();
    shuffle_array(&items, seed).into_iter().collect()
}

#[wasm_bindgen(js_name = "cleanWord")]
pub fn clean_word_js(word: &str) -> String {
    clean_word(word)
}

// ============================================================================
// Activities
// ============================================================================

/// Generate one activity. `kind` accepts names such as "word-search",
/// "crossword", "matching", "anagram", "fill-in" or "flashcards".
#[wasm_bindgen(js_name = "generateActivity")]
pub fn generate_activity_js(
    kind: &str,
    words: JsValue,
    seed: u32,
    grid_size: usize,
) -> Result<JsValue, JsError> {
    let kind = parse_kind(kind)?;
    let words = words_from_js(words);
    let options = GeneratorOptions { seed, grid_size };
    to_js(&generate_activity(kind, &words, &options))
}

/// Generate all six activities as an array of `{kind, data}` objects.
#[wasm_bindgen(js_name = "generatePack")]
pub fn generate_pack_js(words: JsValue, seed: u32, grid_size: usize) -> Result<JsValue, JsError> {
    let words = words_from_js(words);
    let options = GeneratorOptions { seed, grid_size };
    to_js(&generate_pack(&words, &options))
}

/// Render an activity object (as returned by `generateActivity`) as text.
#[wasm_bindgen(js_name = "renderText")]
pub fn render_text_js(activity: JsValue, show_answers: bool) -> Result<String, JsError> {
    let activity: Activity = from_js(activity)?;
    Ok(render_activity(&activity, show_answers))
}

// ============================================================================
// WasmWorksheet
// ============================================================================

/// A word list with its options, generating activities on demand.
#[wasm_bindgen]
pub struct WasmWorksheet {
    generator: WorksheetGenerator,
}

#[wasm_bindgen]
impl WasmWorksheet {
    /// Create a worksheet from an array of word pairs.
    #[wasm_bindgen(constructor)]
    pub fn new(words: JsValue) -> WasmWorksheet {
        WasmWorksheet {
            generator: WorksheetGenerator::new(words_from_js(words)),
        }
    }

    /// Create a worksheet from `word - definition` lines.
    #[wasm_bindgen(js_name = "fromText")]
    pub fn from_text(text: &str) -> Result<WasmWorksheet, JsError> {
        let generator =
            WorksheetGenerator::from_text(text).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmWorksheet { generator })
    }

    #[wasm_bindgen(js_name = "setWords")]
    pub fn set_words(&mut self, words: JsValue) {
        self.generator.set_words(words_from_js(words));
    }

    pub fn words(&self) -> Result<JsValue, JsError> {
        to_js(self.generator.words())
    }

    #[wasm_bindgen(js_name = "setSeed")]
    pub fn set_seed(&mut self, seed: u32) {
        self.generator.set_seed(seed);
    }

    #[wasm_bindgen(js_name = "setGridSize")]
    pub fn set_grid_size(&mut self, size: usize) {
        self.generator.set_grid_size(size);
    }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    #[wasm_bindgen(getter, js_name = "gridSize")]
    pub fn grid_size(&self) -> usize {
        self.generator.grid_size()
    }

    #[wasm_bindgen(js_name = "wordSearch")]
    pub fn word_search(&self) -> Result<JsValue, JsError> {
        to_js(&self.generator.word_search())
    }

    pub fn crossword(&self) -> Result<JsValue, JsError> {
        to_js(&self.generator.crossword())
    }

    pub fn activity(&self, kind: &str) -> Result<JsValue, JsError> {
        to_js(&self.generator.activity(parse_kind(kind)?))
    }

    pub fn pack(&self) -> Result<JsValue, JsError> {
        to_js(&self.generator.pack())
    }

    /// Render one activity as printable text.
    pub fn render(&self, kind: &str, show_answers: bool) -> Result<String, JsError> {
        Ok(self.generator.render(parse_kind(kind)?, show_answers))
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        WorksheetGenerator::get_version().to_string()
    }
}
