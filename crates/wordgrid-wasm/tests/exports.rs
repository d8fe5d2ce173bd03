#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

use wordgrid_wasm::{WasmWorksheet, generate_word_search_js, shuffle_array_js};

fn ok<T>(result: Result<T, JsError>) -> T {
    result.unwrap_or_else(|_| panic!("export returned an error"))
}

fn words_json(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

#[wasm_bindgen_test]
fn shuffle_array_of_non_array_is_empty() {
    for value in [JsValue::NULL, JsValue::UNDEFINED, JsValue::from_str("abc"), JsValue::from(3)] {
        assert_eq!(shuffle_array_js(&value, 1).length(), 0);
    }
}

#[wasm_bindgen_test]
fn shuffle_array_keeps_length() {
    let list: js_sys::Array = (1..=5).map(JsValue::from).collect();
    let shuffled = shuffle_array_js(&list.into(), 1);
    assert_eq!(shuffled.length(), 5);
}

#[wasm_bindgen_test]
fn bad_word_list_gives_empty_puzzle() {
    let ws = ok(generate_word_search_js(JsValue::from_str("not a list"), 10, 1));
    let placed = js_sys::Reflect::get(&ws, &JsValue::from_str("placedWords")).unwrap();
    assert_eq!(js_sys::Array::from(&placed).length(), 0);
}

#[wasm_bindgen_test]
fn words_without_ids_are_numbered() {
    let sheet = WasmWorksheet::new(words_json(r#"[{"word":"cat"},{"id":1,"word":"dog"}]"#));
    let words = js_sys::Array::from(&ok(sheet.words()));
    let id = |i: u32| {
        js_sys::Reflect::get(&words.get(i), &JsValue::from_str("id"))
            .unwrap()
            .as_f64()
    };
    assert_eq!(id(0), Some(2.0));
    assert_eq!(id(1), Some(1.0));
}
