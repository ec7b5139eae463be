//! WASM API for the chord chart engine
//!
//! This module provides the JavaScript-facing surface: single-chord
//! transposition and simplification, line classification, and whole-chart
//! transposition. Every function is a pure function of its arguments; the
//! host owns persistence, rendering, and capo bookkeeping (a capo display
//! is just a negative `semitones` on the caller side).

use wasm_bindgen::prelude::*;

use crate::models::PitchClass;
use crate::parse::classifier;
use crate::transpose;

/// Transpose a single chord symbol by a signed number of semitones.
/// Unrecognized symbols come back unchanged.
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(symbol: &str, semitones: i32) -> String {
    transpose::transpose_chord(symbol, semitones)
}

/// Reduce a chord symbol to the simplified vocabulary.
#[wasm_bindgen(js_name = simplifyChord)]
pub fn simplify_chord(symbol: &str) -> String {
    transpose::simplify_chord(symbol)
}

/// Whether a line of chart text carries column-aligned chord symbols.
#[wasm_bindgen(js_name = isChordLine)]
pub fn is_chord_line(line: &str) -> bool {
    classifier::is_chord_line(line)
}

/// Classify a line of chart text: `"blank"`, `"header"`, `"chord"`, or
/// `"lyric"`. The renderer styles lines by role without re-deriving it.
#[wasm_bindgen(js_name = classifyLine)]
pub fn classify_line(line: &str) -> String {
    classifier::classify_line(line).as_str().to_string()
}

/// Classify every line of a chart in one call, returning the role names in
/// line order. One boundary crossing per chart instead of one per line.
#[wasm_bindgen(js_name = classifyContent)]
pub fn classify_content(text: &str) -> Result<JsValue, JsValue> {
    let kinds: Vec<&'static str> = text
        .split('\n')
        .map(|line| classifier::classify_line(line).as_str())
        .collect();
    serde_wasm_bindgen::to_value(&kinds)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Transpose (and optionally simplify) a whole chart. Line count and order
/// are preserved; only chord tokens and the whitespace around them change.
#[wasm_bindgen(js_name = transposeContent)]
pub fn transpose_content(text: &str, semitones: i32, simplify: bool) -> String {
    log::debug!(
        "transposeContent: {} lines, {} semitones, simplify={}",
        text.split('\n').count(),
        semitones,
        simplify
    );
    transpose::transpose_content(text, semitones, simplify)
}

/// The canonical sharp-spelled scale, in ascending semitone order. Used by
/// the host for key pickers.
#[wasm_bindgen(js_name = noteNames)]
pub fn note_names() -> js_sys::Array {
    let array = js_sys::Array::new();
    for pc in PitchClass::ALL {
        array.push(&JsValue::from_str(pc.as_str()));
    }
    array
}
