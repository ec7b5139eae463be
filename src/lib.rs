//! Chord Chart Transposition Engine WASM Module
//!
//! This is the WASM module behind the chord chart application. It provides
//! chord symbol transposition with enharmonic normalization, chord
//! simplification, line classification for mixed chord/lyric charts, and
//! alignment-preserving whole-chart rewriting.

pub mod api;
pub mod models;
pub mod parse;
pub mod transpose;

// Re-export commonly used types
pub use models::{Chord, LineKind, PitchClass};
pub use parse::classifier::{classify_line, is_chord_line};
pub use parse::grammar::{find_chords, is_chord, parse_chord, ChordMatch};
pub use transpose::{simplify_chord, transpose_chord, transpose_chord_line, transpose_content};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Chord chart engine WASM module initialized");
}
