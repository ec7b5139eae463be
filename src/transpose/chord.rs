//! Single-chord transposition and simplification
//!
//! These are the string-level operations behind the public API. They are
//! deliberately lenient: the root must parse, but the remainder of the
//! symbol is opaque, so extensions outside the strict token grammar still
//! transpose. An unrecognized root degrades to a no-op, never an error.

use crate::models::{Chord, PitchClass};

/// Split a chord symbol into its normalized root and the raw remainder.
/// The root is one letter `A..G` plus an optional `#`/`b` accidental.
fn split_root(symbol: &str) -> Option<(PitchClass, &str)> {
    let mut chars = symbol.chars();
    match chars.next() {
        Some('A'..='G') => {}
        _ => return None,
    }
    let root_len = match chars.next() {
        Some('#' | 'b') => 2,
        _ => 1,
    };
    let root = PitchClass::from_string(&symbol[..root_len])?;
    Some((root, &symbol[root_len..]))
}

/// Read the remainder of a symbol as suffix plus optional slash bass.
///
/// The bass is only recognized when the text after the first `/` is exactly
/// a root spelling; otherwise the whole remainder stays an opaque suffix,
/// so nothing outside the documented grammar gets rewritten.
fn split_bass(rest: &str) -> (&str, Option<PitchClass>) {
    match rest.split_once('/') {
        Some((suffix, after)) => match PitchClass::from_string(after) {
            Some(bass) => (suffix, Some(bass)),
            None => (rest, None),
        },
        None => (rest, None),
    }
}

/// Transpose a chord symbol by a signed number of semitones.
///
/// The root (and slash bass, if present) moves by `semitones` modulo 12 and
/// is re-spelled from the canonical sharp table; the suffix is carried
/// unchanged. A symbol whose root is not a recognized note name is returned
/// unchanged. `transpose_chord(s, 0)` re-spells enharmonics but moves
/// nothing.
pub fn transpose_chord(symbol: &str, semitones: i32) -> String {
    match split_root(symbol) {
        Some((root, rest)) => {
            let (suffix, bass) = split_bass(rest);
            Chord::new(root, suffix, bass).transposed(semitones).symbol()
        }
        None => symbol.to_string(),
    }
}

/// Reduce a chord symbol to the simplified vocabulary.
///
/// `dim` anywhere in the remainder substitutes the dominant seventh rooted
/// four semitones below; otherwise the symbol collapses to its bare root,
/// keeping `m` when minor. Unrecognized roots pass through unchanged.
pub fn simplify_chord(symbol: &str) -> String {
    match split_root(symbol) {
        Some((root, rest)) => Chord::new(root, rest, None).simplified().symbol(),
        None => symbol.to_string(),
    }
}
