//! Chord-line transposition with column alignment
//!
//! Chart-style notation stacks chord symbols above the lyric line they
//! belong to, so rewriting a chord must not shift the columns of the chords
//! to its right. Matches are rewritten right-to-left so earlier offsets stay
//! valid, and the whitespace run after each token absorbs length changes.

use crate::parse::grammar::find_chords;

use super::chord::{simplify_chord, transpose_chord};

/// Rewrite every chord token on an already-classified chord line.
///
/// Length deltas are measured in characters, not bytes (the suffix
/// vocabulary includes `°`). A lengthened chord eats up to `diff` literal
/// spaces that follow it; when fewer are available the alignment degrades
/// gracefully instead of failing. A shortened chord pads with spaces so the
/// following column holds its position. Bars and non-chord tokens are never
/// modified.
pub fn transpose_chord_line(line: &str, semitones: i32, simplify: bool) -> String {
    let matches = find_chords(line);
    let mut out = line.to_string();
    for m in matches.iter().rev() {
        let mut replacement = m.text.clone();
        if semitones != 0 {
            replacement = transpose_chord(&replacement, semitones);
        }
        if simplify {
            replacement = simplify_chord(&replacement);
        }

        let old_chars = m.text.chars().count() as i64;
        let new_chars = replacement.chars().count() as i64;
        let diff = new_chars - old_chars;

        let token_end = m.start + m.text.len();
        let mut splice_end = token_end;
        if diff > 0 {
            let mut eaten = 0;
            for c in out[token_end..].chars() {
                if c != ' ' || eaten == diff {
                    break;
                }
                eaten += 1;
                splice_end += 1;
            }
        } else if diff < 0 {
            for _ in 0..(-diff) {
                replacement.push(' ');
            }
        }

        out.replace_range(m.start..splice_end, &replacement);
    }
    out
}
