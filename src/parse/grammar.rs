//! Chord token grammar
//!
//! Explicit finite-lookahead matcher for chord symbols:
//! `root = [A-G] ('#' | 'b')?`, then a greedy run of suffix atoms, then an
//! optional `/` slash bass. The suffix vocabulary is enumerable on purpose:
//! every accepted atom is listed below and unit-tested, instead of living
//! inside an opaque pattern string.
//!
//! Matching is greedy with multi-character atoms tried first and the first
//! keyword winning; no backtracking is needed because every component after
//! the root is optional.

use serde::{Deserialize, Serialize};

use crate::models::{Chord, PitchClass};

/// Multi-character suffix keywords, tried in order; first match wins.
/// `maj` and `min` must precede `m` so they are consumed whole.
const SUFFIX_KEYWORDS: [&str; 7] = ["maj", "min", "m", "dim", "aug", "sus", "add"];

/// Single-character suffix atoms (decimal digits are accepted as well).
const SUFFIX_SYMBOLS: [char; 7] = ['(', ')', '-', '^', '*', '°', '+'];

/// A chord token located inside a larger string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordMatch {
    /// The matched token text.
    pub text: String,
    /// Byte offset of the token within the scanned string.
    pub start: usize,
}

/// Byte offsets of one grammar match: root, suffix run, whole token.
/// A bass is present iff `end > suffix_end` (it then spans
/// `suffix_end + 1 .. end`, past the slash).
struct RawMatch {
    root_end: usize,
    suffix_end: usize,
    end: usize,
}

/// Match `[A-G] ('#' | 'b')?` starting exactly at `start`.
/// Returns the byte offset just past the root.
fn match_root_at(s: &str, start: usize) -> Option<usize> {
    let rest = &s[start..];
    let mut chars = rest.chars();
    match chars.next() {
        Some('A'..='G') => {}
        _ => return None,
    }
    match chars.next() {
        Some('#' | 'b') => Some(start + 2),
        _ => Some(start + 1),
    }
}

/// Consume suffix atoms greedily from `start`; returns the offset where the
/// run ends (equal to `start` when the run is empty).
fn match_suffix_from(s: &str, start: usize) -> usize {
    let mut pos = start;
    'run: while pos < s.len() {
        let rest = &s[pos..];
        for keyword in SUFFIX_KEYWORDS {
            if rest.starts_with(keyword) {
                pos += keyword.len();
                continue 'run;
            }
        }
        match rest.chars().next() {
            Some(c) if c.is_ascii_digit() => pos += 1,
            Some(c) if SUFFIX_SYMBOLS.contains(&c) => pos += c.len_utf8(),
            _ => break,
        }
    }
    pos
}

/// Match a full chord token starting exactly at `start`. The slash bass is
/// only consumed when a complete root follows the `/`.
fn match_token_at(s: &str, start: usize) -> Option<RawMatch> {
    let root_end = match_root_at(s, start)?;
    let suffix_end = match_suffix_from(s, root_end);
    let end = if s[suffix_end..].starts_with('/') {
        match match_root_at(s, suffix_end + 1) {
            Some(bass_end) => bass_end,
            None => suffix_end,
        }
    } else {
        suffix_end
    };
    Some(RawMatch {
        root_end,
        suffix_end,
        end,
    })
}

/// Parse a token as a chord, requiring the whole token to match the grammar
/// with no leftover characters.
pub fn parse_chord(token: &str) -> Option<Chord> {
    let m = match_token_at(token, 0)?;
    if m.end != token.len() {
        return None;
    }
    let root = PitchClass::from_string(&token[..m.root_end])?;
    let suffix = &token[m.root_end..m.suffix_end];
    let bass = if m.end > m.suffix_end {
        Some(PitchClass::from_string(&token[m.suffix_end + 1..m.end])?)
    } else {
        None
    };
    Some(Chord::new(root, suffix, bass))
}

/// Whether `token` is a syntactically complete chord symbol.
pub fn is_chord(token: &str) -> bool {
    parse_chord(token).is_some()
}

/// Find every chord token inside `text`: leftmost, greedy, non-overlapping,
/// ordered by ascending start offset. Matching does not require token
/// boundaries, so a bare root inside a longer word is found too; callers
/// only scan lines already classified as chord-bearing.
pub fn find_chords(text: &str) -> Vec<ChordMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        match match_token_at(text, pos) {
            Some(m) => {
                matches.push(ChordMatch {
                    text: text[pos..m.end].to_string(),
                    start: pos,
                });
                pos = m.end;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, |c| c.len_utf8());
            }
        }
    }
    matches
}
