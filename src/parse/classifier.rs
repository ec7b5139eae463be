//! Line classifier
//!
//! Decides the role of a raw line of chart text: blank, section header,
//! chord line, or lyric line. Each line is classified independently; there
//! is no state carried between lines.
//!
//! The chord-line decision is a majority-vote heuristic, not a grammar.
//! Short lyric lines made of single-letter words can misclassify; that is
//! an accepted tradeoff, so the vote thresholds here must not be tightened.

use crate::models::LineKind;
use crate::parse::grammar::is_chord;

/// Classify one line of chart text.
///
/// Decision order:
/// 1. Blank: nothing but whitespace.
/// 2. Header: trimmed line is `[...]` with no further `[` inside. This is a
///    shape test only; it deliberately conflates section labels with a lone
///    bracketed chord, so headers are decided before any chord scanning.
/// 3. ChordLine: a leading or trailing `|` forces it; otherwise grammar-valid
///    tokens must hold a strict majority. Bar tokens sit out the vote, and
///    trailing punctuation is stripped before each token is tested.
/// 4. LyricLine: everything else.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        let interior = &trimmed[1..trimmed.len() - 1];
        if !interior.contains('[') {
            return LineKind::Header;
        }
    }

    if trimmed.starts_with('|') || trimmed.ends_with('|') {
        return LineKind::ChordLine;
    }

    let mut chord_count = 0usize;
    let mut other_count = 0usize;
    for token in trimmed.split_whitespace() {
        if token == "|" {
            continue;
        }
        let clean = token.trim_end_matches([',', '.', ';', ':']);
        if is_chord(clean) {
            chord_count += 1;
        } else {
            other_count += 1;
        }
    }

    if chord_count > 0 && chord_count > other_count {
        LineKind::ChordLine
    } else {
        LineKind::LyricLine
    }
}

/// Whether the line carries column-aligned chord symbols.
pub fn is_chord_line(line: &str) -> bool {
    classify_line(line) == LineKind::ChordLine
}
