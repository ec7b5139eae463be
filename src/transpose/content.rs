//! Whole-document transposition
//!
//! Drives classification and per-line rewriting across a multi-line chart.
//! Lines are classified first and interpreted second: headers and blank
//! lines pass through verbatim, chord lines go through the aligned
//! rewriter, and lyric lines only have their inline `[Chord]` annotations
//! rewritten. Line count and order never change.

use crate::models::LineKind;
use crate::parse::classifier::classify_line;
use crate::parse::grammar::is_chord;

use super::chord::{simplify_chord, transpose_chord};
use super::line::transpose_chord_line;

/// Transpose (and optionally simplify) a whole chart.
///
/// The input is split on `\n` and rejoined with `\n`, so the caller's line
/// break layout, including trailing empty lines and any `\r` bytes, comes
/// back byte-for-byte wherever a line passes through unchanged.
pub fn transpose_content(text: &str, semitones: i32, simplify: bool) -> String {
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| match classify_line(line) {
            LineKind::Blank | LineKind::Header => line.to_string(),
            LineKind::ChordLine => transpose_chord_line(line, semitones, simplify),
            LineKind::LyricLine => rewrite_inline_chords(line, semitones, simplify),
        })
        .collect();
    lines.join("\n")
}

/// Rewrite `[...]` groups on a lyric line when the interior is a complete
/// chord token. Groups with non-chord interiors are kept byte-for-byte, and
/// scanning resumes after each group either way. A `[` with no closing `]`
/// ends the scan.
fn rewrite_inline_chords(line: &str, semitones: i32, simplify: bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open + 1..].find(']') else {
            break;
        };
        if close == 0 {
            // "[]" is not an annotation; emit the bracket and move on.
            out.push_str(&rest[..open + 1]);
            rest = &rest[open + 1..];
            continue;
        }
        let interior = &rest[open + 1..open + 1 + close];
        let group_end = open + 1 + close + 1;
        out.push_str(&rest[..open]);
        if is_chord(interior) {
            let mut chord = interior.to_string();
            if semitones != 0 {
                chord = transpose_chord(&chord, semitones);
            }
            if simplify {
                chord = simplify_chord(&chord);
            }
            out.push('[');
            out.push_str(&chord);
            out.push(']');
        } else {
            out.push_str(&rest[open..group_end]);
        }
        rest = &rest[group_end..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_chords_rewritten() {
        assert_eq!(
            transpose_content("[G]Amazing [C]Grace", 2, false),
            "[A]Amazing [D]Grace"
        );
    }

    #[test]
    fn test_non_chord_brackets_untouched() {
        assert_eq!(
            transpose_content("sing the [refrain] again", 2, false),
            "sing the [refrain] again"
        );
    }

    #[test]
    fn test_headers_pass_through() {
        assert_eq!(transpose_content("[Chorus]", 5, false), "[Chorus]");
        // Classification comes first: a lone bracketed chord line is a
        // header by shape and is not rewritten.
        assert_eq!(transpose_content("[C]", 5, false), "[C]");
    }

    #[test]
    fn test_chord_lines_rewritten() {
        let chart = "C       G\nAmazing grace";
        assert_eq!(transpose_content(chart, 1, false), "C#      G#\nAmazing grace");
    }

    #[test]
    fn test_lyric_line_never_rewritten_by_chord_path() {
        // "Amazing" starts with a valid root letter but the line is lyric.
        assert_eq!(
            transpose_content("Amazing grace how sweet the sound", 3, false),
            "Amazing grace how sweet the sound"
        );
    }

    #[test]
    fn test_zero_transpose_is_identity() {
        let chart = "[Verse 1]\nC       G       Am      F\nAmazing [G]grace\n\n| C | G |\n";
        assert_eq!(transpose_content(chart, 0, false), chart);
    }

    #[test]
    fn test_line_count_preserved() {
        let chart = "[Intro]\n\nC G\nla la\n\n";
        let out = transpose_content(chart, 4, false);
        assert_eq!(out.split('\n').count(), chart.split('\n').count());
    }

    #[test]
    fn test_simplify_inline() {
        assert_eq!(
            transpose_content("[Am7]Hello [Cmaj7]world", 0, true),
            "[Am]Hello [C]world"
        );
    }

    #[test]
    fn test_unclosed_bracket_left_alone() {
        assert_eq!(
            transpose_content("broken [C annotation", 2, false),
            "broken [C annotation"
        );
    }

    #[test]
    fn test_empty_brackets_left_alone() {
        assert_eq!(transpose_content("odd [] spot [G]here", 2, false), "odd [] spot [A]here");
    }

    #[test]
    fn test_nested_bracket_group_untouched() {
        // The group spans to the first ']', so its interior is not a chord.
        assert_eq!(transpose_content("x [a[C]] y", 2, false), "x [a[C]] y");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transpose_content("", 2, false), "");
    }

    #[test]
    fn test_crlf_bytes_survive() {
        let chart = "[Chorus]\r\nAmazing [G]grace\r";
        assert_eq!(
            transpose_content(chart, 2, false),
            "[Chorus]\r\nAmazing [A]grace\r"
        );
    }
}
