// Test line classification for mixed chord/lyric chart text

use chordchart_wasm::{classify_line, is_chord_line, LineKind};

#[test]
fn test_plain_chord_line() {
    assert!(is_chord_line("C       G       Am      F"));
    assert!(is_chord_line("Em7 A7 Dmaj7"));
    assert!(is_chord_line("C#m  B  A  G#m"));
}

#[test]
fn test_plain_lyric_line() {
    assert!(!is_chord_line("Amazing grace how sweet the sound"));
    assert!(!is_chord_line("That saved a wretch like me"));
}

#[test]
fn test_bar_notation_forces_chord_line() {
    // Explicit bar notation wins regardless of the token ratio.
    assert!(is_chord_line("| C | G | Am | F |"));
    assert!(is_chord_line("| words mostly words |"));
    assert!(is_chord_line("C G Am F |"));
}

#[test]
fn test_majority_vote_is_strict() {
    // One chord and one word tie; ties are lyric.
    assert!(!is_chord_line("A man"));
    // Two chords against one word win.
    assert!(is_chord_line("A D man"));
}

#[test]
fn test_trailing_punctuation_stripped_before_vote() {
    assert!(is_chord_line("C, G, Am, F."));
    assert!(is_chord_line("C; G:"));
}

#[test]
fn test_empty_and_blank() {
    assert_eq!(classify_line(""), LineKind::Blank);
    assert_eq!(classify_line("    "), LineKind::Blank);
    assert!(!is_chord_line(""));
}

#[test]
fn test_headers_are_not_chord_lines() {
    assert_eq!(classify_line("[Chorus]"), LineKind::Header);
    assert_eq!(classify_line("[Verse 1]"), LineKind::Header);
    assert!(!is_chord_line("[Chorus]"));
}

#[test]
fn test_inline_annotation_line_is_lyric() {
    assert_eq!(classify_line("[G]Amazing [C]Grace"), LineKind::LyricLine);
    assert_eq!(classify_line("Swing [D]low, sweet [G]chariot"), LineKind::LyricLine);
}

#[test]
fn test_chord_heavy_line_with_stray_word() {
    assert!(is_chord_line("C G Am F (intro)"));
}

#[test]
fn test_line_with_no_tokens_recognized() {
    assert!(!is_chord_line("-- -- --"));
}
