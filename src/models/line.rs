//! Line classification tags
//!
//! Every line of chart text gets one of four roles. Classification is
//! derived, never stored: the engine recomputes it on every call.

use serde::{Deserialize, Serialize};

/// The role a single line of chart text plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Nothing but whitespace.
    Blank,
    /// A section label like `[Chorus]`.
    Header,
    /// Chord symbols column-aligned above a lyric line.
    ChordLine,
    /// Lyrics, possibly carrying inline `[Chord]` annotations.
    LyricLine,
}

impl LineKind {
    /// Stable lowercase name, used across the JS boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::Blank => "blank",
            LineKind::Header => "header",
            LineKind::ChordLine => "chord",
            LineKind::LyricLine => "lyric",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_names() {
        assert_eq!(LineKind::Blank.as_str(), "blank");
        assert_eq!(LineKind::Header.as_str(), "header");
        assert_eq!(LineKind::ChordLine.as_str(), "chord");
        assert_eq!(LineKind::LyricLine.as_str(), "lyric");
    }
}
