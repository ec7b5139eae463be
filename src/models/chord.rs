//! Chord token value type
//!
//! A chord is a normalized root, an opaque suffix run (quality, extensions,
//! alterations), and an optional slash bass. The suffix is never interpreted
//! semantically; it is carried through transposition unchanged and only
//! rewritten by the simplification heuristic.

use serde::{Deserialize, Serialize};

use super::pitch::PitchClass;

/// A parsed chord token: root, opaque suffix, optional slash bass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    /// Normalized root pitch class.
    pub root: PitchClass,
    /// Suffix text carried verbatim (may be empty).
    pub suffix: String,
    /// Slash bass, transposed independently and identically to the root.
    pub bass: Option<PitchClass>,
}

impl Chord {
    /// Create a new chord token.
    pub fn new(root: PitchClass, suffix: &str, bass: Option<PitchClass>) -> Self {
        Self {
            root,
            suffix: suffix.to_string(),
            bass,
        }
    }

    /// Render the chord back to symbol text, sharp-spelled.
    pub fn symbol(&self) -> String {
        match self.bass {
            Some(bass) => format!("{}{}/{}", self.root.as_str(), self.suffix, bass.as_str()),
            None => format!("{}{}", self.root.as_str(), self.suffix),
        }
    }

    /// Shift root and bass by a signed number of semitones. The suffix is
    /// untouched.
    pub fn transposed(&self, semitones: i32) -> Chord {
        Chord {
            root: self.root.transposed(semitones),
            suffix: self.suffix.clone(),
            bass: self.bass.map(|b| b.transposed(semitones)),
        }
    }

    /// Heuristic reduction to a smaller chord vocabulary.
    ///
    /// A diminished chord is replaced with the dominant seventh rooted four
    /// semitones below it (the common voice-leading resolution). Otherwise
    /// the chord collapses to its bare root, keeping only an `m` when the
    /// suffix marks it minor. Both reduced forms drop any slash bass.
    pub fn simplified(&self) -> Chord {
        if self.suffix.contains("dim") {
            return Chord {
                root: self.root.transposed(-4),
                suffix: "7".to_string(),
                bass: None,
            };
        }
        let is_minor =
            self.suffix.contains('m') && !self.suffix.contains("maj") && !self.suffix.contains("dim");
        Chord {
            root: self.root,
            suffix: if is_minor { "m" } else { "" }.to_string(),
            bass: None,
        }
    }
}
