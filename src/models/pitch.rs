//! Pitch classes with canonical sharp spelling
//!
//! All chord arithmetic in the engine reduces note spellings to one of the
//! twelve equal-tempered pitch classes. The canonical spelling is the sharp
//! form (C, C#, D, ... B); flat and out-of-scale spellings normalize to it
//! before any transposition happens.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One of the twelve equal-tempered pitch classes, sharp-spelled.
///
/// Mapping: 0=C, 1=C#, 2=D, 3=D#, 4=E, 5=F, 6=F#, 7=G, 8=G#, 9=A, 10=A#, 11=B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

/// Flat and unusual spellings mapped to their sharp-spelled equivalents.
/// The table is total over the recognized aliases; anything outside it (and
/// outside the twelve sharp forms) is not a note name.
static ENHARMONIC_ALIASES: Lazy<HashMap<&'static str, PitchClass>> = Lazy::new(|| {
    HashMap::from([
        ("Cb", PitchClass::B),
        ("Db", PitchClass::Cs),
        ("Eb", PitchClass::Ds),
        ("Fb", PitchClass::E),
        ("Gb", PitchClass::Fs),
        ("Ab", PitchClass::Gs),
        ("Bb", PitchClass::As),
        ("E#", PitchClass::F),
        ("B#", PitchClass::C),
    ])
});

impl PitchClass {
    /// The canonical scale, in ascending semitone order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Parse a note spelling into a pitch class.
    ///
    /// Recognizes the twelve sharp forms plus the enharmonic aliases
    /// (Cb, Db, Eb, Fb, Gb, Ab, Bb, E#, B#). Returns `None` for anything
    /// else; callers must leave the original text untouched in that case.
    pub fn from_string(s: &str) -> Option<PitchClass> {
        if let Some(&pc) = ENHARMONIC_ALIASES.get(s) {
            return Some(pc);
        }
        match s {
            "C" => Some(PitchClass::C),
            "C#" => Some(PitchClass::Cs),
            "D" => Some(PitchClass::D),
            "D#" => Some(PitchClass::Ds),
            "E" => Some(PitchClass::E),
            "F" => Some(PitchClass::F),
            "F#" => Some(PitchClass::Fs),
            "G" => Some(PitchClass::G),
            "G#" => Some(PitchClass::Gs),
            "A" => Some(PitchClass::A),
            "A#" => Some(PitchClass::As),
            "B" => Some(PitchClass::B),
            _ => None,
        }
    }

    /// Canonical sharp spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Semitone index in `0..=11`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class for an arbitrary semitone index, reduced modulo 12.
    /// Negative operands reduce into `0..=11` as well.
    pub fn from_index(index: i32) -> PitchClass {
        let mut r = index % 12;
        if r < 0 {
            r += 12;
        }
        PitchClass::ALL[r as usize]
    }

    /// Shift by a signed number of semitones, wrapping around the octave.
    pub fn transposed(self, semitones: i32) -> PitchClass {
        PitchClass::from_index(self.index() as i32 + semitones)
    }
}
