//! String tunings and base-pitch resolution.

use crate::error::DocumentError;
use crate::pitch::{Pitch, PitchClass};

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = 6;

/// How many of the lowest-indexed strings sound one octave below the
/// reference octave.
pub const BASS_STRINGS: usize = 3;

/// Per-string pitch-class assignment; index 0 is the lowest string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuning {
    pub strings: [PitchClass; STRING_COUNT],
}

impl Tuning {
    pub const fn new(strings: [PitchClass; STRING_COUNT]) -> Self {
        Self { strings }
    }

    /// Standard guitar tuning, E-A-D-G-B-E.
    pub const fn standard() -> Self {
        Self::new([
            PitchClass::E,
            PitchClass::A,
            PitchClass::D,
            PitchClass::G,
            PitchClass::B,
            PitchClass::E,
        ])
    }

    /// Parse six pitch-class names into a tuning.
    pub fn from_names(names: &[&str; STRING_COUNT]) -> Result<Self, DocumentError> {
        let mut strings = [PitchClass::E; STRING_COUNT];
        for (entry, name) in strings.iter_mut().zip(names) {
            *entry = PitchClass::from_name(name).ok_or(DocumentError::UnknownPitchName)?;
        }
        Ok(Self { strings })
    }

    /// Open-string pitch for a string index, or `None` past the last string.
    ///
    /// The octave drop for the first [`BASS_STRINGS`] strings is keyed on
    /// string position, not on the pitch class assigned to it.
    pub fn base_pitch(&self, string: u8) -> Option<Pitch> {
        let class = *self.strings.get(string as usize)?;
        Some(resolve(class, string as usize))
    }

    /// Open-string pitches for every string.
    pub fn base_pitches(&self) -> [Pitch; STRING_COUNT] {
        core::array::from_fn(|i| resolve(self.strings[i], i))
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

/// The one base-pitch rule: reference octave, dropped an octave on the
/// bass strings.
fn resolve(class: PitchClass, string: usize) -> Pitch {
    let reference = class.reference_pitch();
    if string < BASS_STRINGS {
        reference.octave_down()
    } else {
        reference
    }
}
