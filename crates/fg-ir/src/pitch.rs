//! Pitch classes and absolute pitches.
//!
//! Tuning entries are pitch classes; [`crate::Tuning`] resolves them to
//! absolute pitches via the reference octave and the bass-string octave
//! convention.

use core::fmt;

/// MIDI note number of the reference octave's C (C3).
pub(crate) const REFERENCE_C: u8 = 48;

/// The twelve pitch classes, sharp-spelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// Semitone offset from C (0-11).
    pub const fn semitone(self) -> u8 {
        match self {
            PitchClass::C => 0,
            PitchClass::CSharp => 1,
            PitchClass::D => 2,
            PitchClass::DSharp => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::FSharp => 6,
            PitchClass::G => 7,
            PitchClass::GSharp => 8,
            PitchClass::A => 9,
            PitchClass::ASharp => 10,
            PitchClass::B => 11,
        }
    }

    /// Absolute pitch of this class in the reference octave (C3-B3).
    pub const fn reference_pitch(self) -> Pitch {
        Pitch(REFERENCE_C + self.semitone())
    }

    /// Parse a pitch-class name. Sharp and flat spellings are accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "C" => PitchClass::C,
            "C#" | "Db" => PitchClass::CSharp,
            "D" => PitchClass::D,
            "D#" | "Eb" => PitchClass::DSharp,
            "E" => PitchClass::E,
            "F" => PitchClass::F,
            "F#" | "Gb" => PitchClass::FSharp,
            "G" => PitchClass::G,
            "G#" | "Ab" => PitchClass::GSharp,
            "A" => PitchClass::A,
            "A#" | "Bb" => PitchClass::ASharp,
            "B" => PitchClass::B,
            _ => return None,
        })
    }

    /// Sharp-spelled name.
    pub const fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An absolute pitch as a MIDI note number (60 = C4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pitch(pub u8);

impl Pitch {
    /// Concert A (A4, 440 Hz).
    pub const CONCERT_A: Pitch = Pitch(69);

    /// The raw MIDI note number.
    pub const fn midi(self) -> u8 {
        self.0
    }

    /// This pitch raised by a number of semitones (saturating).
    pub const fn offset(self, semitones: u8) -> Pitch {
        Pitch(self.0.saturating_add(semitones))
    }

    /// This pitch one octave lower (saturating).
    pub const fn octave_down(self) -> Pitch {
        Pitch(self.0.saturating_sub(12))
    }

    /// Pitch class of this pitch.
    pub const fn pitch_class(self) -> PitchClass {
        match self.0 % 12 {
            0 => PitchClass::C,
            1 => PitchClass::CSharp,
            2 => PitchClass::D,
            3 => PitchClass::DSharp,
            4 => PitchClass::E,
            5 => PitchClass::F,
            6 => PitchClass::FSharp,
            7 => PitchClass::G,
            8 => PitchClass::GSharp,
            9 => PitchClass::A,
            10 => PitchClass::ASharp,
            _ => PitchClass::B,
        }
    }

    /// Octave in scientific pitch notation (C4 = MIDI 60).
    pub const fn octave(self) -> i8 {
        (self.0 / 12) as i8 - 1
    }

    /// Frequency in hertz, equal temperament at A4 = 440 Hz.
    pub fn frequency_hz(self) -> f32 {
        440.0 * libm::exp2f((self.0 as f32 - 69.0) / 12.0)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())
    }
}
