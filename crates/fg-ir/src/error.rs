//! Errors for document construction and mutation.

use core::fmt;

/// Errors from document construction and mutation operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentError {
    /// A string index beyond the instrument's string count.
    InvalidString { string: u8 },
    /// A fret outside the playable range.
    InvalidFret { fret: u8 },
    /// A tempo outside the supported BPM range.
    InvalidTempo { bpm: u16 },
    /// A measure index beyond the track's measure list.
    InvalidMeasure { measure: usize },
    /// A pitch-class name that does not parse.
    UnknownPitchName,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::InvalidString { string } => write!(
                f,
                "string index {} is beyond the {}-string instrument",
                string,
                crate::STRING_COUNT
            ),
            DocumentError::InvalidFret { fret } => {
                write!(f, "fret {} is beyond fret {}", fret, crate::FRET_MAX)
            }
            DocumentError::InvalidTempo { bpm } => write!(
                f,
                "tempo {} bpm is outside {}..={} bpm",
                bpm,
                crate::TEMPO_MIN,
                crate::TEMPO_MAX
            ),
            DocumentError::InvalidMeasure { measure } => {
                write!(f, "measure {} does not exist", measure)
            }
            DocumentError::UnknownPitchName => write!(f, "unrecognized pitch-class name"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DocumentError {}
