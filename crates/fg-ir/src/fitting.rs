//! Mapping between absolute pitches and fretboard positions.
//!
//! Suggestion providers exchange melodies as absolute pitches; these
//! helpers convert between that form and (string, fret) tab positions
//! using the document's own tuning, so provider output and playback
//! share one pitch-resolution rule.

use alloc::vec::Vec;

use crate::document::TabDocument;
use crate::duration::NoteDuration;
use crate::error::DocumentError;
use crate::measure::FRET_MAX;
use crate::pitch::Pitch;
use crate::tuning::{Tuning, STRING_COUNT};

/// A provider-supplied note before validation and id assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteCandidate {
    pub string: u8,
    pub fret: u8,
    pub duration: NoteDuration,
}

impl NoteCandidate {
    /// Check the candidate against note invariants.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if (self.string as usize) >= STRING_COUNT {
            return Err(DocumentError::InvalidString {
                string: self.string,
            });
        }
        if self.fret > FRET_MAX {
            return Err(DocumentError::InvalidFret { fret: self.fret });
        }
        Ok(())
    }
}

/// Fit an absolute pitch onto the fretboard.
///
/// Returns the playable (string, fret) with the lowest fret, preferring
/// the lower string index on ties; `None` when the pitch falls outside
/// every string's range.
pub fn fit_pitch(pitch: Pitch, tuning: &Tuning) -> Option<(u8, u8)> {
    let mut best: Option<(u8, u8)> = None;
    for (string, base) in tuning.base_pitches().iter().enumerate() {
        let Some(fret) = pitch.midi().checked_sub(base.midi()) else {
            continue;
        };
        if fret > FRET_MAX {
            continue;
        }
        match best {
            Some((_, held)) if held <= fret => {}
            _ => best = Some((string as u8, fret)),
        }
    }
    best
}

/// The first track's notes as absolute pitches, in playback order.
///
/// Notes whose string index no longer resolves are skipped.
pub fn melody_pitches(document: &TabDocument) -> Vec<Pitch> {
    let mut pitches = Vec::new();
    let Some(track) = document.first_track() else {
        return pitches;
    };
    for measure in &track.measures {
        for note in &measure.notes {
            if let Some(base) = track.tuning.base_pitch(note.string) {
                pitches.push(base.offset(note.fret));
            }
        }
    }
    pitches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_string_pitches_fit_at_fret_zero() {
        let tuning = Tuning::standard();
        // G3 (55) is string 3 open; no lower-stringed fretting beats fret 0
        assert_eq!(fit_pitch(Pitch(55), &tuning), Some((3, 0)));
    }

    #[test]
    fn lowest_fret_wins_across_strings() {
        let tuning = Tuning::standard();
        // A2 (45) is string 0 fret 5 or string 1 open; open wins
        assert_eq!(fit_pitch(Pitch(45), &tuning), Some((1, 0)));
    }

    #[test]
    fn ties_prefer_the_lower_string() {
        // Drop-D gives strings 0 and 2 the same base pitch (D2), so any
        // pitch playable on string 2 ties with string 0 at the same fret.
        let tuning = Tuning::from_names(&["D", "A", "D", "F#", "A", "D"]).unwrap();
        assert_eq!(fit_pitch(Pitch(40), &tuning), Some((0, 2)));
    }

    #[test]
    fn pitches_outside_range_do_not_fit() {
        let tuning = Tuning::standard();
        // Below the lowest base (D2 = 38) and above the highest reach
        // (B3 = 59 + 24 frets = 83).
        assert_eq!(fit_pitch(Pitch(37), &tuning), None);
        assert_eq!(fit_pitch(Pitch(84), &tuning), None);
    }

    #[test]
    fn melody_pitches_follow_document_order() {
        let doc = TabDocument::sample();
        let pitches = melody_pitches(&doc);
        assert_eq!(pitches.len(), 11);
        // First run note: string 0 open = E2
        assert_eq!(pitches[0], Pitch(40));
        // Last closing note: string 5 open = E3
        assert_eq!(pitches[10], Pitch(52));
    }

    #[test]
    fn every_melody_pitch_refits_to_the_same_pitch() {
        let doc = TabDocument::sample();
        let tuning = doc.tracks[0].tuning;
        for pitch in melody_pitches(&doc) {
            let (string, fret) = fit_pitch(pitch, &tuning).unwrap();
            assert_eq!(tuning.base_pitch(string).unwrap().offset(fret), pitch);
        }
    }

    #[test]
    fn candidate_validation_mirrors_note_invariants() {
        let good = NoteCandidate {
            string: 5,
            fret: 24,
            duration: NoteDuration::Eighth,
        };
        assert!(good.validate().is_ok());

        let bad_string = NoteCandidate {
            string: 6,
            fret: 0,
            duration: NoteDuration::Eighth,
        };
        assert_eq!(
            bad_string.validate(),
            Err(DocumentError::InvalidString { string: 6 })
        );

        let bad_fret = NoteCandidate {
            string: 0,
            fret: 25,
            duration: NoteDuration::Eighth,
        };
        assert_eq!(
            bad_fret.validate(),
            Err(DocumentError::InvalidFret { fret: 25 })
        );
    }
}
