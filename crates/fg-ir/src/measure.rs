//! Notes and measures.

use alloc::vec::Vec;
use core::fmt;

use crate::duration::NoteDuration;

/// Highest playable fret.
pub const FRET_MAX: u8 = 24;

/// Velocity assigned to newly placed notes.
pub const DEFAULT_VELOCITY: f32 = 0.8;

/// Note identifier, unique within one document. Minted by the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single tab note: a fretted position with duration and velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    pub id: NoteId,
    /// String index, 0 = lowest string.
    pub string: u8,
    /// Fret, 0 = open string.
    pub fret: u8,
    pub duration: NoteDuration,
    /// Trigger velocity, 0.0..=1.0.
    pub velocity: f32,
}

impl Note {
    /// A note with the default velocity.
    pub const fn new(id: NoteId, string: u8, fret: u8, duration: NoteDuration) -> Self {
        Self {
            id,
            string,
            fret,
            duration,
            velocity: DEFAULT_VELOCITY,
        }
    }
}

/// An ordered run of notes; insertion order is playback order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Measure {
    pub notes: Vec<Note>,
}

impl Measure {
    /// An empty measure.
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Beats covered by the notes in this measure.
    pub fn beats(&self) -> f64 {
        self.notes.iter().map(|n| n.duration.beats()).sum()
    }

    /// Remove a note by id, returning it if present.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_carries_default_velocity() {
        let note = Note::new(NoteId(1), 2, 5, NoteDuration::Quarter);
        assert_eq!(note.velocity, DEFAULT_VELOCITY);
    }

    #[test]
    fn remove_takes_note_out_by_id() {
        let mut measure = Measure::new();
        measure.notes.push(Note::new(NoteId(1), 0, 0, NoteDuration::Eighth));
        measure.notes.push(Note::new(NoteId(2), 1, 3, NoteDuration::Eighth));

        let removed = measure.remove(NoteId(1));
        assert_eq!(removed.map(|n| n.id), Some(NoteId(1)));
        assert_eq!(measure.notes.len(), 1);
        assert_eq!(measure.notes[0].id, NoteId(2));
    }

    #[test]
    fn remove_unknown_id_is_none() {
        let mut measure = Measure::new();
        measure.notes.push(Note::new(NoteId(1), 0, 0, NoteDuration::Eighth));
        assert_eq!(measure.remove(NoteId(9)), None);
        assert_eq!(measure.notes.len(), 1);
    }

    #[test]
    fn beats_sum_over_notes() {
        let mut measure = Measure::new();
        measure.notes.push(Note::new(NoteId(1), 0, 0, NoteDuration::Quarter));
        measure.notes.push(Note::new(NoteId(2), 0, 2, NoteDuration::Half));
        measure.notes.push(Note::new(NoteId(3), 0, 4, NoteDuration::Eighth));
        assert_eq!(measure.beats(), 3.5);
    }

    #[test]
    fn empty_measure_has_zero_beats() {
        assert_eq!(Measure::new().beats(), 0.0);
        assert!(Measure::new().is_empty());
    }
}
