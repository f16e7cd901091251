//! Tab document and track structure.

use alloc::vec::Vec;
use arrayvec::ArrayString;

use crate::duration::NoteDuration;
use crate::error::DocumentError;
use crate::measure::{Measure, Note, NoteId, FRET_MAX};
use crate::tuning::{Tuning, STRING_COUNT};

/// Lowest supported tempo.
pub const TEMPO_MIN: u16 = 40;
/// Highest supported tempo.
pub const TEMPO_MAX: u16 = 300;
/// Tempo assigned to new documents.
pub const DEFAULT_TEMPO: u16 = 120;

/// Track identifier within a document.
pub type TrackId = u16;

/// One instrument line: a tuning and its measures.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: TrackId,
    /// Instrument tag, e.g. "guitar".
    pub instrument: ArrayString<16>,
    pub tuning: Tuning,
    pub measures: Vec<Measure>,
}

impl Track {
    /// A track with one empty measure.
    pub fn new(id: TrackId, instrument: &str, tuning: Tuning) -> Self {
        let mut tag = ArrayString::new();
        let _ = tag.try_push_str(instrument);
        Self {
            id,
            instrument: tag,
            tuning,
            measures: alloc::vec![Measure::new()],
        }
    }

    /// Total beats across this track's measures.
    pub fn total_beats(&self) -> f64 {
        self.measures.iter().map(Measure::beats).sum()
    }

    /// Note count across this track's measures.
    pub fn note_count(&self) -> usize {
        self.measures.iter().map(|m| m.notes.len()).sum()
    }
}

/// A complete tab document.
///
/// Invariants: at least one track, each with at least one measure
/// (possibly empty of notes); note ids unique within the document.
/// All mutation goes through the add/remove/tempo operations below.
#[derive(Clone, Debug, PartialEq)]
pub struct TabDocument {
    pub title: ArrayString<64>,
    /// Tempo in BPM, `TEMPO_MIN..=TEMPO_MAX`.
    pub tempo: u16,
    /// Tracks; playback uses the first.
    pub tracks: Vec<Track>,
    next_note_id: u64,
}

impl Default for TabDocument {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl TabDocument {
    /// A new document: one standard-tuned guitar track, one empty measure.
    pub fn new(title: &str) -> Self {
        let mut doc_title = ArrayString::new();
        let _ = doc_title.try_push_str(title);
        Self {
            title: doc_title,
            tempo: DEFAULT_TEMPO,
            tracks: alloc::vec![Track::new(0, "guitar", Tuning::standard())],
            next_note_id: 1,
        }
    }

    /// The built-in demo document: a pentatonic run and a short close.
    pub fn sample() -> Self {
        let mut doc = Self::new("Demo Riff");

        let run: [(u8, u8); 8] = [
            (0, 0),
            (0, 3),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 2),
            (3, 0),
            (3, 2),
        ];
        for (string, fret) in run {
            let id = doc.mint_note_id();
            doc.tracks[0].measures[0]
                .notes
                .push(Note::new(id, string, fret, NoteDuration::Eighth));
        }

        let mut closing = Measure::new();
        let tail = [
            (4, 0, NoteDuration::Quarter),
            (4, 3, NoteDuration::Quarter),
            (5, 0, NoteDuration::Half),
        ];
        for (string, fret, duration) in tail {
            let id = doc.mint_note_id();
            closing.notes.push(Note::new(id, string, fret, duration));
        }
        doc.tracks[0].measures.push(closing);

        doc
    }

    /// Mint the next unique note id.
    pub fn mint_note_id(&mut self) -> NoteId {
        let id = NoteId(self.next_note_id);
        self.next_note_id += 1;
        id
    }

    pub fn first_track(&self) -> Option<&Track> {
        self.tracks.first()
    }

    /// Set the tempo, rejecting values outside `TEMPO_MIN..=TEMPO_MAX`.
    pub fn set_tempo(&mut self, bpm: u16) -> Result<(), DocumentError> {
        if !(TEMPO_MIN..=TEMPO_MAX).contains(&bpm) {
            return Err(DocumentError::InvalidTempo { bpm });
        }
        self.tempo = bpm;
        Ok(())
    }

    /// Append a note to a measure of the first track.
    ///
    /// Validates string and fret against the instrument bounds before
    /// minting an id, so a rejected call leaves no gap in the id sequence.
    pub fn add_note(
        &mut self,
        measure: usize,
        string: u8,
        fret: u8,
        duration: NoteDuration,
    ) -> Result<NoteId, DocumentError> {
        if (string as usize) >= STRING_COUNT {
            return Err(DocumentError::InvalidString { string });
        }
        if fret > FRET_MAX {
            return Err(DocumentError::InvalidFret { fret });
        }
        let measure_exists = self
            .tracks
            .first()
            .is_some_and(|t| measure < t.measures.len());
        if !measure_exists {
            return Err(DocumentError::InvalidMeasure { measure });
        }

        let id = self.mint_note_id();
        self.tracks[0].measures[measure]
            .notes
            .push(Note::new(id, string, fret, duration));
        Ok(id)
    }

    /// Remove a note by id from whichever measure holds it.
    pub fn remove_note(&mut self, id: NoteId) -> Option<Note> {
        for track in &mut self.tracks {
            for measure in &mut track.measures {
                if let Some(note) = measure.remove(id) {
                    return Some(note);
                }
            }
        }
        None
    }

    /// Find a note by id.
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.tracks
            .iter()
            .flat_map(|t| &t.measures)
            .flat_map(|m| &m.notes)
            .find(|n| n.id == id)
    }

    /// Total beats in the first track.
    pub fn total_beats(&self) -> f64 {
        self.first_track().map(Track::total_beats).unwrap_or(0.0)
    }
}
