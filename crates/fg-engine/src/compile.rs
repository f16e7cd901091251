//! Document-to-event compilation.
//!
//! Walks the first track's measures and notes, producing an
//! onset-ordered `Vec<SoundEvent>` the playback scheduler can consume
//! without sorting.

use fg_ir::{NoteId, SoundEvent, TabDocument};
use thiserror::Error;

/// Errors raised while lowering a document to sound events.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A note's string index has no tuning entry. Unreachable through
    /// the document mutation operations, but the document is externally
    /// mutable, so it is checked rather than assumed.
    #[error("note {id} references string {string} beyond the {string_count}-string tuning")]
    InvalidNoteReference {
        id: NoteId,
        string: u8,
        string_count: u8,
    },
}

/// Seconds per beat at a given tempo.
pub fn seconds_per_beat(tempo: u16) -> f64 {
    60.0 / tempo as f64
}

/// Seconds a symbolic duration occupies at a given tempo.
pub fn duration_secs(duration: fg_ir::NoteDuration, tempo: u16) -> f64 {
    duration.beats() * seconds_per_beat(tempo)
}

/// Compile a document's first track into an ordered event sequence.
///
/// Scheduling is monophonic and strictly sequential: each note's onset
/// is the running clock, which then advances by that note's duration.
/// Empty measures contribute no events and no time; an empty track
/// compiles to an empty sequence (nothing to play, not an error).
pub fn compile(document: &TabDocument) -> Result<Vec<SoundEvent>, CompileError> {
    let mut events = Vec::new();
    let Some(track) = document.first_track() else {
        return Ok(events);
    };

    let base_pitches = track.tuning.base_pitches();
    let spb = seconds_per_beat(document.tempo);
    let mut clock = 0.0f64;

    for measure in &track.measures {
        for note in &measure.notes {
            let Some(open) = base_pitches.get(note.string as usize) else {
                return Err(CompileError::InvalidNoteReference {
                    id: note.id,
                    string: note.string,
                    string_count: base_pitches.len() as u8,
                });
            };
            let duration = note.duration.beats() * spb;
            events.push(SoundEvent::new(
                clock,
                open.offset(note.fret),
                duration,
                note.velocity,
            ));
            clock += duration;
        }
    }

    Ok(events)
}
