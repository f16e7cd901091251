//! Pointer resolution against the tab grid.

use fg_ir::{DocumentError, Note, NoteDuration, NoteId, TabDocument};
use thiserror::Error;

use crate::layout::Layout;

/// Why a pointer position could not become a document edit.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// The position is off the string lines or left of the grid.
    #[error("position is outside the playable grid")]
    OutOfBounds,
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// A note head resolved to its drawing position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotePlacement {
    pub id: NoteId,
    pub measure: usize,
    pub slot: usize,
    pub string: u8,
    pub fret: u8,
    pub duration: NoteDuration,
    pub x: f32,
    pub y: f32,
}

/// Drawing positions for every note of the first track, in document
/// order. A note's slot is its index within its measure.
pub fn placements(document: &TabDocument, layout: &Layout) -> Vec<NotePlacement> {
    let Some(track) = document.first_track() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(track.note_count());
    for (measure_idx, measure) in track.measures.iter().enumerate() {
        for (slot, note) in measure.notes.iter().enumerate() {
            let (x, y) = layout.note_center(measure_idx, slot, note.string);
            out.push(NotePlacement {
                id: note.id,
                measure: measure_idx,
                slot,
                string: note.string,
                fret: note.fret,
                duration: note.duration,
                x,
                y,
            });
        }
    }
    out
}

/// The first note, in document order, whose head covers `(x, y)`.
pub fn note_at<'a>(
    document: &'a TabDocument,
    layout: &Layout,
    x: f32,
    y: f32,
) -> Option<&'a Note> {
    let track = document.first_track()?;
    let radius_sq = layout.note_radius * layout.note_radius;

    for (measure_idx, measure) in track.measures.iter().enumerate() {
        for (slot, note) in measure.notes.iter().enumerate() {
            let (cx, cy) = layout.note_center(measure_idx, slot, note.string);
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= radius_sq {
                return Some(note);
            }
        }
    }
    None
}

/// Append a note where the pointer landed.
///
/// The string comes from `y` and the measure from `x`; the note takes
/// the next slot of that measure. Positions off the grid fail with
/// [`LayoutError::OutOfBounds`]; fret and string validation is the
/// document's.
pub fn place_note(
    document: &mut TabDocument,
    layout: &Layout,
    x: f32,
    y: f32,
    fret: u8,
    duration: NoteDuration,
) -> Result<NoteId, LayoutError> {
    let string = layout.string_at(y).ok_or(LayoutError::OutOfBounds)?;
    let measure_count = document.first_track().map_or(0, |t| t.measures.len());
    let measure = layout
        .measure_at(x, measure_count)
        .ok_or(LayoutError::OutOfBounds)?;

    let id = document.add_note(measure, string, fret, duration)?;
    Ok(id)
}
