//! Core document types for the fretgrid tablature editor.
//!
//! This crate defines the tab document model shared by every layer:
//! editor surfaces mutate it, the event compiler lowers it to timed
//! sound events, and the playback scheduler plays the result.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod analysis;
mod document;
mod duration;
mod error;
mod event;
mod fitting;
mod measure;
mod pitch;
mod tuning;

pub use analysis::{summarize, DocumentSummary};
pub use document::{TabDocument, Track, TrackId, DEFAULT_TEMPO, TEMPO_MAX, TEMPO_MIN};
pub use duration::NoteDuration;
pub use error::DocumentError;
pub use event::{sequence_length_secs, SoundEvent};
pub use fitting::{fit_pitch, melody_pitches, NoteCandidate};
pub use measure::{Measure, Note, NoteId, DEFAULT_VELOCITY, FRET_MAX};
pub use pitch::{Pitch, PitchClass};
pub use tuning::{Tuning, BASS_STRINGS, STRING_COUNT};
