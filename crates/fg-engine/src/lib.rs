//! Event compiler and playback scheduler for fretgrid.
//!
//! [`compile`] lowers a tab document into timed sound events;
//! [`Player`] drives those events against a [`SoundSource`] on a
//! dedicated clock thread with start/stop/completion semantics.

mod compile;
mod player;
mod source;

pub use compile::{compile, duration_secs, seconds_per_beat, CompileError};
pub use player::{PlaybackState, Player, RELEASE_MARGIN_SECS};
pub use source::{NullSource, SoundSource, SourceError};
