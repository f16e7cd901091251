//! Headless editing session for fretgrid.
//!
//! Provides the unified API for editing, playback, and suggestions
//! that a desktop shell and the CLI can share.

mod session;
mod suggest;

// Re-export common types so callers don't need fg-ir/fg-engine/fg-layout
// directly.
pub use fg_engine::{
    compile, CompileError, NullSource, PlaybackState, Player, SoundSource, SourceError,
};
pub use fg_ir::{
    DocumentError, Note, NoteCandidate, NoteDuration, NoteId, Pitch, SoundEvent, TabDocument,
};
pub use fg_layout::{Layout, LayoutError, NotePlacement};

pub use session::Session;
pub use suggest::{SuggestError, SuggestionProvider};
