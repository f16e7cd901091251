//! Pluggable melody suggestion.

use fg_ir::{DocumentError, NoteCandidate, TabDocument};
use thiserror::Error;

/// Why a suggestion request produced nothing.
#[derive(Debug, Error, PartialEq)]
pub enum SuggestError {
    /// The provider could not produce candidates.
    #[error("suggestion provider unavailable: {0}")]
    Unavailable(String),
    /// A candidate in the batch violated note invariants.
    #[error(transparent)]
    Rejected(#[from] DocumentError),
}

/// Produces note candidates to extend a document.
///
/// Implementations range from canned phrase tables to remote models;
/// the session only ever sees the candidate list and validates it like
/// any other note input.
pub trait SuggestionProvider {
    fn suggest(&mut self, document: &TabDocument) -> Result<Vec<NoteCandidate>, SuggestError>;
}
