//! The editing session: one document, one grid, one player.

use log::{debug, warn};

use fg_engine::{compile, CompileError, PlaybackState, Player, SoundSource};
use fg_ir::{DocumentError, Note, NoteCandidate, NoteDuration, NoteId, TabDocument};
use fg_layout::{Layout, LayoutError, NotePlacement};

use crate::suggest::{SuggestError, SuggestionProvider};

/// Headless editing controller — owns the document, the grid layout,
/// the selection, and playback.
///
/// All document mutation flows through the operations here, which keep
/// the selection and the unsaved-changes flag honest.
pub struct Session<S: SoundSource + 'static> {
    document: TabDocument,
    layout: Layout,
    player: Player<S>,
    selected: Option<NoteId>,
    dirty: bool,
}

impl<S: SoundSource + 'static> Session<S> {
    /// A session opened on the built-in demo document.
    pub fn new(source: S) -> Self {
        Self::with_document(source, TabDocument::sample())
    }

    pub fn with_document(source: S, document: TabDocument) -> Self {
        Self {
            document,
            layout: Layout::default(),
            player: Player::new(source),
            selected: None,
            dirty: false,
        }
    }

    // --- Document management ---

    pub fn document(&self) -> &TabDocument {
        &self.document
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// True when the document has unsaved edits.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Reset to a fresh untitled document.
    pub fn new_document(&mut self) {
        self.replace_document(TabDocument::default());
    }

    /// Swap in `document` wholesale: stops playback, clears the
    /// selection and the dirty flag.
    pub fn replace_document(&mut self, document: TabDocument) {
        self.player.stop();
        self.document = document;
        self.selected = None;
        self.dirty = false;
        debug!("document replaced: \"{}\"", self.document.title);
    }

    // --- Editing ---

    /// Hit-test at a pointer position; a miss clears the selection.
    pub fn select_at(&mut self, x: f32, y: f32) -> Option<NoteId> {
        self.selected = fg_layout::note_at(&self.document, &self.layout, x, y).map(|n| n.id);
        self.selected
    }

    pub fn selected(&self) -> Option<NoteId> {
        self.selected
    }

    /// Add a note where the pointer landed; it becomes the selection.
    pub fn add_note_at(
        &mut self,
        x: f32,
        y: f32,
        fret: u8,
        duration: NoteDuration,
    ) -> Result<NoteId, LayoutError> {
        let id = fg_layout::place_note(&mut self.document, &self.layout, x, y, fret, duration)?;
        self.selected = Some(id);
        self.dirty = true;
        debug!("added note {} at ({:.0}, {:.0})", id, x, y);
        Ok(id)
    }

    /// Remove a note by id from wherever it lives.
    pub fn remove_note(&mut self, id: NoteId) -> Option<Note> {
        let removed = self.document.remove_note(id);
        if removed.is_some() {
            self.dirty = true;
            if self.selected == Some(id) {
                self.selected = None;
            }
        }
        removed
    }

    /// Remove the selected note, if any.
    pub fn remove_selected(&mut self) -> Option<Note> {
        let id = self.selected?;
        self.remove_note(id)
    }

    /// Change the tempo; out-of-range values are rejected and logged.
    ///
    /// A run already in flight keeps the tempo it was compiled with.
    pub fn set_tempo(&mut self, bpm: u16) -> Result<(), DocumentError> {
        if let Err(err) = self.document.set_tempo(bpm) {
            warn!("rejected tempo change: {}", err);
            return Err(err);
        }
        self.dirty = true;
        Ok(())
    }

    /// Drawing positions for the current document.
    pub fn placements(&self) -> Vec<NotePlacement> {
        fg_layout::placements(&self.document, &self.layout)
    }

    // --- Playback ---

    /// Compile the document and start a run, superseding any in flight.
    ///
    /// A document with no notes plays as silence and still completes.
    pub fn play(&mut self) -> Result<(), CompileError> {
        let events = compile(&self.document)?;
        debug!(
            "playing {} events at {} bpm",
            events.len(),
            self.document.tempo
        );
        self.player.start(events, || debug!("playback run complete"));
        Ok(())
    }

    pub fn stop(&mut self) {
        self.player.stop();
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.player.state()
    }

    // --- Suggestions ---

    /// Ask a provider for candidates against the current document.
    pub fn request_suggestions(
        &self,
        provider: &mut dyn SuggestionProvider,
    ) -> Result<Vec<NoteCandidate>, SuggestError> {
        let candidates = provider.suggest(&self.document)?;
        debug!("provider offered {} candidates", candidates.len());
        Ok(candidates)
    }

    /// Append candidates to a measure, whole batch or nothing.
    ///
    /// Every candidate is validated before the first one is applied, so
    /// a bad batch leaves the document untouched.
    pub fn apply_candidates(
        &mut self,
        measure: usize,
        candidates: &[NoteCandidate],
    ) -> Result<usize, SuggestError> {
        let measures = self.document.first_track().map_or(0, |t| t.measures.len());
        if measure >= measures {
            return Err(SuggestError::Rejected(DocumentError::InvalidMeasure {
                measure,
            }));
        }
        for candidate in candidates {
            candidate.validate()?;
        }
        for candidate in candidates {
            self.document
                .add_note(measure, candidate.string, candidate.fret, candidate.duration)?;
        }
        if !candidates.is_empty() {
            self.dirty = true;
        }
        Ok(candidates.len())
    }

    // --- History (placeholders) ---

    /// No history is kept; always reports nothing to undo.
    pub fn undo(&mut self) -> bool {
        false
    }

    /// No history is kept; always reports nothing to redo.
    pub fn redo(&mut self) -> bool {
        false
    }
}
