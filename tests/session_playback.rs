//! Integration test: build a document → play through a recording
//! source → verify trigger timing and completion.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use fg_engine::RELEASE_MARGIN_SECS;
use fg_ir::Pitch;
use fg_session::{
    NoteDuration, PlaybackState, Session, SoundSource, SourceError, TabDocument,
};

/// (onset_secs, midi, duration_secs) per trigger, in arrival order.
type TriggerLog = Arc<Mutex<Vec<(f64, u8, f64)>>>;

#[derive(Clone)]
struct RecordingSource {
    triggers: TriggerLog,
}

impl RecordingSource {
    fn new() -> (Self, TriggerLog) {
        let triggers: TriggerLog = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                triggers: triggers.clone(),
            },
            triggers,
        )
    }
}

impl SoundSource for RecordingSource {
    fn trigger_note(
        &mut self,
        pitch: Pitch,
        duration_secs: f64,
        onset_secs: f64,
        _velocity: f32,
    ) -> Result<(), SourceError> {
        self.triggers
            .lock()
            .unwrap()
            .push((onset_secs, pitch.midi(), duration_secs));
        Ok(())
    }

    fn silence_all(&mut self) -> Result<(), SourceError> {
        Ok(())
    }
}

fn wait_for_completion(session: &Session<RecordingSource>, max_secs: f64) -> bool {
    let deadline = Instant::now() + Duration::from_secs_f64(max_secs);
    while Instant::now() < deadline {
        if session.playback_state() == PlaybackState::Completed {
            return true;
        }
        thread::sleep(Duration::from_millis(20));
    }
    false
}

fn two_quarter_notes() -> TabDocument {
    let mut doc = TabDocument::new("Two Notes");
    doc.add_note(0, 2, 0, NoteDuration::Quarter).unwrap();
    doc.add_note(0, 2, 2, NoteDuration::Quarter).unwrap();
    doc
}

// --- Trigger timing ---

#[test]
fn two_quarter_notes_trigger_half_a_second_apart() {
    env_logger::try_init().unwrap_or(());
    let (source, triggers) = RecordingSource::new();
    let mut session = Session::with_document(source, two_quarter_notes());

    session.play().unwrap();
    assert!(wait_for_completion(&session, 4.0), "run never completed");

    let recorded = triggers.lock().unwrap();
    // String 2 is the D string, sounding D2; frets add semitones.
    assert_eq!(*recorded, [(0.0, 38, 0.5), (0.5, 40, 0.5)]);
}

#[test]
fn tempo_change_applies_to_the_next_run() {
    let (source, triggers) = RecordingSource::new();
    let mut session = Session::with_document(source, two_quarter_notes());

    session.set_tempo(60).unwrap();
    session.play().unwrap();
    assert!(wait_for_completion(&session, 5.0), "run never completed");

    let recorded = triggers.lock().unwrap();
    assert_eq!(recorded[0].2, 1.0, "a quarter at 60 bpm lasts one second");
    assert_eq!(recorded[1].0, 1.0, "second onset follows one beat later");
}

#[test]
fn demo_document_plays_through_in_order() {
    let (source, triggers) = RecordingSource::new();
    let mut session = Session::new(source);

    session.play().unwrap();
    assert!(session.is_playing());
    assert!(wait_for_completion(&session, 8.0), "run never completed");

    let recorded = triggers.lock().unwrap();
    assert_eq!(recorded.len(), 11);
    assert_eq!(recorded[0].1, 40, "the demo opens on the low E string");
    for pair in recorded.windows(2) {
        assert!(
            pair[0].0 + pair[0].2 <= pair[1].0 + 1e-9,
            "events overlap: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}

// --- Completion and cancellation ---

#[test]
fn empty_document_completes_within_the_release_margin_only() {
    let (source, triggers) = RecordingSource::new();
    let mut session = Session::with_document(source, TabDocument::new("Empty"));

    session.play().unwrap();
    thread::sleep(Duration::from_secs_f64(RELEASE_MARGIN_SECS * 0.4));
    assert_ne!(
        session.playback_state(),
        PlaybackState::Completed,
        "completed before the release margin"
    );

    assert!(
        wait_for_completion(&session, RELEASE_MARGIN_SECS * 4.0),
        "run never completed"
    );
    assert!(triggers.lock().unwrap().is_empty());
}

#[test]
fn stop_mid_run_cancels_remaining_triggers() {
    let (source, triggers) = RecordingSource::new();
    // Four whole notes: onsets at 0, 2, 4, 6 seconds at 120 bpm.
    let mut doc = TabDocument::new("Long");
    for _ in 0..4 {
        doc.add_note(0, 0, 0, NoteDuration::Whole).unwrap();
    }
    let mut session = Session::with_document(source, doc);

    session.play().unwrap();
    thread::sleep(Duration::from_millis(300));
    session.stop();

    assert_eq!(session.playback_state(), PlaybackState::Idle);
    let fired = triggers.lock().unwrap().len();
    assert!(fired < 4, "expected a partial run, saw all {} triggers", fired);

    thread::sleep(Duration::from_millis(300));
    assert_eq!(
        triggers.lock().unwrap().len(),
        fired,
        "triggers kept arriving after stop"
    );
}

#[test]
fn restart_supersedes_the_run_in_flight() {
    let (source, triggers) = RecordingSource::new();
    let mut session = Session::with_document(source, two_quarter_notes());

    session.play().unwrap();
    session.play().unwrap();
    assert!(wait_for_completion(&session, 4.0), "run never completed");

    let recorded = triggers.lock().unwrap();
    // The first run can contribute at most its opening trigger before
    // being cancelled; the second run always plays in full.
    assert!(recorded.len() <= 3, "too many triggers: {:?}", *recorded);
    let n = recorded.len();
    assert_eq!(recorded[n - 2], (0.0, 38, 0.5));
    assert_eq!(recorded[n - 1], (0.5, 40, 0.5));
}
