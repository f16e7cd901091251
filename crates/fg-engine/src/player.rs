//! Time-accurate playback of compiled event sequences.
//!
//! A [`Player`] owns the sound source and runs each playback on a
//! dedicated clock thread, waking at every event's onset. Waits are
//! chunked so `stop` is honored promptly mid-run.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use spin_sleep::{SpinSleeper, SpinStrategy};

use fg_ir::{sequence_length_secs, SoundEvent};

use crate::source::{SoundSource, SourceError};

/// Tail appended to every run so the final note's release can finish
/// before completion is signaled.
pub const RELEASE_MARGIN_SECS: f64 = 0.5;

/// Upper bound on one uninterruptible wait slice.
const MAX_WAIT_CHUNK_SECS: f64 = 0.050;

/// Where a player is in its run lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Scheduled,
    Playing,
    Completed,
    Cancelled,
}

impl PlaybackState {
    const fn as_u8(self) -> u8 {
        match self {
            PlaybackState::Idle => 0,
            PlaybackState::Scheduled => 1,
            PlaybackState::Playing => 2,
            PlaybackState::Completed => 3,
            PlaybackState::Cancelled => 4,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            1 => PlaybackState::Scheduled,
            2 => PlaybackState::Playing,
            3 => PlaybackState::Completed,
            4 => PlaybackState::Cancelled,
            _ => PlaybackState::Idle,
        }
    }
}

/// Drives compiled events against a [`SoundSource`].
///
/// `start` implies `stop` of any prior run, so two runs never overlap
/// audibly. The completion callback fires exactly once per run that is
/// not cancelled first.
pub struct Player<S: SoundSource + 'static> {
    source: Arc<Mutex<S>>,
    state: Arc<AtomicU8>,
    run: Option<RunHandle>,
}

struct RunHandle {
    stop_tx: Sender<()>,
    finished: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl<S: SoundSource + 'static> Player<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(Mutex::new(source)),
            state: Arc::new(AtomicU8::new(PlaybackState::Idle.as_u8())),
            run: None,
        }
    }

    /// Begin playing an event sequence, stopping any run in flight.
    ///
    /// `on_complete` fires on the clock thread when the run finishes
    /// naturally (or is abandoned after a source failure); it does not
    /// fire when the run is cancelled by [`Player::stop`].
    pub fn start<F>(&mut self, events: Vec<SoundEvent>, on_complete: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.stop();

        let total_secs = sequence_length_secs(&events) + RELEASE_MARGIN_SECS;
        if events.is_empty() {
            info!("nothing to play; completing after the release margin");
        }
        debug!(
            "scheduling {} events, run length {:.3}s",
            events.len(),
            total_secs
        );

        self.state
            .store(PlaybackState::Scheduled.as_u8(), Ordering::Relaxed);

        let (stop_tx, stop_rx) = mpsc::channel();
        let finished = Arc::new(AtomicBool::new(false));

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let done = Arc::clone(&finished);
        let thread = thread::spawn(move || {
            run_events(events, total_secs, source, state, stop_rx, done, on_complete);
        });

        self.run = Some(RunHandle {
            stop_tx,
            finished,
            thread: Some(thread),
        });
    }

    /// Cancel the current run, silence the source, and return to Idle.
    ///
    /// Safe to call at any time: with nothing started it is a no-op,
    /// after natural completion it only resets the state. No trigger
    /// lands after this returns.
    pub fn stop(&mut self) {
        let Some(mut run) = self.run.take() else {
            return;
        };

        let _ = run.stop_tx.send(());
        if let Some(handle) = run.thread.take() {
            let _ = handle.join();
        }
        silence(&self.source);
        self.state
            .store(PlaybackState::Idle.as_u8(), Ordering::Relaxed);
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState::from_u8(self.state.load(Ordering::Relaxed))
    }

    /// True while a run is scheduled or sounding.
    pub fn is_playing(&self) -> bool {
        matches!(
            self.state(),
            PlaybackState::Scheduled | PlaybackState::Playing
        )
    }

    /// True once the current run has ended naturally.
    pub fn is_finished(&self) -> bool {
        self.run
            .as_ref()
            .is_some_and(|r| r.finished.load(Ordering::Relaxed))
    }
}

impl<S: SoundSource + 'static> Drop for Player<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_events<S: SoundSource, F: FnOnce()>(
    events: Vec<SoundEvent>,
    total_secs: f64,
    source: Arc<Mutex<S>>,
    state: Arc<AtomicU8>,
    stop_rx: Receiver<()>,
    finished: Arc<AtomicBool>,
    on_complete: F,
) {
    let sleeper = SpinSleeper::new(100_000).with_spin_strategy(SpinStrategy::YieldThread);
    let start = Instant::now();
    state.store(PlaybackState::Playing.as_u8(), Ordering::Relaxed);

    for event in events {
        let target = start + Duration::from_secs_f64(event.onset_secs);
        if !wait_until(&sleeper, &stop_rx, target) {
            cancel_run(&source, &state, &finished);
            return;
        }

        let outcome = match source.lock() {
            Ok(mut src) => {
                src.trigger_note(event.pitch, event.duration_secs, event.onset_secs, event.velocity)
            }
            Err(_) => Err(SourceError::Unavailable("source lock poisoned".into())),
        };

        if let Err(err) = outcome {
            error!("sound source failed at {:.3}s: {}", event.onset_secs, err);
            silence(&source);
            state.store(PlaybackState::Idle.as_u8(), Ordering::Relaxed);
            finished.store(true, Ordering::Relaxed);
            on_complete();
            return;
        }
    }

    let end = start + Duration::from_secs_f64(total_secs);
    if !wait_until(&sleeper, &stop_rx, end) {
        cancel_run(&source, &state, &finished);
        return;
    }

    debug!("run complete after {:.3}s", total_secs);
    state.store(PlaybackState::Completed.as_u8(), Ordering::Relaxed);
    finished.store(true, Ordering::Relaxed);
    on_complete();
}

/// Sleep toward `target` in cancellable slices. Returns false when a
/// stop message arrives first.
fn wait_until(sleeper: &SpinSleeper, stop_rx: &Receiver<()>, target: Instant) -> bool {
    loop {
        if stop_rx.try_recv().is_ok() {
            return false;
        }
        let now = Instant::now();
        if now >= target {
            return true;
        }
        let remaining = (target - now).as_secs_f64();
        sleeper.sleep(Duration::from_secs_f64(remaining.min(MAX_WAIT_CHUNK_SECS)));
    }
}

fn cancel_run<S: SoundSource>(
    source: &Arc<Mutex<S>>,
    state: &Arc<AtomicU8>,
    finished: &Arc<AtomicBool>,
) {
    debug!("run cancelled");
    silence(source);
    state.store(PlaybackState::Cancelled.as_u8(), Ordering::Relaxed);
    finished.store(true, Ordering::Relaxed);
}

fn silence<S: SoundSource>(source: &Arc<Mutex<S>>) {
    if let Ok(mut src) = source.lock() {
        if let Err(err) = src.silence_all() {
            warn!("failed to silence source: {}", err);
        }
    }
}
