//! Compiled sound events.

use crate::pitch::Pitch;

/// A timed, absolute-pitch trigger produced by the event compiler.
///
/// Derived data: always regenerated from the document and its tempo,
/// never edited in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundEvent {
    /// Seconds from playback start; non-decreasing across a sequence.
    pub onset_secs: f64,
    pub pitch: Pitch,
    /// Sounding length in seconds.
    pub duration_secs: f64,
    /// Trigger velocity, 0.0..=1.0.
    pub velocity: f32,
}

impl SoundEvent {
    pub const fn new(onset_secs: f64, pitch: Pitch, duration_secs: f64, velocity: f32) -> Self {
        Self {
            onset_secs,
            pitch,
            duration_secs,
            velocity,
        }
    }

    /// Time at which this event stops sounding.
    pub fn end_secs(&self) -> f64 {
        self.onset_secs + self.duration_secs
    }
}

/// Sounding length of a compiled sequence: the last event's end, or zero.
pub fn sequence_length_secs(events: &[SoundEvent]) -> f64 {
    events.last().map(SoundEvent::end_secs).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_is_onset_plus_duration() {
        let event = SoundEvent::new(1.5, Pitch(40), 0.5, 0.8);
        assert_eq!(event.end_secs(), 2.0);
    }

    #[test]
    fn empty_sequence_has_zero_length() {
        assert_eq!(sequence_length_secs(&[]), 0.0);
    }

    #[test]
    fn sequence_length_is_last_event_end() {
        let events = [
            SoundEvent::new(0.0, Pitch(40), 0.5, 0.8),
            SoundEvent::new(0.5, Pitch(45), 1.0, 0.8),
        ];
        assert_eq!(sequence_length_secs(&events), 1.5);
    }
}
