//! The sound-producing capability boundary.

use fg_ir::Pitch;
use thiserror::Error;

/// Errors a sound source can raise.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("sound source unavailable: {0}")]
    Unavailable(String),
    #[error("note trigger failed: {0}")]
    Trigger(String),
}

/// An external sound-producing capability.
///
/// The scheduler owns one of these per run and only ever asks it to
/// sound a pitch or fall silent; synthesis itself happens on the far
/// side of this boundary. `onset_secs` is the event's nominal time from
/// playback start — the scheduler calls at that time, and sources that
/// buffer ahead may use it for their own scheduling.
pub trait SoundSource: Send {
    fn trigger_note(
        &mut self,
        pitch: Pitch,
        duration_secs: f64,
        onset_secs: f64,
        velocity: f32,
    ) -> Result<(), SourceError>;

    /// Cut every sounding voice immediately.
    fn silence_all(&mut self) -> Result<(), SourceError>;
}

/// A source that discards every trigger. Useful for headless runs and
/// for exercising scheduler timing without audio.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSource;

impl SoundSource for NullSource {
    fn trigger_note(
        &mut self,
        _pitch: Pitch,
        _duration_secs: f64,
        _onset_secs: f64,
        _velocity: f32,
    ) -> Result<(), SourceError> {
        Ok(())
    }

    fn silence_all(&mut self) -> Result<(), SourceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_source_accepts_everything() {
        let mut source = NullSource;
        assert!(source.trigger_note(Pitch(40), 0.5, 0.0, 0.8).is_ok());
        assert!(source.silence_all().is_ok());
    }

    #[test]
    fn errors_describe_the_failure() {
        let err = SourceError::Unavailable("no device".into());
        assert!(err.to_string().contains("no device"));
    }
}
