//! Symbolic note durations.

use core::fmt;

/// A note's symbolic duration. A quarter note is one beat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NoteDuration {
    Whole,
    Half,
    Quarter,
    /// Default for newly placed notes.
    #[default]
    Eighth,
    Sixteenth,
}

impl NoteDuration {
    /// All durations, longest first.
    pub const ALL: [NoteDuration; 5] = [
        NoteDuration::Whole,
        NoteDuration::Half,
        NoteDuration::Quarter,
        NoteDuration::Eighth,
        NoteDuration::Sixteenth,
    ];

    /// Length in beats.
    pub const fn beats(self) -> f64 {
        match self {
            NoteDuration::Whole => 4.0,
            NoteDuration::Half => 2.0,
            NoteDuration::Quarter => 1.0,
            NoteDuration::Eighth => 0.5,
            NoteDuration::Sixteenth => 0.25,
        }
    }

    /// Musical glyph, drawn under the note head by editor surfaces.
    pub const fn glyph(self) -> &'static str {
        match self {
            NoteDuration::Whole => "\u{1D15D}",
            NoteDuration::Half => "\u{1D15E}",
            NoteDuration::Quarter => "\u{2669}",
            NoteDuration::Eighth => "\u{266A}",
            NoteDuration::Sixteenth => "\u{1D161}",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            NoteDuration::Whole => "whole",
            NoteDuration::Half => "half",
            NoteDuration::Quarter => "quarter",
            NoteDuration::Eighth => "eighth",
            NoteDuration::Sixteenth => "sixteenth",
        }
    }
}

impl fmt::Display for NoteDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beats_halve_down_the_ladder() {
        let mut previous = None;
        for duration in NoteDuration::ALL {
            if let Some(prev) = previous {
                assert_eq!(duration.beats() * 2.0, prev);
            }
            previous = Some(duration.beats());
        }
    }

    #[test]
    fn quarter_note_is_one_beat() {
        assert_eq!(NoteDuration::Quarter.beats(), 1.0);
        assert_eq!(NoteDuration::Whole.beats(), 4.0);
    }

    #[test]
    fn default_is_eighth() {
        assert_eq!(NoteDuration::default(), NoteDuration::Eighth);
    }

    #[test]
    fn display_names() {
        assert_eq!(NoteDuration::Quarter.to_string(), "quarter");
        assert_eq!(NoteDuration::Sixteenth.to_string(), "sixteenth");
    }
}
