//! Document analysis — scans a document to summarize its contents.

use core::fmt;

use crate::document::TabDocument;
use crate::tuning::STRING_COUNT;

/// Summary of a document's contents.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentSummary {
    pub tracks: usize,
    pub measures: usize,
    pub notes: usize,
    /// Lowest and highest fret in use.
    pub fret_range: Option<(u8, u8)>,
    /// Note count per string.
    pub notes_per_string: [usize; STRING_COUNT],
    /// Beats in the first track.
    pub total_beats: f64,
    /// Playback length at the document tempo, excluding the release tail.
    pub playback_secs: f64,
}

/// Analyze a document and return a summary of its contents.
pub fn summarize(document: &TabDocument) -> DocumentSummary {
    let mut summary = DocumentSummary {
        tracks: document.tracks.len(),
        measures: 0,
        notes: 0,
        fret_range: None,
        notes_per_string: [0; STRING_COUNT],
        total_beats: document.total_beats(),
        playback_secs: 0.0,
    };

    if let Some(track) = document.first_track() {
        summary.measures = track.measures.len();
        for measure in &track.measures {
            for note in &measure.notes {
                summary.notes += 1;
                summary.fret_range = Some(match summary.fret_range {
                    Some((lo, hi)) => (lo.min(note.fret), hi.max(note.fret)),
                    None => (note.fret, note.fret),
                });
                if let Some(count) = summary.notes_per_string.get_mut(note.string as usize) {
                    *count += 1;
                }
            }
        }
    }

    summary.playback_secs = summary.total_beats * 60.0 / document.tempo as f64;
    summary
}

impl fmt::Display for DocumentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tracks:   {}", self.tracks)?;
        writeln!(f, "Measures: {}", self.measures)?;
        writeln!(f, "Notes:    {}", self.notes)?;
        if let Some((lo, hi)) = self.fret_range {
            writeln!(f, "Frets:    {} - {}", lo, hi)?;
        }

        let used: alloc::vec::Vec<alloc::string::String> = self
            .notes_per_string
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(string, count)| alloc::format!("{}:{}", string, count))
            .collect();
        if used.is_empty() {
            writeln!(f, "Strings:  (none)")?;
        } else {
            writeln!(f, "Strings:  {}", used.join(", "))?;
        }

        writeln!(
            f,
            "Length:   {} beats (~{:.1}s)",
            self.total_beats, self.playback_secs
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::NoteDuration;

    #[test]
    fn empty_document_summary() {
        let summary = summarize(&TabDocument::new("Empty"));
        assert_eq!(summary.tracks, 1);
        assert_eq!(summary.measures, 1);
        assert_eq!(summary.notes, 0);
        assert_eq!(summary.fret_range, None);
        assert_eq!(summary.total_beats, 0.0);
        assert_eq!(summary.playback_secs, 0.0);
    }

    #[test]
    fn sample_document_summary() {
        let summary = summarize(&TabDocument::sample());
        assert_eq!(summary.tracks, 1);
        assert_eq!(summary.measures, 2);
        assert_eq!(summary.notes, 11);
        assert_eq!(summary.fret_range, Some((0, 3)));
        assert_eq!(summary.notes_per_string, [2, 2, 2, 2, 2, 1]);
        assert_eq!(summary.total_beats, 8.0);
        // 8 beats at 120 bpm = 4 seconds
        assert_eq!(summary.playback_secs, 4.0);
    }

    #[test]
    fn fret_range_tracks_min_and_max() {
        let mut doc = TabDocument::new("Test");
        doc.add_note(0, 0, 7, NoteDuration::Quarter).unwrap();
        doc.add_note(0, 1, 2, NoteDuration::Quarter).unwrap();
        doc.add_note(0, 2, 12, NoteDuration::Quarter).unwrap();
        assert_eq!(summarize(&doc).fret_range, Some((2, 12)));
    }

    #[test]
    fn display_lists_used_strings_only() {
        let mut doc = TabDocument::new("Test");
        doc.add_note(0, 3, 0, NoteDuration::Quarter).unwrap();
        doc.add_note(0, 3, 2, NoteDuration::Quarter).unwrap();
        let text = summarize(&doc).to_string();
        assert!(text.contains("Strings:  3:2"));
        assert!(text.contains("Notes:    2"));
    }
}
