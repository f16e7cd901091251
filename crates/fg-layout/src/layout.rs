//! Fixed geometry of the tab grid.

use fg_ir::STRING_COUNT;

/// Grid geometry in pixels.
///
/// String lines run horizontally from `origin_y`, measures tile
/// rightward from `origin_x`, and each measure holds note slots spaced
/// `note_spacing` apart after an initial `slot_inset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Vertical distance between adjacent string lines.
    pub line_spacing: f32,
    /// Left edge of the first measure.
    pub origin_x: f32,
    /// Vertical position of string 0.
    pub origin_y: f32,
    /// Visual radius of a note head.
    pub note_radius: f32,
    /// Horizontal distance between slots within a measure.
    pub note_spacing: f32,
    /// Width of one measure.
    pub measure_width: f32,
    /// Gap between a measure's left edge and its first slot.
    pub slot_inset: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            line_spacing: 25.0,
            origin_x: 80.0,
            origin_y: 100.0,
            note_radius: 14.0,
            note_spacing: 50.0,
            measure_width: 250.0,
            slot_inset: 30.0,
        }
    }
}

impl Layout {
    /// Vertical position of a string line.
    pub fn string_y(&self, string: u8) -> f32 {
        self.origin_y + f32::from(string) * self.line_spacing
    }

    /// Left edge of a measure.
    pub fn measure_x(&self, measure: usize) -> f32 {
        self.origin_x + measure as f32 * self.measure_width
    }

    /// Center of the note head at (measure, slot, string).
    ///
    /// The one formula shared by rendering and hit-testing.
    pub fn note_center(&self, measure: usize, slot: usize, string: u8) -> (f32, f32) {
        let x = self.measure_x(measure) + self.slot_inset + slot as f32 * self.note_spacing;
        (x, self.string_y(string))
    }

    /// Nearest string line to `y`, or None off the instrument.
    pub fn string_at(&self, y: f32) -> Option<u8> {
        let index = ((y - self.origin_y) / self.line_spacing).round();
        if index < 0.0 || index >= STRING_COUNT as f32 {
            return None;
        }
        Some(index as u8)
    }

    /// Measure under `x`, given how many measures exist.
    ///
    /// Positions right of the last measure resolve to the last measure,
    /// so appending past the end of the grid still lands somewhere
    /// useful. Positions left of the grid resolve to nothing.
    pub fn measure_at(&self, x: f32, measure_count: usize) -> Option<usize> {
        if measure_count == 0 || x < self.origin_x {
            return None;
        }
        let index = ((x - self.origin_x) / self.measure_width) as usize;
        Some(index.min(measure_count - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slot_sits_inset_from_the_origin() {
        let layout = Layout::default();
        assert_eq!(layout.note_center(0, 0, 0), (110.0, 100.0));
    }

    #[test]
    fn centers_advance_by_slot_measure_and_string() {
        let layout = Layout::default();
        let (x, y) = layout.note_center(1, 2, 3);
        assert_eq!(x, 80.0 + 250.0 + 30.0 + 100.0);
        assert_eq!(y, 100.0 + 75.0);
    }

    #[test]
    fn string_at_rounds_to_the_nearest_line() {
        let layout = Layout::default();
        assert_eq!(layout.string_at(100.0), Some(0));
        assert_eq!(layout.string_at(107.0), Some(0));
        assert_eq!(layout.string_at(113.0), Some(1));
        assert_eq!(layout.string_at(225.0), Some(5));
    }

    #[test]
    fn string_at_rejects_positions_off_the_instrument() {
        let layout = Layout::default();
        assert_eq!(layout.string_at(0.0), None);
        // One line below string 5 would be string 6.
        assert_eq!(layout.string_at(250.0), None);
    }

    #[test]
    fn measure_at_buckets_by_width() {
        let layout = Layout::default();
        assert_eq!(layout.measure_at(80.0, 3), Some(0));
        assert_eq!(layout.measure_at(329.9, 3), Some(0));
        assert_eq!(layout.measure_at(330.0, 3), Some(1));
    }

    #[test]
    fn measure_at_clamps_past_the_last_measure() {
        let layout = Layout::default();
        assert_eq!(layout.measure_at(10_000.0, 3), Some(2));
    }

    #[test]
    fn measure_at_rejects_left_of_the_grid() {
        let layout = Layout::default();
        assert_eq!(layout.measure_at(79.9, 3), None);
        assert_eq!(layout.measure_at(100.0, 0), None);
    }
}
