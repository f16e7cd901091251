//! Geometry for the tab grid: where notes draw, and what a pointer
//! position means in (measure, slot, string) terms.
//!
//! Everything here is pure data mapping. Rendering backends and input
//! sources live elsewhere; they share one formula, [`Layout::note_center`],
//! so drawing and hit-testing cannot drift apart.

mod hit;
mod layout;

pub use hit::{note_at, place_note, placements, LayoutError, NotePlacement};
pub use layout::Layout;
