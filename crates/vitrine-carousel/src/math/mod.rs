//! Geometry for slide positioning
//!
//! Pointer positions and the percentage arithmetic that places the track.
//! Percentages are relative to the track element, whose width spans every
//! slide.

mod point;
mod track;

pub use point::Point;
pub use track::{drag_percent, translate_percent, TrackLayout};
