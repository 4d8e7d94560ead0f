//! Track sizing and translation

/// Widths that make exactly `slides_visible` items fill the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackLayout {
    /// Track width, percent of the viewport
    pub track_width: f64,
    /// Width of each item, percent of the track
    pub item_width: f64,
}

impl TrackLayout {
    /// Compute the layout for `len` slides showing `slides_visible` at once
    pub fn compute(len: usize, slides_visible: usize) -> Self {
        let visible = slides_visible.max(1) as f64;
        let ratio = len.max(1) as f64 / visible;
        Self {
            track_width: ratio * 100.0,
            item_width: (100.0 / visible) / ratio,
        }
    }
}

/// Translation (percent of the track) that settles on `index`
#[inline]
pub fn translate_percent(index: usize, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    index as f64 * -100.0 / len as f64
}

/// Translation while dragging: settled position plus the drag projected onto
/// the captured track width. Not clamped, the track may overshoot.
pub fn drag_percent(index: usize, len: usize, dx: f64, track_width_px: f64) -> f64 {
    let base = translate_percent(index, len);
    if track_width_px <= 0.0 {
        return base;
    }
    base + 100.0 * dx / track_width_px
}
