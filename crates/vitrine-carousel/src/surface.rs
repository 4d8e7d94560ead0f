//! Rendering surface abstraction
//!
//! The engine never touches the DOM directly. Every visible effect goes
//! through [`Surface`], which the browser binding implements over the track
//! element and its items. [`RecordingSurface`] captures the writes so the
//! engine can be tested without a browser.

/// Style writes the engine performs on the track and its items
pub trait Surface {
    /// Set the track width, in percent of the viewport
    fn set_track_width(&mut self, percent: f64);

    /// Set the width of every item, in percent of the track
    fn set_item_width(&mut self, percent: f64);

    /// Move the track horizontally, in percent of its own width
    fn translate(&mut self, percent: f64);

    /// Enable or suspend the track's transition animation
    fn set_transition(&mut self, enabled: bool);

    /// Force pending style writes to be laid out
    fn flush_layout(&mut self);
}

/// A single recorded surface write
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    TrackWidth(f64),
    ItemWidth(f64),
    Translate(f64),
    Transition(bool),
    Flush,
}

/// Surface that records every write, for tests and headless use
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    translation: f64,
    transition: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Create an empty recorder with transitions enabled
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            translation: 0.0,
            transition: true,
        }
    }

    /// All writes so far, oldest first
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Forget recorded writes (current state is kept)
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Last translation written
    pub fn translation(&self) -> f64 {
        self.translation
    }

    /// Whether transitions are currently enabled
    pub fn transition_enabled(&self) -> bool {
        self.transition
    }
}

impl Surface for RecordingSurface {
    fn set_track_width(&mut self, percent: f64) {
        self.ops.push(SurfaceOp::TrackWidth(percent));
    }

    fn set_item_width(&mut self, percent: f64) {
        self.ops.push(SurfaceOp::ItemWidth(percent));
    }

    fn translate(&mut self, percent: f64) {
        self.translation = percent;
        self.ops.push(SurfaceOp::Translate(percent));
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transition = enabled;
        self.ops.push(SurfaceOp::Transition(enabled));
    }

    fn flush_layout(&mut self) {
        self.ops.push(SurfaceOp::Flush);
    }
}
