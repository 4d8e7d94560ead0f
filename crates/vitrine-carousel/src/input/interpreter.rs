//! Drag interpreter state machine
//!
//! `Idle -> Dragging -> Idle`, once per gesture. The interpreter only tracks
//! the gesture; the engine turns its reports into track writes and
//! navigation.

use crate::config::DRAG_COMMIT_RATIO;
use crate::math::Point;
use super::{DragSession, DragState, PointerSample};

/// What a pointer motion means for the track
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragMotion {
    /// Delta from the press origin
    pub delta: Point,
    /// Track width captured at press
    pub track_width: f64,
    /// Touch drag that is mostly horizontal
    pub horizontal: bool,
}

/// Navigation decided at the end of a drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragDecision {
    /// Dragged toward the left far enough
    Next,
    /// Dragged toward the right far enough
    Prev,
    /// Not far enough; return to the settled position
    SnapBack,
}

/// Decide the outcome of a drag from its final horizontal delta
///
/// Commits when `|dx| / viewport_width` exceeds [`DRAG_COMMIT_RATIO`].
pub fn decide_release(dx: f64, viewport_width: f64) -> DragDecision {
    if viewport_width <= 0.0 || (dx / viewport_width).abs() <= DRAG_COMMIT_RATIO {
        return DragDecision::SnapBack;
    }
    if dx < 0.0 {
        DragDecision::Next
    } else {
        DragDecision::Prev
    }
}

/// Drag interpreter managing gesture state
#[derive(Clone, Debug, Default)]
pub struct DragInterpreter {
    state: DragState,
}

impl DragInterpreter {
    /// Create an idle interpreter
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Current gesture state
    #[inline]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Begin a gesture. Multi-touch presses are ignored and return `false`.
    pub fn press(&mut self, sample: PointerSample, track_width: f64) -> bool {
        if sample.is_multi_touch() {
            return false;
        }
        self.state = DragState::Dragging(DragSession::new(sample.position, track_width));
        true
    }

    /// Track a motion. Returns `None` when no gesture is in progress.
    pub fn motion(&mut self, sample: PointerSample) -> Option<DragMotion> {
        let session = match &mut self.state {
            DragState::Dragging(session) => session,
            DragState::Idle => return None,
        };
        let delta = sample.position - session.origin;
        session.last_delta = Some(delta);
        Some(DragMotion {
            delta,
            track_width: session.track_width,
            horizontal: sample.is_touch() && delta.is_horizontal(),
        })
    }

    /// End the gesture, returning the session it closed (if any)
    pub fn release(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }
}
