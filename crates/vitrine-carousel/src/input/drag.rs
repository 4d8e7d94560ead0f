//! Drag session state

use crate::math::Point;

/// Data captured for the lifetime of one gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Screen position at press
    pub origin: Point,
    /// Track width (px) at press
    pub track_width: f64,
    /// Delta from origin at the last motion, if the pointer moved
    pub last_delta: Option<Point>,
}

impl DragSession {
    /// Start a session at `origin`
    pub fn new(origin: Point, track_width: f64) -> Self {
        Self {
            origin,
            track_width,
            last_delta: None,
        }
    }
}

/// Gesture state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer is down and tracking
    Dragging(DragSession),
}

impl DragState {
    /// Check if a gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Active session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }
}
