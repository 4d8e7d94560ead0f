//! Input result type

use serde::Serialize;

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputResult {
    /// Input was ignored
    Unhandled,
    /// Input was consumed without moving the carousel
    Handled,
    /// Drag in progress; horizontal touch drags should not scroll the page
    Tracking {
        /// The gesture is mostly horizontal
        horizontal: bool,
    },
    /// Navigation was committed
    Navigated {
        /// New current index
        index: usize,
    },
    /// Drag was too short; the track returned to its settled position
    SnappedBack,
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Check if the page should be kept from scrolling
    #[inline]
    pub fn blocks_scroll(&self) -> bool {
        matches!(self, InputResult::Tracking { horizontal: true })
    }
}
