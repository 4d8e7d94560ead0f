//! Input interpretation
//!
//! Provides the drag state machine and keyboard mapping. Nothing here knows
//! about slides: the interpreter reports what the gesture means and the
//! engine applies it.

mod drag;
mod interpreter;
mod key;
mod result;

pub use drag::{DragSession, DragState};
pub use interpreter::{decide_release, DragDecision, DragInterpreter, DragMotion};
pub use key::NavKey;
pub use result::InputResult;

use crate::math::Point;

/// Where a pointer sample came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    /// Mouse or pen
    Mouse,
    /// Touch screen, with the number of active contacts
    Touch { contacts: u32 },
}

/// A pointer position sample in screen coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Screen position of the (first) contact
    pub position: Point,
    /// Originating device
    pub source: PointerSource,
}

impl PointerSample {
    /// Mouse sample
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            source: PointerSource::Mouse,
        }
    }

    /// Touch sample with `contacts` fingers down
    pub fn touch(x: f64, y: f64, contacts: u32) -> Self {
        Self {
            position: Point::new(x, y),
            source: PointerSource::Touch { contacts },
        }
    }

    /// True for touch samples
    #[inline]
    pub fn is_touch(&self) -> bool {
        matches!(self.source, PointerSource::Touch { .. })
    }

    /// True when more than one finger is down
    #[inline]
    pub fn is_multi_touch(&self) -> bool {
        matches!(self.source, PointerSource::Touch { contacts } if contacts > 1)
    }
}
