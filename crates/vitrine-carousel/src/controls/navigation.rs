//! Previous/next button visibility

use crate::events::MoveEvent;

/// Visibility of the previous and next buttons
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Previous button is hidden
    pub prev_hidden: bool,
    /// Next button is hidden
    pub next_hidden: bool,
}

impl NavigationState {
    /// Derive visibility from a move. Looping carousels never hide either button.
    pub fn from_move(event: &MoveEvent) -> Self {
        if event.looping {
            return Self::default();
        }
        Self {
            prev_hidden: event.is_at_start(),
            next_hidden: !event.has_next_page(),
        }
    }
}
