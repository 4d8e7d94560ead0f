//! Infinite-mode seam repair

use crate::surface::Surface;
use super::Carousel;

impl<T, S: Surface> Carousel<T, S> {
    /// Relocate the track from the clone padding back into the genuine slides
    ///
    /// The jump is unanimated and covers exactly the genuine slide count, so
    /// the visible content is identical before and after. Returns whether a
    /// jump happened. Does nothing outside infinite mode.
    pub fn reset_infinite(&mut self) -> bool {
        if !self.config.infinite {
            return false;
        }
        let len = self.slides.len();
        let padding = self.slides.padding();
        let real = self.slides.source_len();
        let step = self.config.slides_to_scroll as usize;

        let target = if self.current_item <= step {
            self.current_item + real
        } else if self.current_item >= len - padding {
            self.current_item - real
        } else {
            return false;
        };

        tracing::debug!(from = self.current_item, to = target, "carousel seam repair");
        self.go_to_item(target as isize, false)
    }

    /// Notify the engine that the track's transition has finished
    pub fn on_transition_end(&mut self) -> bool {
        self.reset_infinite()
    }
}
