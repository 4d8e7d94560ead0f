//! Index navigation and auto-scroll

use crate::math::translate_percent;
use crate::surface::Surface;
use super::Carousel;

impl<T, S: Surface> Carousel<T, S> {
    /// Move the track so `index` is the first visible slide
    ///
    /// Indices before the start wrap to the last full page when looping.
    /// Indices past the end, or forward moves when no full page follows the
    /// current one, wrap to 0 when looping. Without looping both are no-ops.
    /// Returns whether the move was committed; committed moves notify every
    /// subscriber.
    pub fn go_to_item(&mut self, index: isize, animate: bool) -> bool {
        let len = self.slides.len();
        let visible = self.slides_visible();

        let target = if index < 0 {
            if !self.config.looping {
                return false;
            }
            len.saturating_sub(visible)
        } else if index as usize >= len
            || (!self.slides.has_slot(self.current_item + visible)
                && index as usize > self.current_item)
        {
            if !self.config.looping {
                return false;
            }
            0
        } else {
            index as usize
        };

        self.place(target, animate);
        self.current_item = target;
        self.notify();
        true
    }

    /// Write the track position, suspending the transition for instant jumps
    fn place(&mut self, index: usize, animate: bool) {
        let percent = translate_percent(index, self.slides.len());
        if animate {
            self.surface.translate(percent);
            return;
        }
        self.surface.set_transition(false);
        self.surface.translate(percent);
        self.surface.flush_layout();
        self.surface.set_transition(true);
    }

    /// Advance by one scroll step and restart the auto-scroll timer
    pub fn next(&mut self, now_ms: f64) -> bool {
        let target = (self.current_item + self.slides_to_scroll()) as isize;
        let moved = self.go_to_item(target, true);
        self.restart_auto_scroll(now_ms);
        moved
    }

    /// Go back by one scroll step and restart the auto-scroll timer
    pub fn prev(&mut self, now_ms: f64) -> bool {
        self.restart_auto_scroll(now_ms);
        let target = self.current_item as isize - self.slides_to_scroll() as isize;
        self.go_to_item(target, true)
    }

    /// Jump to the first slide of a pagination page
    pub fn go_to_page(&mut self, page: usize) -> bool {
        match self.pagination() {
            Some(pages) if page < pages.page_count() => {
                self.go_to_item(pages.target(page) as isize, true)
            }
            _ => false,
        }
    }

    /// Advance if the auto-scroll deadline has passed
    ///
    /// Returns whether a move was committed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.auto_scroll.poll(now_ms) {
            return false;
        }
        let target = (self.current_item + self.slides_to_scroll()) as isize;
        self.go_to_item(target, true)
    }

    /// Restart the auto-scroll schedule if it is running
    fn restart_auto_scroll(&mut self, now_ms: f64) {
        if self.auto_scroll.is_running() {
            self.auto_scroll.restart(now_ms);
        }
    }
}
