//! Input handling for pointer, touch and keyboard events

use crate::input::{decide_release, DragDecision, InputResult, NavKey, PointerSample};
use crate::math::drag_percent;
use crate::surface::Surface;
use super::Carousel;

impl<T, S: Surface> Carousel<T, S> {
    /// Handle a press on the track
    ///
    /// `track_width` is the track element's rendered width in pixels; drag
    /// deltas are projected against it for the whole gesture.
    pub fn handle_pointer_down(&mut self, sample: PointerSample, track_width: f64) -> InputResult {
        if !self.config.drag {
            return InputResult::Unhandled;
        }
        if !self.drag.press(sample, track_width) {
            return InputResult::Unhandled;
        }
        self.surface.set_transition(false);
        InputResult::Handled
    }

    /// Handle a pointer motion anywhere on the page
    pub fn handle_pointer_move(&mut self, sample: PointerSample) -> InputResult {
        let motion = match self.drag.motion(sample) {
            Some(motion) => motion,
            None => return InputResult::Unhandled,
        };
        let percent = drag_percent(
            self.current_item,
            self.slides.len(),
            motion.delta.x,
            motion.track_width,
        );
        self.surface.translate(percent);
        InputResult::Tracking {
            horizontal: motion.horizontal,
        }
    }

    /// Handle a release or cancel anywhere on the page
    ///
    /// `viewport_width` is the carousel root's rendered width in pixels; the
    /// commit threshold is measured against it.
    pub fn handle_pointer_up(&mut self, viewport_width: f64, now_ms: f64) -> InputResult {
        let session = match self.drag.release() {
            Some(session) => session,
            None => return InputResult::Unhandled,
        };
        self.surface.set_transition(true);

        let delta = match session.last_delta {
            Some(delta) => delta,
            None => return InputResult::Handled,
        };

        let decision = decide_release(delta.x, viewport_width);
        tracing::trace!(dx = delta.x, viewport_width, ?decision, "carousel drag released");

        let committed = match decision {
            DragDecision::Next => self.next(now_ms),
            DragDecision::Prev => self.prev(now_ms),
            DragDecision::SnapBack => false,
        };
        if committed {
            return InputResult::Navigated {
                index: self.current_item,
            };
        }

        // Either too short or blocked at an end: return to the settled position
        self.go_to_item(self.current_item as isize, true);
        InputResult::SnappedBack
    }

    /// Handle a key release on the carousel root
    pub fn handle_key(&mut self, key: &str, now_ms: f64) -> InputResult {
        let moved = match NavKey::from_key(key) {
            Some(NavKey::Next) => self.next(now_ms),
            Some(NavKey::Prev) => self.prev(now_ms),
            None => return InputResult::Unhandled,
        };
        if moved {
            InputResult::Navigated {
                index: self.current_item,
            }
        } else {
            InputResult::Handled
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::CarouselConfig;
    use crate::engine::Carousel;
    use crate::input::{InputResult, PointerSample};
    use crate::surface::{RecordingSurface, SurfaceOp};

    const DESKTOP: f64 = 1280.0;

    fn build(config: CarouselConfig, n: u32) -> Carousel<u32, RecordingSurface> {
        Carousel::new(
            config,
            (0..n).collect(),
            |s| *s,
            |_| RecordingSurface::new(),
            DESKTOP,
            0.0,
        )
        .unwrap()
    }

    #[test]
    fn test_press_suspends_transition() {
        let mut carousel = build(CarouselConfig::default(), 4);
        let result = carousel.handle_pointer_down(PointerSample::mouse(500.0, 100.0), 4000.0);
        assert_eq!(result, InputResult::Handled);
        assert!(carousel.is_dragging());
        assert!(!carousel.surface().transition_enabled());
    }

    #[test]
    fn test_drag_projects_onto_track() {
        let mut carousel = build(CarouselConfig::default(), 4);
        carousel.go_to_item(1, true);
        carousel.handle_pointer_down(PointerSample::mouse(500.0, 100.0), 4000.0);
        carousel.handle_pointer_move(PointerSample::mouse(300.0, 100.0));

        // -25% settled, -200px of a 4000px track is -5%
        assert!((carousel.surface().translation() - (-30.0)).abs() < 0.001);
    }

    #[test]
    fn test_long_drag_left_commits_next() {
        let mut carousel = build(CarouselConfig::default(), 4);
        carousel.handle_pointer_down(PointerSample::mouse(900.0, 100.0), 4000.0);
        carousel.handle_pointer_move(PointerSample::mouse(600.0, 110.0));

        let result = carousel.handle_pointer_up(1000.0, 0.0);
        assert_eq!(result, InputResult::Navigated { index: 1 });
        assert!(carousel.surface().transition_enabled());
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn test_long_drag_right_commits_prev() {
        let mut carousel = build(CarouselConfig::default(), 4);
        carousel.go_to_item(2, true);
        carousel.handle_pointer_down(PointerSample::touch(100.0, 300.0, 1), 4000.0);
        carousel.handle_pointer_move(PointerSample::touch(400.0, 300.0, 1));

        assert_eq!(carousel.handle_pointer_up(1000.0, 0.0), InputResult::Navigated { index: 1 });
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut carousel = build(CarouselConfig::default(), 4);
        carousel.go_to_item(1, true);
        carousel.handle_pointer_down(PointerSample::mouse(500.0, 100.0), 4000.0);
        carousel.handle_pointer_move(PointerSample::mouse(300.0, 100.0));

        assert_eq!(carousel.handle_pointer_up(1000.0, 0.0), InputResult::SnappedBack);
        assert_eq!(carousel.current_item(), 1);
        assert!((carousel.surface().translation() - (-25.0)).abs() < 0.001);
    }

    #[test]
    fn test_commit_blocked_at_end_snaps_back() {
        let mut carousel = build(CarouselConfig::default(), 3);
        carousel.go_to_item(2, true);
        carousel.handle_pointer_down(PointerSample::mouse(900.0, 100.0), 3000.0);
        carousel.handle_pointer_move(PointerSample::mouse(100.0, 100.0));

        assert_eq!(carousel.handle_pointer_up(1000.0, 0.0), InputResult::SnappedBack);
        assert_eq!(carousel.current_item(), 2);
        assert!((carousel.surface().translation() - (-200.0 / 3.0)).abs() < 0.001);
    }

    #[test]
    fn test_click_without_motion_does_not_navigate() {
        let mut carousel = build(CarouselConfig::default(), 4);
        carousel.handle_pointer_down(PointerSample::mouse(500.0, 100.0), 4000.0);
        carousel.surface_mut().clear();

        assert_eq!(carousel.handle_pointer_up(1000.0, 0.0), InputResult::Handled);
        assert_eq!(carousel.current_item(), 0);
        assert_eq!(carousel.surface().ops(), &[SurfaceOp::Transition(true)]);
    }

    #[test]
    fn test_multi_touch_press_ignored() {
        let mut carousel = build(CarouselConfig::default(), 4);
        let result = carousel.handle_pointer_down(PointerSample::touch(10.0, 10.0, 2), 4000.0);
        assert_eq!(result, InputResult::Unhandled);
        assert!(!carousel.is_dragging());
        assert_eq!(
            carousel.handle_pointer_move(PointerSample::touch(300.0, 10.0, 1)),
            InputResult::Unhandled
        );
    }

    #[test]
    fn test_horizontal_touch_blocks_scroll() {
        let mut carousel = build(CarouselConfig::default(), 4);
        carousel.handle_pointer_down(PointerSample::touch(300.0, 300.0, 1), 4000.0);
        let result = carousel.handle_pointer_move(PointerSample::touch(250.0, 305.0, 1));
        assert!(result.blocks_scroll());
    }

    #[test]
    fn test_vertical_touch_keeps_page_scroll() {
        let mut carousel = build(CarouselConfig::default(), 4);
        carousel.handle_pointer_down(PointerSample::touch(300.0, 300.0, 1), 4000.0);
        assert!(!carousel
            .handle_pointer_move(PointerSample::touch(290.0, 400.0, 1))
            .blocks_scroll());
        assert!(carousel
            .handle_pointer_move(PointerSample::touch(150.0, 320.0, 1))
            .blocks_scroll());

        // Mouse drags never need to cancel page scrolling
        carousel.handle_pointer_up(1000.0, 0.0);
        carousel.handle_pointer_down(PointerSample::mouse(300.0, 300.0), 4000.0);
        assert!(!carousel
            .handle_pointer_move(PointerSample::mouse(100.0, 300.0))
            .blocks_scroll());
    }

    #[test]
    fn test_drag_disabled() {
        let config = CarouselConfig {
            drag: false,
            ..Default::default()
        };
        let mut carousel = build(config, 4);
        assert_eq!(
            carousel.handle_pointer_down(PointerSample::mouse(0.0, 0.0), 4000.0),
            InputResult::Unhandled
        );
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut carousel = build(CarouselConfig::default(), 3);
        assert_eq!(carousel.handle_key("ArrowRight", 0.0), InputResult::Navigated { index: 1 });
        assert_eq!(carousel.handle_key("Left", 0.0), InputResult::Navigated { index: 0 });
        assert_eq!(carousel.handle_key("ArrowLeft", 0.0), InputResult::Handled);
        assert_eq!(carousel.handle_key("Escape", 0.0), InputResult::Unhandled);
    }
}
