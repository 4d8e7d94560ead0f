//! Carousel engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `navigation`: index clamping, wrap-around, next/prev and auto-scroll
//! - `infinite`: seam repair for padded collections
//! - `input`: pointer, touch and keyboard handling

mod infinite;
mod input;
mod navigation;

use crate::config::{CarouselConfig, MOBILE_BREAKPOINT_PX};
use crate::controls::Pagination;
use crate::error::CarouselError;
use crate::events::{MoveEvent, MoveSubscribers};
use crate::input::DragInterpreter;
use crate::math::{translate_percent, TrackLayout};
use crate::schedule::AutoScroll;
use crate::slides::SlideCollection;
use crate::surface::Surface;

/// Carousel engine
///
/// Owns the slide collection, the current index, the breakpoint flag, the
/// auto-scroll schedule and the move subscribers. All visible effects are
/// written through the [`Surface`].
pub struct Carousel<T, S: Surface> {
    /// Options, fixed at construction
    config: CarouselConfig,
    /// Slides in track order, clones included
    slides: SlideCollection<T>,
    /// Style sink
    surface: S,
    /// Index of the first visible slide
    current_item: usize,
    /// Viewport is below the mobile breakpoint
    is_mobile: bool,
    /// Drag gesture state
    drag: DragInterpreter,
    /// Auto-scroll deadline
    auto_scroll: AutoScroll,
    /// Move callbacks
    subscribers: MoveSubscribers,
}

impl<T, S: Surface> Carousel<T, S> {
    /// Build a carousel over `source`
    ///
    /// Validates `config` before anything is built. In infinite mode the
    /// source is padded with `clone_slide` copies and the track jumps, without
    /// animation, to the first genuine slide. `make_surface` receives the final
    /// collection so it can bind every slide, clones included.
    pub fn new<C, F>(
        config: CarouselConfig,
        source: Vec<T>,
        clone_slide: C,
        make_surface: F,
        viewport_width: f64,
        now_ms: f64,
    ) -> Result<Self, CarouselError>
    where
        C: FnMut(&T) -> T,
        F: FnOnce(&SlideCollection<T>) -> S,
    {
        config.validate()?;
        if source.is_empty() {
            return Err(CarouselError::NoSlides);
        }

        let slides = if config.infinite {
            SlideCollection::padded(source, config.offset(), clone_slide)
        } else {
            SlideCollection::plain(source)
        };
        if slides.shortfall() > 0 {
            tracing::warn!(
                requested = config.offset(),
                available = slides.source_len(),
                "not enough slides in the carousel to pad infinite mode"
            );
        }

        let surface = make_surface(&slides);
        let auto_scroll = AutoScroll::new(config.auto_scroll_period_ms());
        let mut carousel = Self {
            config,
            slides,
            surface,
            current_item: 0,
            is_mobile: true,
            drag: DragInterpreter::new(),
            auto_scroll,
            subscribers: MoveSubscribers::new(),
        };

        if carousel.config.infinite {
            let first = carousel.slides.padding() as isize;
            carousel.go_to_item(first, false);
        }
        carousel.set_style();
        carousel.resize(viewport_width);

        if carousel.config.auto_scroll {
            carousel.auto_scroll.restart(now_ms);
        }
        Ok(carousel)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Options the carousel was built with
    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Slides in track order
    #[inline]
    pub fn slides(&self) -> &SlideCollection<T> {
        &self.slides
    }

    /// Total slide count, clones included
    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects empty sources
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Style sink
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable style sink
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Index of the first visible slide
    #[inline]
    pub fn current_item(&self) -> usize {
        self.current_item
    }

    /// Viewport is below the mobile breakpoint
    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Effective visible count (1 on mobile)
    #[inline]
    pub fn slides_visible(&self) -> usize {
        if self.is_mobile {
            1
        } else {
            self.config.slides_visible as usize
        }
    }

    /// Effective scroll step (1 on mobile)
    #[inline]
    pub fn slides_to_scroll(&self) -> usize {
        if self.is_mobile {
            1
        } else {
            self.config.slides_to_scroll as usize
        }
    }

    /// Check if a drag gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Next auto-scroll time, if running
    #[inline]
    pub fn auto_scroll_deadline(&self) -> Option<f64> {
        self.auto_scroll.deadline()
    }

    /// Translation of the settled position, in percent of the track
    pub fn settled_percent(&self) -> f64 {
        translate_percent(self.current_item, self.slides.len())
    }

    /// Page layout, when pagination is enabled
    pub fn pagination(&self) -> Option<Pagination> {
        self.config.pagination.then(|| {
            Pagination::new(
                self.slides.source_len(),
                self.config.slides_to_scroll as usize,
                self.slides.padding(),
            )
        })
    }

    /// Snapshot of the current position
    pub fn move_event(&self) -> MoveEvent {
        MoveEvent {
            index: self.current_item,
            len: self.slides.len(),
            slides_visible: self.slides_visible(),
            padding: self.slides.padding(),
            looping: self.config.looping,
        }
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register a callback invoked after every committed move
    pub fn on_move<F>(&mut self, callback: F)
    where
        F: FnMut(&MoveEvent) + 'static,
    {
        self.subscribers.subscribe(Box::new(callback));
    }

    /// Number of move callbacks
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Re-broadcast the current position to every subscriber
    pub fn refresh(&mut self) {
        self.notify();
    }

    pub(crate) fn notify(&mut self) {
        let event = self.move_event();
        self.subscribers.emit(&event);
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Size the track and its items so `slides_visible` items fill the viewport
    pub fn set_style(&mut self) {
        let layout = TrackLayout::compute(self.slides.len(), self.slides_visible());
        self.surface.set_track_width(layout.track_width);
        self.surface.set_item_width(layout.item_width);
    }

    /// Recompute the breakpoint for a new viewport width
    ///
    /// When the mobile flag changes, the layout is recomputed and subscribers
    /// are re-notified with the unchanged index. Returns whether it changed.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let mobile = viewport_width < MOBILE_BREAKPOINT_PX;
        if mobile == self.is_mobile {
            return false;
        }
        self.is_mobile = mobile;
        tracing::debug!(mobile, viewport_width, "carousel breakpoint changed");
        self.set_style();
        self.notify();
        true
    }

    /// Stop the auto-scroll, drop any gesture and release every subscriber
    pub fn shutdown(&mut self) {
        self.auto_scroll.cancel();
        if self.drag.release().is_some() {
            self.surface.set_transition(true);
        }
        self.subscribers.clear();
    }
}

impl<T, S: Surface + std::fmt::Debug> std::fmt::Debug for Carousel<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("current_item", &self.current_item)
            .field("len", &self.slides.len())
            .field("is_mobile", &self.is_mobile)
            .field("surface", &self.surface)
            .finish()
    }
}
