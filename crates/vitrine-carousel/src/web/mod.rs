//! WASM exports for the carousel
//!
//! This module builds the carousel's DOM hierarchy around a host element,
//! wires browser events into the [`Carousel`] engine and exposes the result
//! to page scripts as the JS class `Carousel`.
//!
//! ## Structure
//!
//! ```text
//! host
//! └── div.carousel[tabindex=0]
//!     ├── div.carousel__container[aria-live=polite]
//!     │   └── div.carousel__item[role=listitem]  (one per slide, clones included)
//!     ├── button.carousel__next / button.carousel__prev
//!     └── div.carousel__pagination
//!         └── div.carousel__pagination__button   (one per page)
//! ```
//!
//! The engine is shared with event closures as `Rc<Shared>`; closures hold
//! only `Weak` references, so dropping the widget frees everything.
//!
//! Page callbacks registered with `onMove` never run inside an engine
//! borrow. The engine queues its moves and [`Shared::with_engine`] delivers
//! them once the borrow is released, so a callback may read `currentItem` or
//! navigate again.

mod console;
mod dom;
mod listeners;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent, Window,
};

use crate::config::CarouselConfig;
use crate::controls::NavigationState;
use crate::engine::Carousel;
use crate::error::CarouselError;
use crate::events::MoveEvent;
use crate::input::{InputResult, PointerSample};

pub use dom::DomSurface;
use dom::class;
use listeners::ListenerSet;

type Engine = Carousel<Element, DomSurface>;

impl From<CarouselError> for JsValue {
    fn from(e: CarouselError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

/// Parse an options value from JS: undefined/null, a JSON string or a plain object
pub fn parse_options(options: &JsValue) -> Result<CarouselConfig, CarouselError> {
    if options.is_undefined() || options.is_null() {
        let config = CarouselConfig::default();
        config.validate()?;
        return Ok(config);
    }
    if let Some(json) = options.as_string() {
        return CarouselConfig::from_json(&json);
    }
    let json = js_sys::JSON::stringify(options)
        .map_err(|_| CarouselError::InvalidOptions("options are not serializable".to_string()))?;
    CarouselConfig::from_json(&String::from(json))
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

fn mouse_sample(event: &Event) -> PointerSample {
    let mouse = event.unchecked_ref::<MouseEvent>();
    PointerSample::mouse(f64::from(mouse.screen_x()), f64::from(mouse.screen_y()))
}

fn touch_sample(event: &Event) -> Option<PointerSample> {
    let touches = event.unchecked_ref::<TouchEvent>().touches();
    let first = touches.get(0)?;
    Some(PointerSample::touch(
        f64::from(first.screen_x()),
        f64::from(first.screen_y()),
        touches.length(),
    ))
}

/// State shared between the widget and its event closures
struct Shared {
    engine: RefCell<Engine>,
    root: HtmlElement,
    track: HtmlElement,
    /// Moves committed by the engine and not yet delivered to page callbacks
    pending: Rc<RefCell<Vec<MoveEvent>>>,
    /// Page callbacks registered through `onMove`
    callbacks: RefCell<Vec<js_sys::Function>>,
    /// Pending auto-scroll timeout handle
    timer: RefCell<Option<i32>>,
    /// Callback behind the auto-scroll timeout
    timer_callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Shared {
    /// Run one engine operation, then hand its moves to page callbacks
    fn with_engine<R>(&self, op: impl FnOnce(&mut Engine) -> R) -> R {
        let result = op(&mut *self.engine.borrow_mut());
        self.deliver_moves();
        result
    }

    fn deliver_moves(&self) {
        let events = std::mem::take(&mut *self.pending.borrow_mut());
        if events.is_empty() {
            return;
        }
        let callbacks = self.callbacks.borrow().clone();
        for event in events {
            let index = JsValue::from(event.index as u32);
            for callback in &callbacks {
                if let Err(e) = callback.call1(&JsValue::NULL, &index) {
                    console::error(&format!("[carousel] move callback failed: {:?}", e));
                }
            }
        }
    }

    fn next(&self) {
        self.with_engine(|engine| engine.next(js_sys::Date::now()));
        self.sync_timer();
    }

    fn prev(&self) {
        self.with_engine(|engine| engine.prev(js_sys::Date::now()));
        self.sync_timer();
    }

    fn go_to_page(&self, page: usize) {
        self.with_engine(|engine| engine.go_to_page(page));
    }

    fn resize(&self) {
        let width = viewport_width();
        self.with_engine(|engine| engine.resize(width));
    }

    fn key_up(&self, key: &str) {
        let now = js_sys::Date::now();
        let result = self.with_engine(|engine| engine.handle_key(key, now));
        if result.is_handled() {
            self.sync_timer();
        }
    }

    fn pointer_down(&self, sample: PointerSample) {
        let width = f64::from(self.track.offset_width());
        self.with_engine(|engine| engine.handle_pointer_down(sample, width));
    }

    fn pointer_move(&self, sample: PointerSample) -> InputResult {
        self.with_engine(|engine| engine.handle_pointer_move(sample))
    }

    fn pointer_up(&self) {
        let width = f64::from(self.root.offset_width());
        let now = js_sys::Date::now();
        let result = self.with_engine(|engine| engine.handle_pointer_up(width, now));
        if let InputResult::Navigated { .. } = result {
            self.sync_timer();
        }
    }

    fn transition_end(&self) {
        self.with_engine(|engine| engine.on_transition_end());
    }

    fn tick(&self) {
        self.with_engine(|engine| engine.tick(js_sys::Date::now()));
        self.sync_timer();
    }

    /// Mirror the engine's auto-scroll deadline with a single timeout
    fn sync_timer(&self) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        if let Some(handle) = self.timer.borrow_mut().take() {
            window.clear_timeout_with_handle(handle);
        }

        let deadline = match self.engine.borrow().auto_scroll_deadline() {
            Some(d) => d,
            None => return,
        };
        let delay = (deadline - js_sys::Date::now()).max(0.0).ceil() as i32;

        let callback = self.timer_callback.borrow();
        let callback = match callback.as_ref() {
            Some(c) => c,
            None => return,
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(handle) => *self.timer.borrow_mut() = Some(handle),
            Err(e) => {
                console::error(&format!("[carousel] failed to schedule auto-scroll: {:?}", e))
            }
        }
    }

    fn cancel_timer(&self) {
        if let Some(handle) = self.timer.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
        self.timer_callback.borrow_mut().take();
    }
}

/// Carousel widget for page scripts
#[wasm_bindgen(js_name = Carousel)]
pub struct CarouselWidget {
    shared: Rc<Shared>,
    listeners: ListenerSet,
}

#[wasm_bindgen(js_class = Carousel)]
impl CarouselWidget {
    /// Build a carousel inside `element` from an options object or JSON string
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement, options: JsValue) -> Result<CarouselWidget, JsValue> {
        let config = parse_options(&options)?;
        Self::mount(element, config)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Advance by one scroll step
    #[wasm_bindgen]
    pub fn next(&self) {
        self.shared.next();
    }

    /// Go back by one scroll step
    #[wasm_bindgen]
    pub fn prev(&self) {
        self.shared.prev();
    }

    /// Move to a slide index (clones included), animated
    #[wasm_bindgen(js_name = goToItem)]
    pub fn go_to_item(&self, index: i32) -> bool {
        self.shared.with_engine(|engine| engine.go_to_item(index as isize, true))
    }

    /// Index of the first visible slide
    #[wasm_bindgen(getter, js_name = currentItem)]
    pub fn current_item(&self) -> u32 {
        self.shared.engine.borrow().current_item() as u32
    }

    /// Current position as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        let event = self.shared.engine.borrow().move_event();
        serde_json::to_string(&event).unwrap_or_else(|_| "{}".to_string())
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Call `callback(index)` after every committed move
    #[wasm_bindgen(js_name = onMove)]
    pub fn on_move(&self, callback: js_sys::Function) {
        self.shared.callbacks.borrow_mut().push(callback);
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Detach every listener and stop the auto-scroll timer
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.listeners.dispose();
        self.shared.cancel_timer();
        self.shared.engine.borrow_mut().shutdown();
        self.shared.callbacks.borrow_mut().clear();
        self.shared.pending.borrow_mut().clear();
    }
}

impl CarouselWidget {
    /// Build a carousel inside `element` from a validated configuration
    ///
    /// The host is left untouched until the engine and every wrapper exist.
    pub fn mount(
        element: HtmlElement,
        config: CarouselConfig,
    ) -> Result<CarouselWidget, JsValue> {
        config.validate()?;
        let slides = dom::element_children(&element);
        if slides.is_empty() {
            return Err(CarouselError::NoSlides.into());
        }

        let document = dom::document()?;
        let root = dom::div_with_class(&document, class::ROOT)?;
        root.set_attribute("tabindex", "0")?;
        let track = dom::div_with_class(&document, class::TRACK)?;
        track.set_attribute("aria-live", "polite")?;

        let mut clone_error = None;
        let surface_track = track.clone();
        let mut engine = Carousel::new(
            config,
            slides,
            |slide: &Element| match dom::deep_clone(slide) {
                Ok(copy) => copy,
                Err(e) => {
                    clone_error.get_or_insert(e);
                    slide.clone()
                }
            },
            |_| DomSurface::new(surface_track),
            viewport_width(),
            js_sys::Date::now(),
        )?;
        if let Some(e) = clone_error {
            return Err(e);
        }

        let items = engine
            .slides()
            .iter()
            .map(|_| {
                let item = dom::div_with_class(&document, class::ITEM)?;
                item.set_attribute("role", "listitem")?;
                Ok(item)
            })
            .collect::<Result<Vec<HtmlElement>, JsValue>>()?;

        // Slides leave the host only now
        for (item, slide) in items.iter().zip(engine.slides()) {
            item.append_child(slide)?;
            track.append_child(item)?;
        }
        engine.surface_mut().bind_items(items);
        engine.set_style();
        if engine.slides().shortfall() > 0 {
            console::warn_with_value("not enough elements in the carousel", &element);
        }

        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pending);
        engine.on_move(move |event| sink.borrow_mut().push(*event));

        root.append_child(&track)?;
        element.append_child(&root)?;

        let shared = Rc::new(Shared {
            engine: RefCell::new(engine),
            root,
            track,
            pending,
            callbacks: RefCell::new(Vec::new()),
            timer: RefCell::new(None),
            timer_callback: RefCell::new(None),
        });

        let mut widget = CarouselWidget {
            shared,
            listeners: ListenerSet::new(),
        };
        widget.build_controls(&document)?;
        widget.shared.with_engine(|engine| engine.refresh());
        widget.attach_listeners()?;
        widget.start_timer();
        Ok(widget)
    }

    /// Number of browser listeners currently attached
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn build_controls(&mut self, document: &Document) -> Result<(), JsValue> {
        let config = self.shared.engine.borrow().config().clone();
        if config.navigation {
            self.build_navigation(document, &config)?;
        }
        let pages = self.shared.engine.borrow().pagination();
        if let Some(pages) = pages {
            let container = dom::div_with_class(document, class::PAGINATION)?;
            self.shared.root.append_child(&container)?;

            let mut buttons = Vec::with_capacity(pages.page_count());
            for page in 0..pages.page_count() {
                let button = dom::div_with_class(document, class::PAGE)?;
                container.append_child(&button)?;
                let weak = Rc::downgrade(&self.shared);
                self.listeners.listen(&button, "click", true, move |_| {
                    if let Some(shared) = weak.upgrade() {
                        shared.go_to_page(page);
                    }
                })?;
                buttons.push(button);
            }

            self.shared.engine.borrow_mut().on_move(move |event| {
                if let Some(active) = pages.active_page(event) {
                    for (page, button) in buttons.iter().enumerate() {
                        dom::set_class(button, class::PAGE_ACTIVE, page == active);
                    }
                }
            });
        }
        Ok(())
    }

    fn build_navigation(
        &mut self,
        document: &Document,
        config: &CarouselConfig,
    ) -> Result<(), JsValue> {
        let next = dom::button_with_label(document, class::NEXT, &config.next_label)?;
        let prev = dom::button_with_label(document, class::PREV, &config.prev_label)?;
        self.shared.root.append_child(&next)?;
        self.shared.root.append_child(&prev)?;

        let weak = Rc::downgrade(&self.shared);
        self.listeners.listen(&next, "click", true, move |_| {
            if let Some(shared) = weak.upgrade() {
                shared.next();
            }
        })?;
        let weak = Rc::downgrade(&self.shared);
        self.listeners.listen(&prev, "click", true, move |_| {
            if let Some(shared) = weak.upgrade() {
                shared.prev();
            }
        })?;

        if config.looping {
            return Ok(());
        }
        self.shared.engine.borrow_mut().on_move(move |event| {
            let state = NavigationState::from_move(event);
            dom::set_class(&prev, class::PREV_HIDDEN, state.prev_hidden);
            dom::set_class(&next, class::NEXT_HIDDEN, state.next_hidden);
        });
        Ok(())
    }

    fn attach_listeners(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
        let config = self.shared.engine.borrow().config().clone();
        let root = self.shared.root.clone();
        let track = self.shared.track.clone();

        let weak = Rc::downgrade(&self.shared);
        self.listeners.listen(&window, "resize", true, move |_| {
            if let Some(shared) = weak.upgrade() {
                shared.resize();
            }
        })?;

        let weak = Rc::downgrade(&self.shared);
        self.listeners.listen(&root, "keyup", false, move |event| {
            if let Some(shared) = weak.upgrade() {
                shared.key_up(&event.unchecked_ref::<KeyboardEvent>().key());
            }
        })?;

        if config.infinite {
            let weak = Rc::downgrade(&self.shared);
            self.listeners.listen(&track, "transitionend", true, move |_| {
                if let Some(shared) = weak.upgrade() {
                    shared.transition_end();
                }
            })?;
        }

        if config.drag {
            self.attach_drag(&window, &track)?;
        }
        Ok(())
    }

    fn attach_drag(&mut self, window: &Window, track: &HtmlElement) -> Result<(), JsValue> {
        self.listeners.listen(track, "dragstart", false, |event| event.prevent_default())?;

        let weak = Rc::downgrade(&self.shared);
        self.listeners.listen(track, "mousedown", true, move |event| {
            if let Some(shared) = weak.upgrade() {
                shared.pointer_down(mouse_sample(&event));
            }
        })?;
        let weak = Rc::downgrade(&self.shared);
        self.listeners.listen(track, "touchstart", true, move |event| {
            if let (Some(shared), Some(sample)) = (weak.upgrade(), touch_sample(&event)) {
                shared.pointer_down(sample);
            }
        })?;

        let weak = Rc::downgrade(&self.shared);
        self.listeners.listen(window, "mousemove", true, move |event| {
            if let Some(shared) = weak.upgrade() {
                shared.pointer_move(mouse_sample(&event));
            }
        })?;
        // Not passive: a horizontal swipe must keep the page from scrolling
        let weak = Rc::downgrade(&self.shared);
        self.listeners.listen(window, "touchmove", false, move |event| {
            if let (Some(shared), Some(sample)) = (weak.upgrade(), touch_sample(&event)) {
                if shared.pointer_move(sample).blocks_scroll() {
                    event.prevent_default();
                    event.stop_propagation();
                }
            }
        })?;

        for kind in ["mouseup", "touchend", "touchcancel"] {
            let weak = Rc::downgrade(&self.shared);
            self.listeners.listen(window, kind, true, move |_| {
                if let Some(shared) = weak.upgrade() {
                    shared.pointer_up();
                }
            })?;
        }
        Ok(())
    }

    fn start_timer(&self) {
        if !self.shared.engine.borrow().config().auto_scroll {
            return;
        }
        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.tick();
            }
        }) as Box<dyn FnMut()>);
        *self.shared.timer_callback.borrow_mut() = Some(callback);
        self.shared.sync_timer();
    }
}

impl Drop for CarouselWidget {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn host(slides: usize) -> HtmlElement {
        let document = dom::document().unwrap();
        let host = dom::div_with_class(&document, "host").unwrap();
        for i in 0..slides {
            let slide = document.create_element("p").unwrap();
            slide.set_text_content(Some(&format!("slide {}", i)));
            host.append_child(&slide).unwrap();
        }
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    #[wasm_bindgen_test]
    fn test_callback_may_reenter_widget() {
        let element = host(4);
        let widget = CarouselWidget::mount(element.clone(), Default::default()).unwrap();
        let widget = Rc::new(widget);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let bounced = Rc::new(Cell::new(false));
        let callback = {
            let widget = Rc::clone(&widget);
            let seen = Rc::clone(&seen);
            Closure::<dyn FnMut(u32)>::new(move |index: u32| {
                seen.borrow_mut().push((index, widget.current_item()));
                if !bounced.replace(true) {
                    widget.prev();
                }
            })
        };
        widget.on_move(callback.as_ref().unchecked_ref::<js_sys::Function>().clone());

        widget.next();
        assert_eq!(*seen.borrow(), vec![(1, 1), (0, 0)]);
        assert_eq!(widget.current_item(), 0);

        drop(callback);
        element.remove();
    }

    #[wasm_bindgen_test]
    fn test_invalid_mount_leaves_host_untouched() {
        let element = host(3);
        let config = CarouselConfig {
            looping: true,
            infinite: true,
            ..Default::default()
        };
        assert!(CarouselWidget::mount(element.clone(), config).is_err());
        assert_eq!(element.child_element_count(), 3);
        assert!(element.query_selector(".carousel").unwrap().is_none());
        element.remove();
    }

    #[wasm_bindgen_test]
    fn test_mount_wraps_every_slide() {
        let element = host(3);
        let config = CarouselConfig {
            infinite: true,
            ..Default::default()
        };
        let widget = CarouselWidget::mount(element.clone(), config).unwrap();

        assert_eq!(element.child_element_count(), 1);
        assert_eq!(element.query_selector_all(".carousel__item").unwrap().length(), 7);
        assert_eq!(widget.shared.engine.borrow().surface().item_count(), 7);
        element.remove();
    }
}
