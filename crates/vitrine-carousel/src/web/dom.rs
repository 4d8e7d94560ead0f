//! DOM construction and the element-backed surface

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::surface::Surface;
use super::console;

/// Class names of the generated hierarchy
pub(crate) mod class {
    pub const ROOT: &str = "carousel";
    pub const TRACK: &str = "carousel__container";
    pub const ITEM: &str = "carousel__item";
    pub const NEXT: &str = "carousel__next";
    pub const PREV: &str = "carousel__prev";
    pub const NEXT_HIDDEN: &str = "carousel__next--hidden";
    pub const PREV_HIDDEN: &str = "carousel__prev--hidden";
    pub const PAGINATION: &str = "carousel__pagination";
    pub const PAGE: &str = "carousel__pagination__button";
    pub const PAGE_ACTIVE: &str = "carousel__pagination__button--active";
}

/// Current document
pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Create a `div` with the given class
pub(crate) fn div_with_class(
    document: &Document,
    class_name: &str,
) -> Result<HtmlElement, JsValue> {
    let div = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    div.set_attribute("class", class_name)?;
    Ok(div)
}

/// Create a labelled `button` with the given class
pub(crate) fn button_with_label(
    document: &Document,
    class_name: &str,
    label: &str,
) -> Result<HtmlElement, JsValue> {
    let button = document.create_element("button")?.dyn_into::<HtmlElement>()?;
    button.set_attribute("class", class_name)?;
    button.set_attribute("aria-label", label)?;
    button.set_text_content(Some(label));
    Ok(button)
}

/// Element children of `element`, in order
pub(crate) fn element_children(element: &Element) -> Vec<Element> {
    let children = element.children();
    (0..children.length()).filter_map(|i| children.item(i)).collect()
}

/// Deep copy of a slide for infinite padding
pub(crate) fn deep_clone(slide: &Element) -> Result<Element, JsValue> {
    slide.clone_node_with_deep(true)?.dyn_into::<Element>().map_err(JsValue::from)
}

/// Add or remove a class
pub(crate) fn set_class(element: &Element, class_name: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class_name, on);
}

/// Surface writing styles onto the track element and its items
#[derive(Debug)]
pub struct DomSurface {
    track: HtmlElement,
    items: Vec<HtmlElement>,
}

impl DomSurface {
    /// Bind the track. Items are bound once their wrappers exist.
    pub fn new(track: HtmlElement) -> Self {
        Self {
            track,
            items: Vec::new(),
        }
    }

    /// Bind every item wrapper (clones included), in track order
    pub fn bind_items(&mut self, items: Vec<HtmlElement>) {
        self.items = items;
    }

    /// Number of bound item wrappers
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    fn write(element: &HtmlElement, property: &str, value: &str) {
        if let Err(e) = element.style().set_property(property, value) {
            console::error(&format!("[carousel] failed to set {}: {:?}", property, e));
        }
    }
}

impl Surface for DomSurface {
    fn set_track_width(&mut self, percent: f64) {
        Self::write(&self.track, "width", &format!("{}%", percent));
    }

    fn set_item_width(&mut self, percent: f64) {
        let width = format!("{}%", percent);
        for item in &self.items {
            Self::write(item, "width", &width);
        }
    }

    fn translate(&mut self, percent: f64) {
        Self::write(&self.track, "transform", &format!("translate3d({}%, 0, 0)", percent));
    }

    fn set_transition(&mut self, enabled: bool) {
        if enabled {
            let _ = self.track.style().remove_property("transition");
        } else {
            Self::write(&self.track, "transition", "none");
        }
    }

    fn flush_layout(&mut self) {
        // Reading a layout property forces the pending writes to apply
        let _ = self.track.offset_height();
    }
}
