//! Page bootstrap for Vitrine carousels
//!
//! Mounts a carousel on every element matching a selector. Options come from
//! the element's `data-carousel` attribute as JSON; an element without the
//! attribute gets the defaults. Mounted widgets are kept in a per-thread
//! registry so page scripts do not have to hold on to them.
//!
//! ```html
//! <div class="js-carousel" data-carousel='{"slidesVisible": 3, "pagination": true}'>
//!   <img src="a.jpg"><img src="b.jpg"><img src="c.jpg"><img src="d.jpg">
//! </div>
//! <script type="module">
//!   import init, { mountCarousels } from "./vitrine_web.js";
//!   await init();
//!   mountCarousels(".js-carousel");
//! </script>
//! ```

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub use vitrine_carousel::web::{parse_options, CarouselWidget};
use vitrine_carousel::CarouselConfig;

/// Attribute holding a carousel's JSON options
pub const OPTIONS_ATTRIBUTE: &str = "data-carousel";

thread_local! {
    static MOUNTED: RefCell<Vec<CarouselWidget>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str, value: &JsValue);
}

/// Options for one element, from its `data-carousel` attribute
pub fn element_options(element: &HtmlElement) -> Result<CarouselConfig, JsValue> {
    let config = match element.get_attribute(OPTIONS_ATTRIBUTE) {
        Some(json) if !json.trim().is_empty() => CarouselConfig::from_json(&json)?,
        _ => parse_options(&JsValue::UNDEFINED)?,
    };
    Ok(config)
}

/// Mount a carousel on every element matching `selector`
///
/// Elements that fail to mount are reported on the console and skipped.
/// Returns how many carousels were mounted.
#[wasm_bindgen(js_name = mountCarousels)]
pub fn mount_carousels(selector: &str) -> Result<u32, JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let nodes = document.query_selector_all(selector)?;

    let mut mounted = 0;
    for i in 0..nodes.length() {
        let element = match nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            Some(element) => element,
            None => continue,
        };
        let widget = element_options(&element)
            .and_then(|config| CarouselWidget::mount(element.clone(), config));
        match widget {
            Ok(widget) => {
                MOUNTED.with(|m| m.borrow_mut().push(widget));
                mounted += 1;
            }
            Err(e) => console_error("[carousel] failed to mount:", &e),
        }
    }
    Ok(mounted)
}

/// Destroy every carousel mounted by [`mount_carousels`]
#[wasm_bindgen(js_name = unmountCarousels)]
pub fn unmount_carousels() -> u32 {
    let widgets = MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    let count = widgets.len() as u32;
    for mut widget in widgets {
        widget.destroy();
    }
    count
}

/// Number of carousels currently mounted
#[wasm_bindgen(js_name = mountedCount)]
pub fn mounted_count() -> u32 {
    MOUNTED.with(|m| m.borrow().len() as u32)
}
