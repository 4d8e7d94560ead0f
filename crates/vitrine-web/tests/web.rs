//! Browser tests for carousel mounting
//!
//! Run with `wasm-pack test --headless --firefox crates/vitrine-web`.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use vitrine_web::{mount_carousels, mounted_count, unmount_carousels, CarouselWidget};

wasm_bindgen_test_configure!(run_in_browser);

fn host(id: &str, slides: usize, options: Option<&str>) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap().dyn_into::<HtmlElement>().unwrap();
    host.set_id(id);
    host.set_class_name("js-carousel");
    if let Some(options) = options {
        host.set_attribute("data-carousel", options).unwrap();
    }
    for i in 0..slides {
        let slide = document.create_element("p").unwrap();
        slide.set_text_content(Some(&format!("slide {}", i)));
        host.append_child(&slide).unwrap();
    }
    document.body().unwrap().append_child(&host).unwrap();
    host
}

#[wasm_bindgen_test]
fn test_mount_builds_hierarchy() {
    let element = host("plain", 4, None);
    let widget = CarouselWidget::mount(element.clone(), Default::default()).unwrap();

    assert_eq!(element.query_selector_all(".carousel__item").unwrap().length(), 4);
    assert!(element.query_selector(".carousel__container").unwrap().is_some());
    assert!(element.query_selector(".carousel__prev--hidden").unwrap().is_some());
    assert!(element.query_selector(".carousel__next--hidden").unwrap().is_none());
    assert!(widget.listener_count() > 0);

    widget.next();
    assert_eq!(widget.current_item(), 1);
    assert!(element.query_selector(".carousel__prev--hidden").unwrap().is_none());
    element.remove();
}

#[wasm_bindgen_test]
fn test_infinite_mount_clones_slides() {
    let element = host("infinite", 3, None);
    let config = vitrine_carousel::CarouselConfig {
        infinite: true,
        pagination: true,
        ..Default::default()
    };
    let widget = CarouselWidget::mount(element.clone(), config).unwrap();

    assert_eq!(element.query_selector_all(".carousel__item").unwrap().length(), 7);
    assert_eq!(element.query_selector_all(".carousel__pagination__button").unwrap().length(), 3);
    assert_eq!(widget.current_item(), 2);
    element.remove();
}

#[wasm_bindgen_test]
fn test_move_callback_reads_and_navigates() {
    let element = host("reentrant", 4, None);
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
    assert!(widget.state_json().contains("\"index\":0"));

    drop(callback);
    element.remove();
}

#[wasm_bindgen_test]
fn test_destroy_detaches_listeners() {
    let element = host("destroyed", 3, None);
    let mut widget = CarouselWidget::mount(element.clone(), Default::default()).unwrap();
    widget.destroy();
    assert_eq!(widget.listener_count(), 0);
    element.remove();
}

#[wasm_bindgen_test]
fn test_bootstrap_reads_data_attribute() {
    let good = host("good", 3, Some(r#"{"loop": true}"#));
    let bad = host("bad", 3, Some(r#"{"loop": true, "infinite": true}"#));

    assert_eq!(mount_carousels(".js-carousel").unwrap(), 1);
    assert_eq!(mounted_count(), 1);
    assert!(good.query_selector(".carousel").unwrap().is_some());
    assert!(bad.query_selector(".carousel").unwrap().is_none());

    assert_eq!(unmount_carousels(), 1);
    assert_eq!(mounted_count(), 0);
    good.remove();
    bad.remove();
}
