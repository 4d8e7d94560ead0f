//! Event listener registration with explicit disposal
//!
//! Every listener a widget attaches is recorded with its target so the whole
//! set can be detached at once, whether on `destroy()` or on drop.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// A registered listener and the closure backing it
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Listeners owned by one widget
#[derive(Default)]
pub(crate) struct ListenerSet {
    entries: Vec<Listener>,
}

impl ListenerSet {
    pub(crate) fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Attach `handler` to `target` for events of type `kind`
    pub(crate) fn listen<F>(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        handler: F,
    ) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        self.entries.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }

    /// Number of attached listeners
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Detach every listener and free its closure
    pub(crate) fn dispose(&mut self) {
        for listener in self.entries.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.dispose();
    }
}
