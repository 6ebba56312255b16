//! Event subscription registry.
//!
//! Every listener the UI layer attaches goes through `listen`, keyed by the
//! component that owns it, so a component (or the whole layer) can be torn
//! down again. Dropping a `Subscription` detaches its listener or runs its
//! cleanup.

use sp_ui_core::{Component, Registry, UiError};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::dom;

pub enum Subscription {
    Listener {
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    },
    Cleanup(Option<Box<dyn FnOnce()>>),
}

impl Drop for Subscription {
    fn drop(&mut self) {
        match self {
            Subscription::Listener {
                target,
                event,
                callback,
            } => {
                let _ = target
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
            Subscription::Cleanup(cleanup) => {
                if let Some(cleanup) = cleanup.take() {
                    cleanup();
                }
            }
        }
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry<Subscription>> = RefCell::new(Registry::new());
}

/// Attach `handler` to `target` for `event`, owned by `component`.
pub fn listen(
    component: Component,
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), UiError> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(dom::js_error)?;
    REGISTRY.with(|r| {
        r.borrow_mut().register(
            component,
            Subscription::Listener {
                target: target.clone(),
                event,
                callback,
            },
        )
    });
    Ok(())
}

/// Run `cleanup` when `component` is torn down.
pub fn on_teardown(component: Component, cleanup: impl FnOnce() + 'static) {
    REGISTRY.with(|r| {
        r.borrow_mut()
            .register(component, Subscription::Cleanup(Some(Box::new(cleanup))))
    });
}

pub fn listener_count(component: Component) -> usize {
    REGISTRY.with(|r| r.borrow().count(component))
}

pub fn teardown(component: Component) {
    // Handles are dropped outside the borrow so cleanups may touch the registry.
    let handles = REGISTRY.with(|r| r.borrow_mut().teardown(component));
    drop(handles);
}

pub fn teardown_all() {
    let handles = REGISTRY.with(|r| r.borrow_mut().teardown_all());
    drop(handles);
}
