//! SwiftPay WASM front-end layer
//!
//! Enhances the server-rendered SwiftPay pages: tooltips, alert dismissal,
//! live field validation, copy buttons, confirmations, toasts, navigation,
//! debounced search and modal niceties. Each concern lives in its own module
//! and registers its listeners under a `Component` key.

pub mod bridge;
pub mod clipboard;
pub mod confirm;
pub mod dom;
pub mod events;
pub mod loading;
pub mod modals;
pub mod navigation;
pub mod search;
pub mod state;
pub mod timers;
pub mod toast;
pub mod validation;
pub mod widgets;

use sp_ui_core::{Component, UiError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    let document = dom::document();
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(init);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        init();
    }
    Ok(())
}

fn init() {
    state::set_config(state::load_config());
    mount_components();
}

type Initializer = fn() -> Result<(), UiError>;

const INITIALIZERS: [(Component, Initializer); 9] = [
    (Component::Tooltips, widgets::init_tooltips),
    (Component::Alerts, widgets::init_alerts),
    (Component::FormValidation, validation::init),
    (Component::Clipboard, clipboard::init),
    (Component::NumberFormatting, validation::init_number_formatting),
    (Component::Confirmations, confirm::init),
    (Component::Navigation, navigation::init),
    (Component::Search, search::init),
    (Component::Modals, modals::init),
];

/// Wire every component. One component failing (e.g. the framework bundle
/// is missing) does not stop the others.
pub(crate) fn mount_components() {
    for (component, initialize) in INITIALIZERS {
        match initialize() {
            Ok(()) => gloo_console::debug!(format!(
                "swiftpay: {component} wired ({} listeners)",
                events::listener_count(component)
            )),
            Err(err) => {
                // Drop whatever the component managed to attach before failing.
                events::teardown(component);
                gloo_console::warn!(format!("swiftpay: {component} not wired: {err}"));
            }
        }
    }
}
