//! Busy state for submit buttons.

use sp_ui_core::feedback::LOADING_CLASS;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::dom;
use crate::state;
use crate::timers;

pub fn show_button_loading(button: &HtmlElement) {
    dom::add_class(button, LOADING_CLASS);
    set_disabled(button, true);
}

pub fn hide_button_loading(button: &HtmlElement) {
    dom::remove_class(button, LOADING_CLASS);
    set_disabled(button, false);
}

/// Put `button` into its busy state and submit `form` after the configured
/// delay. A failed submit releases the button again.
pub fn submit_form_with_loading(form: HtmlFormElement, button: HtmlElement) {
    show_button_loading(&button);
    timers::after(state::config().loading_submit_ms, move || {
        if let Err(err) = form.submit() {
            gloo_console::warn!("swiftpay: form submit failed:", err);
            hide_button_loading(&button);
        }
    });
}

fn set_disabled(el: &HtmlElement, disabled: bool) {
    if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_disabled(disabled);
    } else if disabled {
        let _ = el.set_attribute("disabled", "");
    } else {
        let _ = el.remove_attribute("disabled");
    }
}
