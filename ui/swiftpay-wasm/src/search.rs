//! Debounced auto-submit for search boxes.

use sp_ui_core::validation::search_ready;
use sp_ui_core::{Component, Debounced, UiError};
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

use crate::dom;
use crate::events;
use crate::state;
use crate::timers::BrowserScheduler;

const SEARCH_INPUTS: &str = ".search-input";

pub fn init() -> Result<(), UiError> {
    let config = state::config();
    for input in dom::query_all_typed::<HtmlInputElement>(SEARCH_INPUTS) {
        let field = input.clone();
        let min_len = config.search_min_len;
        let debounced = Debounced::new(BrowserScheduler, config.debounce_ms, move |query: String| {
            perform_search(&query, &field, min_len)
        });

        let pending = debounced.clone();
        events::on_teardown(Component::Search, move || pending.cancel());

        let source = input.clone();
        events::listen(Component::Search, &input, "input", move |_| {
            debounced.call(source.value())
        })?;
    }
    Ok(())
}

/// Submit the input's form once the query is long enough. Inputs outside a
/// form are ignored.
pub fn perform_search(query: &str, input: &HtmlInputElement, min_len: usize) {
    if !search_ready(query, min_len) {
        return;
    }
    let Some(form) = dom::closest(input, "form").and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    if let Err(err) = form.submit() {
        gloo_console::warn!("swiftpay: search submit failed:", err);
    }
}
