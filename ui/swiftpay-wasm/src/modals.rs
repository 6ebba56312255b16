//! Modal niceties: focus the first field on open, reset the form on close.

use gloo_timers::future::TimeoutFuture;
use sp_ui_core::validation::WAS_VALIDATED_CLASS;
use sp_ui_core::{Component, UiError};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement};

use crate::dom;
use crate::events;
use crate::state;
use crate::widgets::{MODAL_HIDDEN_EVENT, MODAL_SHOW_EVENT};

const MODALS: &str = ".modal";
const FIRST_FIELD: &str = r#"input:not([type="hidden"]):not([disabled])"#;

pub fn init() -> Result<(), UiError> {
    let focus_delay = state::config().modal_focus_ms;
    for modal in dom::query_all(MODALS) {
        let opened = modal.clone();
        events::listen(Component::Modals, &modal, MODAL_SHOW_EVENT, move |_| {
            let Some(field) = dom::query_within(&opened, FIRST_FIELD)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            // The modal is still animating in; focus once it can take it.
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(focus_delay).await;
                let _ = field.focus();
            });
        })?;

        let closed = modal.clone();
        events::listen(Component::Modals, &modal, MODAL_HIDDEN_EVENT, move |_| {
            if let Some(form) = dom::query_within(&closed, "form")
                .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
            {
                form.reset();
                dom::remove_class(&form, WAS_VALIDATED_CLASS);
            }
        })?;
    }
    Ok(())
}
