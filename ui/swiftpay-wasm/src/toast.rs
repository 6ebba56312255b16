//! Toast notifications.
//!
//! The container is created on first use and reused afterwards; each toast
//! removes its own node once the framework has finished hiding it.

use sp_ui_core::toast::{BODY_CLASS, CLOSE_BUTTON_CLASS, CONTAINER_CLASS, CONTAINER_Z_INDEX, Severity};
use sp_ui_core::{Component, UiError, Widgets};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::events;
use crate::state;
use crate::widgets::{Bootstrap, TOAST_HIDDEN_EVENT};

pub fn show_toast(message: &str, severity: Severity) -> Result<(), UiError> {
    let container = toast_container()?;

    let toast = dom::create_element("div")?;
    toast.set_class_name(&severity.toast_class_name());
    set_attr(&toast, "role", "alert")?;

    let row = dom::create_element("div")?;
    row.set_class_name("d-flex");

    let body = dom::create_element("div")?;
    body.set_class_name(BODY_CLASS);
    body.set_text_content(Some(message));

    let close = dom::create_element("button")?;
    set_attr(&close, "type", "button")?;
    close.set_class_name(CLOSE_BUTTON_CLASS);
    set_attr(&close, "data-bs-dismiss", "toast")?;
    set_attr(&close, "aria-label", "Close")?;

    row.append_child(&body).map_err(dom::js_error)?;
    row.append_child(&close).map_err(dom::js_error)?;
    toast.append_child(&row).map_err(dom::js_error)?;
    container.append_child(&toast).map_err(dom::js_error)?;

    let node = toast.clone();
    let on_hidden = Closure::once_into_js(move || node.remove());
    toast
        .add_event_listener_with_callback(TOAST_HIDDEN_EVENT, on_hidden.unchecked_ref())
        .map_err(dom::js_error)?;

    Bootstrap.show_toast(&toast)
}

fn toast_container() -> Result<Element, UiError> {
    let id = state::config().toast_container_id;
    if let Some(existing) = dom::by_id(&id) {
        return Ok(existing);
    }

    let container: HtmlElement = dom::create_typed("div")?;
    container.set_id(&id);
    container.set_class_name(CONTAINER_CLASS);
    dom::set_style(&container, "z-index", CONTAINER_Z_INDEX);
    dom::body().append_child(&container).map_err(dom::js_error)?;

    let created = container.clone();
    events::on_teardown(Component::Toasts, move || created.remove());
    Ok(container.into())
}

fn set_attr(el: &Element, name: &str, value: &str) -> Result<(), UiError> {
    el.set_attribute(name, value).map_err(dom::js_error)
}
