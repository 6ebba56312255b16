//! DOM helpers.
//!
//! Thin wrappers over `web_sys` so the handlers read like the markup they
//! touch. Selector lookups never fail loudly: a bad or absent match is `None`
//! or an empty list.

use sp_ui_core::UiError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Window};

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> Window {
    gloo_utils::window()
}

pub fn body() -> HtmlElement {
    gloo_utils::body()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nl) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Like `query_all`, keeping only nodes of the requested element type.
pub fn query_all_typed<T: JsCast>(selector: &str) -> Vec<T> {
    query_all(selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<T>().ok())
        .collect()
}

pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok()?
}

/// The element an event was dispatched to, if it is one.
pub fn event_target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn create_element(tag: &str) -> Result<Element, UiError> {
    document().create_element(tag).map_err(js_error)
}

pub fn create_typed<T: JsCast>(tag: &str) -> Result<T, UiError> {
    create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| UiError::Dom(format!("<{tag}> has an unexpected type")))
}

/// `value` property of any form-ish element, if it has a non-empty one.
pub fn value_of(el: &Element) -> Option<String> {
    js_sys::Reflect::get(el, &JsValue::from_str("value"))
        .ok()?
        .as_string()
        .filter(|v| !v.is_empty())
}

/// Human-readable rendering of a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub fn js_error(value: JsValue) -> UiError {
    UiError::Dom(describe(&value))
}

pub fn to_js(err: UiError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
