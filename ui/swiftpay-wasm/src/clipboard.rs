//! Copy-to-clipboard buttons.
//!
//! Tries the async Clipboard API first (secure contexts only) and falls back
//! to a selection-based `execCommand("copy")` on an offscreen textarea. The
//! triggering button shows the outcome for `copy_feedback_ms`.

use js_sys::{Function, Promise, Reflect};
use sp_ui_core::feedback::{CopyFeedback, CopyOutcome, FeedbackTarget};
use sp_ui_core::{Component, UiError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlDocument, HtmlTextAreaElement};

use crate::dom;
use crate::events;
use crate::state;
use crate::timers;

const COPY_TRIGGER: &str = "[data-copy]";

/// One delegated click listener on the document serves every copy button,
/// including ones inserted after page load.
pub fn init() -> Result<(), UiError> {
    events::listen(Component::Clipboard, &dom::document(), "click", |event| {
        let Some(button) =
            dom::event_target_element(&event).and_then(|el| dom::closest(&el, COPY_TRIGGER))
        else {
            return;
        };
        let Some(target) = button
            .get_attribute("data-copy")
            .and_then(|id| dom::by_id(&id))
        else {
            return;
        };
        copy_to_clipboard(copy_source_text(&target), button);
    })
}

/// `value` when the element has a non-empty one, its text otherwise.
pub fn copy_source_text(el: &Element) -> String {
    dom::value_of(el).unwrap_or_else(|| el.text_content().unwrap_or_default())
}

pub fn copy_to_clipboard(text: String, button: Element) {
    let Some(pending) = clipboard_write(&text) else {
        fallback_copy(&text, &button);
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(pending).await {
            Ok(_) => show_copy_feedback(&button, CopyOutcome::Copied),
            Err(err) => {
                gloo_console::error!("Failed to copy: ", err);
                fallback_copy(&text, &button);
            }
        }
    });
}

/// `navigator.clipboard.writeText(text)`, or `None` when the API is absent,
/// the page is not a secure context, or the call throws synchronously.
fn clipboard_write(text: &str) -> Option<Promise> {
    let window = dom::window();
    if !window.is_secure_context() {
        return None;
    }
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .ok()
        .filter(|c| !c.is_undefined() && !c.is_null())?;
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .ok()?
        .dyn_into::<Promise>()
        .ok()
}

fn fallback_copy(text: &str, button: &Element) {
    let result = legacy_copy(text);
    if let Err(err) = &result {
        gloo_console::error!(format!("Fallback copy failed: {err}"));
    }
    show_copy_feedback(button, CopyOutcome::after_fallback(&result));
}

/// Whatever `execCommand("copy")` returned, or the error it threw.
fn legacy_copy(text: &str) -> Result<bool, UiError> {
    let area: HtmlTextAreaElement = dom::create_typed("textarea")?;
    area.set_value(text);
    dom::set_style(&area, "position", "fixed");
    dom::set_style(&area, "left", "-999999px");
    dom::set_style(&area, "top", "-999999px");

    let body = dom::body();
    body.append_child(&area).map_err(dom::js_error)?;
    let _ = area.focus();
    area.select();

    let copied = dom::document()
        .dyn_into::<HtmlDocument>()
        .map_err(|_| UiError::Clipboard("document is not an HTML document".into()))
        .and_then(|doc| doc.exec_command("copy").map_err(dom::js_error));

    let _ = body.remove_child(&area);
    copied
}

struct FeedbackButton(Element);

impl FeedbackTarget for FeedbackButton {
    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn class_attr(&self) -> Option<String> {
        self.0.get_attribute("class")
    }

    fn set_class_attr(&self, class: Option<&str>) {
        let _ = match class {
            Some(class) => self.0.set_attribute("class", class),
            None => self.0.remove_attribute("class"),
        };
    }
}

/// Swap the button into its feedback state and schedule the exact revert.
pub fn show_copy_feedback(button: &Element, outcome: CopyOutcome) {
    let button = FeedbackButton(button.clone());
    let Some(feedback) = CopyFeedback::apply(&button, outcome) else {
        return;
    };
    timers::after(state::config().copy_feedback_ms, move || feedback.revert(&button));
}
