//! Bootstrap 5 bindings for the `Widgets` capability, plus tooltip and
//! alert wiring.

use sp_ui_core::widgets::{Disposer, attach_tooltips};
use sp_ui_core::{Component, UiError, Widgets};
use web_sys::Element;

use crate::dom;
use crate::events;
use crate::state;
use crate::timers;

pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
pub const DISMISSIBLE_ALERT_SELECTOR: &str = ".alert:not(.alert-permanent)";

pub const TOAST_HIDDEN_EVENT: &str = "hidden.bs.toast";
pub const MODAL_SHOW_EVENT: &str = "show.bs.modal";
pub const MODAL_HIDDEN_EVENT: &str = "hidden.bs.modal";

mod bs {
    use wasm_bindgen::prelude::*;
    use web_sys::Element;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = bootstrap)]
        pub type Tooltip;

        #[wasm_bindgen(constructor, catch, js_namespace = bootstrap)]
        pub fn new(el: &Element) -> Result<Tooltip, JsValue>;

        #[wasm_bindgen(method)]
        pub fn dispose(this: &Tooltip);
    }

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = bootstrap)]
        pub type Alert;

        #[wasm_bindgen(constructor, catch, js_namespace = bootstrap)]
        pub fn new(el: &Element) -> Result<Alert, JsValue>;

        #[wasm_bindgen(method, catch)]
        pub fn close(this: &Alert) -> Result<(), JsValue>;
    }

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = bootstrap)]
        pub type Toast;

        #[wasm_bindgen(constructor, catch, js_namespace = bootstrap)]
        pub fn new(el: &Element) -> Result<Toast, JsValue>;

        #[wasm_bindgen(method, catch)]
        pub fn show(this: &Toast) -> Result<(), JsValue>;
    }
}

/// Bootstrap 5 widgets from the global `bootstrap` namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bootstrap;

fn framework_error(value: wasm_bindgen::JsValue) -> UiError {
    UiError::Framework(dom::describe(&value))
}

impl Widgets for Bootstrap {
    type Element = Element;

    fn tooltip(&self, el: &Element) -> Result<Disposer, UiError> {
        let tooltip = bs::Tooltip::new(el).map_err(framework_error)?;
        Ok(Box::new(move || tooltip.dispose()))
    }

    fn close_alert(&self, el: &Element) -> Result<(), UiError> {
        bs::Alert::new(el).map_err(framework_error)?
            .close()
            .map_err(framework_error)
    }

    fn show_toast(&self, el: &Element) -> Result<(), UiError> {
        bs::Toast::new(el).map_err(framework_error)?
            .show()
            .map_err(framework_error)
    }
}

pub fn init_tooltips() -> Result<(), UiError> {
    for dispose in attach_tooltips(&Bootstrap, dom::query_all(TOOLTIP_SELECTOR))? {
        events::on_teardown(Component::Tooltips, dispose);
    }
    Ok(())
}

/// Schedule every non-permanent alert to close itself.
pub fn init_alerts() -> Result<(), UiError> {
    let delay = state::config().alert_dismiss_ms;
    for alert in dom::query_all(DISMISSIBLE_ALERT_SELECTOR) {
        timers::after(delay, move || {
            if let Err(err) = Bootstrap.close_alert(&alert) {
                gloo_console::warn!(format!("swiftpay: alert not closed: {err}"));
            }
        });
    }
    Ok(())
}
