//! Page-wide state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded)
//! for the active `UiConfig`.

use sp_ui_core::UiConfig;
use sp_ui_core::config::CONFIG_ELEMENT_ID;
use std::cell::RefCell;

use crate::dom;

thread_local! {
    static CONFIG: RefCell<UiConfig> = RefCell::new(UiConfig::default());
}

pub fn config() -> UiConfig {
    CONFIG.with(|c| c.borrow().clone())
}

pub fn set_config(config: UiConfig) {
    CONFIG.with(|c| *c.borrow_mut() = config);
}

/// Read the optional inline `<script type="application/json">` config block.
/// A malformed block is reported and the defaults are used instead.
pub fn load_config() -> UiConfig {
    let Some(block) = dom::by_id(CONFIG_ELEMENT_ID) else {
        return UiConfig::default();
    };
    let raw = block.text_content().unwrap_or_default();
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!(format!("swiftpay: ignoring #{CONFIG_ELEMENT_ID}: {err}"));
            UiConfig::default()
        }
    }
}
