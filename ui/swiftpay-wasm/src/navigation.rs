//! Navigation affordances: active nav link and smooth in-page anchors.

use sp_ui_core::{Component, UiError};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;
use crate::events;

const NAV_LINKS: &str = ".nav-link";
const ANCHOR_LINKS: &str = r##"a[href^="#"]"##;
const ACTIVE_CLASS: &str = "active";

pub fn init() -> Result<(), UiError> {
    let current_path = dom::window().location().pathname().unwrap_or_default();
    for link in dom::query_all(NAV_LINKS) {
        if link.get_attribute("href").as_deref() == Some(current_path.as_str()) {
            dom::add_class(&link, ACTIVE_CLASS);
        }
    }

    for link in dom::query_all(ANCHOR_LINKS) {
        let anchor = link.clone();
        events::listen(Component::Navigation, &link, "click", move |event| {
            // A bare "#" or an invalid selector is left to the browser.
            let Some(target) = anchor
                .get_attribute("href")
                .and_then(|href| dom::query(&href))
            else {
                return;
            };
            event.prevent_default();
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        })?;
    }
    Ok(())
}
