//! `data-confirm` buttons ask before their default action runs.

use sp_ui_core::{Component, UiError};

use crate::dom;
use crate::events;

const CONFIRM_TRIGGERS: &str = "[data-confirm]";
const DEFAULT_PROMPT: &str = "Are you sure?";

pub fn init() -> Result<(), UiError> {
    for button in dom::query_all(CONFIRM_TRIGGERS) {
        let trigger = button.clone();
        events::listen(Component::Confirmations, &button, "click", move |event| {
            let message = confirm_message(trigger.get_attribute("data-confirm"));
            let confirmed = dom::window()
                .confirm_with_message(&message)
                .unwrap_or(false);
            if !confirmed {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

fn confirm_message(attr: Option<String>) -> String {
    attr.filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_attribute_uses_default_prompt() {
        assert_eq!(confirm_message(Some(String::new())), DEFAULT_PROMPT);
        assert_eq!(confirm_message(None), DEFAULT_PROMPT);
        assert_eq!(
            confirm_message(Some("Delete this beneficiary?".into())),
            "Delete this beneficiary?"
        );
    }
}
