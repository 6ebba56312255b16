//! Live field validation and the submit gate.
//!
//! The rules live in `sp_ui_core::validation`; this module only reads field
//! values and writes classes, custom validity, and feedback text back.

use sp_ui_core::validation::{
    AmountBounds, Validity, WAS_VALIDATED_CLASS, check_account_number, check_amount,
    normalize_currency_input,
};
use sp_ui_core::{Component, UiError};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::dom;
use crate::events;

const ACCOUNT_NUMBER_INPUTS: &str = r#"input[name="account_number"]"#;
const AMOUNT_INPUTS: &str = r#"input[name="amount"]"#;
const VALIDATED_FORMS: &str = ".needs-validation";
const CURRENCY_INPUTS: &str = ".currency-input";
const FEEDBACK: &str = ".invalid-feedback";

pub fn init() -> Result<(), UiError> {
    for input in dom::query_all_typed::<HtmlInputElement>(ACCOUNT_NUMBER_INPUTS) {
        let field = input.clone();
        events::listen(Component::FormValidation, &input, "input", move |_| {
            validate_account_number(&field)
        })?;
    }

    for input in dom::query_all_typed::<HtmlInputElement>(AMOUNT_INPUTS) {
        let field = input.clone();
        events::listen(Component::FormValidation, &input, "input", move |_| {
            validate_amount(&field)
        })?;
    }

    for form in dom::query_all_typed::<HtmlFormElement>(VALIDATED_FORMS) {
        let gate = form.clone();
        events::listen(Component::FormValidation, &form, "submit", move |event| {
            if !gate.check_validity() {
                event.prevent_default();
                event.stop_propagation();
            }
            dom::add_class(&gate, WAS_VALIDATED_CLASS);
        })?;
    }

    Ok(())
}

/// `.currency-input` fields are rewritten to two decimals when they lose focus.
pub fn init_number_formatting() -> Result<(), UiError> {
    for input in dom::query_all_typed::<HtmlInputElement>(CURRENCY_INPUTS) {
        let field = input.clone();
        events::listen(Component::NumberFormatting, &input, "blur", move |_| {
            if let Some(fixed) = normalize_currency_input(&field.value()) {
                field.set_value(&fixed);
            }
        })?;
    }
    Ok(())
}

pub fn validate_account_number(input: &HtmlInputElement) {
    let check = check_account_number(&input.value());
    input.set_value(&check.value);
    apply_validity(input, &check.validity);

    let Some(feedback) = feedback_for(input).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    match &check.validity {
        Validity::Valid => dom::set_style(&feedback, "display", "none"),
        Validity::Invalid(message) => {
            feedback.set_text_content(Some(message));
            dom::set_style(&feedback, "display", "block");
        }
    }
}

pub fn validate_amount(input: &HtmlInputElement) {
    let bounds = AmountBounds::from_attributes(
        input.get_attribute("min").as_deref(),
        input.get_attribute("max").as_deref(),
    );
    apply_validity(input, &check_amount(&input.value(), &bounds));
}

fn apply_validity(input: &HtmlInputElement, validity: &Validity) {
    input.set_custom_validity(validity.message());
    let (add, remove) = validity.classes();
    dom::remove_class(input, remove);
    dom::add_class(input, add);
}

/// Feedback sits next to the input, or one level up for input groups.
fn feedback_for(input: &HtmlInputElement) -> Option<Element> {
    let parent = input.parent_element()?;
    dom::query_within(&parent, FEEDBACK)
        .or_else(|| dom::query_within(&parent.parent_element()?, FEEDBACK))
}
