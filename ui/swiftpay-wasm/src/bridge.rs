//! JavaScript-facing surface.
//!
//! Page templates and other scripts import these instead of reaching for
//! ad-hoc globals: the referral/amount helpers used by inline handlers, the
//! formatters, the toast notifier, and explicit mount/unmount.

use sp_format::TransactionKind;
use sp_ui_core::UiConfig;
use sp_ui_core::toast::Severity;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::clipboard;
use crate::dom;
use crate::events;
use crate::loading;
use crate::state;
use crate::toast;
use crate::validation;

const REFERRAL_CODE_ID: &str = "referralCode";
const REFERRAL_LINK_ID: &str = "referralLink";
const AMOUNT_ID: &str = "amount";

/// Copy a referral field's value, using the control right after it as the
/// feedback button.
fn copy_field_with_sibling(id: &str) {
    let Some(field) = dom::by_id(id) else {
        return;
    };
    let Some(button) = field.next_element_sibling() else {
        return;
    };
    let text = dom::value_of(&field).unwrap_or_default();
    clipboard::copy_to_clipboard(text, button);
}

#[wasm_bindgen(js_name = copyReferralCode)]
pub fn copy_referral_code() {
    copy_field_with_sibling(REFERRAL_CODE_ID);
}

#[wasm_bindgen(js_name = copyReferralLink)]
pub fn copy_referral_link() {
    copy_field_with_sibling(REFERRAL_LINK_ID);
}

/// Prefill `#amount` (quick-amount buttons), focus it and revalidate.
#[wasm_bindgen(js_name = setAmount)]
pub fn set_amount(amount: JsValue) {
    let Some(input) = dom::by_id_typed::<HtmlInputElement>(AMOUNT_ID) else {
        return;
    };
    let value = amount
        .as_string()
        .or_else(|| amount.as_f64().map(|n| n.to_string()))
        .unwrap_or_default();
    input.set_value(&value);
    let _ = input.focus();
    validation::validate_amount(&input);
}

#[wasm_bindgen(js_name = validateAccountNumber)]
pub fn validate_account_number(input: &HtmlInputElement) {
    validation::validate_account_number(input);
}

#[wasm_bindgen(js_name = validateAmount)]
pub fn validate_amount(input: &HtmlInputElement) {
    validation::validate_amount(input);
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String, button: Element) {
    clipboard::copy_to_clipboard(text, button);
}

#[wasm_bindgen(js_name = formatNaira)]
pub fn format_naira(amount: f64) -> String {
    sp_format::format_naira(amount)
}

#[wasm_bindgen(js_name = validateNigerianPhone)]
pub fn validate_nigerian_phone(phone_number: &str) -> bool {
    sp_format::validate_nigerian_phone(phone_number)
}

/// `kind` defaults to `info`.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) -> Result<(), JsValue> {
    let severity = kind.as_deref().map(Severity::from).unwrap_or_default();
    toast::show_toast(message, severity).map_err(dom::to_js)
}

#[wasm_bindgen(js_name = showButtonLoading)]
pub fn show_button_loading(button: &HtmlElement) {
    loading::show_button_loading(button);
}

#[wasm_bindgen(js_name = hideButtonLoading)]
pub fn hide_button_loading(button: &HtmlElement) {
    loading::hide_button_loading(button);
}

#[wasm_bindgen(js_name = submitFormWithLoading)]
pub fn submit_form_with_loading(form: HtmlFormElement, button: HtmlElement) {
    loading::submit_form_with_loading(form, button);
}

#[wasm_bindgen]
pub struct SwiftPayUtils {}

#[wasm_bindgen]
impl SwiftPayUtils {
    #[wasm_bindgen(js_name = formatAccountNumber)]
    pub fn format_account_number(account_number: &str) -> String {
        sp_format::format_account_number(account_number)
    }

    #[wasm_bindgen(js_name = isValidEmail)]
    pub fn is_valid_email(email: &str) -> bool {
        sp_format::is_valid_email(email)
    }

    /// Any JS number is accepted; negative or NaN lengths give `""`.
    #[wasm_bindgen(js_name = generateReferralCode)]
    pub fn generate_referral_code(length: Option<f64>) -> String {
        let length = sp_format::referral_code_len(length);
        sp_format::generate_referral_code(&mut rand::thread_rng(), length)
    }

    /// `kind` is `transfer` (default) or `withdrawal`; anything else is free.
    #[wasm_bindgen(js_name = calculateFee)]
    pub fn calculate_fee(amount: f64, kind: Option<String>) -> f64 {
        let kind = kind
            .as_deref()
            .map(TransactionKind::from)
            .unwrap_or_default();
        sp_format::calculate_fee(amount, kind)
    }
}

/// Re-wire the page with `options` (a partial `UiConfig` object, or nothing
/// for the defaults). Existing listeners are detached first.
#[wasm_bindgen]
pub fn mount(options: JsValue) -> Result<(), JsValue> {
    let config: UiConfig = if options.is_undefined() || options.is_null() {
        UiConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    events::teardown_all();
    state::set_config(config);
    crate::mount_components();
    Ok(())
}

/// Detach every listener and drop pending debounced searches.
#[wasm_bindgen]
pub fn unmount() {
    events::teardown_all();
}
