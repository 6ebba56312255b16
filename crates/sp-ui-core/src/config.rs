//! Timing and selector knobs for the UI layer.
//!
//! Every field has a default, so a page that ships no config block (or only
//! part of one) behaves exactly like the stock SwiftPay templates expect.

use crate::error::UiError;
use serde::{Deserialize, Serialize};

pub const CONFIG_ELEMENT_ID: &str = "swiftpay-ui-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub alert_dismiss_ms: u32,
    pub debounce_ms: u32,
    pub copy_feedback_ms: u32,
    pub loading_submit_ms: u32,
    pub modal_focus_ms: u32,
    pub search_min_len: usize,
    pub toast_container_id: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: 5_000,
            debounce_ms: 300,
            copy_feedback_ms: 2_000,
            loading_submit_ms: 500,
            modal_focus_ms: 150,
            search_min_len: 2,
            toast_container_id: "toast-container".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse an inline JSON config block. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_block_gives_defaults() {
        assert_eq!(UiConfig::from_json("  \n").unwrap(), UiConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = UiConfig::from_json(r#"{ "debounce_ms": 450, "search_min_len": 3 }"#).unwrap();
        assert_eq!(cfg.debounce_ms, 450);
        assert_eq!(cfg.search_min_len, 3);
        assert_eq!(cfg.alert_dismiss_ms, 5_000);
        assert_eq!(cfg.copy_feedback_ms, 2_000);
        assert_eq!(cfg.toast_container_id, "toast-container");
    }

    #[test]
    fn malformed_block_is_an_error() {
        let err = UiConfig::from_json("{ debounce_ms: }").unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
        assert!(err.to_string().starts_with("invalid ui config"));
    }
}
