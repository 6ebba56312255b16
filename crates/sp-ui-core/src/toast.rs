//! Toast severities and the class strings the toast markup is built from.

use std::fmt;

pub const CONTAINER_CLASS: &str = "toast-container position-fixed top-0 end-0 p-3";
pub const CONTAINER_Z_INDEX: &str = "1055";
pub const BODY_CLASS: &str = "toast-body";
pub const CLOSE_BUTTON_CLASS: &str = "btn-close btn-close-white me-2 m-auto";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    #[default]
    Info,
    Light,
    Dark,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Primary => "primary",
            Severity::Secondary => "secondary",
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Light => "light",
            Severity::Dark => "dark",
        }
    }

    pub fn toast_class_name(self) -> String {
        format!("toast align-items-center text-white bg-{} border-0", self.as_str())
    }
}

impl From<&str> for Severity {
    /// Unknown names fall back to `info`; `error` is accepted for `danger`.
    fn from(value: &str) -> Self {
        match value.trim() {
            "primary" => Severity::Primary,
            "secondary" => Severity::Secondary,
            "success" => Severity::Success,
            "danger" | "error" => Severity::Danger,
            "warning" => Severity::Warning,
            "light" => Severity::Light,
            "dark" => Severity::Dark,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_carries_severity() {
        assert_eq!(
            Severity::Success.toast_class_name(),
            "toast align-items-center text-white bg-success border-0"
        );
        assert_eq!(
            Severity::default().toast_class_name(),
            "toast align-items-center text-white bg-info border-0"
        );
    }

    #[test]
    fn names_parse_with_fallback() {
        assert_eq!(Severity::from("warning"), Severity::Warning);
        assert_eq!(Severity::from("error"), Severity::Danger);
        assert_eq!(Severity::from(" dark "), Severity::Dark);
        assert_eq!(Severity::from("loud"), Severity::Info);
        assert_eq!(Severity::from(""), Severity::Info);
    }

    #[test]
    fn display_matches_bootstrap_suffix() {
        for sev in [Severity::Primary, Severity::Danger, Severity::Light] {
            assert_eq!(Severity::from(sev.to_string().as_str()), sev);
        }
    }
}
