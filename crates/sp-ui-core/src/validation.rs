//! Field rules behind the live form validation.

use sp_format::{ACCOUNT_NUMBER_LEN, NAIRA, digits_only, format_grouped, parse_float, to_fixed};

pub fn account_number_message() -> String {
    format!("Account number must be exactly {ACCOUNT_NUMBER_LEN} digits")
}

pub const VALID_CLASS: &str = "is-valid";
pub const INVALID_CLASS: &str = "is-invalid";
pub const WAS_VALIDATED_CLASS: &str = "was-validated";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(String),
}

impl Validity {
    /// Custom-validity message; empty clears the field's error.
    pub fn message(&self) -> &str {
        match self {
            Validity::Valid => "",
            Validity::Invalid(msg) => msg,
        }
    }

    /// `(class to add, class to remove)`
    pub fn classes(&self) -> (&'static str, &'static str) {
        match self {
            Validity::Valid => (VALID_CLASS, INVALID_CLASS),
            Validity::Invalid(_) => (INVALID_CLASS, VALID_CLASS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNumberCheck {
    /// Value to write back into the field.
    pub value: String,
    pub validity: Validity,
}

pub fn check_account_number(raw: &str) -> AccountNumberCheck {
    let value: String = digits_only(raw).chars().take(ACCOUNT_NUMBER_LEN).collect();
    let validity = if value.len() == ACCOUNT_NUMBER_LEN {
        Validity::Valid
    } else {
        Validity::Invalid(account_number_message())
    };
    AccountNumberCheck { value, validity }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for AmountBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

impl AmountBounds {
    /// Bounds from the raw `min` / `max` attributes. An absent, unparseable
    /// or zero attribute falls back to `0` and unbounded respectively.
    pub fn from_attributes(min: Option<&str>, max: Option<&str>) -> Self {
        let read = |attr: Option<&str>, fallback: f64| {
            attr.map(parse_float)
                .filter(|v| !v.is_nan() && *v != 0.0)
                .unwrap_or(fallback)
        };
        let defaults = Self::default();
        Self {
            min: read(min, defaults.min),
            max: read(max, defaults.max),
        }
    }
}

pub fn check_amount(raw: &str, bounds: &AmountBounds) -> Validity {
    let value = parse_float(raw);
    if value.is_nan() || value < bounds.min {
        Validity::Invalid(format!("Amount must be at least {NAIRA}{}", format_grouped(bounds.min)))
    } else if value > bounds.max {
        Validity::Invalid(format!("Amount cannot exceed {NAIRA}{}", format_grouped(bounds.max)))
    } else {
        Validity::Valid
    }
}

/// Blur rewrite for `.currency-input`: two fixed decimals, or `None` to leave
/// the field alone.
pub fn normalize_currency_input(raw: &str) -> Option<String> {
    let value = parse_float(raw);
    value.is_finite().then(|| to_fixed(value, 2))
}

/// Whether a debounced search query is long enough to auto-submit. Length
/// is counted in UTF-16 units, as the browser reports it.
pub fn search_ready(query: &str, min_len: usize) -> bool {
    query.encode_utf16().count() >= min_len
}
