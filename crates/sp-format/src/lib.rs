//! Pure formatting and checking helpers shared by the SwiftPay front end.
//!
//! Nothing in here touches the DOM, so every rule can be exercised on the host.

use rand::Rng;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::LazyLock;

pub const NAIRA: &str = "₦";

pub const ACCOUNT_NUMBER_LEN: usize = 10;

pub const DEFAULT_REFERRAL_CODE_LEN: usize = 8;
const REFERRAL_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const LARGE_TRANSFER_THRESHOLD: f64 = 50_000.0;
const TRANSFER_FEE_RATE: f64 = 0.001;
const SMALL_WITHDRAWAL_THRESHOLD: f64 = 10_000.0;
const SMALL_WITHDRAWAL_FEE: f64 = 50.0;

// The duplicated `70` and the prefix list itself are carried over unchanged.
static NIGERIAN_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+234|234|0)(70|71|80|81|90|91|70)[0-9]{8}$").expect("valid phone regex")
});

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static ACCOUNT_GROUPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})([0-9]{3})([0-9]{3})").expect("valid account regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionKind {
    #[default]
    Transfer,
    Withdrawal,
    Other,
}

impl From<&str> for TransactionKind {
    fn from(value: &str) -> Self {
        match value {
            "transfer" => Self::Transfer,
            "withdrawal" => Self::Withdrawal,
            _ => Self::Other,
        }
    }
}

/// Fee charged on a transaction of `amount` naira.
pub fn calculate_fee(amount: f64, kind: TransactionKind) -> f64 {
    match kind {
        TransactionKind::Transfer if amount > LARGE_TRANSFER_THRESHOLD => amount * TRANSFER_FEE_RATE,
        TransactionKind::Withdrawal if amount < SMALL_WITHDRAWAL_THRESHOLD => SMALL_WITHDRAWAL_FEE,
        _ => 0.0,
    }
}

/// Parses the longest leading decimal literal of `input`, the way browsers
/// read a free-typed number field. Returns NaN when no digits lead the text.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = leading_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = leading_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// `₦1,234.56` style rendering with exactly two fraction digits.
pub fn format_naira(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{NAIRA}NaN");
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}{NAIRA}∞");
    }
    format!("{sign}{NAIRA}{}", group_fixed(amount.abs(), 2, 2))
}

/// Locale-style number: comma grouping, at most three fraction digits,
/// trailing zeros dropped.
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }
    format!("{sign}{}", group_fixed(value.abs(), 0, 3))
}

/// Fixed-point rendering without grouping, e.g. for rewriting a currency
/// field in place.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}", round_fixed(value.abs(), digits))
}

/// `abs` rounded to `digits` places from its exact binary value, with ties
/// going away from zero.
fn round_fixed(abs: f64, digits: usize) -> String {
    let places = u32::try_from(digits).unwrap_or(u32::MAX);
    match Decimal::from_f64_retain(abs) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.digits$}")
        }
        // Beyond Decimal's range there are no fraction digits left to round.
        None => format!("{abs:.digits$}"),
    }
}

fn group_fixed(abs: f64, min_frac: usize, max_frac: usize) -> String {
    let fixed = round_fixed(abs, max_frac);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let significant = frac_part.trim_end_matches('0').len().max(min_frac);
    let frac = &frac_part[..significant.min(frac_part.len())];

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + frac.len() + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// ASCII digits of `input`, in order.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

pub fn validate_nigerian_phone(phone_number: &str) -> bool {
    let compact: String = phone_number.chars().filter(|c| !c.is_whitespace()).collect();
    NIGERIAN_PHONE.is_match(&compact)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Splits the first ten-digit run into `dddd ddd ddd`; other text is kept.
pub fn format_account_number(account_number: &str) -> String {
    ACCOUNT_GROUPS
        .replace(account_number, "${1} ${2} ${3}")
        .into_owned()
}

/// Length for a requested referral code size: absent means the default,
/// fractions count up and anything below one (or NaN) yields an empty code.
pub fn referral_code_len(requested: Option<f64>) -> usize {
    match requested {
        None => DEFAULT_REFERRAL_CODE_LEN,
        Some(n) if n > 0.0 => n.ceil() as usize,
        Some(_) => 0,
    }
}

pub fn generate_referral_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| REFERRAL_ALPHABET[rng.gen_range(0..REFERRAL_ALPHABET.len())] as char)
        .collect()
}
