//! Phone-number cleaning, validation and display formatting.
//!
//! # Responsibility
//! - Strip every non-digit character from raw input (`clean`).
//! - Accept exactly 10 decimal digits as a valid number (`is_valid`).
//! - Group digits as `DDDD DDD DDD` for display (`format`).
//!
//! # Invariants
//! - `clean(format(clean(x))) == clean(x)` for any input `x`.
//! - Display values are projections only and are never persisted.
//!
//! # Formatting policy
//! - Fewer than 10 digits are returned unchanged (no grouping).
//! - With more than 10 digits, the first 10 are grouped and the rest stay
//!   attached to the last group, e.g. `09123456789` -> `0912 345 6789`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

/// Required digit count for a valid phone number.
pub const PHONE_NUMBER_DIGITS: usize = 10;

static NON_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("valid non-digit regex"));
static DIGITS_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid digits-only regex"));
static GROUPING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(\d{3})(\d{3})").expect("valid grouping regex"));

/// Digit-only phone number derived from raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CleanPhoneNumber(String);

impl CleanPhoneNumber {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Number of digits held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keeps at most the first `max_digits` digits.
    pub fn truncated(&self, max_digits: usize) -> Self {
        // Digits are ASCII, so byte and char offsets coincide.
        Self(self.0[..self.0.len().min(max_digits)].to_string())
    }
}

impl Display for CleanPhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Grouped presentation of a clean number. Never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayPhoneNumber(String);

impl DisplayPhoneNumber {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Character count as shown in the text field.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Display for DisplayPhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation result for a clean phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    Valid,
    Invalid,
}

/// Removes every character that is not an ASCII decimal digit.
///
/// Never fails; returns an empty number when `raw` holds no digits.
pub fn clean(raw: &str) -> CleanPhoneNumber {
    CleanPhoneNumber(NON_DIGIT_RE.replace_all(raw, "").into_owned())
}

/// Returns whether `number` is exactly 10 decimal digits.
pub fn is_valid(number: &CleanPhoneNumber) -> bool {
    number.len() == PHONE_NUMBER_DIGITS && DIGITS_ONLY_RE.is_match(number.as_str())
}

/// Classifies `number` through [`is_valid`].
pub fn validation_state(number: &CleanPhoneNumber) -> ValidationState {
    if is_valid(number) {
        ValidationState::Valid
    } else {
        ValidationState::Invalid
    }
}

/// Groups a clean number as `DDDD DDD DDD`.
///
/// See the module-level formatting policy for inputs that are not exactly
/// 10 digits long.
pub fn format(number: &CleanPhoneNumber) -> DisplayPhoneNumber {
    DisplayPhoneNumber(
        GROUPING_RE
            .replace(number.as_str(), "$1 $2 $3")
            .into_owned(),
    )
}
