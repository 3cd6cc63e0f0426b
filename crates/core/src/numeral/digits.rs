//! Digit transliteration and padded numeric formatting.
//!
//! Only the ten decimal digits are mapped. Signs, separators and any other
//! characters pass through untouched, and no locale grouping is applied.

use std::fmt::Display;

/// Western Arabic digits, indexed by value.
pub const WESTERN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Bengali digits, indexed by value.
pub const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Renders `value` and replaces every Western digit with its Bengali counterpart.
///
/// Accepts integers as well as pre-stringified numbers.
#[must_use]
pub fn to_local_digits(value: impl Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| BENGALI_DIGITS[d as usize]))
        .collect()
}

/// Replaces every Bengali digit with its Western counterpart.
#[must_use]
pub fn to_western_digits(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            BENGALI_DIGITS
                .iter()
                .position(|&bn| bn == c)
                .map_or(c, |i| WESTERN_DIGITS[i])
        })
        .collect()
}

/// Zero-pads `value` to at least two digits, then localizes it.
///
/// Width is a minimum: `7` becomes `"০৭"`, `123` stays three digits.
#[must_use]
pub fn to_local_two_digit(value: u64) -> String {
    to_local_digits(format!("{value:02}"))
}

/// Parses a count typed in either digit system.
///
/// Reads the leading run of digits after optional whitespace and an optional
/// `+`. Anything else (empty input, letters first, a minus sign, overflow)
/// yields zero.
#[must_use]
pub fn parse_local_count(input: &str) -> u32 {
    let western = to_western_digits(input);
    let trimmed = western.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse().unwrap_or(0)
}
