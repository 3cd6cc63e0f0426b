//! Numeral conversion between Western and Bengali digits.
//!
//! All user-facing numbers are rendered with Bengali digit glyphs, while
//! arithmetic and parsing happen on Western digits.

pub mod digits;

#[cfg(test)]
mod digits_props;

pub use digits::{
    BENGALI_DIGITS, WESTERN_DIGITS, parse_local_count, to_local_digits, to_local_two_digit,
    to_western_digits,
};
