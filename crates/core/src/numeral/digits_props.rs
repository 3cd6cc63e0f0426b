//! Property-based tests for digit transliteration.

use proptest::prelude::*;

use super::digits::{
    BENGALI_DIGITS, parse_local_count, to_local_digits, to_local_two_digit, to_western_digits,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Localizing then westernizing a non-negative integer gives back its
    /// plain decimal rendering.
    #[test]
    fn prop_round_trip(n in 0u64..1_000_000) {
        prop_assert_eq!(to_western_digits(&to_local_digits(n)), n.to_string());
    }

    /// Localized output of an integer contains Bengali digits only.
    #[test]
    fn prop_local_output_is_bengali(n in 0u64..1_000_000) {
        let local = to_local_digits(n);
        prop_assert!(local.chars().all(|c| BENGALI_DIGITS.contains(&c)));
        prop_assert_eq!(local.chars().count(), n.to_string().len());
    }

    /// Values below 100 always render as exactly two zero-padded digits.
    #[test]
    fn prop_two_digit_padding(n in 0u64..100) {
        let local = to_local_two_digit(n);
        prop_assert_eq!(local.chars().count(), 2);
        prop_assert_eq!(to_western_digits(&local), format!("{n:02}"));
    }

    /// Padding never truncates wide values.
    #[test]
    fn prop_two_digit_is_minimum_width(n in 100u64..1_000_000) {
        prop_assert_eq!(to_western_digits(&to_local_two_digit(n)), n.to_string());
    }

    /// Non-digit text is left exactly as it was.
    #[test]
    fn prop_non_digits_untouched(s in "[a-zA-Z(),.: -]{0,24}") {
        prop_assert_eq!(to_local_digits(&s), s.clone());
        prop_assert_eq!(to_western_digits(&s), s);
    }

    /// A count typed in Bengali parses to the same value as its Western form.
    #[test]
    fn prop_parse_local_count_either_script(n in 0u32..100_000) {
        prop_assert_eq!(parse_local_count(&to_local_digits(n)), n);
        prop_assert_eq!(parse_local_count(&n.to_string()), n);
    }
}
