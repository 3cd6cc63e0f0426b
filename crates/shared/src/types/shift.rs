//! Reporting shift (day or night).

use serde::{Deserialize, Serialize};

/// Part of the day a report covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// Daytime attendance.
    #[default]
    Day,
    /// Night-time attendance.
    Night,
}

impl Shift {
    /// Returns the Bengali phrase inserted into the report body.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Day => "দিনের বেলায়",
            Self::Night => "রাতের বেলায়",
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Night => write!(f, "night"),
        }
    }
}

impl std::str::FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == Self::Day.phrase() {
            return Ok(Self::Day);
        }
        if trimmed == Self::Night.phrase() {
            return Ok(Self::Night);
        }
        match trimmed.to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            _ => Err(format!("Unknown shift: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("day", Shift::Day)]
    #[case("DAY", Shift::Day)]
    #[case(" night ", Shift::Night)]
    #[case("দিনের বেলায়", Shift::Day)]
    #[case("রাতের বেলায়", Shift::Night)]
    fn test_shift_from_str(#[case] input: &str, #[case] expected: Shift) {
        assert_eq!(Shift::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_shift_from_str_rejects_unknown() {
        assert!(Shift::from_str("evening").is_err());
        assert!(Shift::from_str("").is_err());
    }

    #[test]
    fn test_shift_display_round_trips() {
        for shift in [Shift::Day, Shift::Night] {
            assert_eq!(Shift::from_str(&shift.to_string()).unwrap(), shift);
        }
    }

    #[test]
    fn test_shift_default_is_day() {
        assert_eq!(Shift::default(), Shift::Day);
    }

    #[test]
    fn test_shift_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Shift::Night).unwrap(), "\"night\"");
        let parsed: Shift = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(parsed, Shift::Day);
    }
}
