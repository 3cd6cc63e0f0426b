//! Date header formatting.

use chrono::{Datelike, NaiveDate};

use super::clock::{Clock, SystemClock};
use super::names::weekday_name;
use crate::numeral::{to_local_digits, to_local_two_digit};

/// Marker printed after the year to denote the Gregorian calendar.
pub const REGIONAL_MARKER: &str = "ইং";

/// Formats `date` as `DD/MM/YYYY ইং রোজ: <weekday>` with Bengali digits.
///
/// Day and month are zero-padded to two digits; the year is converted digit
/// for digit without padding.
#[must_use]
pub fn format_local_date(date: NaiveDate) -> String {
    let day = to_local_two_digit(u64::from(date.day()));
    let month = to_local_two_digit(u64::from(date.month()));
    let year = to_local_digits(date.year());
    let weekday = weekday_name(date.weekday());

    format!("{day}/{month}/{year} {REGIONAL_MARKER} রোজ: {weekday}")
}

/// Formats the current local date. Read fresh on every call.
#[must_use]
pub fn today() -> String {
    format_local_date(SystemClock.today())
}
