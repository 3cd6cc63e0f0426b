//! Localized calendar formatting.
//!
//! This module provides:
//! - Bengali weekday and month name tables
//! - The fixed `DD/MM/YYYY ইং রোজ: <weekday>` date header
//! - A `Clock` seam so callers decide when "today" is read

pub mod clock;
pub mod format;
pub mod names;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{REGIONAL_MARKER, format_local_date, today};
pub use names::{MONTH_NAMES, WEEKDAY_NAMES, month_name, weekday_name};
