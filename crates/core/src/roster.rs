//! Wing roster editing.
//!
//! Edits never mutate the roster in place; each returns the new sequence so
//! totals and highlighting can be recomputed from it.

use crate::numeral::to_local_digits;
use crate::reports::WingEntry;

/// Number of wings on a fresh form.
pub const DEFAULT_WING_COUNT: usize = 17;

/// Wing on duty on a fresh form.
pub const DEFAULT_SCHEDULE_WING: &str = "0013(M)";

/// Section preselected on a fresh form.
pub const DEFAULT_SECTION: &str = "১";

/// Highest selectable section number.
pub const MAX_SECTION: u32 = 40;

/// Label for the wing at 0-based `position`: `0001(A)`, `0002(B)`, ...
///
/// The letter keeps counting through the code points after `Z`.
#[must_use]
pub fn wing_label(position: usize) -> String {
    let letter = u32::try_from(position)
        .ok()
        .and_then(|p| p.checked_add(u32::from(b'A')))
        .and_then(char::from_u32)
        .unwrap_or('?');
    format!("{:04}({letter})", position + 1)
}

/// `count` wings with standard labels and zero attendance.
#[must_use]
pub fn standard_wings(count: usize) -> Vec<WingEntry> {
    (0..count).map(|i| WingEntry::new(wing_label(i), 0)).collect()
}

/// Appends a wing labelled after the current length.
#[must_use]
pub fn with_wing_added(wings: &[WingEntry]) -> Vec<WingEntry> {
    let mut next = wings.to_vec();
    next.push(WingEntry::new(wing_label(wings.len()), 0));
    next
}

/// Removes the wing at `index`.
///
/// The last remaining wing cannot be removed; an out-of-range index is
/// ignored.
#[must_use]
pub fn without_wing(wings: &[WingEntry], index: usize) -> Vec<WingEntry> {
    if wings.len() <= 1 || index >= wings.len() {
        return wings.to_vec();
    }
    wings
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, wing)| wing.clone())
        .collect()
}

/// Replaces the count of the wing at `index`.
#[must_use]
pub fn with_count(wings: &[WingEntry], index: usize, count: u32) -> Vec<WingEntry> {
    let mut next = wings.to_vec();
    if let Some(wing) = next.get_mut(index) {
        wing.count = count;
    }
    next
}

/// Whether `wing` is the wing on duty.
#[must_use]
pub fn is_schedule_wing(wing: &WingEntry, schedule_wing: &str) -> bool {
    wing.name == schedule_wing
}

/// Selectable sections, `১` through `৪০`.
#[must_use]
pub fn section_options() -> Vec<String> {
    (1..=MAX_SECTION).map(to_local_digits).collect()
}
