//! Report data types.

use hajira_shared::types::Shift;
use serde::{Deserialize, Serialize};

/// Attendance count for one wing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WingEntry {
    /// Wing label, e.g. `0013(M)`.
    pub name: String,
    /// Number of people present.
    pub count: u32,
}

impl WingEntry {
    /// Creates a wing entry.
    #[must_use]
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Everything needed to render one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Formatted date header.
    pub date: String,
    /// Day or night shift.
    pub shift: Shift,
    /// Reporting officer's name.
    pub officer_name: String,
    /// Officer's section.
    pub section: String,
    /// Officer's mobile number.
    pub mobile: String,
    /// Wing on duty for the report date.
    pub schedule_wing: String,
    /// Wings in display order.
    pub wings: Vec<WingEntry>,
}

/// Text fields that must be non-blank before a report is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    /// The reporting officer's name.
    OfficerName,
    /// The officer's mobile number.
    Mobile,
    /// The schedule wing's name.
    ScheduleWing,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OfficerName => write!(f, "officer_name"),
            Self::Mobile => write!(f, "mobile"),
            Self::ScheduleWing => write!(f, "schedule_wing"),
        }
    }
}
