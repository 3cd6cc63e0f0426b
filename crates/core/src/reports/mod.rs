//! Attendance report generation.
//!
//! This module provides pure business logic for the daily wing report:
//! - Required-field validation
//! - Attendance totals
//! - Per-wing lines with schedule-wing highlighting
//! - The fixed Bengali report template

pub mod error;
pub mod service;
pub mod types;


pub use error::{MISSING_FIELDS_NOTICE, ReportError};
pub use service::{ReportComposer, SUCCESS_NOTICE};
pub use types::*;
