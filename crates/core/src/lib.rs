//! Core report logic for Hajira.
//!
//! This crate contains pure logic with ZERO file or terminal dependencies.
//! Numeral conversion, date formatting and report composition live here.
//!
//! # Modules
//!
//! - `numeral` - Western and Bengali digit conversion
//! - `calendar` - Bengali date header and the `Clock` seam
//! - `reports` - Validation, totals and the report template
//! - `roster` - Wing list editing and section options
//! - `form` - Form session that keeps the last generated report

pub mod calendar;
pub mod form;
pub mod numeral;
pub mod reports;
pub mod roster;

pub use form::ReportForm;
pub use reports::{ReportComposer, ReportError, ReportRequest, WingEntry};
