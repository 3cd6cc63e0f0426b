//! Report error types.

use hajira_shared::AppError;
use thiserror::Error;

use super::types::RequiredField;

/// Notice shown to the user when required fields are blank.
pub const MISSING_FIELDS_NOTICE: &str =
    "অনুগ্রহ করে এ.আর এর নাম, মোবাইল নম্বর ও সিডিউল উইংসের নাম দিন।";

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// One or more required text fields are empty or whitespace-only.
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),
}

impl ReportError {
    /// Returns the user-facing Bengali notice for this error.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => MISSING_FIELDS_NOTICE,
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(format!("{err} ({})", err.notice()))
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let err = ReportError::MissingFields(vec![RequiredField::OfficerName, RequiredField::Mobile]);
        assert_eq!(err.to_string(), "Missing required fields: officer_name, mobile");
    }

    #[test]
    fn test_notice() {
        let err = ReportError::MissingFields(vec![RequiredField::ScheduleWing]);
        assert_eq!(err.notice(), MISSING_FIELDS_NOTICE);
    }

    #[test]
    fn test_into_app_error() {
        let err = ReportError::MissingFields(vec![RequiredField::Mobile]);
        let app: AppError = err.into();
        assert_eq!(app.exit_code(), 2);
        assert!(matches!(app, AppError::Validation(ref msg) if msg.contains(MISSING_FIELDS_NOTICE)));
    }
}
