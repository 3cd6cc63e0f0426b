//! Report form session.
//!
//! Holds what the user has filled in plus the last report produced from it.
//! A failed generation leaves the previous report in place.

use chrono::NaiveDate;
use hajira_shared::types::Shift;
use hajira_shared::{FormConfig, WingConfig};

use crate::calendar::format_local_date;
use crate::numeral::parse_local_count;
use crate::reports::{ReportComposer, ReportError, ReportRequest, WingEntry};
use crate::roster::{
    self, DEFAULT_SCHEDULE_WING, DEFAULT_SECTION, DEFAULT_WING_COUNT, standard_wings,
};

/// Editable report form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportForm {
    /// Day or night shift.
    pub shift: Shift,
    /// Reporting officer's name.
    pub officer_name: String,
    /// Officer's section.
    pub section: String,
    /// Officer's mobile number.
    pub mobile: String,
    /// Wing on duty today.
    pub schedule_wing: String,
    wings: Vec<WingEntry>,
    last_report: Option<String>,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            shift: Shift::Day,
            officer_name: String::new(),
            section: DEFAULT_SECTION.to_string(),
            mobile: String::new(),
            schedule_wing: DEFAULT_SCHEDULE_WING.to_string(),
            wings: standard_wings(DEFAULT_WING_COUNT),
            last_report: None,
        }
    }
}

impl From<&FormConfig> for ReportForm {
    fn from(config: &FormConfig) -> Self {
        let wings = config.wings.as_ref().map_or_else(
            || standard_wings(config.wing_count),
            |wings| wings.iter().map(WingEntry::from).collect(),
        );

        Self {
            shift: config.shift,
            officer_name: config.officer_name.clone(),
            section: config.section.clone(),
            mobile: config.mobile.clone(),
            schedule_wing: config.schedule_wing.clone(),
            wings,
            last_report: None,
        }
    }
}

impl From<&WingConfig> for WingEntry {
    fn from(config: &WingConfig) -> Self {
        Self::new(config.name.clone(), config.count)
    }
}

impl ReportForm {
    /// Wings in display order.
    #[must_use]
    pub fn wings(&self) -> &[WingEntry] {
        &self.wings
    }

    /// The most recently generated report, if any.
    #[must_use]
    pub fn last_report(&self) -> Option<&str> {
        self.last_report.as_deref()
    }

    /// Appends a new, empty wing.
    pub fn add_wing(&mut self) {
        self.wings = roster::with_wing_added(&self.wings);
    }

    /// Removes the wing at `index`, unless it is the only one left.
    pub fn remove_wing(&mut self, index: usize) {
        self.wings = roster::without_wing(&self.wings, index);
    }

    /// Sets a wing's count from user input in either digit system.
    pub fn set_count_input(&mut self, index: usize, input: &str) {
        self.wings = roster::with_count(&self.wings, index, parse_local_count(input));
    }

    /// Current attendance total.
    #[must_use]
    pub fn total(&self) -> u64 {
        ReportComposer::total(&self.wings)
    }

    /// Whether the wing at `index` is today's schedule wing.
    #[must_use]
    pub fn is_schedule_wing(&self, index: usize) -> bool {
        self.wings
            .get(index)
            .is_some_and(|wing| roster::is_schedule_wing(wing, &self.schedule_wing))
    }

    /// Builds the request for a report dated `date`.
    #[must_use]
    pub fn to_request(&self, date: NaiveDate) -> ReportRequest {
        ReportRequest {
            date: format_local_date(date),
            shift: self.shift,
            officer_name: self.officer_name.clone(),
            section: self.section.clone(),
            mobile: self.mobile.clone(),
            schedule_wing: self.schedule_wing.clone(),
            wings: self.wings.clone(),
        }
    }

    /// Composes a report dated `date` and keeps it as the last report.
    ///
    /// On validation failure the previous report is left untouched.
    pub fn generate(&mut self, date: NaiveDate) -> Result<&str, ReportError> {
        let report = ReportComposer::compose(&self.to_request(date))?;
        Ok(self.last_report.insert(report).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn filled_form() -> ReportForm {
        ReportForm {
            officer_name: "করিম".to_string(),
            mobile: "০১৭১২৩৪৫৬৭৮".to_string(),
            ..ReportForm::default()
        }
    }

    #[test]
    fn test_default_form() {
        let form = ReportForm::default();
        assert_eq!(form.shift, Shift::Day);
        assert_eq!(form.section, "১");
        assert_eq!(form.schedule_wing, "0013(M)");
        assert_eq!(form.wings().len(), 17);
        assert!(form.is_schedule_wing(12));
        assert!(!form.is_schedule_wing(0));
        assert!(!form.is_schedule_wing(99));
        assert!(form.last_report().is_none());
    }

    #[test]
    fn test_from_config_standard_wings() {
        let config = FormConfig {
            wing_count: 3,
            officer_name: "রহিম".to_string(),
            ..FormConfig::default()
        };
        let form = ReportForm::from(&config);
        assert_eq!(form.wings().len(), 3);
        assert_eq!(form.officer_name, "রহিম");
    }

    #[test]
    fn test_from_config_explicit_wings() {
        let config = FormConfig {
            wings: Some(vec![
                WingConfig {
                    name: "North".to_string(),
                    count: 4,
                },
                WingConfig {
                    name: "South".to_string(),
                    count: 6,
                },
            ]),
            ..FormConfig::default()
        };
        let form = ReportForm::from(&config);
        assert_eq!(
            form.wings(),
            &[WingEntry::new("North", 4), WingEntry::new("South", 6)]
        );
        assert_eq!(form.total(), 10);
    }

    #[test]
    fn test_edits_update_total() {
        let mut form = filled_form();
        form.set_count_input(12, "১১");
        form.set_count_input(13, "1");
        form.set_count_input(16, "৩");
        assert_eq!(form.total(), 15);

        form.set_count_input(13, "abc");
        assert_eq!(form.total(), 14);

        form.remove_wing(12);
        assert_eq!(form.total(), 3);
        assert!(!form.wings().iter().any(|w| w.name == "0013(M)"));

        form.add_wing();
        assert_eq!(form.wings().len(), 17);
        assert_eq!(form.wings()[16].name, "0017(Q)");
    }

    #[test]
    fn test_generate_stores_report() {
        let mut form = filled_form();
        form.set_count_input(12, "১১");
        let report = form.generate(date()).unwrap().to_string();
        assert!(report.starts_with("০৪/০৩/২০২৪ ইং রোজ: সোমবার \n"));
        assert!(report.contains("⭐ উইংস 0013(M) =  ১১ জন (আজকের সিডিউল)\n"));
        assert_eq!(form.last_report(), Some(report.as_str()));
    }

    #[test]
    fn test_failed_generate_keeps_previous_report() {
        let mut form = filled_form();
        let first = form.generate(date()).unwrap().to_string();

        form.mobile = "  ".to_string();
        let next_day = date().succ_opt().unwrap();
        assert!(form.generate(next_day).is_err());
        assert_eq!(form.last_report(), Some(first.as_str()));
    }

    #[test]
    fn test_generate_uses_supplied_date() {
        let mut form = filled_form();
        let later = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let report = form.generate(later).unwrap();
        assert!(report.starts_with("১০/০৩/২০২৪ ইং রোজ: রবিবার"));
    }
}
