//! Report composition service.
//!
//! Every literal of the report is a constant below. The only variable parts
//! are the date, the shift phrase, the wing lines, the total, the officer's
//! name and section, and the mobile number.

use super::error::ReportError;
use super::types::{ReportRequest, RequiredField, WingEntry};
use crate::numeral::{to_local_digits, to_local_two_digit};

/// Notice shown after a report has been generated.
pub const SUCCESS_NOTICE: &str = "রিপোর্ট সফলভাবে তৈরি হয়েছে!";

const INTRO_PREFIX: &str = "সিডিউল ও বিশেষ গোলামীতে";
const INTRO_SUFFIX: &str = "সকল উইংস এর মোট জন উপস্থিত আছেন।";
const WING_LABEL: &str = "উইংস";
const PERSON_UNIT: &str = "জন";
const SCHEDULE_MARKER: &str = "⭐";
const SCHEDULE_ANNOTATION: &str = "(আজকের সিডিউল)";
const SEPARATOR: &str = "-----------------------------------------";
const TOTAL_LABEL: &str = "মোট------------=    ";
const INCHARGE_HEADING: &str = "বাবে রহমতে ইনচার্জ:-  ";
const OFFICER_TITLE: &str = "এ.আর";
const SECTION_LABEL: &str = "সেকশন-";
const MOBILE_LABEL: &str = "মোবা:";
const CLOSING_PRAYER: &str = "আজকের বিশেষ গোলামির ভুল বেয়াদবির জন্য ইমাম প্রফেসর ডক্টর কুদরত এ খোদা (মা.আ.) হুজুরের নূরময় কদম মোবারকে দয়া ও ভিক্ষা চাই 🙏🙏  ";
const CLOSING_WISH: &str =
    "যেভাবে গোলামি করলে আপনি খুশি থাকেন, আমরা যেন সে ভাবে গোলামি করতে পারি।";

/// Stateless composer for attendance reports.
pub struct ReportComposer;

impl ReportComposer {
    /// Validates `request` and renders the full report text.
    ///
    /// Pure: the same request always yields the same bytes.
    pub fn compose(request: &ReportRequest) -> Result<String, ReportError> {
        Self::validate(request)?;

        let wing_lines: String = request
            .wings
            .iter()
            .map(|wing| Self::render_wing_line(wing, &request.schedule_wing))
            .collect();
        let total = to_local_digits(Self::total(&request.wings));

        let mut report = String::new();
        report.push_str(&format!("{} \n", request.date));
        report.push_str(&format!(
            "{INTRO_PREFIX} {} {INTRO_SUFFIX}\n\n",
            request.shift.phrase()
        ));
        report.push_str(&wing_lines);
        report.push_str(&format!("{SEPARATOR}\n"));
        report.push_str(&format!("{TOTAL_LABEL}{total} {PERSON_UNIT}\n\n"));
        report.push_str(&format!("{INCHARGE_HEADING}\n"));
        report.push_str(&format!(
            "{OFFICER_TITLE} {} {SECTION_LABEL} {}  \n",
            request.officer_name, request.section
        ));
        report.push_str(&format!("{MOBILE_LABEL} {}\n\n", request.mobile));
        report.push_str(&format!("{CLOSING_PRAYER}\n{CLOSING_WISH}"));

        Ok(report)
    }

    /// Checks that officer name, mobile and schedule wing are not blank.
    ///
    /// Reports every blank field, in that order.
    pub fn validate(request: &ReportRequest) -> Result<(), ReportError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::OfficerName, &request.officer_name),
            (RequiredField::Mobile, &request.mobile),
            (RequiredField::ScheduleWing, &request.schedule_wing),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ReportError::MissingFields(missing))
        }
    }

    /// Sums attendance over all wings.
    #[must_use]
    pub fn total(wings: &[WingEntry]) -> u64 {
        wings.iter().map(|w| u64::from(w.count)).sum()
    }

    /// Renders one newline-terminated wing line, highlighting the schedule wing.
    #[must_use]
    pub fn render_wing_line(wing: &WingEntry, schedule_wing: &str) -> String {
        let count = to_local_two_digit(u64::from(wing.count));
        if wing.name == schedule_wing {
            format!(
                "{SCHEDULE_MARKER} {WING_LABEL} {} =  {count} {PERSON_UNIT} {SCHEDULE_ANNOTATION}\n",
                wing.name
            )
        } else {
            format!("{WING_LABEL} {} =  {count} {PERSON_UNIT}\n", wing.name)
        }
    }
}
