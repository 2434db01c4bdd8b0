//! Field extraction — best-effort pattern scan of raw RFP text.
//!
//! Extraction has no failure path: every pattern that does not match (or
//! whose captured text does not parse) resolves to a documented default.
//! Misses are never surfaced as errors.

use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};

use crate::proposal::profile::EmployeeTier;

/// Sentinel company name when no addressee phrase is found.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Default industry keyword when none of the known terms appear.
pub const GENERAL_INDUSTRY: &str = "General";

/// Expected shape of the captured deadline span, e.g. "Thursday August 14, 2025".
const DEADLINE_DATE_FORMAT: &str = "%A %B %d, %Y";

/// Industry terms scanned as case-insensitive substrings. Order matters:
/// the first term found wins when several are present.
const INDUSTRY_KEYWORDS: &[&str] = &[
    "textile",
    "energy",
    "agriculture",
    "construction",
    "banking",
    "technology",
    "transport",
    "local development",
    "governance",
];

/// Best-effort fields pulled from the raw RFP text.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedProfile {
    /// Parsed submission deadline, or the current date when absent/unparseable.
    pub deadline: NaiveDate,
    pub company_name: String,
    pub industry_keyword: String,
    /// Raw headcount mention, when one was found.
    pub employee_count: Option<u32>,
    /// Bucket derived from the count. Rendered as "Unknown" while absent.
    pub employee_tier: Option<EmployeeTier>,
}

impl DetectedProfile {
    /// Display label for the employee tier, with the documented fallback.
    pub fn employee_tier_label(&self) -> &'static str {
        self.employee_tier
            .map(|tier| tier.label())
            .unwrap_or("Unknown")
    }
}

/// Compiled extraction patterns, built once at startup and shared by handlers.
#[derive(Debug, Clone)]
pub struct ExtractionPatterns {
    /// Deadline phrase followed by a weekday-name … 4-digit-year span.
    deadline: Regex,
    /// "to <entity> in conformity with the requirements" addressee phrase.
    company: Regex,
    /// 2-to-5-digit number immediately before the word "employee(s)".
    employees: Regex,
}

impl Default for ExtractionPatterns {
    fn default() -> Self {
        Self {
            deadline: case_insensitive(
                r"(?:submit.*?on or before|deadline(?: for)? submission).*?(\b\w+day\b.*?\d{4})",
            ),
            company: case_insensitive(r"to\s+(.*?)\s+in conformity with the requirements"),
            employees: case_insensitive(r"(\d{2,5})\s+employees?"),
        }
    }
}

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("extraction pattern must compile")
}

impl ExtractionPatterns {
    /// Scans the text and returns a fully populated profile. `today` is the
    /// deadline fallback; it is an explicit parameter so the scan stays pure.
    pub fn detect(&self, text: &str, today: NaiveDate) -> DetectedProfile {
        let employee_count = self.detect_employee_count(text);
        DetectedProfile {
            deadline: self.detect_deadline(text, today),
            company_name: self.detect_company(text),
            industry_keyword: detect_industry(text),
            employee_count,
            employee_tier: employee_count.map(EmployeeTier::from_count),
        }
    }

    fn detect_deadline(&self, text: &str, today: NaiveDate) -> NaiveDate {
        self.deadline
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| NaiveDate::parse_from_str(m.as_str().trim(), DEADLINE_DATE_FORMAT).ok())
            .unwrap_or(today)
    }

    fn detect_company(&self, text: &str) -> String {
        self.company
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
    }

    fn detect_employee_count(&self, text: &str) -> Option<u32> {
        self.employees
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
    }
}

/// First keyword (in list order) found as a case-insensitive substring.
fn detect_industry(text: &str) -> String {
    let lower = text.to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .find(|keyword| lower.contains(**keyword))
        .map(|keyword| keyword.to_string())
        .unwrap_or_else(|| GENERAL_INDUSTRY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFP fixture: all four fields present
    const FULL_RFP: &str = "\
        Request for Proposal — Core Banking Modernization.\n\
        Proposals must be submitted to Pyramid Textile Group in conformity \
        with the requirements stated herein. The deadline for submission is \
        Thursday August 14, 2025 at 17:00 local time.\n\
        Our organization currently has 150 employees across three sites.";

    // RFP fixture: alternate deadline phrasing
    const ON_OR_BEFORE_RFP: &str = "\
        Vendors shall submit their offers on or before Monday June 9, 2025 \
        to the procurement office.";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    fn patterns() -> ExtractionPatterns {
        ExtractionPatterns::default()
    }

    #[test]
    fn test_deadline_parsed_from_deadline_phrase() {
        let profile = patterns().detect(FULL_RFP, today());
        assert_eq!(
            profile.deadline,
            NaiveDate::from_ymd_opt(2025, 8, 14).unwrap()
        );
    }

    #[test]
    fn test_deadline_parsed_from_on_or_before_phrase() {
        let profile = patterns().detect(ON_OR_BEFORE_RFP, today());
        assert_eq!(
            profile.deadline,
            NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()
        );
    }

    #[test]
    fn test_deadline_phrase_is_case_insensitive() {
        let text = "DEADLINE FOR SUBMISSION: Thursday August 14, 2025";
        let profile = patterns().detect(text, today());
        assert_eq!(
            profile.deadline,
            NaiveDate::from_ymd_opt(2025, 8, 14).unwrap()
        );
    }

    #[test]
    fn test_deadline_missing_defaults_to_today() {
        let profile = patterns().detect("No dates mentioned anywhere.", today());
        assert_eq!(profile.deadline, today());
    }

    #[test]
    fn test_deadline_with_wrong_weekday_defaults_to_today() {
        // June 9, 2025 is a Monday; the mismatched weekday fails the parse.
        let text = "The deadline for submission is Tuesday June 9, 2025.";
        let profile = patterns().detect(text, today());
        assert_eq!(profile.deadline, today());
    }

    #[test]
    fn test_company_captured_and_trimmed() {
        let profile = patterns().detect(FULL_RFP, today());
        assert_eq!(profile.company_name, "Pyramid Textile Group");
    }

    #[test]
    fn test_company_missing_defaults_to_sentinel() {
        let profile = patterns().detect("Just some text.", today());
        assert_eq!(profile.company_name, UNKNOWN_COMPANY);
    }

    #[test]
    fn test_industry_first_match_in_list_order_wins() {
        // "textile" precedes "banking" in the keyword list, so it wins even
        // though "Banking" appears first in the text.
        let profile = patterns().detect(FULL_RFP, today());
        assert_eq!(profile.industry_keyword, "textile");
    }

    #[test]
    fn test_industry_match_is_case_insensitive() {
        let profile = patterns().detect("A GOVERNANCE reform program.", today());
        assert_eq!(profile.industry_keyword, "governance");
    }

    #[test]
    fn test_industry_two_word_keyword_matches() {
        let profile = patterns().detect("a local development fund", today());
        assert_eq!(profile.industry_keyword, "local development");
    }

    #[test]
    fn test_industry_missing_defaults_to_general() {
        let profile = patterns().detect("Nothing relevant here.", today());
        assert_eq!(profile.industry_keyword, GENERAL_INDUSTRY);
    }

    #[test]
    fn test_employee_count_parsed_and_bucketed() {
        let profile = patterns().detect(FULL_RFP, today());
        assert_eq!(profile.employee_count, Some(150));
        assert_eq!(profile.employee_tier, Some(EmployeeTier::From101To250));
        assert_eq!(profile.employee_tier_label(), "101–250");
    }

    #[test]
    fn test_employee_count_singular_form_matches() {
        let profile = patterns().detect("headcount of 75 employee records", today());
        assert_eq!(profile.employee_count, Some(75));
        assert_eq!(profile.employee_tier, Some(EmployeeTier::From50To100));
    }

    #[test]
    fn test_employee_count_one_digit_is_ignored() {
        let profile = patterns().detect("a team of 5 employees", today());
        assert_eq!(profile.employee_count, None);
        assert_eq!(profile.employee_tier_label(), "Unknown");
    }

    #[test]
    fn test_employee_count_missing_leaves_tier_unknown() {
        let profile = patterns().detect("a large workforce", today());
        assert_eq!(profile.employee_count, None);
        assert_eq!(profile.employee_tier, None);
        assert_eq!(profile.employee_tier_label(), "Unknown");
    }

    /// Scenario: "textile" and "150 employees" with no deadline phrase.
    #[test]
    fn test_textile_rfp_without_deadline() {
        let text = "A textile manufacturer with 150 employees seeks advisory services.";
        let profile = patterns().detect(text, today());

        assert_eq!(profile.industry_keyword, "textile");
        assert_eq!(profile.employee_tier_label(), "101–250");
        assert_eq!(profile.deadline, today(), "missing deadline falls back to today");
        assert_eq!(profile.company_name, UNKNOWN_COMPANY);
    }
}
