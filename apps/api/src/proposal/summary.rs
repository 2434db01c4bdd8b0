//! Summary composer — the downloadable project assessment report.
//!
//! Pure formatting over the final data structures; no computation happens
//! here. Field order and number formats match the report the business team
//! already circulates: grouped thousands, two decimals on the adjusted
//! rate, whole currency units on the total.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

use crate::proposal::extract::DetectedProfile;
use crate::proposal::pricing::PricingResult;
use crate::proposal::profile::ClientProfile;

/// Download name for the exported report.
pub const ARTIFACT_FILENAME: &str = "project_summary.txt";

/// The report packaged for transport as a base64 data URI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryArtifact {
    pub filename: String,
    pub data_uri: String,
}

/// Groups an integer's digits with comma separators.
pub fn format_with_separators(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Fixed-decimal rendering with a grouped integer part, e.g. 24375.0 at two
/// decimals → "24,375.00".
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{}", group_digits(int_part), frac_part),
        None => group_digits(&fixed),
    }
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Flattens detection, selections, pricing, and the rendered roadmap into
/// the one report the user downloads.
pub fn compose_summary(
    detected: &DetectedProfile,
    client: &ClientProfile,
    pricing: &PricingResult,
    roadmap_text: &str,
) -> String {
    format!(
        "PROJECT ASSESSMENT SUMMARY\n\
         \n\
         Proposal Deadline: {deadline}\n\
         Detected Company Name: {company}\n\
         Detected Industry: {detected_industry}\n\
         Detected Employee Count Estimate: {detected_employees}\n\
         \n\
         Location: {location}\n\
         Currency: {currency}\n\
         Base Daily Rate: {base_rate}\n\
         Adjusted Daily Rate: {adjusted_rate}\n\
         Revenue Tier: {revenue}\n\
         Industry: {industry}\n\
         Employee Count: {employees}\n\
         Estimated Duration: {weeks} weeks\n\
         Estimated Total Fees: {currency} {total}\n\
         \n\
         ROADMAP:\n\
         {roadmap}\n",
        deadline = client.proposal_deadline.format("%Y-%m-%d"),
        company = detected.company_name,
        detected_industry = detected.industry_keyword,
        detected_employees = detected.employee_tier_label(),
        location = client.location.label(),
        currency = pricing.currency.code(),
        base_rate = format_with_separators(u64::from(pricing.base_daily_rate)),
        adjusted_rate = format_grouped(pricing.adjusted_daily_rate, 2),
        revenue = client.revenue.label(),
        industry = client.industry.label(),
        employees = client.employees.label(),
        weeks = pricing.estimated_weeks,
        total = format_grouped(pricing.total_fee, 0),
        roadmap = roadmap_text,
    )
}

/// Wraps the report for download: `data:file/txt;base64,…` with the fixed
/// filename the consuming UI offers the user.
pub fn encode_artifact(summary: &str) -> SummaryArtifact {
    let encoded = STANDARD.encode(summary.as_bytes());
    SummaryArtifact {
        filename: ARTIFACT_FILENAME.to_string(),
        data_uri: format!("data:file/txt;base64,{encoded}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::pricing::{price_engagement, word_count};
    use crate::proposal::profile::{
        EmployeeTier, IndustryTier, Location, RevenueTier,
    };
    use crate::proposal::roadmap::{build_roadmap, render_roadmap};
    use chrono::NaiveDate;

    fn make_detected() -> DetectedProfile {
        DetectedProfile {
            deadline: NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
            company_name: "Pyramid Textile Group".to_string(),
            industry_keyword: "textile".to_string(),
            employee_count: Some(150),
            employee_tier: Some(EmployeeTier::From101To250),
        }
    }

    fn make_client() -> ClientProfile {
        ClientProfile {
            location: Location::Egypt,
            revenue: RevenueTier::From5MTo50M,
            industry: IndustryTier::Other,
            employees: EmployeeTier::Under50,
            proposal_deadline: NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
        }
    }

    fn make_summary() -> String {
        let client = make_client();
        let pricing = price_engagement(&client, 3600);
        let roadmap_text = render_roadmap(&build_roadmap(pricing.estimated_weeks));
        compose_summary(&make_detected(), &client, &pricing, &roadmap_text)
    }

    // ── number formatting ───────────────────────────────────────────────────

    #[test]
    fn test_format_with_separators_groups_thousands() {
        assert_eq!(format_with_separators(0), "0");
        assert_eq!(format_with_separators(999), "999");
        assert_eq!(format_with_separators(1000), "1,000");
        assert_eq!(format_with_separators(1100), "1,100");
        assert_eq!(format_with_separators(10000), "10,000");
        assert_eq!(format_with_separators(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_grouped_zero_decimals() {
        assert_eq!(format_grouped(66_000.0, 0), "66,000");
        assert_eq!(format_grouped(950.0, 0), "950");
    }

    #[test]
    fn test_format_grouped_two_decimals() {
        assert_eq!(format_grouped(1100.0, 2), "1,100.00");
        assert_eq!(format_grouped(24_375.000000000004, 2), "24,375.00");
        assert_eq!(format_grouped(7920.5, 2), "7,920.50");
    }

    // ── report body ─────────────────────────────────────────────────────────

    #[test]
    fn test_summary_opens_with_report_header() {
        assert!(make_summary().starts_with("PROJECT ASSESSMENT SUMMARY\n"));
    }

    #[test]
    fn test_summary_contains_detected_block() {
        let summary = make_summary();
        assert!(summary.contains("Proposal Deadline: 2025-08-14"));
        assert!(summary.contains("Detected Company Name: Pyramid Textile Group"));
        assert!(summary.contains("Detected Industry: textile"));
        assert!(summary.contains("Detected Employee Count Estimate: 101–250"));
    }

    #[test]
    fn test_summary_contains_pricing_block() {
        let summary = make_summary();
        assert!(summary.contains("Location: EGYPT"));
        assert!(summary.contains("Currency: USD"));
        assert!(summary.contains("Base Daily Rate: 1,100"));
        assert!(summary.contains("Adjusted Daily Rate: 1,100.00"));
        assert!(summary.contains("Revenue Tier: $5M–$50M"));
        assert!(summary.contains("Industry: Other"));
        assert!(summary.contains("Employee Count: < 50"));
        assert!(summary.contains("Estimated Duration: 12 weeks"));
        assert!(summary.contains("Estimated Total Fees: USD 66,000"));
    }

    #[test]
    fn test_summary_ends_with_roadmap_block() {
        let summary = make_summary();
        assert!(summary.contains("\nROADMAP:\n- Kickoff & Research (1–2 week)\n"));
        assert!(summary.ends_with("- Final Presentation (9–10 week)\n\n"));
    }

    #[test]
    fn test_unknown_employee_tier_renders_unknown() {
        let detected = DetectedProfile {
            employee_count: None,
            employee_tier: None,
            ..make_detected()
        };
        let client = make_client();
        let pricing = price_engagement(&client, 0);
        let summary = compose_summary(&detected, &client, &pricing, "");
        assert!(summary.contains("Detected Employee Count Estimate: Unknown"));
    }

    // ── artifact encoding ───────────────────────────────────────────────────

    #[test]
    fn test_artifact_carries_fixed_filename_and_uri_scheme() {
        let artifact = encode_artifact("report body");
        assert_eq!(artifact.filename, "project_summary.txt");
        assert!(artifact.data_uri.starts_with("data:file/txt;base64,"));
    }

    #[test]
    fn test_artifact_payload_decodes_to_summary() {
        let summary = make_summary();
        let artifact = encode_artifact(&summary);
        let payload = artifact
            .data_uri
            .strip_prefix("data:file/txt;base64,")
            .unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), summary);
    }

    #[test]
    fn test_word_count_feeds_duration_in_report() {
        // 3600 words of filler → 12 weeks in the rendered report.
        let text = "lorem ".repeat(3600);
        assert_eq!(word_count(&text), 3600);
        let summary = make_summary();
        assert!(summary.contains("Estimated Duration: 12 weeks"));
    }
}
