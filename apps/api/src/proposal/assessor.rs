//! RFP assessment — orchestrates one submission through the full pipeline.
//!
//! Flow: detect profile → seed client profile → apply overrides → price →
//!       build roadmap → compose summary → encode artifact.
//!
//! One linear pass over an immutable input snapshot; no component calls back
//! into an earlier one, and nothing is persisted. Identical text and
//! selections yield byte-identical pricing, roadmap, and summary — only the
//! submission id differs between runs.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::proposal::extract::{DetectedProfile, ExtractionPatterns};
use crate::proposal::pricing::{price_engagement, word_count, PricingResult};
use crate::proposal::profile::{
    ClientProfile, EmployeeTier, IndustryTier, Location, RevenueTier,
};
use crate::proposal::roadmap::{build_roadmap, render_roadmap, RoadmapPhase};
use crate::proposal::summary::{compose_summary, encode_artifact, SummaryArtifact};

/// Per-field replacements for the seeded client profile. Fields left `None`
/// keep the seeded default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileOverrides {
    pub location: Option<Location>,
    pub revenue: Option<RevenueTier>,
    pub industry: Option<IndustryTier>,
    pub employees: Option<EmployeeTier>,
    pub proposal_deadline: Option<NaiveDate>,
}

/// Everything one submission produces.
#[derive(Debug, Clone)]
pub struct Assessment {
    /// Fresh per-submission id for client-side reference. Never stored.
    pub submission_id: Uuid,
    pub detected: DetectedProfile,
    pub client_profile: ClientProfile,
    pub word_count: usize,
    pub pricing: PricingResult,
    pub roadmap: Vec<RoadmapPhase>,
    pub roadmap_text: String,
    pub summary: String,
    pub artifact: SummaryArtifact,
}

/// Runs the full assessment pipeline for one RFP submission.
///
/// Steps:
/// 1. Reject empty input — the one recoverable, user-facing stop condition.
/// 2. detect() → DetectedProfile (misses resolve to defaults, never errors)
/// 3. Seed ClientProfile, apply per-field overrides
/// 4. price_engagement() → PricingResult
/// 5. build_roadmap() + render_roadmap()
/// 6. compose_summary() + encode_artifact()
pub fn assess_rfp(
    patterns: &ExtractionPatterns,
    rfp_text: &str,
    overrides: &ProfileOverrides,
    today: NaiveDate,
) -> Result<Assessment, AppError> {
    if rfp_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide RFP content before submitting.".to_string(),
        ));
    }

    let detected = patterns.detect(rfp_text, today);
    info!(
        "Detected profile: company={:?}, industry={}, employees={}",
        detected.company_name,
        detected.industry_keyword,
        detected.employee_tier_label()
    );

    let mut client_profile = ClientProfile::seeded_from(&detected);
    if let Some(location) = overrides.location {
        client_profile.location = location;
    }
    if let Some(revenue) = overrides.revenue {
        client_profile.revenue = revenue;
    }
    if let Some(industry) = overrides.industry {
        client_profile.industry = industry;
    }
    if let Some(employees) = overrides.employees {
        client_profile.employees = employees;
    }
    if let Some(deadline) = overrides.proposal_deadline {
        client_profile.proposal_deadline = deadline;
    }

    let words = word_count(rfp_text);
    let pricing = price_engagement(&client_profile, words);
    info!(
        "Priced engagement: {} weeks, {} {} total",
        pricing.estimated_weeks,
        pricing.currency.code(),
        pricing.total_fee
    );

    let roadmap = build_roadmap(pricing.estimated_weeks);
    let roadmap_text = render_roadmap(&roadmap);

    let summary = compose_summary(&detected, &client_profile, &pricing, &roadmap_text);
    let artifact = encode_artifact(&summary);

    Ok(Assessment {
        submission_id: Uuid::new_v4(),
        detected,
        client_profile,
        word_count: words,
        pricing,
        roadmap,
        roadmap_text,
        summary,
        artifact,
    })
}
