//! Pricing engine — deterministic rate/multiplier model and timeline estimate.
//!
//! Pure function from (client profile, word count) to a `PricingResult`.
//! No side effects, no I/O, no caching: every submission recomputes from
//! scratch. All lookup tables are exhaustive matches over closed enums, so
//! the computation is exception-free by construction.

use serde::Serialize;

use crate::proposal::profile::{
    ClientProfile, Currency, EmployeeTier, IndustryTier, Location, RevenueTier,
};

/// Duration floor: even a one-line RFP is at least 10 base weeks.
pub const MIN_BASE_WEEKS: u32 = 10;
/// Duration ceiling from text length alone (reached at 4800 words).
pub const MAX_BASE_WEEKS: u32 = 16;

const WORDS_PER_BASE_WEEK: usize = 300;
const WORKING_DAYS_PER_WEEK: u32 = 5;

/// Fee and duration estimate for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingResult {
    pub currency: Currency,
    pub base_daily_rate: u32,
    /// Base rate scaled by the revenue and industry multipliers. Kept at
    /// full float precision; rounding happens only at display time.
    pub adjusted_daily_rate: f64,
    pub base_weeks: u32,
    pub estimated_weeks: u32,
    pub estimated_days: u32,
    pub total_fee: f64,
}

/// Currency and base daily rate are fixed per location.
fn location_rate(location: Location) -> (Currency, u32) {
    match location {
        Location::Egypt => (Currency::Usd, 1100),
        Location::Uae => (Currency::Aed, 10000),
        Location::Ksa => (Currency::Sar, 12500),
    }
}

fn revenue_multiplier(tier: RevenueTier) -> f64 {
    match tier {
        RevenueTier::Under5M => 0.8,
        RevenueTier::From5MTo50M => 1.0,
        RevenueTier::From50MTo500M => 1.2,
        RevenueTier::Over500M => 1.5,
    }
}

fn industry_multiplier(tier: IndustryTier) -> f64 {
    match tier {
        IndustryTier::NonProfit => 0.9,
        IndustryTier::GovernmentPublic => 1.0,
        IndustryTier::Manufacturing => 1.1,
        IndustryTier::FinancialServices => 1.3,
        IndustryTier::TechStartup => 1.2,
        IndustryTier::Other => 1.0,
    }
}

/// Extra weeks added to the timeline for larger organizations.
fn timeline_addend(tier: EmployeeTier) -> u32 {
    match tier {
        EmployeeTier::Under50 => 0,
        EmployeeTier::From50To100 => 1,
        EmployeeTier::From101To250 => 2,
        EmployeeTier::From251To500 => 3,
        EmployeeTier::From501To1000 => 4,
        EmployeeTier::Over1000 => 5,
    }
}

/// Whitespace-split token count of the raw RFP text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// One base week per 300 words, clamped to [10, 16].
pub fn base_weeks(word_count: usize) -> u32 {
    ((word_count / WORDS_PER_BASE_WEEK) as u32).clamp(MIN_BASE_WEEKS, MAX_BASE_WEEKS)
}

/// Computes the full fee and duration estimate for one submission.
pub fn price_engagement(profile: &ClientProfile, word_count: usize) -> PricingResult {
    let (currency, base_daily_rate) = location_rate(profile.location);
    let adjusted_daily_rate = f64::from(base_daily_rate)
        * revenue_multiplier(profile.revenue)
        * industry_multiplier(profile.industry);

    let base_weeks = base_weeks(word_count);
    let estimated_weeks = base_weeks + timeline_addend(profile.employees);
    let estimated_days = estimated_weeks * WORKING_DAYS_PER_WEEK;
    let total_fee = adjusted_daily_rate * f64::from(estimated_days);

    PricingResult {
        currency,
        base_daily_rate,
        adjusted_daily_rate,
        base_weeks,
        estimated_weeks,
        estimated_days,
        total_fee,
    }
}
