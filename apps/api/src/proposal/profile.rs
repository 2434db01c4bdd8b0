//! Client profile — closed categorical selections that drive pricing.
//!
//! The detected industry keyword and the categorical industry tier are
//! intentionally two independent fields: detection is informational display
//! only; the tier is what the pricing tables read. No automatic mapping
//! between them is performed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::proposal::extract::DetectedProfile;

/// Engagement location. Fixes the currency and the base daily rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    #[default]
    #[serde(rename = "EGYPT")]
    Egypt,
    #[serde(rename = "UAE")]
    Uae,
    #[serde(rename = "KSA")]
    Ksa,
}

impl Location {
    pub fn label(&self) -> &'static str {
        match self {
            Location::Egypt => "EGYPT",
            Location::Uae => "UAE",
            Location::Ksa => "KSA",
        }
    }
}

/// Billing currency, fixed per location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "AED")]
    Aed,
    #[serde(rename = "SAR")]
    Sar,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Aed => "AED",
            Currency::Sar => "SAR",
        }
    }
}

/// Client top-line revenue bucket. Scales the daily rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenueTier {
    #[default]
    #[serde(rename = "< $5M")]
    Under5M,
    #[serde(rename = "$5M–$50M")]
    From5MTo50M,
    #[serde(rename = "$50M–$500M")]
    From50MTo500M,
    #[serde(rename = "> $500M")]
    Over500M,
}

impl RevenueTier {
    pub fn label(&self) -> &'static str {
        match self {
            RevenueTier::Under5M => "< $5M",
            RevenueTier::From5MTo50M => "$5M–$50M",
            RevenueTier::From50MTo500M => "$50M–$500M",
            RevenueTier::Over500M => "> $500M",
        }
    }
}

/// Client industry bucket. Scales the daily rate.
///
/// Defaults to `Other` — the last entry in the selection list, matching the
/// neutral 1.0 multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndustryTier {
    #[serde(rename = "Non-Profit")]
    NonProfit,
    #[serde(rename = "Government/Public")]
    GovernmentPublic,
    Manufacturing,
    #[serde(rename = "Financial Services")]
    FinancialServices,
    #[serde(rename = "Tech/Startup")]
    TechStartup,
    #[default]
    Other,
}

impl IndustryTier {
    pub fn label(&self) -> &'static str {
        match self {
            IndustryTier::NonProfit => "Non-Profit",
            IndustryTier::GovernmentPublic => "Government/Public",
            IndustryTier::Manufacturing => "Manufacturing",
            IndustryTier::FinancialServices => "Financial Services",
            IndustryTier::TechStartup => "Tech/Startup",
            IndustryTier::Other => "Other",
        }
    }
}

/// Client headcount bucket. Adds weeks to the timeline estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeTier {
    #[default]
    #[serde(rename = "< 50")]
    Under50,
    #[serde(rename = "50–100")]
    From50To100,
    #[serde(rename = "101–250")]
    From101To250,
    #[serde(rename = "251–500")]
    From251To500,
    #[serde(rename = "501–1000")]
    From501To1000,
    #[serde(rename = "> 1000")]
    Over1000,
}

impl EmployeeTier {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeTier::Under50 => "< 50",
            EmployeeTier::From50To100 => "50–100",
            EmployeeTier::From101To250 => "101–250",
            EmployeeTier::From251To500 => "251–500",
            EmployeeTier::From501To1000 => "501–1000",
            EmployeeTier::Over1000 => "> 1000",
        }
    }

    /// Buckets a raw headcount mention. Upper bounds are inclusive.
    pub fn from_count(count: u32) -> EmployeeTier {
        match count {
            0..=49 => EmployeeTier::Under50,
            50..=100 => EmployeeTier::From50To100,
            101..=250 => EmployeeTier::From101To250,
            251..=500 => EmployeeTier::From251To500,
            501..=1000 => EmployeeTier::From501To1000,
            _ => EmployeeTier::Over1000,
        }
    }
}

/// User-confirmed categorical selections — the authoritative input to pricing.
///
/// Seeded once from a `DetectedProfile`, then fully decoupled: editing one
/// never mutates the other. Only the proposal deadline carries over from
/// detection; the categorical fields start at their presentation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub location: Location,
    pub revenue: RevenueTier,
    pub industry: IndustryTier,
    pub employees: EmployeeTier,
    pub proposal_deadline: NaiveDate,
}

impl ClientProfile {
    /// Builds the default selections shown after detection: first entry for
    /// location, revenue, and employees; `Other` for industry; deadline from
    /// the detected profile.
    pub fn seeded_from(detected: &DetectedProfile) -> ClientProfile {
        ClientProfile {
            location: Location::default(),
            revenue: RevenueTier::default(),
            industry: IndustryTier::default(),
            employees: EmployeeTier::default(),
            proposal_deadline: detected.deadline,
        }
    }
}
