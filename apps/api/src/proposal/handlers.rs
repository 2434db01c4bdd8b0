//! Axum route handlers for the Proposal API.
//!
//! Handlers only validate the presence of input, run the pure pipeline, and
//! serialize results. All computation lives in the pipeline modules.

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::proposal::assessor::{assess_rfp, Assessment, ProfileOverrides};
use crate::proposal::extract::DetectedProfile;
use crate::proposal::pricing::PricingResult;
use crate::proposal::profile::{
    ClientProfile, EmployeeTier, IndustryTier, Location, RevenueTier,
};
use crate::proposal::roadmap::RoadmapPhase;
use crate::proposal::summary::SummaryArtifact;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub rfp_text: String,
}

/// Detected profile as rendered to clients: every field carries a value,
/// with the documented fallbacks in place of misses.
#[derive(Debug, Serialize)]
pub struct DetectedProfileView {
    pub deadline: NaiveDate,
    pub company_name: String,
    pub industry_keyword: String,
    pub employee_count: Option<u32>,
    pub employee_tier: String,
}

impl From<&DetectedProfile> for DetectedProfileView {
    fn from(detected: &DetectedProfile) -> Self {
        DetectedProfileView {
            deadline: detected.deadline,
            company_name: detected.company_name.clone(),
            industry_keyword: detected.industry_keyword.clone(),
            employee_count: detected.employee_count,
            employee_tier: detected.employee_tier_label().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub detected_profile: DetectedProfileView,
    /// Default selections the client should present for editing.
    pub seeded_profile: ClientProfile,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub rfp_text: String,
    pub location: Option<Location>,
    pub revenue: Option<RevenueTier>,
    pub industry: Option<IndustryTier>,
    pub employees: Option<EmployeeTier>,
    pub proposal_deadline: Option<NaiveDate>,
}

impl AnalyzeRequest {
    fn overrides(&self) -> ProfileOverrides {
        ProfileOverrides {
            location: self.location,
            revenue: self.revenue,
            industry: self.industry,
            employees: self.employees,
            proposal_deadline: self.proposal_deadline,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub submission_id: Uuid,
    pub detected_profile: DetectedProfileView,
    pub client_profile: ClientProfile,
    pub word_count: usize,
    pub pricing: PricingResult,
    pub roadmap: Vec<RoadmapPhase>,
    pub roadmap_text: String,
    pub summary: String,
    pub artifact: SummaryArtifact,
}

impl From<Assessment> for AnalyzeResponse {
    fn from(assessment: Assessment) -> Self {
        AnalyzeResponse {
            submission_id: assessment.submission_id,
            detected_profile: DetectedProfileView::from(&assessment.detected),
            client_profile: assessment.client_profile,
            word_count: assessment.word_count,
            pricing: assessment.pricing,
            roadmap: assessment.roadmap,
            roadmap_text: assessment.roadmap_text,
            summary: assessment.summary,
            artifact: assessment.artifact,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/proposals/detect
///
/// Scans raw RFP text and returns the detected profile plus the seeded
/// selection defaults, for previewing before the user edits and submits.
pub async fn handle_detect(
    State(state): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, AppError> {
    if request.rfp_text.trim().is_empty() {
        return Err(AppError::Validation(
            "rfp_text cannot be empty".to_string(),
        ));
    }

    let detected = state
        .patterns
        .detect(&request.rfp_text, Utc::now().date_naive());
    let seeded_profile = ClientProfile::seeded_from(&detected);

    Ok(Json(DetectResponse {
        detected_profile: DetectedProfileView::from(&detected),
        seeded_profile,
    }))
}

/// POST /api/v1/proposals/analyze
///
/// Full pipeline: detect → seed/override → price → roadmap → summary.
/// Returns the complete assessment including the downloadable artifact.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let assessment = assess_rfp(
        &state.patterns,
        &request.rfp_text,
        &request.overrides(),
        Utc::now().date_naive(),
    )?;

    Ok(Json(assessment.into()))
}

/// POST /api/v1/proposals/analyze/upload
///
/// Multipart variant of analyze: a required `file` part holding the RFP as
/// plain UTF-8 text, and an optional `options` part holding a JSON object
/// of the same override fields.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut rfp_text: Option<String> = None;
    let mut overrides = ProfileOverrides::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("file") => {
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read uploaded file: {e}"))
                })?;
                let text = String::from_utf8(bytes.to_vec()).map_err(|_| {
                    AppError::UnprocessableEntity(
                        "Uploaded file is not valid UTF-8 text".to_string(),
                    )
                })?;
                rfp_text = Some(text);
            }
            Some("options") => {
                let raw = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read options: {e}"))
                })?;
                overrides = serde_json::from_str(&raw)
                    .map_err(|e| AppError::Validation(format!("Invalid options payload: {e}")))?;
            }
            // Unknown parts are ignored.
            _ => {}
        }
    }

    let rfp_text = rfp_text.ok_or_else(|| {
        AppError::Validation("Multipart request must include a 'file' part".to_string())
    })?;

    let assessment = assess_rfp(
        &state.patterns,
        &rfp_text,
        &overrides,
        Utc::now().date_naive(),
    )?;

    Ok(Json(assessment.into()))
}
