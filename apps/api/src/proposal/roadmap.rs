//! Project roadmap — fixed five-phase partition of the estimated duration.
//!
//! `weeks_per_phase` is floor division, so remainder weeks are dropped,
//! never appended to the last phase. Below 5 estimated weeks the division
//! degenerates (every phase renders start=1, end=0); the pricing floor of
//! 10 base weeks keeps that unreachable end-to-end, and the arithmetic is
//! kept as-is so the boundary stays pinned by tests rather than hidden.

use serde::Serialize;

/// Phase names, in delivery order. The partition always has exactly five.
pub const PHASE_NAMES: [&str; 5] = [
    "Kickoff & Research",
    "Stakeholder Interviews",
    "Analysis & Insights",
    "Draft Report",
    "Final Presentation",
];

/// One phase of the roadmap, spanning `[start_week, end_week]` inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapPhase {
    pub name: &'static str,
    pub start_week: u32,
    pub end_week: u32,
}

/// Partitions the estimated duration into the five named phases.
pub fn build_roadmap(estimated_weeks: u32) -> Vec<RoadmapPhase> {
    let weeks_per_phase = estimated_weeks / PHASE_NAMES.len() as u32;
    PHASE_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let i = i as u32;
            RoadmapPhase {
                name,
                start_week: i * weeks_per_phase + 1,
                end_week: (i + 1) * weeks_per_phase,
            }
        })
        .collect()
}

/// Renders the roadmap as the report's text block, one line per phase.
pub fn render_roadmap(phases: &[RoadmapPhase]) -> String {
    let mut out = String::new();
    for phase in phases {
        out.push_str(&format!(
            "- {} ({}–{} week)\n",
            phase.name, phase.start_week, phase.end_week
        ));
    }
    out
}
