use crate::proposal::extract::ExtractionPatterns;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Compiled extraction patterns, built once at startup.
    pub patterns: ExtractionPatterns,
}
