pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::proposal::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Proposal API
        .route(
            "/api/v1/proposals/detect",
            post(handlers::handle_detect),
        )
        .route(
            "/api/v1/proposals/analyze",
            post(handlers::handle_analyze),
        )
        .route(
            "/api/v1/proposals/analyze/upload",
            post(handlers::handle_analyze_upload),
        )
        .with_state(state)
}
