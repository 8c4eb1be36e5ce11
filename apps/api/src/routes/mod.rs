pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::generation::handlers as portfolios;
use crate::profile::handlers as profile;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Résumé uploads may exceed axum's 2 MB default.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Inputs
        .route(
            "/api/v1/resume/extract",
            post(resume::handle_extract).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/v1/profile/linkedin", post(profile::handle_fetch_linkedin))
        .route(
            "/api/v1/profile/normalize",
            post(profile::handle_normalize_profile),
        )
        // Portfolios
        .route(
            "/api/v1/portfolios/generate",
            post(portfolios::handle_generate),
        )
        .route(
            "/api/v1/portfolios/normalize",
            post(portfolios::handle_normalize),
        )
        .route(
            "/api/v1/portfolios/:session_id",
            get(portfolios::handle_get_portfolio),
        )
        .route(
            "/api/v1/portfolios/:session_id/view",
            get(portfolios::handle_view_portfolio),
        )
        // Demos
        .route("/api/v1/demo", get(portfolios::handle_demo_portfolio))
        .route("/api/v1/demo/:persona", get(portfolios::handle_demo_portfolio))
        .route("/api/v1/demo/:persona/view", get(portfolios::handle_view_demo))
        .route("/api/v1/design/tokens", get(portfolios::handle_design_tokens))
        .route("/api/v1/contact", post(contact::handle_contact))
        .with_state(state)
}
