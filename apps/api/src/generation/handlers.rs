//! Axum route handlers for the Portfolio API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::design::tokens::{resolve_tokens, DesignTokens};
use crate::errors::AppError;
use crate::generation::generator::{generate_portfolio, GenerateRequest};
use crate::portfolio::coerce::normalize;
use crate::portfolio::demo::load_demo;
use crate::portfolio::schema::{
    DesignIntent, DesignProfile, Emphasis, PortfolioData, SurfacePriority, VisualDensity,
};
use crate::render::plan::{plan_page, PagePlan};
use crate::session::{load_portfolio, save_portfolio};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub session_id: Uuid,
    pub portfolio: PortfolioData,
}

#[derive(Debug, Serialize)]
pub struct DemoResponse {
    /// The persona actually served, after fallback.
    pub persona: &'static str,
    pub portfolio: PortfolioData,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub portfolio: PortfolioData,
}

/// Any field left out takes its default: the configured fallback profile, medium
/// density and emphasis, primary surface.
#[derive(Debug, Deserialize)]
pub struct TokensQuery {
    pub profile: Option<DesignProfile>,
    pub density: Option<VisualDensity>,
    pub priority: Option<SurfacePriority>,
    pub emphasis: Option<Emphasis>,
}

#[derive(Debug, Serialize)]
pub struct TokensResponse {
    pub design_intent: DesignIntent,
    pub tokens: DesignTokens,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/portfolios/generate
///
/// Full pipeline: LLM generate → coerce → image override → meta.
/// The result is stored in the session store before it is returned.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let portfolio = generate_portfolio(&state.llm, &state.coercion, &request).await?;
    let session_id = save_portfolio(state.sessions.as_ref(), &portfolio).await?;

    Ok(Json(GenerateResponse {
        session_id,
        portfolio,
    }))
}

/// POST /api/v1/portfolios/normalize
///
/// Runs the coercion layer on caller-supplied JSON. Never fails on shape.
pub async fn handle_normalize(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Json<NormalizeResponse> {
    Json(NormalizeResponse {
        portfolio: normalize(&raw, &state.coercion),
    })
}

/// GET /api/v1/portfolios/:session_id
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PortfolioData>, AppError> {
    let portfolio = load_portfolio(state.sessions.as_ref(), session_id).await?;
    Ok(Json(portfolio))
}

/// GET /api/v1/portfolios/:session_id/view
///
/// Returns the render plan: visible sections in order with their resolved tokens.
pub async fn handle_view_portfolio(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PagePlan>, AppError> {
    let portfolio = load_portfolio(state.sessions.as_ref(), session_id).await?;
    Ok(Json(plan_page(&portfolio)))
}

/// GET /api/v1/demo and GET /api/v1/demo/:persona
///
/// Unknown personas are served the default demo rather than a 404.
pub async fn handle_demo_portfolio(
    State(state): State<AppState>,
    persona: Option<Path<String>>,
) -> Result<Json<DemoResponse>, AppError> {
    let (persona, portfolio) = load_demo(persona.as_deref().map(String::as_str), &state.coercion)?;
    Ok(Json(DemoResponse { persona, portfolio }))
}

/// GET /api/v1/demo/:persona/view
pub async fn handle_view_demo(
    State(state): State<AppState>,
    Path(persona): Path<String>,
) -> Result<Json<PagePlan>, AppError> {
    let (_, portfolio) = load_demo(Some(&persona), &state.coercion)?;
    Ok(Json(plan_page(&portfolio)))
}

/// GET /api/v1/design/tokens
pub async fn handle_design_tokens(
    State(state): State<AppState>,
    Query(query): Query<TokensQuery>,
) -> Json<TokensResponse> {
    let profile = query.profile.unwrap_or(state.coercion.fallback_profile);
    let design_intent = DesignIntent {
        emphasis: query.emphasis.unwrap_or(Emphasis::Medium),
        visual_density: query.density.unwrap_or(VisualDensity::Medium),
        design_profile: profile,
        surface_priority: query.priority.unwrap_or(SurfacePriority::Primary),
        visual_elements: Vec::new(),
    };
    let tokens = resolve_tokens(&design_intent);

    Json(TokensResponse {
        design_intent,
        tokens,
    })
}
