//! Axum route handlers for the Profile API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::profile::models::ProfileRecord;
use crate::profile::normalize::normalize_profile;
use crate::profile::text::profile_to_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LinkedInRequest {
    /// Profile URL or bare username. Ignored in fixture mode.
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// Fixture name, fixture mode only.
    #[serde(default)]
    pub fixture: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub source: String,
    pub profile: ProfileRecord,
    /// Flattened text handed to the generator as LinkedIn content.
    pub text: String,
    pub profile_picture_url: Option<String>,
}

impl ProfileResponse {
    fn from_raw(source: String, raw: &Value) -> Self {
        let profile = normalize_profile(raw);
        let text = profile_to_text(&profile);
        let profile_picture_url = profile.profile_picture_url.clone();
        ProfileResponse {
            source,
            profile,
            text,
            profile_picture_url,
        }
    }
}

/// POST /api/v1/profile/linkedin
pub async fn handle_fetch_linkedin(
    State(state): State<AppState>,
    Json(request): Json<LinkedInRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    if !state.profiles.is_fixture()
        && request
            .linkedin_url
            .as_deref()
            .map_or(true, |u| u.trim().is_empty())
    {
        return Err(AppError::Validation("linkedin_url cannot be empty".to_string()));
    }

    let fetched = state
        .profiles
        .fetch(request.linkedin_url.as_deref(), request.fixture.as_deref())
        .await?;
    let response = ProfileResponse::from_raw(fetched.source, &fetched.raw);
    info!(
        "Profile normalized from {}: {} experience, {} education",
        response.source,
        response.profile.experience.len(),
        response.profile.education.len()
    );

    Ok(Json(response))
}

/// POST /api/v1/profile/normalize
///
/// Normalizes a caller-supplied raw profile record without fetching anything.
pub async fn handle_normalize_profile(Json(raw): Json<Value>) -> Json<ProfileResponse> {
    Json(ProfileResponse::from_raw("request".to_string(), &raw))
}
