//! Where raw profiles come from: the scraping provider, or bundled fixtures.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::profile::fixtures::{load_fixture, FIXTURE_DELAY};

const SCRAPINGDOG_API_URL: &str = "https://api.scrapingdog.com/linkedin";
const LINKEDIN_PROFILE_BASE: &str = "https://www.linkedin.com/in/";
const URL_PATTERNS: &[&str] = &["linkedin.com/in/", "linkedin.com/pub/"];

/// A raw, un-normalized profile and a label for where it came from.
#[derive(Debug, Clone)]
pub struct FetchedProfile {
    pub source: String,
    pub raw: Value,
}

#[derive(Clone)]
pub enum ProfileSource {
    /// One GET per request to the scraping provider. The key is checked at call time.
    Live {
        client: Client,
        api_key: Option<String>,
    },
    /// Bundled fixtures after [`FIXTURE_DELAY`]. Never validated for plausibility.
    Fixture { default_fixture: String },
}

impl ProfileSource {
    pub fn live(api_key: Option<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(ProfileSource::Live { client, api_key })
    }

    pub fn fixture(default_fixture: impl Into<String>) -> Self {
        ProfileSource::Fixture {
            default_fixture: default_fixture.into(),
        }
    }

    pub fn is_fixture(&self) -> bool {
        matches!(self, ProfileSource::Fixture { .. })
    }

    /// Fetches one raw profile.
    ///
    /// `input` is a profile URL or bare username (live mode only). `fixture` overrides
    /// the configured fixture name (fixture mode only).
    pub async fn fetch(
        &self,
        input: Option<&str>,
        fixture: Option<&str>,
    ) -> Result<FetchedProfile, AppError> {
        match self {
            ProfileSource::Fixture { default_fixture } => {
                let wanted = fixture
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .unwrap_or(default_fixture.as_str());
                tokio::time::sleep(FIXTURE_DELAY).await;
                let (name, raw) = load_fixture(wanted)?;
                debug!("Serving profile fixture '{}'", name);
                Ok(FetchedProfile {
                    source: format!("fixture:{name}"),
                    raw,
                })
            }
            ProfileSource::Live { client, api_key } => {
                let api_key = api_key.as_deref().ok_or_else(|| {
                    AppError::Configuration(
                        "ScrapingDog API key not configured. Set SCRAPINGDOG_API_KEY.".to_string(),
                    )
                })?;
                let username = extract_linkedin_username(input.unwrap_or_default())?;
                let raw = fetch_scrapingdog(client, api_key, &username).await?;
                Ok(FetchedProfile {
                    source: "live".to_string(),
                    raw,
                })
            }
        }
    }
}

async fn fetch_scrapingdog(client: &Client, api_key: &str, username: &str) -> Result<Value, AppError> {
    let profile_url = format!("{LINKEDIN_PROFILE_BASE}{username}");
    info!("Fetching LinkedIn profile for '{}'", username);

    let response = client
        .get(SCRAPINGDOG_API_URL)
        .query(&[
            ("api_key", api_key),
            ("type", "profile"),
            ("linkId", profile_url.as_str()),
        ])
        .send()
        .await
        .map_err(|e| AppError::transport("ScrapingDog", &e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("ScrapingDog returned {}: {}", status, body);
        return Err(AppError::Upstream {
            status: status.as_u16(),
            message: format!("Failed to fetch LinkedIn profile: {}", status.as_u16()),
        });
    }

    let data: Value = response.json().await.map_err(|e| AppError::Upstream {
        status: status.as_u16(),
        message: format!("ScrapingDog returned an unreadable body: {e}"),
    })?;

    Ok(unwrap_single(data))
}

/// The provider sometimes wraps the profile in a one-element array.
fn unwrap_single(data: Value) -> Value {
    match data {
        Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
        other => other,
    }
}

/// Pulls the username out of a profile URL. Bare usernames pass through.
pub fn extract_linkedin_username(input: &str) -> Result<String, AppError> {
    let input = input.trim();

    let username = if !input.contains('/') && !input.contains('.') {
        input.to_string()
    } else {
        let lowered = input.to_ascii_lowercase();
        URL_PATTERNS
            .iter()
            .find_map(|pattern| {
                let start = lowered.find(pattern)? + pattern.len();
                let rest = &input[start..];
                let end = rest.find(['/', '?']).unwrap_or(rest.len());
                (end > 0).then(|| rest[..end].to_string())
            })
            .unwrap_or_else(|| input.strip_suffix('/').unwrap_or(input).to_string())
    };

    if username.is_empty() {
        return Err(AppError::Validation(
            "Invalid LinkedIn URL or username".to_string(),
        ));
    }
    Ok(username)
}
