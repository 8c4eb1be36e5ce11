use anyhow::{Context, Result};

use crate::portfolio::intent::{CoercionOptions, ProfileReconciliation};
use crate::portfolio::schema::DesignProfile;
use crate::profile::fixtures::DEFAULT_FIXTURE;

/// Application configuration loaded from environment variables.
///
/// Upstream credentials are optional here; their absence surfaces as a configuration
/// error on the first call that needs them, not at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub scrapingdog_api_key: Option<String>,
    /// Web3Forms access key for the contact form relay.
    pub web3forms_key: Option<String>,
    pub use_mock_data: bool,
    pub mock_profile: String,
    pub default_design_profile: DesignProfile,
    pub profile_reconciliation: ProfileReconciliation,
    pub redis_url: Option<String>,
    pub session_ttl_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Config {
            anthropic_api_key: get("ANTHROPIC_API_KEY"),
            scrapingdog_api_key: get("SCRAPINGDOG_API_KEY"),
            web3forms_key: get("WEB3FORMS_KEY"),
            use_mock_data: get("USE_MOCK_DATA").is_some_and(|v| v.eq_ignore_ascii_case("true")),
            mock_profile: get("MOCK_PROFILE").unwrap_or_else(|| DEFAULT_FIXTURE.to_string()),
            default_design_profile: get("DEFAULT_DESIGN_PROFILE")
                .map(|v| v.parse::<DesignProfile>())
                .transpose()
                .context("DEFAULT_DESIGN_PROFILE must be one of technical-minimal, product-thinker, product-designer, executive-clean")?
                .unwrap_or(DesignProfile::ProductThinker),
            profile_reconciliation: get("DESIGN_PROFILE_RECONCILIATION")
                .map(|v| v.parse::<ProfileReconciliation>())
                .transpose()
                .context("DESIGN_PROFILE_RECONCILIATION must be first-explicit or independent")?
                .unwrap_or(ProfileReconciliation::FirstExplicit),
            redis_url: get("REDIS_URL"),
            session_ttl_secs: get("SESSION_TTL_SECS")
                .unwrap_or_else(|| "86400".to_string())
                .parse::<u64>()
                .context("SESSION_TTL_SECS must be a whole number of seconds")?,
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn coercion_options(&self) -> CoercionOptions {
        CoercionOptions {
            fallback_profile: self.default_design_profile,
            reconciliation: self.profile_reconciliation,
        }
    }
}
