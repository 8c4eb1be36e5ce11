use std::sync::Arc;

use crate::config::Config;
use crate::contact::ContactRelay;
use crate::llm_client::LlmClient;
use crate::portfolio::intent::CoercionOptions;
use crate::profile::source::ProfileSource;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Live scraping provider or bundled fixtures, chosen by USE_MOCK_DATA.
    pub profiles: ProfileSource,
    pub contact: ContactRelay,
    /// Redis when REDIS_URL is set, in-process otherwise.
    pub sessions: Arc<dyn SessionStore>,
    pub coercion: CoercionOptions,
}

impl AppState {
    /// Builds the HTTP clients the handlers share. Credentials are not checked here.
    pub fn new(
        config: &Config,
        profiles: ProfileSource,
        sessions: Arc<dyn SessionStore>,
    ) -> anyhow::Result<Self> {
        Ok(AppState {
            llm: LlmClient::new(config.anthropic_api_key.clone())?,
            profiles,
            contact: ContactRelay::new(config.web3forms_key.clone())?,
            sessions,
            coercion: config.coercion_options(),
        })
    }
}
