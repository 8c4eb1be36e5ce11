mod config;
mod contact;
mod design;
mod errors;
mod generation;
mod llm_client;
mod lookup;
mod portfolio;
mod profile;
mod render;
mod resume;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::profile::source::ProfileSource;
use crate::routes::build_router;
use crate::session::{MemorySessionStore, RedisSessionStore, SessionStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    if config.anthropic_api_key.is_none() {
        info!("ANTHROPIC_API_KEY not set; generation requests will fail until it is");
    }
    if config.web3forms_key.is_none() {
        info!("WEB3FORMS_KEY not set; contact form submissions will fail until it is");
    }

    // Initialize profile source
    let profiles = if config.use_mock_data {
        info!("Profile fetch uses fixture '{}'", config.mock_profile);
        ProfileSource::fixture(config.mock_profile.clone())
    } else {
        ProfileSource::live(config.scrapingdog_api_key.clone())?
    };

    // Initialize session store
    let sessions: Arc<dyn SessionStore> = match &config.redis_url {
        Some(url) => {
            let store = RedisSessionStore::connect(url, config.session_ttl_secs).await?;
            info!("Redis session store connected (ttl {}s)", config.session_ttl_secs);
            Arc::new(store)
        }
        None => {
            info!("REDIS_URL not set; sessions are kept in memory");
            Arc::new(MemorySessionStore::default())
        }
    };

    info!(
        "Coercion defaults: profile={}, reconciliation={:?}",
        config.default_design_profile.as_str(),
        config.profile_reconciliation
    );

    let state = AppState::new(&config, profiles, sessions)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
