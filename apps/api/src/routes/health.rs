use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::portfolio::demo::persona_names;
use crate::profile::fixtures::fixture_names;
use crate::state::AppState;

/// GET /health
/// Returns service version, profile source mode, and what the offline paths can serve.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let fixture_mode = state.profiles.is_fixture();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "folio-api",
        "profile_source": if fixture_mode { "fixture" } else { "live" },
        "profile_fixtures": if fixture_mode { fixture_names().collect::<Vec<_>>() } else { Vec::new() },
        "demo_personas": persona_names().collect::<Vec<_>>(),
        "contact_configured": state.contact.is_configured(),
    }))
}
