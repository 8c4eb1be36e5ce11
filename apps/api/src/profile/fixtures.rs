//! Bundled profile fixtures for offline mode.

use std::time::Duration;

use anyhow::Context;
use serde_json::Value;

use crate::errors::AppError;

/// Artificial latency before a fixture is returned, so clients exercise their
/// loading states.
pub const FIXTURE_DELAY: Duration = Duration::from_millis(800);

pub const DEFAULT_FIXTURE: &str = "sidharth";

/// Name → raw scraper-shaped JSON. A full profile and a sparse one.
const FIXTURES: &[(&str, &str)] = &[
    ("sidharth", include_str!("../../fixtures/linkedin/sidharth.json")),
    ("sandeep", include_str!("../../fixtures/linkedin/sandeep.json")),
];

pub fn fixture_names() -> impl Iterator<Item = &'static str> {
    FIXTURES.iter().map(|(name, _)| *name)
}

/// Resolves a fixture by name, case-insensitively. Unknown names fall back to
/// [`DEFAULT_FIXTURE`]. Returns the resolved name with the parsed record.
pub fn load_fixture(name: &str) -> Result<(&'static str, Value), AppError> {
    let wanted = name.trim().to_ascii_lowercase();
    let (resolved, body) = FIXTURES
        .iter()
        .find(|(n, _)| *n == wanted)
        .or_else(|| FIXTURES.iter().find(|(n, _)| *n == DEFAULT_FIXTURE))
        .copied()
        .ok_or_else(|| anyhow::anyhow!("default fixture '{DEFAULT_FIXTURE}' is not bundled"))?;

    let raw: Value = serde_json::from_str(body)
        .with_context(|| format!("bundled fixture '{resolved}' is not valid JSON"))?;
    Ok((resolved, raw))
}
