//! Bundled demo portfolios, one per design profile.
//!
//! Shown when a visitor has nothing generated yet. They go through the same coercion
//! layer as generated output, so a demo can never render differently from a real
//! portfolio of the same shape.

use anyhow::Context;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::portfolio::coerce::normalize;
use crate::portfolio::intent::CoercionOptions;
use crate::portfolio::schema::{PortfolioData, PortfolioMeta};

pub const DEFAULT_PERSONA: &str = "product";

const DEMOS: &[(&str, &str)] = &[
    ("finance", include_str!("../../fixtures/demo/finance.json")),
    ("developer", include_str!("../../fixtures/demo/developer.json")),
    ("product", include_str!("../../fixtures/demo/product.json")),
    ("designer", include_str!("../../fixtures/demo/designer.json")),
];

pub fn persona_names() -> impl Iterator<Item = &'static str> {
    DEMOS.iter().map(|(name, _)| *name)
}

/// Loads a demo by persona, case-insensitively. Unknown or missing personas get
/// [`DEFAULT_PERSONA`]. Returns the resolved persona with the normalized portfolio.
pub fn load_demo(
    persona: Option<&str>,
    options: &CoercionOptions,
) -> Result<(&'static str, PortfolioData), AppError> {
    let wanted = persona.unwrap_or_default().trim().to_ascii_lowercase();
    let (resolved, body) = DEMOS
        .iter()
        .find(|(name, _)| *name == wanted)
        .or_else(|| DEMOS.iter().find(|(name, _)| *name == DEFAULT_PERSONA))
        .copied()
        .ok_or_else(|| anyhow::anyhow!("default demo '{DEFAULT_PERSONA}' is not bundled"))?;

    let raw: Value = serde_json::from_str(body)
        .with_context(|| format!("bundled demo '{resolved}' is not valid JSON"))?;

    let mut data = normalize(&raw, options);
    data.meta = raw
        .get("meta")
        .cloned()
        .map(serde_json::from_value::<PortfolioMeta>)
        .transpose()
        .with_context(|| format!("bundled demo '{resolved}' has an unreadable meta block"))?;

    debug!("Serving demo portfolio '{}'", resolved);
    Ok((resolved, data))
}
