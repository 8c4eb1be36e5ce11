//! Design-intent defaulting and page-wide profile reconciliation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lookup::{as_text, first_present, string_list_field, Aliases, Record};
use crate::portfolio::aliases::intent as keys;
use crate::portfolio::schema::{
    DesignIntent, DesignProfile, Emphasis, SurfacePriority, VisualDensity,
};

/// Fallback profile used when the generator sets none.
pub const DEFAULT_DESIGN_PROFILE: DesignProfile = DesignProfile::ProductThinker;

/// What to do when sections of one response name different design profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileReconciliation {
    /// The first section (in page order) with an explicit profile wins; every other
    /// section is overwritten with it.
    FirstExplicit,
    /// Each section keeps whatever it declared.
    Independent,
}

/// Knobs injected into the coercion layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoercionOptions {
    pub fallback_profile: DesignProfile,
    pub reconciliation: ProfileReconciliation,
}

impl Default for CoercionOptions {
    fn default() -> Self {
        Self {
            fallback_profile: DEFAULT_DESIGN_PROFILE,
            // Deliberately stricter than the data model, which lets every section carry
            // its own profile: one page, one identity. `Independent` restores per-section
            // profiles for callers that want them.
            reconciliation: ProfileReconciliation::FirstExplicit,
        }
    }
}

/// A defaulted intent plus whether its profile came from the generator.
#[derive(Debug, Clone)]
pub struct ResolvedIntent {
    pub intent: DesignIntent,
    pub explicit_profile: bool,
}

/// Fills the missing sub-fields of a (possibly absent) upstream intent record.
///
/// Unknown enum spellings count as missing.
pub fn default_intent(
    raw: Option<&Record>,
    default_priority: SurfacePriority,
    fallback_profile: DesignProfile,
) -> ResolvedIntent {
    let empty = Record::new();
    let raw = raw.unwrap_or(&empty);

    let profile = enum_field::<DesignProfile>(raw, &keys::DESIGN_PROFILE);
    let intent = DesignIntent {
        emphasis: enum_field(raw, &keys::EMPHASIS).unwrap_or(Emphasis::Medium),
        visual_density: enum_field(raw, &keys::VISUAL_DENSITY).unwrap_or(VisualDensity::Medium),
        design_profile: profile.unwrap_or(fallback_profile),
        surface_priority: enum_field(raw, &keys::SURFACE_PRIORITY).unwrap_or(default_priority),
        visual_elements: string_list_field(raw, &keys::VISUAL_ELEMENTS).unwrap_or_default(),
    };

    ResolvedIntent {
        intent,
        explicit_profile: profile.is_some(),
    }
}

/// Applies the reconciliation policy across all sections of one response.
///
/// `intents` must be in page order.
pub fn reconcile_profiles(intents: &mut [ResolvedIntent], policy: ProfileReconciliation) {
    if policy == ProfileReconciliation::Independent {
        return;
    }
    let Some(authoritative) = intents
        .iter()
        .find(|r| r.explicit_profile)
        .map(|r| r.intent.design_profile)
    else {
        return;
    };
    for resolved in intents.iter_mut() {
        if resolved.intent.design_profile != authoritative {
            debug!(
                "Reconciling design_profile {} -> {}",
                resolved.intent.design_profile.as_str(),
                authoritative.as_str()
            );
            resolved.intent.design_profile = authoritative;
        }
    }
}

fn enum_field<T: FromStr>(raw: &Record, aliases: &Aliases) -> Option<T> {
    first_present(raw, aliases, |value| as_text(value)?.parse().ok())
}

/// `"Technical_Minimal"`, `"technical minimal"` and `"technical-minimal"` all compare equal.
fn canonical_token(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognised value '{0}'")]
pub struct UnknownVariant(String);

impl FromStr for DesignProfile {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "technical-minimal" => Ok(DesignProfile::TechnicalMinimal),
            "product-thinker" => Ok(DesignProfile::ProductThinker),
            "product-designer" => Ok(DesignProfile::ProductDesigner),
            "executive-clean" => Ok(DesignProfile::ExecutiveClean),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl FromStr for Emphasis {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "low" => Ok(Emphasis::Low),
            "medium" => Ok(Emphasis::Medium),
            "high" => Ok(Emphasis::High),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl FromStr for VisualDensity {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "low" => Ok(VisualDensity::Low),
            "medium" => Ok(VisualDensity::Medium),
            "high" => Ok(VisualDensity::High),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl FromStr for SurfacePriority {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "primary" => Ok(SurfacePriority::Primary),
            "secondary" => Ok(SurfacePriority::Secondary),
            "supporting" => Ok(SurfacePriority::Supporting),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl FromStr for ProfileReconciliation {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "first-explicit" => Ok(ProfileReconciliation::FirstExplicit),
            "independent" => Ok(ProfileReconciliation::Independent),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}
