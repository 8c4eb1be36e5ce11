//! Design intent resolver: `(profile, intent) → DesignTokens`.
//!
//! Pure lookups over [`crate::design::tables`]. No fallback path exists; every
//! `(profile, density, priority)` triple has a complete bundle.

use serde::Serialize;

use crate::design::tables::{components, palette, spacing, typography};
use crate::portfolio::schema::{DesignIntent, DesignProfile, SurfacePriority};

/// Rendering directives for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignTokens {
    pub page_background: &'static str,
    pub font: &'static str,

    pub section_padding: &'static str,
    pub container_width: &'static str,

    pub card_style: &'static str,
    pub surface_background: &'static str,

    pub heading_style: &'static str,
    pub subheading_style: &'static str,
    pub heading_color: &'static str,
    pub body_style: &'static str,
    pub body_color: &'static str,
    pub muted_color: &'static str,
    pub accent_color: &'static str,

    pub badge_style: &'static str,
    pub button_primary: &'static str,
    pub button_secondary: &'static str,
    pub button_outline: &'static str,
    pub input_style: &'static str,
    pub avatar_style: &'static str,
    pub separator_style: &'static str,
    pub border_color: &'static str,
    pub accent_border_color: &'static str,

    pub gap: &'static str,
    pub padding: &'static str,
}

/// Tokens for the page wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageTokens {
    pub background: &'static str,
    pub font: &'static str,
    pub heading_h1: &'static str,
    pub heading_color: &'static str,
    /// Tailwind colour family of the accent.
    pub accent: &'static str,
}

/// Resolves the token bundle for one section from its own intent.
///
/// Under first-explicit reconciliation every section carries the page profile; under
/// independent reconciliation a section may look different from the page around it.
pub fn resolve_tokens(intent: &DesignIntent) -> DesignTokens {
    let profile = intent.design_profile;
    let palette = palette(profile);
    let typo = typography(profile);
    let comp = components(profile);
    let space = spacing(intent.visual_density);

    let surface_background = match intent.surface_priority {
        SurfacePriority::Primary => palette.bg.primary,
        SurfacePriority::Secondary => palette.bg.secondary,
        SurfacePriority::Supporting => palette.bg.supporting,
    };

    DesignTokens {
        page_background: palette.bg.page,
        font: typo.font,
        section_padding: space.section,
        container_width: space.container,
        card_style: comp.card,
        surface_background,
        heading_style: typo.h2,
        subheading_style: typo.h3,
        heading_color: palette.text.heading,
        body_style: typo.body,
        body_color: palette.text.body,
        muted_color: palette.text.muted,
        accent_color: palette.text.accent,
        badge_style: comp.badge,
        button_primary: comp.button_primary,
        button_secondary: comp.button_secondary,
        button_outline: comp.button_outline,
        input_style: comp.input,
        avatar_style: comp.avatar,
        separator_style: comp.separator,
        border_color: palette.border_default,
        accent_border_color: palette.border_accent,
        gap: space.gap,
        padding: space.padding,
    }
}

pub fn page_tokens(profile: DesignProfile) -> PageTokens {
    let palette = palette(profile);
    let typo = typography(profile);
    PageTokens {
        background: palette.bg.page,
        font: typo.font,
        heading_h1: typo.h1,
        heading_color: palette.text.heading,
        accent: palette.accent,
    }
}
