//! Render plan: what the page draws and with which tokens.
//!
//! Section renderers are thin; everything they need to decide is settled here. A
//! section the omission predicate marks empty is not in the plan at all.

use serde::Serialize;

use crate::design::tokens::{page_tokens, resolve_tokens, DesignTokens, PageTokens};
use crate::portfolio::schema::{DesignIntent, DesignProfile, PortfolioData, SectionKind};
use crate::render::initials::initials;

/// Navigation brand when the caller supplied no name.
pub const FALLBACK_BRAND: &str = "Portfolio";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvatarShape {
    RoundedSquare,
    Circle,
    Blob,
    Squircle,
}

impl AvatarShape {
    pub fn for_profile(profile: DesignProfile) -> Self {
        match profile {
            DesignProfile::TechnicalMinimal => AvatarShape::RoundedSquare,
            DesignProfile::ProductThinker => AvatarShape::Circle,
            DesignProfile::ProductDesigner => AvatarShape::Blob,
            DesignProfile::ExecutiveClean => AvatarShape::Squircle,
        }
    }
}

/// Decorative ring behind the avatar.
pub fn ring_gradient(profile: DesignProfile) -> &'static str {
    match profile {
        DesignProfile::TechnicalMinimal => "bg-gradient-to-br from-emerald-400 to-cyan-500",
        DesignProfile::ProductThinker => "bg-gradient-to-br from-blue-400 to-indigo-500",
        DesignProfile::ProductDesigner => "bg-gradient-to-br from-rose-400 to-orange-400",
        DesignProfile::ExecutiveClean => "bg-gradient-to-br from-amber-400 to-orange-400",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavModel {
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

/// Per-section extras that only some renderers need.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Decoration {
    Avatar {
        shape: AvatarShape,
        ring_gradient: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        initials: String,
    },
    /// One entry per testimonial, in order.
    AuthorInitials { initials: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub kind: SectionKind,
    pub design_intent: DesignIntent,
    pub tokens: DesignTokens,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<Decoration>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagePlan {
    pub design_profile: DesignProfile,
    pub page: PageTokens,
    pub nav: NavModel,
    pub sections: Vec<SectionView>,
}

pub fn plan_page(data: &PortfolioData) -> PagePlan {
    let profile = data.page_profile();
    let meta = data.meta.clone().unwrap_or_default();
    let display_name = meta
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    let sections = SectionKind::ALL
        .into_iter()
        .filter(|&kind| is_visible(data, kind, display_name.is_some()))
        .map(|kind| {
            let intent = data.design_intent(kind);
            SectionView {
                kind,
                design_intent: intent.clone(),
                tokens: resolve_tokens(intent),
                decoration: decoration(data, kind, profile, display_name),
            }
        })
        .collect();

    PagePlan {
        design_profile: profile,
        page: page_tokens(profile),
        nav: NavModel {
            brand: display_name
                .and_then(|n| n.split_whitespace().next())
                .unwrap_or(FALLBACK_BRAND)
                .to_string(),
            linkedin_url: meta.linkedin_url,
            resume_url: meta.resume_url,
        },
        sections,
    }
}

/// The avatar survives a missing image when initials can stand in for it.
fn is_visible(data: &PortfolioData, kind: SectionKind, has_display_name: bool) -> bool {
    match kind {
        SectionKind::ProfilePicture => has_display_name || !data.is_section_empty(kind),
        _ => !data.is_section_empty(kind),
    }
}

fn decoration(
    data: &PortfolioData,
    kind: SectionKind,
    profile: DesignProfile,
    display_name: Option<&str>,
) -> Option<Decoration> {
    match kind {
        SectionKind::ProfilePicture => Some(Decoration::Avatar {
            shape: AvatarShape::for_profile(profile),
            ring_gradient: ring_gradient(profile),
            image_url: data.profile_picture.content.image_url.clone(),
            initials: initials(display_name),
        }),
        SectionKind::Testimonials => Some(Decoration::AuthorInitials {
            initials: data
                .testimonials
                .content
                .testimonials
                .iter()
                .map(|t| initials(Some(t.author_name.as_str())))
                .collect(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::coerce::normalize;
    use crate::portfolio::intent::{CoercionOptions, ProfileReconciliation};
    use crate::portfolio::schema::PortfolioMeta;
    use serde_json::json;

    fn portfolio(raw: serde_json::Value) -> PortfolioData {
        normalize(&raw, &CoercionOptions::default())
    }

    fn kinds(plan: &PagePlan) -> Vec<SectionKind> {
        plan.sections.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_empty_portfolio_renders_no_sections() {
        let plan = plan_page(&portfolio(json!({})));
        assert!(plan.sections.is_empty());
        assert_eq!(plan.nav.brand, FALLBACK_BRAND);
    }

    #[test]
    fn test_empty_sections_are_omitted_in_order() {
        let plan = plan_page(&portfolio(json!({
            "get_in_touch": {"content": {"message": "Reach out"}},
            "about": {"content": {"text": "Hi"}},
            "awards": {"content": {"awards": []}},
            "introduction": {"content": {"headline": "Builder"}}
        })));
        assert_eq!(
            kinds(&plan),
            vec![SectionKind::Introduction, SectionKind::About, SectionKind::GetInTouch]
        );
    }

    #[test]
    fn test_avatar_kept_for_initials_when_name_known() {
        let mut data = portfolio(json!({}));
        data.meta = Some(PortfolioMeta {
            name: Some("Jane Q. Doe".to_string()),
            ..PortfolioMeta::default()
        });
        let plan = plan_page(&data);
        assert_eq!(kinds(&plan), vec![SectionKind::ProfilePicture]);
        assert_eq!(plan.nav.brand, "Jane");
        match &plan.sections[0].decoration {
            Some(Decoration::Avatar { initials, image_url, shape, .. }) => {
                assert_eq!(initials, "JQ");
                assert!(image_url.is_none());
                assert_eq!(*shape, AvatarShape::Circle);
            }
            other => panic!("unexpected decoration {other:?}"),
        }
    }

    #[test]
    fn test_avatar_with_image_but_no_name_uses_fallback_initials() {
        let plan = plan_page(&portfolio(json!({
            "profile_picture": {"content": {"image_url": "https://img"}}
        })));
        match &plan.sections[0].decoration {
            Some(Decoration::Avatar { initials, .. }) => assert_eq!(initials, "U"),
            other => panic!("unexpected decoration {other:?}"),
        }
    }

    #[test]
    fn test_first_explicit_profile_styles_every_section() {
        let plan = plan_page(&portfolio(json!({
            "introduction": {"content": {"headline": "x"},
                             "design_intent": {"design_profile": "executive-clean", "visual_density": "low"}},
            "about": {"content": {"text": "y"}}
        })));
        assert_eq!(plan.design_profile, DesignProfile::ExecutiveClean);
        assert_eq!(plan.page.font, "font-serif");
        assert!(plan.sections.iter().all(|s| s.tokens.font == "font-serif"));
        assert_eq!(plan.sections[0].tokens.section_padding, "py-24");
        assert_eq!(plan.sections[1].tokens.section_padding, "py-16");
    }

    #[test]
    fn test_independent_sections_keep_their_own_tokens() {
        let options = CoercionOptions {
            reconciliation: ProfileReconciliation::Independent,
            ..CoercionOptions::default()
        };
        let plan = plan_page(&normalize(
            &json!({
                "introduction": {"content": {"headline": "x"},
                                 "design_intent": {"design_profile": "executive-clean"}},
                "about": {"content": {"text": "y"},
                          "design_intent": {"design_profile": "technical-minimal"}}
            }),
            &options,
        ));
        assert_eq!(plan.design_profile, DesignProfile::ExecutiveClean);
        assert_eq!(plan.page.font, "font-serif");
        assert_eq!(plan.sections[0].tokens.font, "font-serif");
        assert_eq!(plan.sections[1].tokens.font, "font-mono");
    }

    #[test]
    fn test_testimonial_author_initials() {
        let plan = plan_page(&portfolio(json!({
            "testimonials": {"content": {"testimonials": [
                {"quote": "Sharp.", "author_name": "ana lopez"},
                {"quote": "Kind.", "author_name": ""}
            ]}}
        })));
        assert_eq!(
            plan.sections[0].decoration,
            Some(Decoration::AuthorInitials {
                initials: vec!["AL".to_string(), "U".to_string()]
            })
        );
    }
}
