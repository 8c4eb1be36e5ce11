//! Canonical portfolio data model.
//!
//! This is the wire contract with the generative model (it is prompted to emit exactly
//! this shape), the session persistence format, and the input to the render plan.
//! Values are built by [`crate::portfolio::coerce::normalize`]; nothing mutates them
//! afterwards except the profile image override.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Design intent
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualDensity {
    Low,
    Medium,
    High,
}

/// One of the four page-wide visual identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesignProfile {
    TechnicalMinimal,
    ProductThinker,
    ProductDesigner,
    ExecutiveClean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfacePriority {
    Primary,
    Secondary,
    Supporting,
}

impl DesignProfile {
    #[cfg(test)]
    pub const ALL: [DesignProfile; 4] = [
        DesignProfile::TechnicalMinimal,
        DesignProfile::ProductThinker,
        DesignProfile::ProductDesigner,
        DesignProfile::ExecutiveClean,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DesignProfile::TechnicalMinimal => "technical-minimal",
            DesignProfile::ProductThinker => "product-thinker",
            DesignProfile::ProductDesigner => "product-designer",
            DesignProfile::ExecutiveClean => "executive-clean",
        }
    }
}

impl VisualDensity {
    #[cfg(test)]
    pub const ALL: [VisualDensity; 3] = [VisualDensity::Low, VisualDensity::Medium, VisualDensity::High];
}

impl SurfacePriority {
    #[cfg(test)]
    pub const ALL: [SurfacePriority; 3] = [
        SurfacePriority::Primary,
        SurfacePriority::Secondary,
        SurfacePriority::Supporting,
    ];
}

/// Per-section rendering parameters chosen by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignIntent {
    pub emphasis: Emphasis,
    pub visual_density: VisualDensity,
    pub design_profile: DesignProfile,
    pub surface_priority: SurfacePriority,
    /// Icon or logo identifiers.
    #[serde(default)]
    pub visual_elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<C> {
    pub content: C,
    pub design_intent: DesignIntent,
}

// ────────────────────────────────────────────────────────────────────────────
// Section content
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePictureContent {
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntroductionContent {
    pub headline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsContent {
    pub groups: Vec<SkillGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsContent {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo_url: Option<String>,
    pub role: String,
    pub start_date: String,
    /// `"Present"` for current roles.
    pub end_date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceContent {
    pub experiences: Vec<WorkExperience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// What the award signals about the person.
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwardsContent {
    pub awards: Vec<Award>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetInTouchContent {
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Omission rule
// ────────────────────────────────────────────────────────────────────────────

/// Section payloads know when they carry nothing worth drawing.
///
/// Coercion always produces every section, so renderers consult this predicate
/// instead of checking fields themselves. An empty section renders no chrome at all.
pub trait SectionContent {
    fn is_empty(&self) -> bool;
}

impl SectionContent for ProfilePictureContent {
    fn is_empty(&self) -> bool {
        self.image_url.is_none()
    }
}

impl SectionContent for IntroductionContent {
    fn is_empty(&self) -> bool {
        self.headline.trim().is_empty()
    }
}

impl SectionContent for AboutContent {
    fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl SectionContent for SkillsContent {
    fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.skills.is_empty())
    }
}

impl SectionContent for ProjectsContent {
    fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl SectionContent for WorkExperienceContent {
    fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }
}

impl SectionContent for AwardsContent {
    fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }
}

impl SectionContent for TestimonialsContent {
    fn is_empty(&self) -> bool {
        self.testimonials.is_empty()
    }
}

impl SectionContent for GetInTouchContent {
    fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}

impl<C: SectionContent> Section<C> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Root aggregate
// ────────────────────────────────────────────────────────────────────────────

/// Navigation metadata supplied by the caller, never by the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile_picture: Section<ProfilePictureContent>,
    pub introduction: Section<IntroductionContent>,
    pub about: Section<AboutContent>,
    pub skills: Section<SkillsContent>,
    pub projects: Section<ProjectsContent>,
    pub work_experience: Section<WorkExperienceContent>,
    pub awards: Section<AwardsContent>,
    pub testimonials: Section<TestimonialsContent>,
    pub get_in_touch: Section<GetInTouchContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PortfolioMeta>,
}

/// The nine fixed sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    ProfilePicture,
    Introduction,
    About,
    Skills,
    Projects,
    WorkExperience,
    Awards,
    Testimonials,
    GetInTouch,
}

impl SectionKind {
    pub const ALL: [SectionKind; 9] = [
        SectionKind::ProfilePicture,
        SectionKind::Introduction,
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::WorkExperience,
        SectionKind::Awards,
        SectionKind::Testimonials,
        SectionKind::GetInTouch,
    ];

    /// Canonical top-level key in the generated JSON.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::ProfilePicture => "profile_picture",
            SectionKind::Introduction => "introduction",
            SectionKind::About => "about",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::WorkExperience => "work_experience",
            SectionKind::Awards => "awards",
            SectionKind::Testimonials => "testimonials",
            SectionKind::GetInTouch => "get_in_touch",
        }
    }

    /// Surface priority used when the generator leaves it unset. Fixed table.
    pub fn default_priority(self) -> SurfacePriority {
        match self {
            SectionKind::Introduction
            | SectionKind::About
            | SectionKind::Projects
            | SectionKind::WorkExperience => SurfacePriority::Primary,
            SectionKind::ProfilePicture
            | SectionKind::Skills
            | SectionKind::Testimonials
            | SectionKind::GetInTouch => SurfacePriority::Secondary,
            SectionKind::Awards => SurfacePriority::Supporting,
        }
    }
}

impl PortfolioData {
    pub fn design_intent(&self, kind: SectionKind) -> &DesignIntent {
        match kind {
            SectionKind::ProfilePicture => &self.profile_picture.design_intent,
            SectionKind::Introduction => &self.introduction.design_intent,
            SectionKind::About => &self.about.design_intent,
            SectionKind::Skills => &self.skills.design_intent,
            SectionKind::Projects => &self.projects.design_intent,
            SectionKind::WorkExperience => &self.work_experience.design_intent,
            SectionKind::Awards => &self.awards.design_intent,
            SectionKind::Testimonials => &self.testimonials.design_intent,
            SectionKind::GetInTouch => &self.get_in_touch.design_intent,
        }
    }

    /// Omission predicate by section kind.
    pub fn is_section_empty(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::ProfilePicture => self.profile_picture.is_empty(),
            SectionKind::Introduction => self.introduction.is_empty(),
            SectionKind::About => self.about.is_empty(),
            SectionKind::Skills => self.skills.is_empty(),
            SectionKind::Projects => self.projects.is_empty(),
            SectionKind::WorkExperience => self.work_experience.is_empty(),
            SectionKind::Awards => self.awards.is_empty(),
            SectionKind::Testimonials => self.testimonials.is_empty(),
            SectionKind::GetInTouch => self.get_in_touch.is_empty(),
        }
    }

    /// Page-wide profile, read from the introduction section.
    pub fn page_profile(&self) -> DesignProfile {
        self.introduction.design_intent.design_profile
    }

    /// Replaces the generated image with a caller-supplied one.
    ///
    /// The only post-construction mutation: the generator cannot know the real photo.
    pub fn override_profile_image(&mut self, image_url: Option<&str>) {
        if let Some(url) = image_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.profile_picture.content.image_url = Some(url.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_profile_serializes_kebab_case() {
        let json = serde_json::to_string(&DesignProfile::TechnicalMinimal).unwrap();
        assert_eq!(json, "\"technical-minimal\"");
        let back: DesignProfile = serde_json::from_str("\"executive-clean\"").unwrap();
        assert_eq!(back, DesignProfile::ExecutiveClean);
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for profile in DesignProfile::ALL {
            let json = serde_json::to_value(profile).unwrap();
            assert_eq!(json.as_str(), Some(profile.as_str()));
        }
    }

    #[test]
    fn test_section_key_matches_serde_name() {
        for kind in SectionKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json.as_str(), Some(kind.key()));
        }
    }

    #[test]
    fn test_default_priority_table() {
        assert_eq!(SectionKind::Introduction.default_priority(), SurfacePriority::Primary);
        assert_eq!(SectionKind::Projects.default_priority(), SurfacePriority::Primary);
        assert_eq!(SectionKind::Skills.default_priority(), SurfacePriority::Secondary);
        assert_eq!(SectionKind::GetInTouch.default_priority(), SurfacePriority::Secondary);
        assert_eq!(SectionKind::Awards.default_priority(), SurfacePriority::Supporting);
    }

    #[test]
    fn test_skills_with_only_empty_groups_is_empty() {
        let content = SkillsContent {
            groups: vec![SkillGroup {
                category: "Languages".to_string(),
                skills: vec![],
            }],
        };
        assert!(content.is_empty());
    }

    #[test]
    fn test_whitespace_about_is_empty() {
        assert!(AboutContent { text: "  \n".to_string() }.is_empty());
        assert!(!AboutContent { text: "Builder.".to_string() }.is_empty());
    }

    #[test]
    fn test_profile_picture_without_url_is_empty() {
        assert!(ProfilePictureContent { image_url: None }.is_empty());
        assert!(!ProfilePictureContent {
            image_url: Some("https://img".to_string())
        }
        .is_empty());
    }
}
