//! Field-name alternates the generator has been observed to substitute.
//!
//! Data only. Canonical key first; alternates in the order they are tried.

use crate::lookup::Aliases;
use crate::portfolio::schema::SectionKind;

/// Top-level key for each section.
pub fn section(kind: SectionKind) -> Aliases {
    let alternates: &'static [&'static str] = match kind {
        SectionKind::ProfilePicture => &["profilePicture", "avatar"],
        SectionKind::Introduction => &["intro", "hero"],
        SectionKind::About => &["about_me", "bio"],
        SectionKind::Skills => &["technical_skills"],
        SectionKind::Projects => &["featured_projects"],
        SectionKind::WorkExperience => &["workExperience", "experience"],
        SectionKind::Awards => &["awards_recognition", "awards_and_recognition", "recognition"],
        SectionKind::Testimonials => &["recommendations"],
        SectionKind::GetInTouch => &["getInTouch", "contact"],
    };
    Aliases::new(kind.key(), alternates)
}

pub const CONTENT: Aliases = Aliases::new("content", &[]);
pub const DESIGN_INTENT: Aliases = Aliases::new("design_intent", &["designIntent", "design"]);

pub mod intent {
    use super::Aliases;

    pub const EMPHASIS: Aliases = Aliases::new("emphasis", &[]);
    pub const VISUAL_DENSITY: Aliases = Aliases::new("visual_density", &["density"]);
    pub const DESIGN_PROFILE: Aliases = Aliases::new("design_profile", &["profile"]);
    pub const SURFACE_PRIORITY: Aliases = Aliases::new("surface_priority", &["priority"]);
    pub const VISUAL_ELEMENTS: Aliases = Aliases::new("visual_elements", &["elements", "icons"]);
}

pub mod profile_picture {
    use super::Aliases;

    pub const IMAGE_URL: Aliases = Aliases::new("image_url", &["imageUrl", "url", "src"]);
}

pub mod introduction {
    use super::Aliases;

    pub const HEADLINE: Aliases = Aliases::new("headline", &["tagline", "title", "text"]);
}

pub mod about {
    use super::Aliases;

    pub const TEXT: Aliases = Aliases::new("text", &["description", "summary", "body"]);
}

pub mod skills {
    use super::Aliases;

    pub const GROUPS: Aliases = Aliases::new("groups", &["technical_skills", "skill_groups", "categories"]);
    /// Flat skill list directly under content, with no grouping.
    pub const FLAT: Aliases = Aliases::new("skills", &["items"]);

    pub const GROUP_CATEGORY: Aliases = Aliases::new("category", &["name", "title"]);
    pub const GROUP_SKILLS: Aliases = Aliases::new("skills", &["items"]);

    pub const NAME: Aliases = Aliases::new("name", &["skill", "title"]);
    pub const LOGO_URL: Aliases = Aliases::new("logo_url", &["logo", "icon_url", "icon"]);
    pub const CATEGORY: Aliases = Aliases::new("category", &[]);
}

pub mod projects {
    use super::Aliases;

    pub const PROJECTS: Aliases = Aliases::new("projects", &["items"]);

    pub const TITLE: Aliases = Aliases::new("title", &["name"]);
    pub const DESCRIPTION: Aliases = Aliases::new("description", &["summary", "text"]);
    pub const OUTCOMES: Aliases = Aliases::new("outcomes", &["key_outcomes", "results", "impact"]);
    pub const TECHNOLOGIES: Aliases = Aliases::new("technologies", &["tech_stack", "tech", "stack"]);
}

pub mod work_experience {
    use super::Aliases;

    pub const EXPERIENCES: Aliases = Aliases::new("experiences", &["positions", "roles", "items"]);

    pub const COMPANY: Aliases = Aliases::new("company", &["company_name", "organization"]);
    pub const COMPANY_LOGO_URL: Aliases = Aliases::new("company_logo_url", &["logo_url", "logo"]);
    pub const ROLE: Aliases = Aliases::new("role", &["title", "position"]);
    pub const START_DATE: Aliases = Aliases::new("start_date", &["startDate", "starts_at", "from"]);
    pub const END_DATE: Aliases = Aliases::new("end_date", &["endDate", "ends_at", "to"]);
    /// Combined `"start - end"` range, used only when the split fields are absent.
    pub const DURATION: Aliases = Aliases::new("duration", &["period", "dates"]);
    pub const DESCRIPTION: Aliases = Aliases::new("description", &["summary"]);
    pub const HIGHLIGHTS: Aliases = Aliases::new("highlights", &["key_achievements", "achievements"]);
}

pub mod awards {
    use super::Aliases;

    pub const AWARDS: Aliases = Aliases::new("awards", &["items", "recognitions"]);

    pub const TITLE: Aliases = Aliases::new("title", &["name"]);
    pub const ISSUER: Aliases = Aliases::new("issuer", &["organization", "awarded_by"]);
    pub const DATE: Aliases = Aliases::new("date", &["year", "duration"]);
    pub const INTERPRETATION: Aliases =
        Aliases::new("interpretation", &["significance", "description", "summary"]);
}

pub mod testimonials {
    use super::Aliases;

    pub const TESTIMONIALS: Aliases = Aliases::new("testimonials", &["recommendations", "items"]);

    pub const QUOTE: Aliases = Aliases::new("quote", &["text", "summary"]);
    pub const AUTHOR_NAME: Aliases = Aliases::new("author_name", &["author", "name"]);
    pub const AUTHOR_TITLE: Aliases = Aliases::new("author_title", &["title"]);
    pub const AUTHOR_COMPANY: Aliases = Aliases::new("author_company", &["company"]);
    pub const RELATIONSHIP: Aliases = Aliases::new("relationship", &["relation"]);
}

pub mod get_in_touch {
    use super::Aliases;

    pub const MESSAGE: Aliases = Aliases::new("message", &["text", "cta", "description"]);
}
