//! Generation response normalizer.
//!
//! Maps whatever JSON the generator produced onto [`PortfolioData`]. Total over every
//! JSON value: renamed keys are resolved through [`crate::portfolio::aliases`], irregular
//! shapes are rebuilt, and everything missing is defaulted. Shape problems are never
//! errors here; only JSON that failed to parse at all is rejected, and that happens
//! upstream in the generation pipeline.

use serde_json::Value;
use tracing::debug;

use crate::lookup::{
    as_text, list_field, record_field, string_field, string_list_field, Aliases, Record,
};
use crate::portfolio::aliases::{
    self, awards, get_in_touch, introduction, profile_picture, projects, skills, testimonials,
    work_experience,
};
use crate::portfolio::intent::{default_intent, reconcile_profiles, CoercionOptions};
use crate::portfolio::schema::{
    AboutContent, Award, AwardsContent, GetInTouchContent, IntroductionContent, PortfolioData,
    ProfilePictureContent, Project, ProjectsContent, Section, SectionKind, Skill, SkillGroup,
    SkillsContent, Testimonial, TestimonialsContent, WorkExperience, WorkExperienceContent,
};

/// End date for roles with no recorded end.
pub const PRESENT: &str = "Present";
/// Category given to skills that arrive as bare strings or without a category.
pub const UNCATEGORISED_SKILL: &str = "other";
/// Group label for skills that arrive outside any group.
pub const LOOSE_SKILLS_GROUP: &str = "Other";

/// Separators tried, in order, when splitting a combined `"start - end"` range.
/// These come before bare dashes so ISO-style dates (`2019-03 - 2022-01`) split correctly.
const SPACED_DURATION_SEPARATORS: &[&str] = &[" - ", " – ", " — ", " to "];
const DASHES: [char; 3] = ['-', '–', '—'];

/// Where one section's raw pieces were found in the root object.
#[derive(Clone, Copy, Default)]
struct Located<'a> {
    content: Option<&'a Value>,
    intent: Option<&'a Record>,
}

/// Coerces a raw generator response into a complete [`PortfolioData`].
///
/// Never fails. `meta` is left unset; it belongs to the caller.
pub fn normalize(raw: &Value, options: &CoercionOptions) -> PortfolioData {
    let empty = Record::new();
    let root = raw.as_object().unwrap_or(&empty);

    let located = SectionKind::ALL.map(|kind| locate(root, kind));

    let mut intents = SectionKind::ALL.map(|kind| {
        let idx = kind as usize;
        default_intent(
            located[idx].intent,
            kind.default_priority(),
            options.fallback_profile,
        )
    });
    let explicit = intents.iter().filter(|r| r.explicit_profile).count();
    reconcile_profiles(&mut intents, options.reconciliation);

    let [pp_intent, intro_intent, about_intent, skills_intent, projects_intent, work_intent, awards_intent, testimonials_intent, contact_intent] =
        intents.map(|r| r.intent);
    let [pp, intro, about, skill_groups, project_list, work, award_list, testimonial_list, contact] =
        located.map(|l| l.content);

    let data = PortfolioData {
        profile_picture: Section {
            content: ProfilePictureContent {
                image_url: content_string(pp, &profile_picture::IMAGE_URL),
            },
            design_intent: pp_intent,
        },
        introduction: Section {
            content: IntroductionContent {
                headline: content_string(intro, &introduction::HEADLINE).unwrap_or_default(),
            },
            design_intent: intro_intent,
        },
        about: Section {
            content: AboutContent {
                text: content_string(about, &aliases::about::TEXT).unwrap_or_default(),
            },
            design_intent: about_intent,
        },
        skills: Section {
            content: SkillsContent {
                groups: coerce_skill_groups(skill_groups),
            },
            design_intent: skills_intent,
        },
        projects: Section {
            content: ProjectsContent {
                projects: content_list(project_list, &projects::PROJECTS)
                    .iter()
                    .filter_map(coerce_project)
                    .collect(),
            },
            design_intent: projects_intent,
        },
        work_experience: Section {
            content: WorkExperienceContent {
                experiences: content_list(work, &work_experience::EXPERIENCES)
                    .iter()
                    .filter_map(Value::as_object)
                    .map(coerce_experience)
                    .collect(),
            },
            design_intent: work_intent,
        },
        awards: Section {
            content: AwardsContent {
                awards: content_list(award_list, &awards::AWARDS)
                    .iter()
                    .filter_map(coerce_award)
                    .collect(),
            },
            design_intent: awards_intent,
        },
        testimonials: Section {
            content: TestimonialsContent {
                testimonials: content_list(testimonial_list, &testimonials::TESTIMONIALS)
                    .iter()
                    .filter_map(coerce_testimonial)
                    .collect(),
            },
            design_intent: testimonials_intent,
        },
        get_in_touch: Section {
            content: GetInTouchContent {
                message: content_string(contact, &get_in_touch::MESSAGE).unwrap_or_default(),
            },
            design_intent: contact_intent,
        },
        meta: None,
    };

    debug!(
        "Normalized portfolio: {} explicit design profiles, page profile {}",
        explicit,
        data.page_profile().as_str()
    );
    data
}

// ────────────────────────────────────────────────────────────────────────────
// Section location
// ────────────────────────────────────────────────────────────────────────────

/// Finds a section by its canonical or alternate key.
///
/// A section record without a `content` key is treated as flattened: the record itself
/// is the content. Scalars and arrays stand in for the content directly. An alias that
/// holds nothing usable (`{}`, `{"content": {}}`) yields to a later alias that does.
fn locate(root: &Record, kind: SectionKind) -> Located<'_> {
    let mut found = aliases::section(kind)
        .keys()
        .filter_map(|key| root.get(key))
        .filter(|v| !v.is_null())
        .map(split_section);

    let first = found.next().unwrap_or_default();
    if has_substance(first.content) {
        return first;
    }
    found.find(|l| has_substance(l.content)).unwrap_or(first)
}

fn split_section(section: &Value) -> Located<'_> {
    match section {
        Value::Object(record) => Located {
            content: aliases::CONTENT
                .keys()
                .filter_map(|key| record.get(key))
                .find(|v| !v.is_null())
                .or(Some(section)),
            intent: record_field(record, &aliases::DESIGN_INTENT),
        },
        other => Located {
            content: Some(other),
            intent: None,
        },
    }
}

/// False for missing, blank and empty content. A record carrying only a design intent
/// counts as empty.
fn has_substance(content: Option<&Value>) -> bool {
    match content {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(record)) => record
            .keys()
            .any(|key| !aliases::DESIGN_INTENT.keys().any(|alias| alias == key.as_str())),
        Some(_) => true,
    }
}

fn content_string(content: Option<&Value>, field: &Aliases) -> Option<String> {
    match content? {
        Value::Object(record) => string_field(record, field),
        scalar => as_text(scalar),
    }
}

fn content_list<'a>(content: Option<&'a Value>, field: &Aliases) -> &'a [Value] {
    match content {
        Some(Value::Array(items)) => items,
        Some(Value::Object(record)) => list_field(record, field)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Builds skill groups from grouped, flat, or mixed input.
///
/// Items carrying a skills list are groups; anything else is a loose skill. Loose
/// skills are collected into one trailing group.
fn coerce_skill_groups(content: Option<&Value>) -> Vec<SkillGroup> {
    let mut items = content_list(content, &skills::GROUPS);
    if items.is_empty() {
        items = content_list(content, &skills::FLAT);
    }

    let mut groups = Vec::new();
    let mut loose = Vec::new();
    for item in items {
        match item.as_object() {
            Some(record) if is_skill_group(record) => groups.push(coerce_skill_group(record)),
            _ => loose.extend(coerce_skill(item)),
        }
    }

    if !loose.is_empty() {
        groups.push(SkillGroup {
            category: LOOSE_SKILLS_GROUP.to_string(),
            skills: loose,
        });
    }
    groups
}

fn is_skill_group(record: &Record) -> bool {
    skills::GROUP_SKILLS
        .keys()
        .any(|key| record.get(key).is_some_and(Value::is_array))
}

fn coerce_skill_group(record: &Record) -> SkillGroup {
    let skills = list_field(record, &skills::GROUP_SKILLS)
        .map(|items| items.iter().filter_map(coerce_skill).collect())
        .unwrap_or_default();
    SkillGroup {
        category: string_field(record, &skills::GROUP_CATEGORY).unwrap_or_default(),
        skills,
    }
}

/// Bare strings become `{name, category: "other"}`. Nameless skills are dropped.
fn coerce_skill(item: &Value) -> Option<Skill> {
    match item {
        Value::Object(record) => Some(Skill {
            name: string_field(record, &skills::NAME)?,
            logo_url: string_field(record, &skills::LOGO_URL),
            category: string_field(record, &skills::CATEGORY)
                .unwrap_or_else(|| UNCATEGORISED_SKILL.to_string()),
        }),
        scalar => Some(Skill {
            name: as_text(scalar)?,
            logo_url: None,
            category: UNCATEGORISED_SKILL.to_string(),
        }),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// List entries
// ────────────────────────────────────────────────────────────────────────────

fn coerce_project(item: &Value) -> Option<Project> {
    let Value::Object(record) = item else {
        return Some(Project {
            title: as_text(item)?,
            description: String::new(),
            outcomes: None,
            technologies: None,
        });
    };
    Some(Project {
        title: string_field(record, &projects::TITLE).unwrap_or_default(),
        description: string_field(record, &projects::DESCRIPTION).unwrap_or_default(),
        outcomes: string_list_field(record, &projects::OUTCOMES),
        technologies: string_list_field(record, &projects::TECHNOLOGIES),
    })
}

fn coerce_experience(record: &Record) -> WorkExperience {
    let (duration_start, duration_end) = string_field(record, &work_experience::DURATION)
        .map(|d| split_duration(&d))
        .unwrap_or_default();

    WorkExperience {
        company: string_field(record, &work_experience::COMPANY).unwrap_or_default(),
        company_logo_url: string_field(record, &work_experience::COMPANY_LOGO_URL),
        role: string_field(record, &work_experience::ROLE).unwrap_or_default(),
        start_date: string_field(record, &work_experience::START_DATE)
            .or(duration_start)
            .unwrap_or_default(),
        end_date: string_field(record, &work_experience::END_DATE)
            .or(duration_end)
            .unwrap_or_else(|| PRESENT.to_string()),
        description: string_field(record, &work_experience::DESCRIPTION).unwrap_or_default(),
        highlights: string_list_field(record, &work_experience::HIGHLIGHTS),
    }
}

/// Splits `"2019 - 2022"` into its halves, trimmed. A range with no separator is
/// all start; a blank half is `None`.
///
/// An unspaced dash only separates when it is the sole dash in the string, so a bare
/// date such as `2019-03` stays whole.
pub fn split_duration(duration: &str) -> (Option<String>, Option<String>) {
    let non_blank = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };
    for sep in SPACED_DURATION_SEPARATORS {
        if let Some((start, end)) = duration.split_once(sep) {
            return (non_blank(start), non_blank(end));
        }
    }
    let is_dash = |c: char| DASHES.contains(&c);
    if duration.chars().filter(|&c| is_dash(c)).count() == 1 {
        if let Some((start, end)) = duration.split_once(is_dash) {
            return (non_blank(start), non_blank(end));
        }
    }
    (non_blank(duration), None)
}

fn coerce_award(item: &Value) -> Option<Award> {
    let Value::Object(record) = item else {
        return Some(Award {
            title: as_text(item)?,
            issuer: None,
            date: None,
            interpretation: String::new(),
        });
    };
    Some(Award {
        title: string_field(record, &awards::TITLE).unwrap_or_default(),
        issuer: string_field(record, &awards::ISSUER),
        date: string_field(record, &awards::DATE),
        interpretation: string_field(record, &awards::INTERPRETATION).unwrap_or_default(),
    })
}

fn coerce_testimonial(item: &Value) -> Option<Testimonial> {
    let Value::Object(record) = item else {
        return Some(Testimonial {
            quote: as_text(item)?,
            author_name: String::new(),
            author_title: None,
            author_company: None,
            relationship: None,
        });
    };
    Some(Testimonial {
        quote: string_field(record, &testimonials::QUOTE).unwrap_or_default(),
        author_name: string_field(record, &testimonials::AUTHOR_NAME).unwrap_or_default(),
        author_title: string_field(record, &testimonials::AUTHOR_TITLE),
        author_company: string_field(record, &testimonials::AUTHOR_COMPANY),
        relationship: string_field(record, &testimonials::RELATIONSHIP),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::intent::{ProfileReconciliation, DEFAULT_DESIGN_PROFILE};
    use crate::portfolio::schema::{DesignProfile, Emphasis, SurfacePriority, VisualDensity};
    use serde_json::json;

    fn run(raw: Value) -> PortfolioData {
        normalize(&raw, &CoercionOptions::default())
    }

    fn to_raw_json(data: &PortfolioData) -> Value {
        serde_json::to_value(data).unwrap()
    }

    fn rich_response() -> Value {
        json!({
            "profile_picture": {"content": {"image_url": "https://cdn.example/me.png"}},
            "introduction": {
                "content": {"headline": "I turn messy data into calm systems."},
                "design_intent": {"emphasis": "high", "visual_density": "low",
                                  "design_profile": "technical-minimal", "surface_priority": "primary",
                                  "visual_elements": ["terminal"]}
            },
            "about": {"content": {"description": "Backend engineer who likes boring tech."}},
            "skills": {"content": {"technical_skills": [
                {"category": "Languages", "items": ["Rust", {"name": "Go", "logo_url": "https://cdn.simpleicons.org/go"}]}
            ]}},
            "projects": {"content": {"projects": [
                {"name": "Ledger", "summary": "Double-entry store", "key_outcomes": ["0 drift"], "tech_stack": ["Postgres"]}
            ]}},
            "work_experience": {"content": {"positions": [
                {"company_name": "Acme", "title": "Staff Engineer", "duration": "2019 - 2022",
                 "description": "Owned billing.", "key_achievements": ["Cut costs 30%"]},
                {"company": "Initech", "role": "Engineer", "start_date": "2022"}
            ]}},
            "awards_recognition": {"content": {"awards": [
                {"name": "Hackathon Winner", "organization": "HP", "year": 2019, "significance": "Ships under pressure"}
            ]}},
            "testimonials": {"content": {"testimonials": [
                {"quote": "Great teammate.", "author": "Ana Lopez", "title": "EM", "company": "Acme"}
            ]}},
            "get_in_touch": {"content": {"message": "Say hi."}}
        })
    }

    // ── totality ────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_object_yields_fully_defaulted_portfolio() {
        let data = run(json!({}));
        assert!(data.profile_picture.content.image_url.is_none());
        assert_eq!(data.introduction.content.headline, "");
        assert_eq!(data.about.content.text, "");
        assert!(data.skills.content.groups.is_empty());
        assert!(data.projects.content.projects.is_empty());
        assert!(data.work_experience.content.experiences.is_empty());
        assert!(data.awards.content.awards.is_empty());
        assert!(data.testimonials.content.testimonials.is_empty());
        assert_eq!(data.get_in_touch.content.message, "");
        assert!(data.meta.is_none());
        for kind in SectionKind::ALL {
            assert!(data.is_section_empty(kind), "{:?} should be empty", kind);
        }
    }

    #[test]
    fn test_non_object_roots_are_treated_as_empty() {
        for raw in [json!(null), json!([1, 2, 3]), json!("text"), json!(42)] {
            assert_eq!(run(raw), run(json!({})));
        }
    }

    #[test]
    fn test_wrong_types_everywhere_do_not_panic() {
        let data = run(json!({
            "profile_picture": [],
            "introduction": {"content": 17},
            "about": {"content": {"text": {"nested": true}}},
            "skills": {"content": {"groups": "Rust, Go"}},
            "projects": {"content": {"projects": {"title": "not a list"}}},
            "work_experience": {"content": {"experiences": [null, 3, "x", {"role": ["a"]}]}},
            "awards": {"content": {"awards": [[]]}, "design_intent": "loud"},
            "testimonials": true,
            "get_in_touch": {"content": null, "design_intent": {"emphasis": 3}}
        }));
        assert_eq!(data.introduction.content.headline, "17");
        assert_eq!(data.about.content.text, "");
        assert!(data.skills.content.groups.is_empty());
        assert!(data.projects.content.projects.is_empty());
        assert_eq!(data.work_experience.content.experiences.len(), 1);
        assert_eq!(data.work_experience.content.experiences[0].role, "");
        assert!(data.awards.content.awards.is_empty());
        assert_eq!(data.get_in_touch.design_intent.emphasis, Emphasis::Medium);
    }

    // ── idempotence ─────────────────────────────────────────────────────────

    #[test]
    fn test_renormalizing_normalized_output_is_stable() {
        for raw in [json!({}), rich_response()] {
            let once = run(raw);
            let twice = run(to_raw_json(&once));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_idempotent_under_independent_policy() {
        let options = CoercionOptions {
            fallback_profile: DesignProfile::ExecutiveClean,
            reconciliation: ProfileReconciliation::Independent,
        };
        let once = normalize(&rich_response(), &options);
        let twice = normalize(&to_raw_json(&once), &options);
        assert_eq!(once, twice);
    }

    // ── alternate keys ──────────────────────────────────────────────────────

    #[test]
    fn test_about_text_and_description_are_equivalent() {
        assert_eq!(
            run(json!({"about": {"content": {"text": "T"}}})),
            run(json!({"about": {"content": {"description": "T"}}}))
        );
    }

    #[test]
    fn test_awards_section_under_awards_recognition() {
        let data = run(rich_response());
        let award = &data.awards.content.awards[0];
        assert_eq!(award.title, "Hackathon Winner");
        assert_eq!(award.issuer.as_deref(), Some("HP"));
        assert_eq!(award.date.as_deref(), Some("2019"));
        assert_eq!(award.interpretation, "Ships under pressure");
    }

    #[test]
    fn test_empty_canonical_section_yields_to_alternate() {
        let data = run(json!({
            "awards": {},
            "awards_recognition": {"content": {"awards": [{"title": "X"}]}}
        }));
        assert_eq!(data.awards.content.awards.len(), 1);
        assert_eq!(data.awards.content.awards[0].title, "X");

        let data = run(json!({
            "about": {"content": {}, "design_intent": {"emphasis": "low"}},
            "about_me": {"content": {"text": "Hi"}}
        }));
        assert_eq!(data.about.content.text, "Hi");
    }

    #[test]
    fn test_contentless_section_keeps_its_intent() {
        let data = run(json!({"about": {"design_intent": {"emphasis": "low"}}}));
        assert_eq!(data.about.content.text, "");
        assert_eq!(data.about.design_intent.emphasis, Emphasis::Low);
    }

    #[test]
    fn test_project_alternates() {
        let data = run(rich_response());
        let project = &data.projects.content.projects[0];
        assert_eq!(project.title, "Ledger");
        assert_eq!(project.description, "Double-entry store");
        assert_eq!(project.outcomes, Some(vec!["0 drift".to_string()]));
        assert_eq!(project.technologies, Some(vec!["Postgres".to_string()]));
    }

    #[test]
    fn test_experience_alternates() {
        let data = run(rich_response());
        let exp = &data.work_experience.content.experiences[0];
        assert_eq!(exp.company, "Acme");
        assert_eq!(exp.role, "Staff Engineer");
        assert_eq!(exp.highlights, Some(vec!["Cut costs 30%".to_string()]));
    }

    #[test]
    fn test_testimonial_alternates() {
        let data = run(rich_response());
        let t = &data.testimonials.content.testimonials[0];
        assert_eq!(t.author_name, "Ana Lopez");
        assert_eq!(t.author_title.as_deref(), Some("EM"));
        assert_eq!(t.author_company.as_deref(), Some("Acme"));
        assert!(t.relationship.is_none());
    }

    #[test]
    fn test_flattened_section_without_content_key() {
        let data = run(json!({"introduction": {"headline": "Hello", "design_intent": {"emphasis": "low"}}}));
        assert_eq!(data.introduction.content.headline, "Hello");
        assert_eq!(data.introduction.design_intent.emphasis, Emphasis::Low);
    }

    #[test]
    fn test_scalar_section_content() {
        let data = run(json!({"about": "Just a sentence.", "get_in_touch": {"content": "Email me"}}));
        assert_eq!(data.about.content.text, "Just a sentence.");
        assert_eq!(data.get_in_touch.content.message, "Email me");
    }

    // ── skills ──────────────────────────────────────────────────────────────

    #[test]
    fn test_skills_alt_shape_is_synthesized() {
        let data = run(json!({"skills": {"content": {"technical_skills": [
            {"category": "X", "items": ["A", "B"]}
        ]}}}));
        assert_eq!(
            data.skills.content.groups,
            vec![SkillGroup {
                category: "X".to_string(),
                skills: vec![
                    Skill { name: "A".to_string(), logo_url: None, category: "other".to_string() },
                    Skill { name: "B".to_string(), logo_url: None, category: "other".to_string() },
                ],
            }]
        );
    }

    #[test]
    fn test_flat_skill_list_becomes_single_group() {
        let data = run(json!({"skills": {"content": {"skills": ["Rust", "", {"name": "SQL", "category": "languages"}]}}}));
        let groups = &data.skills.content.groups;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, LOOSE_SKILLS_GROUP);
        assert_eq!(groups[0].skills.len(), 2);
        assert_eq!(groups[0].skills[1].category, "languages");
    }

    #[test]
    fn test_skill_logo_url_preserved() {
        let data = run(rich_response());
        let go = &data.skills.content.groups[0].skills[1];
        assert_eq!(go.name, "Go");
        assert_eq!(go.logo_url.as_deref(), Some("https://cdn.simpleicons.org/go"));
    }

    // ── work experience dates ───────────────────────────────────────────────

    #[test]
    fn test_duration_is_split_into_dates() {
        let data = run(json!({"work_experience": {"content": {"experiences": [
            {"role": "Eng", "duration": "2019 - 2022"}
        ]}}}));
        let exp = &data.work_experience.content.experiences[0];
        assert_eq!(exp.role, "Eng");
        assert_eq!(exp.start_date, "2019");
        assert_eq!(exp.end_date, "2022");
    }

    #[test]
    fn test_missing_end_date_defaults_to_present() {
        let data = run(rich_response());
        let exp = &data.work_experience.content.experiences[1];
        assert_eq!(exp.start_date, "2022");
        assert_eq!(exp.end_date, PRESENT);
    }

    #[test]
    fn test_iso_month_duration_is_a_start_date() {
        let data = run(json!({"work_experience": {"content": {"experiences": [
            {"company": "Acme", "duration": "2019-03"}
        ]}}}));
        let exp = &data.work_experience.content.experiences[0];
        assert_eq!(exp.start_date, "2019-03");
        assert_eq!(exp.end_date, PRESENT);
    }

    #[test]
    fn test_split_duration_variants() {
        assert_eq!(
            split_duration("Jan 2019 – Present"),
            (Some("Jan 2019".to_string()), Some("Present".to_string()))
        );
        assert_eq!(
            split_duration("2019-03 - 2022-01"),
            (Some("2019-03".to_string()), Some("2022-01".to_string()))
        );
        assert_eq!(split_duration("2020-"), (Some("2020".to_string()), None));
        assert_eq!(split_duration("2019-03"), (Some("2019-03".to_string()), None));
        assert_eq!(split_duration("2019-03-01"), (Some("2019-03-01".to_string()), None));
        assert_eq!(
            split_duration("2019–2021"),
            (Some("2019".to_string()), Some("2021".to_string()))
        );
        assert_eq!(split_duration(" 2021 "), (Some("2021".to_string()), None));
    }

    // ── design intent ───────────────────────────────────────────────────────

    #[test]
    fn test_no_profile_anywhere_uses_single_fallback() {
        let data = run(json!({"about": {"content": {"text": "x"}, "design_intent": {"emphasis": "high"}}}));
        for kind in SectionKind::ALL {
            assert_eq!(data.design_intent(kind).design_profile, DEFAULT_DESIGN_PROFILE);
        }
    }

    #[test]
    fn test_fallback_profile_is_injectable() {
        let options = CoercionOptions {
            fallback_profile: DesignProfile::ProductDesigner,
            ..CoercionOptions::default()
        };
        let data = normalize(&json!({}), &options);
        for kind in SectionKind::ALL {
            assert_eq!(data.design_intent(kind).design_profile, DesignProfile::ProductDesigner);
        }
    }

    #[test]
    fn test_one_explicit_profile_spreads_to_all_sections() {
        let data = run(rich_response());
        for kind in SectionKind::ALL {
            assert_eq!(data.design_intent(kind).design_profile, DesignProfile::TechnicalMinimal);
        }
    }

    #[test]
    fn test_per_section_default_priority() {
        let data = run(json!({}));
        assert_eq!(data.introduction.design_intent.surface_priority, SurfacePriority::Primary);
        assert_eq!(data.projects.design_intent.surface_priority, SurfacePriority::Primary);
        assert_eq!(data.skills.design_intent.surface_priority, SurfacePriority::Secondary);
        assert_eq!(data.get_in_touch.design_intent.surface_priority, SurfacePriority::Secondary);
        assert_eq!(data.awards.design_intent.surface_priority, SurfacePriority::Supporting);
    }

    #[test]
    fn test_explicit_intent_fields_survive() {
        let data = run(rich_response());
        let intent = &data.introduction.design_intent;
        assert_eq!(intent.emphasis, Emphasis::High);
        assert_eq!(intent.visual_density, VisualDensity::Low);
        assert_eq!(intent.visual_elements, vec!["terminal".to_string()]);
    }
}
