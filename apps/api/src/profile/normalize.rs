//! Profile text normalizer: untyped scraped record → [`ProfileRecord`].
//!
//! The scraping provider renames fields between responses (`name`, `full_name`,
//! `fullName`...). Every target field is read through the alias tables below.

use serde_json::Value;

use crate::lookup::{as_text, first_present, list_field, string_field, Aliases, Record};
use crate::profile::models::{
    Certification, EducationEntry, ExperienceEntry, ProfileAward, ProfileRecord, Recommendation,
};

mod keys {
    use crate::lookup::Aliases;

    pub const NAME: Aliases = Aliases::new("name", &["full_name", "fullName"]);
    pub const HEADLINE: Aliases = Aliases::new("headline", &["title"]);
    pub const LOCATION: Aliases = Aliases::new("location", &[]);
    pub const SUMMARY: Aliases = Aliases::new("summary", &["about"]);
    pub const PROFILE_PICTURE: Aliases = Aliases::new(
        "profile_picture_url",
        &["profile_photo", "profile_pic_url", "profile_picture"],
    );
    pub const EXPERIENCE: Aliases = Aliases::new("experience", &["experiences", "positions"]);
    pub const EDUCATION: Aliases = Aliases::new("education", &[]);
    pub const SKILLS: Aliases = Aliases::new("skills", &[]);
    pub const CERTIFICATIONS: Aliases = Aliases::new("certifications", &["certification"]);
    pub const LANGUAGES: Aliases = Aliases::new("languages", &[]);
    pub const AWARDS: Aliases = Aliases::new("awards", &["honors"]);
    pub const RECOMMENDATIONS: Aliases = Aliases::new("recommendations", &[]);

    /// Name of a list item that may be a bare string or a record.
    pub const ITEM_NAME: Aliases = Aliases::new("name", &["title", "language"]);

    pub mod experience {
        use crate::lookup::Aliases;

        pub const TITLE: Aliases = Aliases::new("title", &["position", "company_position"]);
        pub const COMPANY: Aliases = Aliases::new("company", &["company_name"]);
        pub const COMPANY_URL: Aliases = Aliases::new("company_url", &[]);
        pub const LOCATION: Aliases = Aliases::new("location", &[]);
        pub const START_DATE: Aliases = Aliases::new("start_date", &["starts_at"]);
        pub const END_DATE: Aliases = Aliases::new("end_date", &["ends_at"]);
        pub const DESCRIPTION: Aliases = Aliases::new("description", &["summary"]);
    }

    pub mod education {
        use crate::lookup::Aliases;

        pub const SCHOOL: Aliases = Aliases::new("school", &["school_name", "college_name"]);
        pub const DEGREE: Aliases = Aliases::new("degree", &["degree_name"]);
        pub const FIELD_OF_STUDY: Aliases = Aliases::new("field_of_study", &["field"]);
        pub const START_DATE: Aliases = Aliases::new("start_date", &["starts_at"]);
        pub const END_DATE: Aliases = Aliases::new("end_date", &["ends_at"]);
    }

    pub mod certification {
        use crate::lookup::Aliases;

        pub const NAME: Aliases = Aliases::new("name", &["title", "certification"]);
        pub const AUTHORITY: Aliases =
            Aliases::new("authority", &["issuing_organization", "company_name"]);
        pub const DATE: Aliases = Aliases::new("date", &["issue_date"]);
    }

    pub mod award {
        use crate::lookup::Aliases;

        pub const NAME: Aliases = Aliases::new("name", &["title"]);
        pub const ORGANIZATION: Aliases = Aliases::new("organization", &["issuer"]);
        pub const DATE: Aliases = Aliases::new("date", &["duration"]);
        pub const SUMMARY: Aliases = Aliases::new("summary", &["description"]);
    }

    pub mod recommendation {
        use crate::lookup::Aliases;

        pub const NAME: Aliases = Aliases::new("name", &["author"]);
        pub const SUMMARY: Aliases = Aliases::new("summary", &["text", "quote"]);
    }
}

/// Maps an untyped profile onto [`ProfileRecord`]. Never fails; a non-object input
/// yields the empty record.
pub fn normalize_profile(raw: &Value) -> ProfileRecord {
    let Some(record) = raw.as_object() else {
        return ProfileRecord::default();
    };

    ProfileRecord {
        name: string_field(record, &keys::NAME),
        headline: string_field(record, &keys::HEADLINE),
        location: string_field(record, &keys::LOCATION),
        summary: string_field(record, &keys::SUMMARY),
        profile_picture_url: string_field(record, &keys::PROFILE_PICTURE),
        experience: records(record, &keys::EXPERIENCE)
            .map(experience_entry)
            .collect(),
        education: records(record, &keys::EDUCATION)
            .map(education_entry)
            .collect(),
        skills: names(record, &keys::SKILLS),
        certifications: records(record, &keys::CERTIFICATIONS)
            .filter_map(|r| {
                use keys::certification as k;
                Some(Certification {
                    name: string_field(r, &k::NAME)?,
                    authority: string_field(r, &k::AUTHORITY),
                    date: string_field(r, &k::DATE),
                })
            })
            .collect(),
        languages: names(record, &keys::LANGUAGES),
        awards: records(record, &keys::AWARDS)
            .filter_map(|r| {
                use keys::award as k;
                Some(ProfileAward {
                    name: string_field(r, &k::NAME)?,
                    organization: string_field(r, &k::ORGANIZATION),
                    date: string_field(r, &k::DATE),
                    summary: string_field(r, &k::SUMMARY),
                })
            })
            .collect(),
        recommendations: records(record, &keys::RECOMMENDATIONS)
            .filter_map(|r| {
                use keys::recommendation as k;
                Some(Recommendation {
                    name: string_field(r, &k::NAME)?,
                    summary: string_field(r, &k::SUMMARY),
                })
            })
            .collect(),
    }
}

/// Record-valued entries of the first non-empty list under `aliases`.
fn records<'a>(record: &'a Record, aliases: &Aliases) -> impl Iterator<Item = &'a Record> {
    list_field(record, aliases)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

/// Bare strings, or the name of record entries (`{"name": "English", "level": ...}`).
fn names(record: &Record, aliases: &Aliases) -> Vec<String> {
    list_field(record, aliases)
        .into_iter()
        .flatten()
        .filter_map(|item| match item {
            Value::Object(r) => first_present(r, &keys::ITEM_NAME, as_text),
            scalar => as_text(scalar),
        })
        .collect()
}

/// Every record entry is kept; missing names become empty strings.
fn experience_entry(r: &Record) -> ExperienceEntry {
    use keys::experience as k;
    ExperienceEntry {
        title: string_field(r, &k::TITLE).unwrap_or_default(),
        company: string_field(r, &k::COMPANY).unwrap_or_default(),
        company_url: string_field(r, &k::COMPANY_URL),
        location: string_field(r, &k::LOCATION),
        start_date: string_field(r, &k::START_DATE),
        end_date: string_field(r, &k::END_DATE),
        description: string_field(r, &k::DESCRIPTION),
    }
}

fn education_entry(r: &Record) -> EducationEntry {
    use keys::education as k;
    EducationEntry {
        school: string_field(r, &k::SCHOOL).unwrap_or_default(),
        degree: string_field(r, &k::DEGREE),
        field_of_study: string_field(r, &k::FIELD_OF_STUDY),
        start_date: string_field(r, &k::START_DATE),
        end_date: string_field(r, &k::END_DATE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_alternates() {
        for key in ["name", "full_name", "fullName"] {
            let mut raw = Record::new();
            raw.insert(key.to_string(), json!("Jane Doe"));
            let profile = normalize_profile(&Value::Object(raw));
            assert_eq!(profile.name.as_deref(), Some("Jane Doe"), "key {key}");
        }
    }

    #[test]
    fn test_missing_fields_default() {
        let profile = normalize_profile(&json!({}));
        assert_eq!(profile, ProfileRecord::default());
        assert_eq!(normalize_profile(&json!("nope")), ProfileRecord::default());
    }

    #[test]
    fn test_blank_headline_is_absent() {
        let profile = normalize_profile(&json!({"headline": "", "title": "PM"}));
        assert_eq!(profile.headline.as_deref(), Some("PM"));
        let profile = normalize_profile(&json!({"headline": ""}));
        assert!(profile.headline.is_none());
    }

    #[test]
    fn test_scraper_experience_shape() {
        let profile = normalize_profile(&json!({
            "experience": [
                {"company_name": "Metadome.ai", "company_image": "https://logo"},
                {"position": "Teacher", "company_name": "Teach For India", "starts_at": "Dec 2016", "ends_at": "Jan 2017"},
                {"company_image": "https://nothing"}
            ]
        }));
        assert_eq!(profile.experience.len(), 3);
        assert_eq!(profile.experience[0].company, "Metadome.ai");
        assert_eq!(profile.experience[0].title, "");
        assert_eq!(profile.experience[1].title, "Teacher");
        assert_eq!(profile.experience[1].start_date.as_deref(), Some("Dec 2016"));
        assert_eq!(profile.experience[1].end_date.as_deref(), Some("Jan 2017"));
        assert_eq!(profile.experience[2], ExperienceEntry::default());
    }

    #[test]
    fn test_nameless_entries_are_kept() {
        let profile = normalize_profile(&json!({
            "experience": [{"starts_at": "2020", "description": "Contract work"}],
            "education": [{"degree": "BSc"}, "not a record"]
        }));
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "");
        assert_eq!(profile.experience[0].company, "");
        assert_eq!(profile.experience[0].start_date.as_deref(), Some("2020"));
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].school, "");
        assert_eq!(profile.education[0].degree.as_deref(), Some("BSc"));
    }

    #[test]
    fn test_certification_alternates() {
        let profile = normalize_profile(&json!({
            "certification": [
                {"certification": "Kotlin", "company_name": "Udemy", "issue_date": "Issued Aug 2021"}
            ]
        }));
        assert_eq!(
            profile.certifications,
            vec![Certification {
                name: "Kotlin".into(),
                authority: Some("Udemy".into()),
                date: Some("Issued Aug 2021".into()),
            }]
        );
    }

    #[test]
    fn test_languages_and_skills_from_strings_or_records() {
        let profile = normalize_profile(&json!({
            "languages": [{"name": "English", "level": "Native"}, "Hindi"],
            "skills": ["Rust", {"name": "SQL"}, {"level": 3}]
        }));
        assert_eq!(profile.languages, vec!["English", "Hindi"]);
        assert_eq!(profile.skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_awards_and_recommendations() {
        let profile = normalize_profile(&json!({
            "awards": [{"name": "Intrapreneur", "organization": "Metadome", "duration": "Jul 2024", "summary": "Problem solver"}],
            "recommendations": [{"name": "Kritika Sharma", "summary": "Great PM"}, {"summary": "anonymous"}]
        }));
        assert_eq!(profile.awards[0].date.as_deref(), Some("Jul 2024"));
        assert_eq!(profile.recommendations.len(), 1);
        assert_eq!(profile.recommendations[0].name, "Kritika Sharma");
    }

    #[test]
    fn test_profile_photo_alternate() {
        let profile = normalize_profile(&json!({"profile_photo": "https://img"}));
        assert_eq!(profile.profile_picture_url.as_deref(), Some("https://img"));
    }
}
