//! Flattens a [`ProfileRecord`] into the plain-text block handed to the generator.

use crate::profile::models::ProfileRecord;

/// Renders present fields in a fixed order. Absent sections emit no heading.
pub fn profile_to_text(profile: &ProfileRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(name) = &profile.name {
        lines.push(format!("Name: {name}"));
    }
    if let Some(headline) = &profile.headline {
        lines.push(format!("Headline: {headline}"));
    }
    if let Some(location) = &profile.location {
        lines.push(format!("Location: {location}"));
    }
    if let Some(summary) = &profile.summary {
        lines.push(format!("\nSummary:\n{summary}"));
    }

    if !profile.experience.is_empty() {
        lines.push("\nExperience:".to_string());
        for (i, exp) in profile.experience.iter().enumerate() {
            let heading = match (exp.title.is_empty(), exp.company.is_empty()) {
                (false, false) => format!("{} at {}", exp.title, exp.company),
                (false, true) => exp.title.clone(),
                _ => exp.company.clone(),
            };
            lines.push(format!("\n{}. {heading}", i + 1));
            if exp.start_date.is_some() || exp.end_date.is_some() {
                lines.push(format!(
                    "   {} - {}",
                    exp.start_date.as_deref().unwrap_or("N/A"),
                    exp.end_date.as_deref().unwrap_or("Present")
                ));
            }
            if let Some(location) = &exp.location {
                lines.push(format!("   Location: {location}"));
            }
            if let Some(description) = &exp.description {
                lines.push(format!("   {description}"));
            }
        }
    }

    if !profile.education.is_empty() {
        lines.push("\nEducation:".to_string());
        for (i, edu) in profile.education.iter().enumerate() {
            lines.push(format!("\n{}. {}", i + 1, edu.school));
            let degree = [edu.degree.as_deref(), edu.field_of_study.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" in ");
            if !degree.is_empty() {
                lines.push(format!("   {degree}"));
            }
            if edu.start_date.is_some() || edu.end_date.is_some() {
                lines.push(format!(
                    "   {} - {}",
                    edu.start_date.as_deref().unwrap_or("N/A"),
                    edu.end_date.as_deref().unwrap_or("N/A")
                ));
            }
        }
    }

    if !profile.skills.is_empty() {
        lines.push(format!("\nSkills: {}", profile.skills.join(", ")));
    }

    if !profile.certifications.is_empty() {
        lines.push("\nCertifications:".to_string());
        for (i, cert) in profile.certifications.iter().enumerate() {
            let mut line = format!("{}. {}", i + 1, cert.name);
            if let Some(authority) = &cert.authority {
                line.push_str(&format!(" ({authority})"));
            }
            if let Some(date) = &cert.date {
                line.push_str(&format!(", {date}"));
            }
            lines.push(line);
        }
    }

    if !profile.languages.is_empty() {
        lines.push(format!("\nLanguages: {}", profile.languages.join(", ")));
    }

    if !profile.awards.is_empty() {
        lines.push("\nAwards:".to_string());
        for (i, award) in profile.awards.iter().enumerate() {
            let mut line = format!("{}. {}", i + 1, award.name);
            if let Some(org) = &award.organization {
                line.push_str(&format!(", {org}"));
            }
            if let Some(date) = &award.date {
                line.push_str(&format!(" ({date})"));
            }
            lines.push(line);
            if let Some(summary) = &award.summary {
                lines.push(format!("   {summary}"));
            }
        }
    }

    if !profile.recommendations.is_empty() {
        lines.push("\nRecommendations:".to_string());
        for (i, rec) in profile.recommendations.iter().enumerate() {
            lines.push(format!("{}. From {}", i + 1, rec.name));
            if let Some(summary) = &rec.summary {
                lines.push(format!("   \"{summary}\""));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::{Certification, EducationEntry, ExperienceEntry, Recommendation};

    #[test]
    fn test_empty_profile_is_empty_text() {
        assert_eq!(profile_to_text(&ProfileRecord::default()), "");
    }

    #[test]
    fn test_scalars_only() {
        let profile = ProfileRecord {
            name: Some("Jane Doe".into()),
            location: Some("Lisbon".into()),
            ..ProfileRecord::default()
        };
        assert_eq!(profile_to_text(&profile), "Name: Jane Doe\nLocation: Lisbon");
    }

    #[test]
    fn test_numbered_experience_with_dates() {
        let profile = ProfileRecord {
            experience: vec![
                ExperienceEntry {
                    title: "PM".into(),
                    company: "Acme".into(),
                    start_date: Some("2020".into()),
                    ..ExperienceEntry::default()
                },
                ExperienceEntry {
                    company: "Initech".into(),
                    ..ExperienceEntry::default()
                },
            ],
            ..ProfileRecord::default()
        };
        assert_eq!(
            profile_to_text(&profile),
            "\nExperience:\n\n1. PM at Acme\n   2020 - Present\n\n2. Initech"
        );
    }

    #[test]
    fn test_education_degree_join() {
        let profile = ProfileRecord {
            education: vec![EducationEntry {
                school: "MIT".into(),
                degree: Some("BSc".into()),
                field_of_study: Some("Physics".into()),
                ..EducationEntry::default()
            }],
            ..ProfileRecord::default()
        };
        assert_eq!(profile_to_text(&profile), "\nEducation:\n\n1. MIT\n   BSc in Physics");
    }

    #[test]
    fn test_section_order() {
        let profile = ProfileRecord {
            name: Some("A".into()),
            summary: Some("S".into()),
            skills: vec!["Rust".into(), "Go".into()],
            certifications: vec![Certification {
                name: "CKA".into(),
                authority: Some("CNCF".into()),
                date: None,
            }],
            languages: vec!["English".into()],
            recommendations: vec![Recommendation {
                name: "Bo".into(),
                summary: Some("Solid".into()),
            }],
            ..ProfileRecord::default()
        };
        let text = profile_to_text(&profile);
        let order = ["Name:", "Summary:", "Skills: Rust, Go", "Certifications:", "1. CKA (CNCF)", "Languages: English", "Recommendations:", "1. From Bo"];
        let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
        assert!(!text.contains("Experience"));
        assert!(!text.contains("Awards"));
    }
}
