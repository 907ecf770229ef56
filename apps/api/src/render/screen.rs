//! Structured preview layout consumed by the browser.

use serde::Serialize;

use crate::models::resume::ResumeModel;
use crate::render::{company_line, contact_fields, date_range, gpa_badge, visible_points, SEPARATOR};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenView {
    pub header: HeaderView,
    pub education: Vec<EducationView>,
    pub experience: Vec<ExperienceView>,
    pub skills: Vec<SkillView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub name: String,
    /// Non-empty contact fields joined by `" | "`.
    pub contact_line: String,
    pub contacts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationView {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa_badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceView {
    pub id: String,
    pub title: String,
    pub date_range: String,
    pub company_line: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillView {
    pub id: String,
    pub label: String,
    /// The raw comma-separated string, deliberately left unsplit.
    pub items: String,
}

pub fn render_screen_view(snapshot: &ResumeModel) -> ScreenView {
    let contacts: Vec<String> = contact_fields(&snapshot.personal_info)
        .into_iter()
        .map(String::from)
        .collect();

    ScreenView {
        header: HeaderView {
            name: snapshot.personal_info.full_name.clone(),
            contact_line: contacts.join(SEPARATOR),
            contacts,
        },
        education: snapshot
            .education
            .iter()
            .map(|edu| EducationView {
                id: edu.id.clone(),
                institution: edu.institution.clone(),
                degree: edu.degree.clone(),
                date: edu.graduation_date.clone(),
                gpa_badge: gpa_badge(edu),
            })
            .collect(),
        experience: snapshot
            .experience
            .iter()
            .map(|exp| ExperienceView {
                id: exp.id.clone(),
                title: exp.title.clone(),
                date_range: date_range(exp),
                company_line: company_line(exp),
                bullets: visible_points(exp).map(String::from).collect(),
            })
            .collect(),
        skills: snapshot
            .skills
            .iter()
            .map(|skill| SkillView {
                id: skill.id.clone(),
                label: skill.category.clone(),
                items: skill.items.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ops;
    use crate::models::resume::{EducationField, ExperienceField, PersonalField};

    #[test]
    fn test_sample_header() {
        let view = render_screen_view(&ResumeModel::sample());
        assert_eq!(view.header.name, "Alex Rivera");
        assert_eq!(
            view.header.contact_line,
            "alex.rivera@edu.university.com | (555) 123-4567 | linkedin.com/in/alexrivera-cs | github.com/alexrivera"
        );
    }

    #[test]
    fn test_blank_contact_dropped_from_header() {
        let snapshot = ops::set_personal_field(&ResumeModel::sample(), PersonalField::Phone, "");
        let view = render_screen_view(&snapshot);
        assert_eq!(view.header.contacts.len(), 3);
        assert!(!view.header.contact_line.contains("||"));
    }

    #[test]
    fn test_sections_preserve_order() {
        let view = render_screen_view(&ResumeModel::sample());
        let ids: Vec<_> = view.experience.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(view.skills[1].label, "Tools & Frameworks");
        assert_eq!(view.skills[1].items, "React, Node.js, Git, Docker, AWS (Basic)");
    }

    #[test]
    fn test_current_role_never_shows_stored_end_date() {
        let snapshot = ops::update_experience_field(
            &ResumeModel::sample(),
            "2",
            &ExperienceField::EndDate("2099".to_string()),
        );
        let view = render_screen_view(&snapshot);
        assert_eq!(view.experience[1].date_range, "Jan 2023 — Present");
        assert!(!view.experience[1].date_range.contains("2099"));
    }

    #[test]
    fn test_blank_points_and_gpa_omitted() {
        let mut snapshot = ops::add_experience(&ResumeModel::sample());
        snapshot = ops::add_education(&snapshot);
        snapshot = ops::update_education_field(
            &snapshot,
            "1",
            &EducationField::Gpa("   ".to_string()),
        );

        let view = render_screen_view(&snapshot);
        assert!(view.experience[0].bullets.is_empty());
        assert!(view.education.iter().all(|e| e.gpa_badge.is_none()));

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["education"][0].get("gpaBadge").is_none());
    }

    #[test]
    fn test_gpa_badge_present_when_set() {
        let view = render_screen_view(&ResumeModel::sample());
        assert_eq!(view.education[0].gpa_badge.as_deref(), Some("GPA: 3.8/4.0"));
    }
}
