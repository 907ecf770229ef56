//! The résumé aggregate: one snapshot of everything the editor holds.
//!
//! Field names serialize as camelCase. This is the shape the browser edits and
//! the shape handed verbatim to the review assistant.

use serde::{Deserialize, Serialize};

/// Anything living in one of the ordered résumé lists.
pub trait Entry {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub graduation_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    /// Kept as typed even while `is_current` is set; display substitutes "Present".
    pub end_date: String,
    pub is_current: bool,
    /// Blank strings are legal drafts and are skipped when rendering.
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillItem {
    pub id: String,
    pub category: String,
    /// Comma-delimited, stored exactly as typed.
    pub items: String,
}

impl Entry for EducationItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entry for ExperienceItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entry for SkillItem {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeModel {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationItem>,
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<SkillItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// Addressable fields
// ────────────────────────────────────────────────────────────────────────────

/// One key of `personalInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Linkedin,
    Portfolio,
}

/// A replacement value for one field of an experience entry.
///
/// Wire form: `{"field": "isCurrent", "value": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ExperienceField {
    Title(String),
    Company(String),
    Location(String),
    StartDate(String),
    EndDate(String),
    IsCurrent(bool),
    Points(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EducationField {
    Institution(String),
    Degree(String),
    GraduationDate(String),
    Gpa(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SkillField {
    Category(String),
    Items(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Seed document
// ────────────────────────────────────────────────────────────────────────────

impl ResumeModel {
    /// The document every new session starts from.
    pub fn sample() -> Self {
        Self {
            personal_info: PersonalInfo {
                full_name: "Alex Rivera".to_string(),
                email: "alex.rivera@edu.university.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                linkedin: "linkedin.com/in/alexrivera-cs".to_string(),
                portfolio: "github.com/alexrivera".to_string(),
            },
            education: vec![EducationItem {
                id: "1".to_string(),
                institution: "University of Washington".to_string(),
                degree: "B.S. Computer Science".to_string(),
                graduation_date: "Expected May 2025".to_string(),
                gpa: Some("3.8/4.0".to_string()),
            }],
            experience: vec![
                ExperienceItem {
                    id: "1".to_string(),
                    title: "Software Engineering Intern".to_string(),
                    company: "TechCorp Inc.".to_string(),
                    location: "Seattle, WA".to_string(),
                    start_date: "June 2023".to_string(),
                    end_date: "Sept 2023".to_string(),
                    is_current: false,
                    points: vec![
                        "Optimized database queries for the main dashboard, reducing load times by 30% as measured by server logs.".to_string(),
                        "Collaborated with a team of 5 engineers to implement a new user authentication flow using React and OAuth.".to_string(),
                    ],
                },
                ExperienceItem {
                    id: "2".to_string(),
                    title: "Lead Developer (Capstone Project)".to_string(),
                    company: "University AI Lab".to_string(),
                    location: "Seattle, WA".to_string(),
                    start_date: "Jan 2023".to_string(),
                    end_date: "Present".to_string(),
                    is_current: true,
                    points: vec![
                        "Developed a machine learning model to predict campus traffic patterns, achieving 85% accuracy.".to_string(),
                        "Built a RESTful API using Python/Flask to serve predictions to a mobile app used by 500+ students.".to_string(),
                    ],
                },
            ],
            skills: vec![
                SkillItem {
                    id: "1".to_string(),
                    category: "Languages".to_string(),
                    items: "Python, Java, JavaScript, TypeScript, SQL".to_string(),
                },
                SkillItem {
                    id: "2".to_string(),
                    category: "Tools & Frameworks".to_string(),
                    items: "React, Node.js, Git, Docker, AWS (Basic)".to_string(),
                },
                SkillItem {
                    id: "3".to_string(),
                    category: "Soft Skills".to_string(),
                    items: "Technical Writing, Agile Methodology, Team Leadership".to_string(),
                },
            ],
        }
    }

    pub fn find_experience(&self, id: &str) -> Option<&ExperienceItem> {
        self.experience.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ResumeModel::sample()).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert_eq!(json["personalInfo"]["fullName"], "Alex Rivera");
        assert_eq!(json["experience"][1]["isCurrent"], true);
        assert_eq!(json["education"][0]["graduationDate"], "Expected May 2025");
    }

    #[test]
    fn test_missing_gpa_deserializes_as_none() {
        let item: EducationItem = serde_json::from_str(
            r#"{"id":"9","institution":"MIT","degree":"PhD","graduationDate":"2030"}"#,
        )
        .unwrap();
        assert_eq!(item.gpa, None);
    }

    #[test]
    fn test_experience_field_wire_shape() {
        let field: ExperienceField =
            serde_json::from_str(r#"{"field":"isCurrent","value":true}"#).unwrap();
        assert_eq!(field, ExperienceField::IsCurrent(true));

        let field: ExperienceField =
            serde_json::from_str(r#"{"field":"startDate","value":"Jan 2020"}"#).unwrap();
        assert_eq!(field, ExperienceField::StartDate("Jan 2020".to_string()));
    }

    fn distinct_ids<T: Entry>(entries: &[T]) -> usize {
        entries.iter().map(Entry::id).collect::<HashSet<_>>().len()
    }

    #[test]
    fn test_sample_ids_unique_per_list() {
        let sample = ResumeModel::sample();
        assert_eq!(distinct_ids(&sample.experience), sample.experience.len());
        assert_eq!(distinct_ids(&sample.education), sample.education.len());
        assert_eq!(distinct_ids(&sample.skills), sample.skills.len());
    }

    #[test]
    fn test_distinct_ids_sees_non_adjacent_duplicates() {
        let skill = |id: &str| SkillItem {
            id: id.to_string(),
            ..Default::default()
        };
        assert_eq!(distinct_ids(&[skill("1"), skill("2"), skill("1")]), 2);
    }
}
