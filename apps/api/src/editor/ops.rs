//! Snapshot mutations.
//!
//! Every function here takes the current snapshot by reference and returns the
//! next one. Untouched lists are cloned as-is, the addressed entry is rebuilt,
//! and the input is never modified. None of them can fail: unknown ids and
//! out-of-range indices leave the snapshot unchanged.

use crate::editor::ids::fresh_id;
use crate::models::resume::{
    EducationField, EducationItem, ExperienceField, ExperienceItem, PersonalField, ResumeModel,
    SkillField, SkillItem,
};

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

pub fn set_personal_field(snapshot: &ResumeModel, field: PersonalField, value: &str) -> ResumeModel {
    let mut personal_info = snapshot.personal_info.clone();
    let slot = match field {
        PersonalField::FullName => &mut personal_info.full_name,
        PersonalField::Email => &mut personal_info.email,
        PersonalField::Phone => &mut personal_info.phone,
        PersonalField::Linkedin => &mut personal_info.linkedin,
        PersonalField::Portfolio => &mut personal_info.portfolio,
    };
    *slot = value.to_string();

    ResumeModel {
        personal_info,
        education: snapshot.education.clone(),
        experience: snapshot.experience.clone(),
        skills: snapshot.skills.clone(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// Prepends a blank role. The new entry is `experience[0]` of the result.
pub fn add_experience(snapshot: &ResumeModel) -> ResumeModel {
    let entry = ExperienceItem {
        id: fresh_id(&snapshot.experience),
        points: vec![String::new()],
        ..Default::default()
    };

    let mut experience = Vec::with_capacity(snapshot.experience.len() + 1);
    experience.push(entry);
    experience.extend(snapshot.experience.iter().cloned());
    with_experience(snapshot, experience)
}

pub fn remove_experience(snapshot: &ResumeModel, id: &str) -> ResumeModel {
    let experience = snapshot
        .experience
        .iter()
        .filter(|e| e.id != id)
        .cloned()
        .collect();
    with_experience(snapshot, experience)
}

pub fn update_experience_field(
    snapshot: &ResumeModel,
    id: &str,
    field: &ExperienceField,
) -> ResumeModel {
    map_experience(snapshot, id, |exp| {
        let mut exp = exp.clone();
        match field {
            ExperienceField::Title(v) => exp.title = v.clone(),
            ExperienceField::Company(v) => exp.company = v.clone(),
            ExperienceField::Location(v) => exp.location = v.clone(),
            ExperienceField::StartDate(v) => exp.start_date = v.clone(),
            ExperienceField::EndDate(v) => exp.end_date = v.clone(),
            ExperienceField::IsCurrent(v) => exp.is_current = *v,
            ExperienceField::Points(v) => exp.points = v.clone(),
        }
        exp
    })
}

pub fn add_point(snapshot: &ResumeModel, exp_id: &str) -> ResumeModel {
    map_experience(snapshot, exp_id, |exp| {
        let mut points = exp.points.clone();
        points.push(String::new());
        ExperienceItem {
            points,
            ..exp.clone()
        }
    })
}

/// Deletes the point at `index`; later points shift down by one.
pub fn remove_point(snapshot: &ResumeModel, exp_id: &str, index: usize) -> ResumeModel {
    map_experience(snapshot, exp_id, |exp| {
        let points = exp
            .points
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p.clone())
            .collect();
        ExperienceItem {
            points,
            ..exp.clone()
        }
    })
}

pub fn update_point(snapshot: &ResumeModel, exp_id: &str, index: usize, value: &str) -> ResumeModel {
    map_experience(snapshot, exp_id, |exp| {
        let mut exp = exp.clone();
        if let Some(point) = exp.points.get_mut(index) {
            *point = value.to_string();
        }
        exp
    })
}

fn map_experience<F>(snapshot: &ResumeModel, id: &str, f: F) -> ResumeModel
where
    F: Fn(&ExperienceItem) -> ExperienceItem,
{
    let experience = snapshot
        .experience
        .iter()
        .map(|e| if e.id == id { f(e) } else { e.clone() })
        .collect();
    with_experience(snapshot, experience)
}

fn with_experience(snapshot: &ResumeModel, experience: Vec<ExperienceItem>) -> ResumeModel {
    ResumeModel {
        personal_info: snapshot.personal_info.clone(),
        education: snapshot.education.clone(),
        experience,
        skills: snapshot.skills.clone(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// Prepends a blank education entry. The new entry is `education[0]` of the result.
pub fn add_education(snapshot: &ResumeModel) -> ResumeModel {
    let entry = EducationItem {
        id: fresh_id(&snapshot.education),
        gpa: Some(String::new()),
        ..Default::default()
    };

    let mut education = Vec::with_capacity(snapshot.education.len() + 1);
    education.push(entry);
    education.extend(snapshot.education.iter().cloned());
    with_education(snapshot, education)
}

pub fn remove_education(snapshot: &ResumeModel, id: &str) -> ResumeModel {
    let education = snapshot
        .education
        .iter()
        .filter(|e| e.id != id)
        .cloned()
        .collect();
    with_education(snapshot, education)
}

pub fn update_education_field(
    snapshot: &ResumeModel,
    id: &str,
    field: &EducationField,
) -> ResumeModel {
    let education = snapshot
        .education
        .iter()
        .map(|e| {
            if e.id != id {
                return e.clone();
            }
            let mut e = e.clone();
            match field {
                EducationField::Institution(v) => e.institution = v.clone(),
                EducationField::Degree(v) => e.degree = v.clone(),
                EducationField::GraduationDate(v) => e.graduation_date = v.clone(),
                EducationField::Gpa(v) => e.gpa = Some(v.clone()),
            }
            e
        })
        .collect();
    with_education(snapshot, education)
}

fn with_education(snapshot: &ResumeModel, education: Vec<EducationItem>) -> ResumeModel {
    ResumeModel {
        personal_info: snapshot.personal_info.clone(),
        education,
        experience: snapshot.experience.clone(),
        skills: snapshot.skills.clone(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Appends a blank skill category.
pub fn add_skill(snapshot: &ResumeModel) -> ResumeModel {
    let mut skills = snapshot.skills.clone();
    skills.push(SkillItem {
        id: fresh_id(&snapshot.skills),
        ..Default::default()
    });
    with_skills(snapshot, skills)
}

pub fn remove_skill(snapshot: &ResumeModel, id: &str) -> ResumeModel {
    let skills = snapshot
        .skills
        .iter()
        .filter(|s| s.id != id)
        .cloned()
        .collect();
    with_skills(snapshot, skills)
}

pub fn update_skill_field(snapshot: &ResumeModel, id: &str, field: &SkillField) -> ResumeModel {
    let skills = snapshot
        .skills
        .iter()
        .map(|s| {
            if s.id != id {
                return s.clone();
            }
            let mut s = s.clone();
            match field {
                SkillField::Category(v) => s.category = v.clone(),
                SkillField::Items(v) => s.items = v.clone(),
            }
            s
        })
        .collect();
    with_skills(snapshot, skills)
}

fn with_skills(snapshot: &ResumeModel, skills: Vec<SkillItem>) -> ResumeModel {
    ResumeModel {
        personal_info: snapshot.personal_info.clone(),
        education: snapshot.education.clone(),
        experience: snapshot.experience.clone(),
        skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResumeModel {
        ResumeModel::sample()
    }

    #[test]
    fn test_set_personal_field_replaces_one_key() {
        let before = sample();
        let after = set_personal_field(&before, PersonalField::Phone, "");
        assert_eq!(after.personal_info.phone, "");
        assert_eq!(after.personal_info.full_name, before.personal_info.full_name);
        assert_eq!(after.experience, before.experience);
        // Input snapshot untouched
        assert_eq!(before.personal_info.phone, "(555) 123-4567");
    }

    #[test]
    fn test_add_experience_prepends_blank_entry() {
        let before = sample();
        let after = add_experience(&before);
        assert_eq!(after.experience.len(), before.experience.len() + 1);

        let new = &after.experience[0];
        assert_eq!(new.points, vec![String::new()]);
        assert!(!new.is_current);
        assert!(new.title.is_empty());
        assert!(before.experience.iter().all(|e| e.id != new.id));
        assert_eq!(&after.experience[1..], &before.experience[..]);
    }

    #[test]
    fn test_add_then_remove_experience_round_trips() {
        let before = sample();
        let added = add_experience(&before);
        let new_id = added.experience[0].id.clone();
        assert_eq!(remove_experience(&added, &new_id), before);
    }

    #[test]
    fn test_remove_unknown_experience_is_noop() {
        let before = sample();
        assert_eq!(remove_experience(&before, "does-not-exist"), before);
        assert_eq!(remove_experience(&before, ""), before);
    }

    #[test]
    fn test_update_experience_field_leaves_others_unchanged() {
        let before = sample();
        let after = update_experience_field(
            &before,
            "2",
            &ExperienceField::Title("Staff Engineer".to_string()),
        );
        assert_eq!(after.experience[1].title, "Staff Engineer");
        assert_eq!(after.experience[0], before.experience[0]);
        assert_eq!(after.experience[1].points, before.experience[1].points);
    }

    #[test]
    fn test_is_current_keeps_stored_end_date() {
        let before = sample();
        let after = update_experience_field(&before, "1", &ExperienceField::IsCurrent(true));
        assert!(after.experience[0].is_current);
        assert_eq!(after.experience[0].end_date, "Sept 2023");
    }

    #[test]
    fn test_add_point_appends_blank() {
        let after = add_point(&sample(), "1");
        assert_eq!(after.experience[0].points.len(), 3);
        assert_eq!(after.experience[0].points[2], "");
    }

    #[test]
    fn test_remove_point_shifts_later_points() {
        let before = sample();
        let after = remove_point(&before, "1", 0);
        assert_eq!(after.experience[0].points.len(), 1);
        assert_eq!(after.experience[0].points[0], before.experience[0].points[1]);
    }

    #[test]
    fn test_remove_last_point_yields_empty_list() {
        let mut snapshot = sample();
        snapshot = remove_point(&snapshot, "1", 1);
        snapshot = remove_point(&snapshot, "1", 0);
        assert!(snapshot.experience[0].points.is_empty());
        // And once more on an empty list: still fine.
        let again = remove_point(&snapshot, "1", 0);
        assert!(again.experience[0].points.is_empty());
    }

    #[test]
    fn test_update_point_out_of_range_is_noop() {
        let before = sample();
        assert_eq!(update_point(&before, "1", 7, "x"), before);
        let after = update_point(&before, "1", 1, "Shipped 3 features");
        assert_eq!(after.experience[0].points[1], "Shipped 3 features");
    }

    #[test]
    fn test_education_add_update_remove() {
        let before = sample();
        let added = add_education(&before);
        let new_id = added.education[0].id.clone();
        assert_eq!(added.education[0].gpa.as_deref(), Some(""));

        let updated = update_education_field(
            &added,
            &new_id,
            &EducationField::Institution("Reed College".to_string()),
        );
        assert_eq!(updated.education[0].institution, "Reed College");
        assert_eq!(updated.education[1], before.education[0]);

        let removed = remove_education(&updated, &new_id);
        assert_eq!(removed, before);
    }

    #[test]
    fn test_update_skill_field_items() {
        let after = update_skill_field(
            &sample(),
            "2",
            &SkillField::Items("Go, Rust,, C++".to_string()),
        );
        assert_eq!(after.skills[1].items, "Go, Rust,, C++");
        assert_eq!(after.skills[1].category, "Tools & Frameworks");
    }

    #[test]
    fn test_add_and_remove_skill() {
        let before = sample();
        let added = add_skill(&before);
        assert_eq!(added.skills.len(), 4);
        let new_id = added.skills[3].id.clone();
        assert_eq!(remove_skill(&added, &new_id), before);
    }

    #[test]
    fn test_frame_property_across_sequence() {
        let before = sample();
        let untouched = before.experience[1].clone();

        let mut s = add_experience(&before);
        let new_id = s.experience[0].id.clone();
        s = update_experience_field(&s, &new_id, &ExperienceField::Company("Acme".to_string()));
        s = add_point(&s, &new_id);
        s = update_point(&s, &new_id, 1, "Cut costs 20%");
        s = remove_point(&s, "1", 0);
        s = update_skill_field(&s, "1", &SkillField::Category("Programming".to_string()));
        s = add_education(&s);

        let still_there = s.find_experience("2").unwrap();
        assert_eq!(still_there, &untouched);
        assert_eq!(s.education[1], before.education[0]);
        assert_eq!(s.skills[1..], before.skills[1..]);
    }
}
