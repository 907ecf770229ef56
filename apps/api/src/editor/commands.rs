//! Edit commands as they arrive from the browser, one per request.

use serde::{Deserialize, Serialize};

use crate::editor::ops;
use crate::models::resume::{EducationField, ExperienceField, PersonalField, ResumeModel, SkillField};

/// Wire form: `{"op": "updatePoint", "experienceId": "1", "index": 0, "value": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EditCommand {
    SetPersonalField {
        field: PersonalField,
        value: String,
    },
    AddExperience,
    RemoveExperience {
        id: String,
    },
    UpdateExperienceField {
        id: String,
        change: ExperienceField,
    },
    AddPoint {
        experience_id: String,
    },
    RemovePoint {
        experience_id: String,
        index: usize,
    },
    UpdatePoint {
        experience_id: String,
        index: usize,
        value: String,
    },
    AddEducation,
    RemoveEducation {
        id: String,
    },
    UpdateEducationField {
        id: String,
        change: EducationField,
    },
    AddSkill,
    RemoveSkill {
        id: String,
    },
    UpdateSkillField {
        id: String,
        change: SkillField,
    },
}

impl EditCommand {
    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            EditCommand::SetPersonalField { .. } => "setPersonalField",
            EditCommand::AddExperience => "addExperience",
            EditCommand::RemoveExperience { .. } => "removeExperience",
            EditCommand::UpdateExperienceField { .. } => "updateExperienceField",
            EditCommand::AddPoint { .. } => "addPoint",
            EditCommand::RemovePoint { .. } => "removePoint",
            EditCommand::UpdatePoint { .. } => "updatePoint",
            EditCommand::AddEducation => "addEducation",
            EditCommand::RemoveEducation { .. } => "removeEducation",
            EditCommand::UpdateEducationField { .. } => "updateEducationField",
            EditCommand::AddSkill => "addSkill",
            EditCommand::RemoveSkill { .. } => "removeSkill",
            EditCommand::UpdateSkillField { .. } => "updateSkillField",
        }
    }
}

/// Produces the snapshot that follows `snapshot` under `command`.
pub fn apply(snapshot: &ResumeModel, command: &EditCommand) -> ResumeModel {
    match command {
        EditCommand::SetPersonalField { field, value } => {
            ops::set_personal_field(snapshot, *field, value)
        }
        EditCommand::AddExperience => ops::add_experience(snapshot),
        EditCommand::RemoveExperience { id } => ops::remove_experience(snapshot, id),
        EditCommand::UpdateExperienceField { id, change } => {
            ops::update_experience_field(snapshot, id, change)
        }
        EditCommand::AddPoint { experience_id } => ops::add_point(snapshot, experience_id),
        EditCommand::RemovePoint {
            experience_id,
            index,
        } => ops::remove_point(snapshot, experience_id, *index),
        EditCommand::UpdatePoint {
            experience_id,
            index,
            value,
        } => ops::update_point(snapshot, experience_id, *index, value),
        EditCommand::AddEducation => ops::add_education(snapshot),
        EditCommand::RemoveEducation { id } => ops::remove_education(snapshot, id),
        EditCommand::UpdateEducationField { id, change } => {
            ops::update_education_field(snapshot, id, change)
        }
        EditCommand::AddSkill => ops::add_skill(snapshot),
        EditCommand::RemoveSkill { id } => ops::remove_skill(snapshot, id),
        EditCommand::UpdateSkillField { id, change } => {
            ops::update_skill_field(snapshot, id, change)
        }
    }
}
