//! Applying assistant results to a snapshot.
//!
//! Results arrive after an arbitrary delay, so each function first checks that
//! its target still exists and returns `None` when it does not. The caller
//! discards the result in that case.

use crate::assistant::{AnalysisResult, ImprovedExperience};
use crate::editor::ops::{update_experience_field, update_point};
use crate::models::resume::{ExperienceField, ResumeModel};

/// Writes a rewritten bullet into `experience_id` at `index`, provided that
/// slot still holds `original`, the text the rewrite was produced from.
pub fn apply_bullet_rewrite(
    snapshot: &ResumeModel,
    experience_id: &str,
    index: usize,
    original: &str,
    text: &str,
) -> Option<ResumeModel> {
    let exp = snapshot.find_experience(experience_id)?;
    if exp.points.get(index).map(String::as_str) != Some(original) {
        return None;
    }
    Some(update_point(snapshot, experience_id, index, text))
}

/// Replaces a role's bullets with the reviewed ones.
pub fn apply_improvement(
    snapshot: &ResumeModel,
    improvement: &ImprovedExperience,
) -> Option<ResumeModel> {
    snapshot.find_experience(&improvement.id)?;
    Some(update_experience_field(
        snapshot,
        &improvement.id,
        &ExperienceField::Points(improvement.points.clone()),
    ))
}

/// Drops improvements whose id matches no role in `snapshot`, and any
/// duplicate entries for the same role after the first.
pub fn retain_known_improvements(mut result: AnalysisResult, snapshot: &ResumeModel) -> AnalysisResult {
    let mut seen = Vec::new();
    result.improved_experience.retain(|imp| {
        let keep = snapshot.find_experience(&imp.id).is_some() && !seen.contains(&imp.id);
        if keep {
            seen.push(imp.id.clone());
        }
        keep
    });
    result
}

/// Caps a proposed rewrite at the length of the bullets it replaces.
pub fn clamp_proposal(original: &[String], mut proposal: Vec<String>) -> Vec<String> {
    proposal.truncate(original.len());
    proposal
}
