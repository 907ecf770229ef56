use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDensity {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    /// One row per skill category, in résumé order.
    pub skill_density: Vec<SkillDensity>,
    /// Non-blank bullets across all experience entries.
    pub total_bullet_points: usize,
    pub total_skills: usize,
}

/// Number of non-empty comma-separated tokens. `"Go, Rust,, C++"` is 3.
pub fn count_skill_tokens(items: &str) -> usize {
    items.split(',').filter(|t| !t.trim().is_empty()).count()
}

pub fn compute_balance_report(snapshot: &ResumeModel) -> BalanceReport {
    let skill_density: Vec<SkillDensity> = snapshot
        .skills
        .iter()
        .map(|s| SkillDensity {
            category: s.category.clone(),
            count: count_skill_tokens(&s.items),
        })
        .collect();

    let total_bullet_points = snapshot
        .experience
        .iter()
        .flat_map(|e| e.points.iter())
        .filter(|p| !p.trim().is_empty())
        .count();

    let total_skills = skill_density.iter().map(|d| d.count).sum();

    BalanceReport {
        skill_density,
        total_bullet_points,
        total_skills,
    }
}
