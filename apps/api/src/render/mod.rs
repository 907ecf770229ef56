//! Document rendering: pure functions from a snapshot to what the user sees.
//!
//! `screen` builds the structured preview layout; `export` serializes the same
//! content as a word-processor document. Both share the content rules below so
//! the two views cannot drift apart.

pub mod export;
pub mod handlers;
pub mod screen;

use crate::models::resume::{EducationItem, ExperienceItem, PersonalInfo};

/// Separator between contact fields and between company and location.
pub const SEPARATOR: &str = " | ";

/// Shown instead of the end date for a current role.
pub const PRESENT: &str = "Present";

/// The contact fields that have content, in display order.
pub fn contact_fields(info: &PersonalInfo) -> Vec<&str> {
    [
        info.email.as_str(),
        info.phone.as_str(),
        info.linkedin.as_str(),
        info.portfolio.as_str(),
    ]
    .into_iter()
    .filter(|v| !v.trim().is_empty())
    .collect()
}

/// `"<start> — <end>"`, with "Present" standing in for the end of a current role.
pub fn date_range(exp: &ExperienceItem) -> String {
    let end = if exp.is_current {
        PRESENT
    } else {
        exp.end_date.as_str()
    };
    format!("{} — {}", exp.start_date, end)
}

/// Company and location, skipping whichever is blank.
pub fn company_line(exp: &ExperienceItem) -> String {
    [exp.company.as_str(), exp.location.as_str()]
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Points with content. Drafts that are empty or whitespace never produce a bullet.
pub fn visible_points(exp: &ExperienceItem) -> impl Iterator<Item = &str> {
    exp.points
        .iter()
        .map(String::as_str)
        .filter(|p| !p.trim().is_empty())
}

/// `"GPA: <gpa>"`, or `None` when no GPA was entered.
pub fn gpa_badge(edu: &EducationItem) -> Option<String> {
    edu.gpa
        .as_deref()
        .filter(|g| !g.trim().is_empty())
        .map(|g| format!("GPA: {g}"))
}
