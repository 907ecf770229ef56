//! Résumé Assistant: the hosted-model collaborator behind bullet rewriting,
//! résumé review and skill suggestions.
//!
//! The editor never depends on how suggestions are produced. `AppState` holds an
//! `Option<Arc<dyn ResumeAssistant>>`: `None` when no API key is configured,
//! `LlmAssistant` otherwise, and a canned stub in tests.
//!
//! Results are proposals. They reach the snapshot only through `apply`, which
//! re-checks that the targeted entry still exists.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ResumeModel;

pub mod apply;
pub mod handlers;
pub mod llm;
pub mod prompts;

/// Rewritten bullets for one experience entry, keyed by its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovedExperience {
    pub id: String,
    #[serde(default)]
    pub points: Vec<String>,
}

/// Structured critique returned by a résumé review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub feedback: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub improved_experience: Vec<ImprovedExperience>,
}

#[async_trait]
pub trait ResumeAssistant: Send + Sync {
    /// Rewrites one bullet in the XYZ style.
    async fn rewrite_bullet(&self, text: &str) -> Result<String, AppError>;

    /// Critiques the whole résumé and proposes rewritten bullets per role.
    async fn review(&self, snapshot: &ResumeModel) -> Result<AnalysisResult, AppError>;

    /// Skill keywords for a target role. Never fails; an unusable reply is an empty list.
    async fn suggest_skills(&self, role: &str) -> Vec<String>;

    /// Rewrites a role's bullets. `proposal[i]` always corresponds to
    /// `points[i]`; blank drafts are passed through without a model call.
    async fn propose_rewrite(&self, points: &[String]) -> Result<Vec<String>, AppError> {
        let mut proposal = Vec::with_capacity(points.len());
        for point in points {
            if point.trim().is_empty() {
                proposal.push(point.clone());
            } else {
                proposal.push(self.rewrite_bullet(point).await?);
            }
        }
        Ok(proposal)
    }
}
