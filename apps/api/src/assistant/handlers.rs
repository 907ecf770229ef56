//! Axum route handlers for the résumé assistant.
//!
//! No session lock is held while a model call is outstanding: each handler
//! reads the snapshot, releases it, awaits the assistant, then re-validates
//! by id when applying.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::assistant::apply::{apply_bullet_rewrite, clamp_proposal, retain_known_improvements};
use crate::assistant::AnalysisResult;
use crate::errors::AppError;
use crate::models::resume::ResumeModel;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancePointRequest {
    pub experience_id: String,
    pub index: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancePointResponse {
    /// False when the point was edited, moved or removed while the rewrite was in flight.
    pub applied: bool,
    pub text: String,
    pub resume: Arc<ResumeModel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRef {
    pub experience_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteProposal {
    pub experience_id: String,
    pub original: Vec<String>,
    /// Index-aligned with `original`; blank drafts come back unchanged.
    pub proposed: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestSkillsRequest {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestSkillsResponse {
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/ai/enhance-point
///
/// Rewrites one bullet and writes it back if the bullet still exists.
pub async fn handle_enhance_point(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EnhancePointRequest>,
) -> Result<Json<EnhancePointResponse>, AppError> {
    let assistant = state.assistant()?;
    let snapshot = state.sessions.snapshot(id).await?;

    let exp = snapshot
        .find_experience(&request.experience_id)
        .ok_or_else(|| {
            AppError::NotFound(format!("Experience {} not found", request.experience_id))
        })?;
    let original = exp.points.get(request.index).cloned().ok_or_else(|| {
        AppError::NotFound(format!(
            "Point {} of experience {} not found",
            request.index, request.experience_id
        ))
    })?;
    if original.trim().is_empty() {
        return Err(AppError::Validation("Cannot enhance an empty point".to_string()));
    }
    drop(snapshot);

    let _guard = state
        .sessions
        .begin_request(id, format!("{}-{}", request.experience_id, request.index))?;

    let text = assistant.rewrite_bullet(&original).await?;

    let applied = state
        .sessions
        .try_update(id, |s| {
            apply_bullet_rewrite(s, &request.experience_id, request.index, &original, &text)
        })
        .await?;

    let (applied, resume) = match applied {
        Some(resume) => (true, resume),
        None => {
            warn!(
                "Discarded rewrite for point {} of experience {} in session {id}: point changed or gone",
                request.index, request.experience_id
            );
            (false, state.sessions.snapshot(id).await?)
        }
    };

    Ok(Json(EnhancePointResponse {
        applied,
        text,
        resume,
    }))
}

/// POST /api/v1/sessions/:id/ai/rewrite-entry
///
/// Proposes rewritten bullets for one role without applying them. Accepting the
/// proposal is an ordinary `updateExperienceField` edit.
pub async fn handle_rewrite_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ExperienceRef>,
) -> Result<Json<RewriteProposal>, AppError> {
    let assistant = state.assistant()?;
    let snapshot = state.sessions.snapshot(id).await?;
    let original = snapshot
        .find_experience(&request.experience_id)
        .map(|e| e.points.clone())
        .ok_or_else(|| {
            AppError::NotFound(format!("Experience {} not found", request.experience_id))
        })?;
    drop(snapshot);

    let _guard = state
        .sessions
        .begin_request(id, format!("{}-all", request.experience_id))?;

    let proposed = assistant.propose_rewrite(&original).await?;
    let proposed = clamp_proposal(&original, proposed);

    Ok(Json(RewriteProposal {
        experience_id: request.experience_id,
        original,
        proposed,
    }))
}

/// POST /api/v1/sessions/:id/ai/review
///
/// Runs a full review and keeps the result as the session's pending review.
/// A failed review leaves any earlier pending review untouched.
pub async fn handle_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisResult>, AppError> {
    let assistant = state.assistant()?;
    let snapshot = state.sessions.snapshot(id).await?;
    let _guard = state.sessions.begin_request(id, "review".to_string())?;

    let result = assistant.review(&snapshot).await?;
    let result = retain_known_improvements(result, &snapshot);
    state.sessions.set_review(id, result.clone()).await?;

    info!(
        "Stored review for session {id} with {} proposed improvements",
        result.improved_experience.len()
    );
    Ok(Json(result))
}

/// GET /api/v1/sessions/:id/ai/review
pub async fn handle_get_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<AnalysisResult>>, AppError> {
    Ok(Json(state.sessions.pending_review(id).await?))
}

/// POST /api/v1/sessions/:id/ai/review/apply
pub async fn handle_apply_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ExperienceRef>,
) -> Result<Json<Arc<ResumeModel>>, AppError> {
    let snapshot = state
        .sessions
        .apply_pending_improvement(id, &request.experience_id)
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/ai/suggest-skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(request): Json<SuggestSkillsRequest>,
) -> Result<Json<SuggestSkillsResponse>, AppError> {
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }
    let assistant = state.assistant()?;
    let skills = assistant.suggest_skills(request.role.trim()).await;
    Ok(Json(SuggestSkillsResponse { skills }))
}
