use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::editor::commands::{apply, EditCommand};
use crate::editor::session::SessionView;
use crate::errors::AppError;
use crate::models::resume::ResumeModel;
use crate::state::AppState;

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let view = state.sessions.create().await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.sessions.get(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Arc<ResumeModel>>, AppError> {
    Ok(Json(state.sessions.reset(id).await?))
}

/// POST /api/v1/sessions/:id/edits
///
/// Applies one edit command and returns the resulting snapshot.
pub async fn handle_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(command): Json<EditCommand>,
) -> Result<Json<Arc<ResumeModel>>, AppError> {
    debug!("Session {id}: {}", command.name());
    let snapshot = state.sessions.update(id, |s| apply(s, &command)).await?;
    Ok(Json(snapshot))
}
