use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::analysis::balance::{compute_balance_report, BalanceReport};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/sessions/:id/analysis
pub async fn handle_balance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BalanceReport>, AppError> {
    let snapshot = state.sessions.snapshot(id).await?;
    Ok(Json(compute_balance_report(&snapshot)))
}
