pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::assistant::handlers as assistant;
use crate::editor::handlers as editor;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions & editing
        .route("/api/v1/sessions", post(editor::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(editor::handle_get_session).delete(editor::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/reset",
            post(editor::handle_reset_session),
        )
        .route("/api/v1/sessions/:id/edits", post(editor::handle_edit))
        // Rendering
        .route("/api/v1/sessions/:id/preview", get(render::handle_preview))
        .route("/api/v1/sessions/:id/export", get(render::handle_export))
        .route(
            "/api/v1/sessions/:id/analysis",
            get(analysis::handle_balance),
        )
        // Assistant
        .route(
            "/api/v1/sessions/:id/ai/enhance-point",
            post(assistant::handle_enhance_point),
        )
        .route(
            "/api/v1/sessions/:id/ai/rewrite-entry",
            post(assistant::handle_rewrite_entry),
        )
        .route(
            "/api/v1/sessions/:id/ai/review",
            get(assistant::handle_get_review).post(assistant::handle_review),
        )
        .route(
            "/api/v1/sessions/:id/ai/review/apply",
            post(assistant::handle_apply_review),
        )
        .route(
            "/api/v1/ai/suggest-skills",
            post(assistant::handle_suggest_skills),
        )
        .with_state(state)
}
