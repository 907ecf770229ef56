use std::sync::Arc;

use crate::assistant::ResumeAssistant;
use crate::config::Config;
use crate::editor::session::SessionStore;
use crate::errors::AppError;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// `None` when no model API key is configured.
    pub assistant: Option<Arc<dyn ResumeAssistant>>,
    pub config: Config,
}

impl AppState {
    pub fn assistant(&self) -> Result<Arc<dyn ResumeAssistant>, AppError> {
        self.assistant.clone().ok_or(AppError::AiUnavailable)
    }
}
