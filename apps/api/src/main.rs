mod analysis;
mod assistant;
mod config;
mod editor;
mod errors;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::llm::LlmAssistant;
use crate::assistant::ResumeAssistant;
use crate::config::Config;
use crate::editor::session::SessionStore;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

const IDLE_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let assistant: Option<Arc<dyn ResumeAssistant>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("AI assistant enabled (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmAssistant(llm)))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; AI endpoints will answer 503");
            None
        }
    };

    let sessions = SessionStore::new(config.max_sessions, config.session_idle_ttl);
    sessions.spawn_idle_sweep(IDLE_SWEEP_INTERVAL);
    info!(
        "Session store ready (max {} sessions, idle TTL {}s)",
        config.max_sessions,
        config.session_idle_ttl.as_secs()
    );

    let state = AppState {
        sessions,
        assistant,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the front-end host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
