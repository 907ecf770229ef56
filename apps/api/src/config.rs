use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MAX_SESSIONS: usize = 1000;
const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 60 * 60;

/// Application configuration loaded from environment variables.
/// Nothing is required: without `ANTHROPIC_API_KEY` the AI endpoints are disabled.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_sessions: usize,
    /// Sessions with no writes for this long are evicted.
    pub session_idle_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_sessions: match optional_env("MAX_SESSIONS") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_SESSIONS must be a positive integer")?,
                None => DEFAULT_MAX_SESSIONS,
            },
            session_idle_ttl: Duration::from_secs(match optional_env("SESSION_IDLE_TTL_SECS") {
                Some(v) => v
                    .parse::<u64>()
                    .context("SESSION_IDLE_TTL_SECS must be a whole number of seconds")?,
                None => DEFAULT_SESSION_IDLE_TTL_SECS,
            }),
        })
    }
}

/// Unset and blank are the same thing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
