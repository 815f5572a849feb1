use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Absent key puts the coach in fallback-only mode.
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: Option<String>,
    pub ai_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
    /// Disables the random jitter on fallback match percentages.
    pub deterministic_scores: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let ai_timeout_secs = std::env::var("AI_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("AI_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_api_url: optional_env("ANTHROPIC_API_URL"),
            ai_timeout: Duration::from_secs(ai_timeout_secs),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            deterministic_scores: parse_flag(optional_env("DETERMINISTIC_SCORES").as_deref()),
        })
    }
}

#[cfg(test)]
impl Config {
    /// Fallback-only configuration for handler tests.
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/coach_test".to_string(),
            anthropic_api_key: None,
            anthropic_api_url: None,
            ai_timeout: Duration::from_secs(1),
            port: 0,
            rust_log: "debug".to_string(),
            deterministic_scores: true,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Returns the variable's value, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
