use std::str::FromStr;

use anyhow::{Context, Result};

use crate::recommendations::matcher::MatcherConfig;

/// Marker the recommendation prompt asks the model to place before its list.
pub const DEFAULT_RECOMMENDATION_MARKER: &str = "🔽";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub recommendation_marker: String,
    pub matcher: MatcherConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = MatcherConfig::default();

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recommendation_marker: std::env::var("RECOMMENDATION_MARKER")
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RECOMMENDATION_MARKER.to_string()),
            matcher: MatcherConfig {
                max_results: env_or("MATCH_MAX_RESULTS", defaults.max_results)?,
                sample_window: env_or("MATCH_SAMPLE_WINDOW", defaults.sample_window)?,
                min_title_len: env_or("MATCH_MIN_TITLE_LEN", defaults.min_title_len)?,
                min_reverse_len: env_or("MATCH_MIN_REVERSE_LEN", defaults.min_reverse_len)?,
                year_candidates: env_or("MATCH_YEAR_CANDIDATES", defaults.year_candidates)?,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_or(key, std::env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{value}'")),
        None => Ok(default),
    }
}
