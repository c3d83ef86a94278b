use anyhow::{Context, Result};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Application configuration loaded from environment variables.
/// Panics at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Overridable so tests can point the LLM client at a stub server.
    pub openai_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Attempts per model call. Default 1: a single attempt, no retry.
    pub llm_max_attempts: u32,
    pub llm_timeout_secs: u64,
    /// Maximum characters taken from a single uploaded file.
    pub max_excerpt_per_file: usize,
    /// Maximum characters taken across all uploaded files combined.
    pub max_excerpt_total: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_max_attempts: parse_env("LLM_MAX_ATTEMPTS", 1)?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            max_excerpt_per_file: parse_env("MAX_EXCERPT_PER_FILE", 1500)?,
            max_excerpt_total: parse_env("MAX_EXCERPT_TOTAL", 4000)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("'{key}' must be a valid number")),
        Err(_) => Ok(default),
    }
}
