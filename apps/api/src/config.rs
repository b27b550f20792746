use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails with context if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Base URL of the Ollama-compatible model host.
    pub model_host_url: String,
    /// Chat model name sent with every request.
    pub model_name: String,
    /// Client-level timeout for model calls, in seconds. Independent of any
    /// request deadline; a timed-out enrichment falls back silently.
    pub model_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            model_host_url: std::env::var("MODEL_HOST_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            model_name: std::env::var("MODEL_NAME").unwrap_or_else(|_| "llama3".to_string()),
            model_timeout_secs: std::env::var("MODEL_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("MODEL_TIMEOUT_SECS must be a number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
