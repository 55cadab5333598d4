use anyhow::{Context, Result};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-lite";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Startup fails if `GEMINI_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Ceiling applied to every outbound provider call.
    pub provider_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: optional_env("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: optional_env("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            provider_timeout_secs: optional_env(
                "PROVIDER_TIMEOUT_SECS",
                &DEFAULT_PROVIDER_TIMEOUT_SECS.to_string(),
            )
            .parse::<u64>()
            .context("PROVIDER_TIMEOUT_SECS must be a whole number of seconds")?,
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Config pointing at a fake provider; never read from the environment.
    pub fn for_tests(base_url: &str) -> Self {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: base_url.trim_end_matches('/').to_string(),
            provider_timeout_secs: 5,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
