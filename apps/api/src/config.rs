use anyhow::{bail, Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorMode {
    Gemini,
    Static,
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a value is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Unset means every roadmap request falls back to the static plan.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub advisor_timeout_secs: u64,
    pub advisor_mode: AdvisorMode,
    /// Seeds company-match jitter for reproducible runs.
    pub match_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let advisor_mode = match lookup("ADVISOR_MODE").as_deref() {
            None | Some("gemini") => AdvisorMode::Gemini,
            Some("static") => AdvisorMode::Static,
            Some(other) => bail!("ADVISOR_MODE must be 'gemini' or 'static', got '{other}'"),
        };

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            gemini_api_key: lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()),
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: lookup("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            advisor_timeout_secs: lookup("ADVISOR_TIMEOUT_SECS")
                .unwrap_or_else(|| "20".to_string())
                .parse::<u64>()
                .context("ADVISOR_TIMEOUT_SECS must be a whole number of seconds")?,
            advisor_mode,
            match_seed: lookup("MATCH_SEED")
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("MATCH_SEED must be an unsigned integer")?,
        })
    }
}
