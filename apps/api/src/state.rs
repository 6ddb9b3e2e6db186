use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use crate::advisor::RoadmapAdvisor;
use crate::assessment::matching::JitterSource;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::company::Company;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable roadmap advisor. Default: GeminiRoadmapAdvisor. Swap via ADVISOR_MODE.
    pub advisor: Arc<dyn RoadmapAdvisor>,
    pub roster: Arc<Vec<Company>>,
    /// Shared so a seeded source yields one reproducible sequence across requests.
    pub jitter: Arc<Mutex<Box<dyn JitterSource + Send>>>,
}

impl AppState {
    /// Runs `f` with exclusive access to the jitter source.
    pub fn with_jitter<T>(
        &self,
        f: impl FnOnce(&mut dyn JitterSource) -> T,
    ) -> Result<T, AppError> {
        let mut guard = self
            .jitter
            .lock()
            .map_err(|_| AppError::Internal(anyhow!("jitter source lock poisoned")))?;
        Ok(f(&mut **guard))
    }
}

/// State with the default roster and the given advisor and jitter source.
#[cfg(test)]
pub fn test_state(
    advisor: impl RoadmapAdvisor + 'static,
    jitter: impl JitterSource + Send + 'static,
) -> AppState {
    use crate::config::AdvisorMode;
    use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
    use crate::models::company::default_roster;

    let jitter: Box<dyn JitterSource + Send> = Box::new(jitter);
    AppState {
        config: Config {
            port: 0,
            rust_log: "debug".to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            advisor_timeout_secs: 1,
            advisor_mode: AdvisorMode::Static,
            match_seed: None,
        },
        advisor: Arc::new(advisor),
        roster: Arc::new(default_roster()),
        jitter: Arc::new(Mutex::new(jitter)),
    }
}
