//! Roadmap advisor. Asks the generative model for a prioritized improvement
//! plan and falls back to a static plan on any failure.
//!
//! `AppState` holds an `Arc<dyn RoadmapAdvisor>`, chosen at startup via
//! `ADVISOR_MODE`. Callers always get a usable plan; failures only show up in
//! the logs.

pub mod prompts;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::advisor::prompts::{build_roadmap_prompt, roadmap_schema};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::StudentProfile;
use crate::models::roadmap::{fallback_plan, ImprovementAction};

#[async_trait]
pub trait RoadmapAdvisor: Send + Sync {
    /// Never fails: returns the fallback plan when no better plan is available.
    async fn generate(&self, profile: &StudentProfile) -> Vec<ImprovementAction>;

    /// "gemini" | "static", reported in health output.
    fn backend(&self) -> &'static str;
}

/// Always answers with the fallback plan. No network access.
pub struct StaticRoadmapAdvisor;

#[async_trait]
impl RoadmapAdvisor for StaticRoadmapAdvisor {
    async fn generate(&self, _profile: &StudentProfile) -> Vec<ImprovementAction> {
        fallback_plan()
    }

    fn backend(&self) -> &'static str {
        "static"
    }
}

/// Generates the plan through `LlmClient`, bounded by `timeout`.
pub struct GeminiRoadmapAdvisor {
    llm: LlmClient,
    timeout: Duration,
}

impl GeminiRoadmapAdvisor {
    pub fn new(llm: LlmClient, timeout: Duration) -> Self {
        Self { llm, timeout }
    }

    /// The fallible path, with every failure mode surfaced as an `LlmError`.
    pub async fn try_generate(
        &self,
        profile: &StudentProfile,
    ) -> Result<Vec<ImprovementAction>, LlmError> {
        let profile_json = serde_json::to_string(profile)?;
        let prompt = build_roadmap_prompt(&profile_json);
        let schema = roadmap_schema();

        let plan: Vec<ImprovementAction> =
            tokio::time::timeout(self.timeout, self.llm.call_json(&prompt, &schema))
                .await
                .map_err(|_| LlmError::Timeout(self.timeout))??;

        if plan.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(plan)
    }
}

#[async_trait]
impl RoadmapAdvisor for GeminiRoadmapAdvisor {
    async fn generate(&self, profile: &StudentProfile) -> Vec<ImprovementAction> {
        match self.try_generate(profile).await {
            Ok(plan) => {
                info!("Generated roadmap with {} actions", plan.len());
                plan
            }
            Err(e) => {
                warn!(error = %e, model = self.llm.model(), "Roadmap generation failed, using fallback plan");
                fallback_plan()
            }
        }
    }

    fn backend(&self) -> &'static str {
        "gemini"
    }
}
