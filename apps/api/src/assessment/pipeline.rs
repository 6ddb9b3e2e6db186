//! Assessment pipeline. Scores, matches and advises on one profile.
//!
//! Flow: compute_prediction → match_companies → advisor.generate → report.
//!
//! Scoring and matching are synchronous and finish before the advisor call
//! is awaited. The report is only built once all three parts are in hand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::assessment::matching::match_companies;
use crate::assessment::scoring::{compute_prediction, radar, skill_breakdown};
use crate::errors::AppError;
use crate::models::company::CompanyFit;
use crate::models::prediction::{PredictionResult, RadarAxis, SkillPoint};
use crate::models::profile::StudentProfile;
use crate::models::roadmap::ImprovementAction;
use crate::state::AppState;

/// Prediction plus the chart data derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProfile {
    pub prediction: PredictionResult,
    pub skill_breakdown: Vec<SkillPoint>,
    pub radar: Vec<RadarAxis>,
}

/// Everything the dashboard renders for one submitted profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// Log correlation only. Nothing is stored under this id.
    pub assessment_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub profile: StudentProfile,
    pub prediction: PredictionResult,
    pub skill_breakdown: Vec<SkillPoint>,
    pub radar: Vec<RadarAxis>,
    pub companies: Vec<CompanyFit>,
    pub roadmap: Vec<ImprovementAction>,
}

pub fn score_profile(profile: &StudentProfile) -> ScoredProfile {
    let prediction = compute_prediction(profile);
    let radar = radar(profile, &prediction);
    ScoredProfile {
        skill_breakdown: skill_breakdown(profile),
        radar,
        prediction,
    }
}

/// Company matches against the state's roster, using the shared jitter source.
pub fn match_profile(
    state: &AppState,
    profile: &StudentProfile,
) -> Result<Vec<CompanyFit>, AppError> {
    state.with_jitter(|jitter| match_companies(profile, &state.roster, jitter))
}

/// Runs the full pipeline. Only fails if the jitter source is unusable.
pub async fn run_assessment(
    state: &AppState,
    profile: StudentProfile,
) -> Result<AssessmentReport, AppError> {
    let assessment_id = Uuid::new_v4();
    let span = info_span!("assessment", %assessment_id);

    async move {
        let scored = score_profile(&profile);
        info!(
            "Placement probability {}% ({:?} risk)",
            scored.prediction.overall_probability, scored.prediction.risk_level
        );

        let companies = match_profile(state, &profile)?;
        info!("Matched {} companies", companies.len());

        let roadmap = state.advisor.generate(&profile).await;
        info!(
            "Roadmap ready: {} actions via {}",
            roadmap.len(),
            state.advisor.backend()
        );

        Ok::<_, AppError>(AssessmentReport {
            assessment_id,
            generated_at: Utc::now(),
            profile,
            prediction: scored.prediction,
            skill_breakdown: scored.skill_breakdown,
            radar: scored.radar,
            companies,
            roadmap,
        })
    }
    .instrument(span)
    .await
}
