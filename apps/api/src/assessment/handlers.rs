//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::assessment::pipeline::{
    match_profile, run_assessment, score_profile, AssessmentReport, ScoredProfile,
};
use crate::errors::AppError;
use crate::models::company::{Company, CompanyFit};
use crate::models::profile::{benchmark_skills, Skill, StudentProfile};
use crate::models::roadmap::ImprovementAction;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// One edit to a profile's skill list, addressed by index.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SkillEdit {
    /// Either a full `skill`, or just a `name` (Intermediate / Domain).
    Add {
        skill: Option<Skill>,
        name: Option<String>,
    },
    Remove {
        index: usize,
    },
    Update {
        index: usize,
        skill: Skill,
    },
}

#[derive(Debug, Deserialize)]
pub struct SkillEditRequest {
    pub profile: StudentProfile,
    pub edit: SkillEdit,
}

/// Validates `edit` and applies it to `profile`.
pub fn apply_skill_edit(profile: &mut StudentProfile, edit: SkillEdit) -> Result<(), AppError> {
    match edit {
        SkillEdit::Add { skill, name } => {
            let skill = match (skill, name) {
                (Some(skill), None) => skill,
                (None, Some(name)) => Skill::named(name.trim()),
                _ => {
                    return Err(AppError::Validation(
                        "add requires exactly one of 'skill' or 'name'".to_string(),
                    ))
                }
            };
            require_skill_name(&skill)?;
            profile.add_skill(skill);
        }
        SkillEdit::Remove { index } => {
            profile.remove_skill(index)?;
        }
        SkillEdit::Update { index, skill } => {
            require_skill_name(&skill)?;
            profile.update_skill(index, skill)?;
        }
    }
    Ok(())
}

fn require_skill_name(skill: &Skill) -> Result<(), AppError> {
    if skill.name.trim().is_empty() {
        return Err(AppError::Validation("skill name cannot be empty".to_string()));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile/sample
pub async fn handle_sample_profile() -> Json<StudentProfile> {
    Json(StudentProfile::sample())
}

/// POST /api/v1/profile/skills
///
/// Applies one skill edit to the submitted profile and returns the result.
/// Nothing is stored; the caller keeps the profile.
pub async fn handle_edit_skills(
    Json(request): Json<SkillEditRequest>,
) -> Result<Json<StudentProfile>, AppError> {
    let mut profile = request.profile;
    apply_skill_edit(&mut profile, request.edit)?;
    Ok(Json(profile))
}

/// GET /api/v1/companies
pub async fn handle_roster(State(state): State<AppState>) -> Json<Vec<Company>> {
    Json(state.roster.as_ref().clone())
}

/// GET /api/v1/benchmarks/skills
pub async fn handle_benchmark_skills() -> Json<Vec<Skill>> {
    Json(benchmark_skills())
}

/// POST /api/v1/predictions
pub async fn handle_predict(Json(profile): Json<StudentProfile>) -> Json<ScoredProfile> {
    Json(score_profile(&profile))
}

/// POST /api/v1/company-matches
///
/// Fit scores include random jitter unless MATCH_SEED is set.
pub async fn handle_company_matches(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<Vec<CompanyFit>>, AppError> {
    Ok(Json(match_profile(&state, &profile)?))
}

/// POST /api/v1/roadmap
///
/// Always 200: the advisor falls back to the static plan on failure.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Json<Vec<ImprovementAction>> {
    Json(state.advisor.generate(&profile).await)
}

/// POST /api/v1/assessments
///
/// Full pipeline: predict → match → roadmap, returned together.
pub async fn handle_assessment(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<AssessmentReport>, AppError> {
    Ok(Json(run_assessment(&state, profile).await?))
}
