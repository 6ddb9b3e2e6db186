pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile intake
        .route("/api/v1/profile/sample", get(handlers::handle_sample_profile))
        .route("/api/v1/profile/skills", post(handlers::handle_edit_skills))
        // Reference data
        .route("/api/v1/companies", get(handlers::handle_roster))
        .route(
            "/api/v1/benchmarks/skills",
            get(handlers::handle_benchmark_skills),
        )
        // Assessment
        .route("/api/v1/predictions", post(handlers::handle_predict))
        .route(
            "/api/v1/company-matches",
            post(handlers::handle_company_matches),
        )
        .route("/api/v1/roadmap", post(handlers::handle_roadmap))
        .route("/api/v1/assessments", post(handlers::handle_assessment))
        .with_state(state)
}
