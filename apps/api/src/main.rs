mod advisor;
mod assessment;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::advisor::{GeminiRoadmapAdvisor, RoadmapAdvisor, StaticRoadmapAdvisor};
use crate::assessment::matching::JitterSource;
use crate::config::{AdvisorMode, Config};
use crate::llm_client::LlmClient;
use crate::models::company::default_roster;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Placement API v{}", env!("CARGO_PKG_VERSION"));

    let advisor = build_advisor(&config)?;
    info!("Roadmap advisor: {}", advisor.backend());

    let jitter: Box<dyn JitterSource + Send> = match config.match_seed {
        Some(seed) => {
            info!("Company matching seeded with {seed}");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(StdRng::from_entropy()),
    };

    let state = AppState {
        config: config.clone(),
        advisor,
        roster: Arc::new(default_roster()),
        jitter: Arc::new(Mutex::new(jitter)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the roadmap backend. A missing key still builds the Gemini advisor;
/// each request then logs the failure and serves the fallback plan.
fn build_advisor(config: &Config) -> Result<Arc<dyn RoadmapAdvisor>> {
    match config.advisor_mode {
        AdvisorMode::Static => Ok(Arc::new(StaticRoadmapAdvisor)),
        AdvisorMode::Gemini => {
            let llm = LlmClient::new(
                config.gemini_api_key.clone(),
                &config.gemini_base_url,
                &config.gemini_model,
            )?;
            if !llm.has_credential() {
                warn!("GEMINI_API_KEY is not set; roadmaps will use the fallback plan");
            }
            info!("LLM client initialized (model: {})", llm.model());
            Ok(Arc::new(GeminiRoadmapAdvisor::new(
                llm,
                Duration::from_secs(config.advisor_timeout_secs),
            )))
        }
    }
}
