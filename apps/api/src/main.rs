mod config;
mod errors;
mod extract;
mod models;
mod recommend;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::skills::SkillCatalog;
use crate::recommend::coursera::{CourseraClient, CourseraProvider};
use crate::recommend::providers::{
    RecommendationProvider, INDEED_JOBS, LINKEDIN_JOBS, LINKEDIN_LEARNING, NAUKRI_JOBS,
};
use crate::recommend::Recommender;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Dyna API v{}", env!("CARGO_PKG_VERSION"));

    // Skill catalog is fixed at startup and shared read-only across requests
    let catalog = Arc::new(SkillCatalog::with_defaults());
    info!("Skill catalog loaded ({} keywords)", catalog.entries().len());

    // Course providers: networked catalog search first, then the template.
    // Registration order here is the output order within each skill.
    let coursera = Arc::new(CourseraClient::new(config.coursera_api_url.clone()));
    let courses: Vec<Arc<dyn RecommendationProvider>> = vec![
        Arc::new(CourseraProvider::new(coursera, config.course_search_limit)),
        Arc::new(LINKEDIN_LEARNING),
    ];
    let jobs: Vec<Arc<dyn RecommendationProvider>> = vec![
        Arc::new(LINKEDIN_JOBS),
        Arc::new(INDEED_JOBS),
        Arc::new(NAUKRI_JOBS),
    ];
    let recommender = Arc::new(Recommender::new(courses, jobs));
    info!("Recommendation providers registered");

    let state = AppState {
        catalog,
        recommender,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
