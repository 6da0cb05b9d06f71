pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extract::handlers as extract_handlers;
use crate::recommend::handlers as recommend_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé parsing
        .route("/api/v1/resumes/parse", post(extract_handlers::handle_parse))
        .route(
            "/api/v1/resumes/parse-text",
            post(extract_handlers::handle_parse_text),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            post(recommend_handlers::handle_recommend),
        )
        .with_state(state)
}
