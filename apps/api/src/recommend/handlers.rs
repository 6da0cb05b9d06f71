use axum::{extract::State, Json};
use serde::Deserialize;

use super::Category;
use crate::models::recommendation::RecommendationItem;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub skills: Vec<String>,
    pub category: Category,
}

/// POST /api/v1/recommendations
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Json<Vec<RecommendationItem>> {
    let items = state.recommender.recommend(&req.skills, req.category).await;
    Json(items)
}
