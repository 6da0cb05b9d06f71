use std::sync::Arc;

use crate::extract::skills::SkillCatalog;
use crate::recommend::Recommender;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Fixed skill keyword catalog used by extraction.
    pub catalog: Arc<SkillCatalog>,
    /// Provider registries for course and job recommendations.
    pub recommender: Arc<Recommender>,
}
