use serde::{Deserialize, Serialize};

/// One course or job suggestion, produced per (skill, provider) pair.
///
/// Results are collected into a flat sequence ordered by skill first, then
/// by provider registration order. Duplicate titles across providers are
/// expected and preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub platform: String,
    pub title: String,
    pub url: String,
}
