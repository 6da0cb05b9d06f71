// Recommendation engine
// Implements: per-skill fan-out over ordered provider registries with a
// uniform local error boundary. A failing provider contributes an empty
// list for that (skill, provider) pair; the batch never aborts.

pub mod coursera;
pub mod handlers;
pub mod providers;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::recommendation::RecommendationItem;
use crate::recommend::providers::RecommendationProvider;

/// Recommendation category. A closed set: an unknown wire value is rejected
/// at deserialization, before the aggregator ever runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Courses,
    Jobs,
}

/// Holds one ordered provider registry per category. Registries are fixed at
/// startup; the aggregator is agnostic to whether a provider is networked or
/// templated.
pub struct Recommender {
    courses: Vec<Arc<dyn RecommendationProvider>>,
    jobs: Vec<Arc<dyn RecommendationProvider>>,
}

impl Recommender {
    pub fn new(
        courses: Vec<Arc<dyn RecommendationProvider>>,
        jobs: Vec<Arc<dyn RecommendationProvider>>,
    ) -> Self {
        Self { courses, jobs }
    }

    fn providers_for(&self, category: Category) -> &[Arc<dyn RecommendationProvider>] {
        match category {
            Category::Courses => &self.courses,
            Category::Jobs => &self.jobs,
        }
    }

    /// Queries every provider registered for the category, skill by skill,
    /// and flattens the results. Output order is skill order (as given by
    /// the caller), then provider registration order within each skill.
    ///
    /// No retries, no caching, no deduplication across providers.
    pub async fn recommend(
        &self,
        skills: &[String],
        category: Category,
    ) -> Vec<RecommendationItem> {
        let mut items = Vec::new();
        for skill in skills {
            for provider in self.providers_for(category) {
                match provider.fetch(skill).await {
                    Ok(batch) => items.extend(batch),
                    Err(e) => {
                        warn!(
                            "Provider '{}' failed for skill '{skill}': {e}",
                            provider.name()
                        );
                    }
                }
            }
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::providers::{
        ProviderError, RecommendationProvider, INDEED_JOBS, LINKEDIN_JOBS, NAUKRI_JOBS,
    };
    use super::*;
    use async_trait::async_trait;

    struct FailingProvider;

    #[async_trait]
    impl RecommendationProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch(&self, _skill: &str) -> Result<Vec<RecommendationItem>, ProviderError> {
            Err(ProviderError::UnexpectedResponse("boom".to_string()))
        }
    }

    /// Echoes its label and the raw skill back as a single item.
    struct EchoProvider(&'static str);

    #[async_trait]
    impl RecommendationProvider for EchoProvider {
        fn name(&self) -> &str {
            self.0
        }

        async fn fetch(&self, skill: &str) -> Result<Vec<RecommendationItem>, ProviderError> {
            Ok(vec![RecommendationItem {
                platform: self.0.to_string(),
                title: skill.to_string(),
                url: format!("https://example.com/{skill}"),
            }])
        }
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn job_board_recommender() -> Recommender {
        Recommender::new(
            vec![],
            vec![
                Arc::new(LINKEDIN_JOBS),
                Arc::new(INDEED_JOBS),
                Arc::new(NAUKRI_JOBS),
            ],
        )
    }

    #[tokio::test]
    async fn test_jobs_yield_one_item_per_static_provider() {
        let recommender = job_board_recommender();
        let items = recommender.recommend(&skills(&["python"]), Category::Jobs).await;

        assert_eq!(items.len(), 3);
        let platforms: Vec<&str> = items.iter().map(|i| i.platform.as_str()).collect();
        assert_eq!(platforms, vec!["LinkedIn", "Indeed", "Naukri"]);
        assert!(items.iter().all(|i| i.title.contains("Python")));
    }

    #[tokio::test]
    async fn test_order_is_skill_then_registration() {
        let recommender = Recommender::new(
            vec![Arc::new(EchoProvider("a")), Arc::new(EchoProvider("b"))],
            vec![],
        );
        let items = recommender
            .recommend(&skills(&["x", "y"]), Category::Courses)
            .await;

        let pairs: Vec<(&str, &str)> = items
            .iter()
            .map(|i| (i.platform.as_str(), i.title.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "x"), ("b", "x"), ("a", "y"), ("b", "y")]);
    }

    #[tokio::test]
    async fn test_failing_provider_degrades_to_empty_contribution() {
        let recommender = Recommender::new(
            vec![Arc::new(FailingProvider), Arc::new(EchoProvider("ok"))],
            vec![],
        );
        let items = recommender
            .recommend(&skills(&["python", "sql"]), Category::Courses)
            .await;

        // The failing provider drops out; both skills keep their other results.
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.platform == "ok"));
    }

    #[tokio::test]
    async fn test_all_providers_failing_yields_empty_without_panic() {
        let recommender = Recommender::new(vec![Arc::new(FailingProvider)], vec![]);
        let items = recommender
            .recommend(&skills(&["python"]), Category::Courses)
            .await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_empty_skills_yield_empty_result() {
        let recommender = job_board_recommender();
        let items = recommender.recommend(&[], Category::Jobs).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_titles_across_providers_are_preserved() {
        let recommender = Recommender::new(
            vec![Arc::new(EchoProvider("a")), Arc::new(EchoProvider("b"))],
            vec![],
        );
        let items = recommender.recommend(&skills(&["x"]), Category::Courses).await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, items[1].title);
    }

    #[test]
    fn test_category_parses_known_wire_values() {
        assert_eq!(
            serde_json::from_str::<Category>("\"courses\"").unwrap(),
            Category::Courses
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"jobs\"").unwrap(),
            Category::Jobs
        );
    }

    #[test]
    fn test_category_rejects_unknown_wire_value() {
        assert!(serde_json::from_str::<Category>("\"music\"").is_err());
    }
}
