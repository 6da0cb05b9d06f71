//! The provider capability and the networkless templated providers.
//!
//! Every recommendation source — networked or templated — implements
//! [`RecommendationProvider`] and is carried by the aggregator as
//! `Arc<dyn RecommendationProvider>`, so the failure-isolation policy is
//! uniform across all of them.

use async_trait::async_trait;
use thiserror::Error;

use crate::extract::title_case;
use crate::models::recommendation::RecommendationItem;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// A source of recommendations for a single skill.
///
/// `fetch` may return an empty list; an `Err` is converted into an empty
/// contribution by the aggregator and never reaches the caller.
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self, skill: &str) -> Result<Vec<RecommendationItem>, ProviderError>;
}

/// Networkless provider that synthesizes exactly one item per skill from
/// fixed templates. `{skill}` in the title template is replaced with the
/// title-cased skill; in the URL template with the skill verbatim.
#[derive(Debug, Clone)]
pub struct TemplateProvider {
    platform: &'static str,
    title_template: &'static str,
    url_template: &'static str,
}

impl TemplateProvider {
    pub const fn new(
        platform: &'static str,
        title_template: &'static str,
        url_template: &'static str,
    ) -> Self {
        Self {
            platform,
            title_template,
            url_template,
        }
    }
}

#[async_trait]
impl RecommendationProvider for TemplateProvider {
    fn name(&self) -> &str {
        self.platform
    }

    async fn fetch(&self, skill: &str) -> Result<Vec<RecommendationItem>, ProviderError> {
        Ok(vec![RecommendationItem {
            platform: self.platform.to_string(),
            title: self.title_template.replace("{skill}", &title_case(skill)),
            url: self.url_template.replace("{skill}", skill),
        }])
    }
}

/// Templated course provider.
pub const LINKEDIN_LEARNING: TemplateProvider = TemplateProvider::new(
    "LinkedIn Learning",
    "{skill} for Beginners",
    "https://www.linkedin.com/learning/search?keywords={skill}",
);

/// Templated job providers, in registration order.
pub const LINKEDIN_JOBS: TemplateProvider = TemplateProvider::new(
    "LinkedIn",
    "{skill} Jobs",
    "https://www.linkedin.com/jobs/search/?keywords={skill}",
);

pub const INDEED_JOBS: TemplateProvider = TemplateProvider::new(
    "Indeed",
    "{skill} Jobs",
    "https://www.indeed.com/jobs?q={skill}",
);

pub const NAUKRI_JOBS: TemplateProvider = TemplateProvider::new(
    "Naukri",
    "{skill} Jobs",
    "https://www.naukri.com/{skill}-jobs",
);
