//! Coursera catalog client — the single networked recommendation source.
//!
//! All catalog HTTP goes through [`CourseraClient`]. The provider sits
//! behind the [`CatalogSearch`] trait so tests substitute a stub and no
//! other module touches the transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::providers::{ProviderError, RecommendationProvider};
use crate::models::recommendation::RecommendationItem;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const COURSE_URL_PREFIX: &str = "https://www.coursera.org/learn/";

/// A single hit from a catalog search. Both fields are optional in the
/// upstream payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogHit {
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// Free-text course catalog search.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<CatalogHit>, ProviderError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    elements: Vec<CatalogHit>,
}

/// HTTP-backed catalog search against the Coursera courses API.
#[derive(Clone)]
pub struct CourseraClient {
    client: Client,
    base_url: String,
}

impl CourseraClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl CatalogSearch for CourseraClient {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<CatalogHit>, ProviderError> {
        let url = format!("{}/api/courses.v1", self.base_url);
        let limit = limit.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("q", "search"), ("query", query), ("limit", limit.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UnexpectedResponse(format!(
                "catalog search returned {status}"
            )));
        }

        let body: SearchResponse = response.json().await?;
        debug!(
            "Catalog search for '{query}' returned {} hits",
            body.elements.len()
        );
        Ok(body.elements)
    }
}

/// Course provider backed by a catalog search, limited to a fixed number of
/// hits per skill.
pub struct CourseraProvider {
    catalog: Arc<dyn CatalogSearch>,
    limit: u32,
}

impl CourseraProvider {
    pub fn new(catalog: Arc<dyn CatalogSearch>, limit: u32) -> Self {
        Self { catalog, limit }
    }
}

#[async_trait]
impl RecommendationProvider for CourseraProvider {
    fn name(&self) -> &str {
        "Coursera"
    }

    async fn fetch(&self, skill: &str) -> Result<Vec<RecommendationItem>, ProviderError> {
        let hits = self.catalog.search(skill, self.limit).await?;
        Ok(hits.into_iter().map(course_item).collect())
    }
}

fn course_item(hit: CatalogHit) -> RecommendationItem {
    RecommendationItem {
        platform: "Coursera".to_string(),
        title: hit.name.unwrap_or_else(|| "Course".to_string()),
        url: format!("{COURSE_URL_PREFIX}{}", hit.slug.unwrap_or_default()),
    }
}
