use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default — the service starts with no environment
/// at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub coursera_api_url: String,
    pub course_search_limit: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            coursera_api_url: std::env::var("COURSERA_API_URL")
                .unwrap_or_else(|_| "https://api.coursera.org".to_string()),
            course_search_limit: std::env::var("COURSE_SEARCH_LIMIT")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<u32>()
                .context("COURSE_SEARCH_LIMIT must be a positive integer")?,
        })
    }
}
