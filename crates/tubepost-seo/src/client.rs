//! Keyword-metrics HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use tubepost_models::{Difficulty, MetricsOrigin, SeoAnalysis};

use crate::synthetic::{
    synthetic_analysis, synthetic_competition, synthetic_cpc, synthetic_difficulty,
    synthetic_score, synthetic_volume,
};

/// Configuration for the metrics client.
#[derive(Debug, Clone)]
pub struct SeoConfig {
    /// Metrics endpoint URL
    pub endpoint: String,
    /// RapidAPI key header value
    pub api_key: String,
    /// RapidAPI host header value
    pub api_host: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://seo-analysis.p.rapidapi.com/seo-content-analysis/".to_string(),
            api_key: String::new(),
            api_host: "seo-analysis.p.rapidapi.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl SeoConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: std::env::var("SEO_API_ENDPOINT").unwrap_or(defaults.endpoint),
            api_key: std::env::var("RAPIDAPI_KEY").unwrap_or_default(),
            api_host: std::env::var("SEO_API_HOST").unwrap_or(defaults.api_host),
            timeout: Duration::from_secs(
                std::env::var("SEO_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Provider response, every field optional: anything omitted is substituted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderMetrics {
    score: Option<u32>,
    difficulty: Option<String>,
    search_volume: Option<String>,
    cpc: Option<String>,
    competition: Option<String>,
    trends: Option<Vec<f64>>,
    related_keywords: Option<Vec<String>>,
}

/// Client for the keyword-metrics provider.
pub struct SeoClient {
    http: Client,
    config: SeoConfig,
}

impl SeoClient {
    /// Create a new metrics client.
    pub fn new(config: SeoConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(SeoConfig::from_env())
    }

    /// Analyze one representative keyword.
    ///
    /// Never fails: a provider failure yields a fully synthetic analysis,
    /// a partial provider response is filled in per field. The `origin` tag
    /// records which of the two happened.
    pub async fn analyze(&self, keyword: &str) -> SeoAnalysis {
        match self.fetch_metrics(keyword).await {
            Ok(provider) => {
                debug!(keyword, "Keyword metrics fetched");
                SeoAnalysis {
                    score: provider.score.unwrap_or_else(synthetic_score),
                    difficulty: provider
                        .difficulty
                        .as_deref()
                        .and_then(parse_difficulty)
                        .unwrap_or_else(synthetic_difficulty),
                    volume: provider.search_volume.unwrap_or_else(synthetic_volume),
                    cpc: provider.cpc.unwrap_or_else(synthetic_cpc),
                    competition: provider.competition.unwrap_or_else(synthetic_competition),
                    trends: provider.trends.unwrap_or_default(),
                    related_keywords: provider.related_keywords.unwrap_or_default(),
                    origin: MetricsOrigin::Measured,
                }
            }
            Err(e) => {
                warn!(keyword, error = %e, "Metrics provider unavailable, substituting synthetic values");
                synthetic_analysis()
            }
        }
    }

    async fn fetch_metrics(&self, keyword: &str) -> Result<ProviderMetrics, reqwest::Error> {
        let related = format!("{keyword}|SEO|Content");

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[("keyword", keyword), ("relatedkeywords", related.as_str())])
            .header("X-RapidAPI-Key", &self.config.api_key)
            .header("X-RapidAPI-Host", &self.config.api_host)
            .send()
            .await?
            .error_for_status()?;

        response.json().await
    }
}

fn parse_difficulty(label: &str) -> Option<Difficulty> {
    match label.to_ascii_lowercase().as_str() {
        "easy" => Some(Difficulty::Easy),
        "medium" => Some(Difficulty::Medium),
        "hard" => Some(Difficulty::Hard),
        _ => None,
    }
}
