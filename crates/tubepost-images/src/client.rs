//! Image provider HTTP client.

use std::time::Duration;

use futures::future::join_all;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use tubepost_models::ImageAsset;

/// Configuration for the image client.
#[derive(Debug, Clone)]
pub struct ImagesConfig {
    /// Base URL of the image-generation API
    pub openai_base: String,
    /// Image-generation API key
    pub openai_api_key: String,
    /// Diffusion model identifier
    pub image_model: String,
    /// Requested image size
    pub image_size: String,
    /// Base URL of the stock-photo API
    pub unsplash_base: String,
    /// Stock-photo access key
    pub unsplash_access_key: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            openai_base: "https://api.openai.com/v1".to_string(),
            openai_api_key: String::new(),
            image_model: "dall-e-3".to_string(),
            image_size: "1024x1024".to_string(),
            unsplash_base: "https://api.unsplash.com".to_string(),
            unsplash_access_key: String::new(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl ImagesConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            openai_base: std::env::var("OPENAI_API_BASE").unwrap_or(defaults.openai_base),
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            image_model: std::env::var("IMAGE_MODEL").unwrap_or(defaults.image_model),
            image_size: std::env::var("IMAGE_SIZE").unwrap_or(defaults.image_size),
            unsplash_base: std::env::var("UNSPLASH_API_BASE").unwrap_or(defaults.unsplash_base),
            unsplash_access_key: std::env::var("UNSPLASH_ACCESS_KEY").unwrap_or_default(),
            timeout: Duration::from_secs(
                std::env::var("IMAGES_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
        }
    }
}

/// Which providers to try before falling back to a placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStrategy {
    /// Generated image, then stock photo, then placeholder
    #[default]
    Generative,
    /// Stock photo, then placeholder
    StockOnly,
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("provider returned {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("no image URL in provider response")]
    MissingUrl,

    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StockPhotoResponse {
    urls: StockPhotoUrls,
}

#[derive(Debug, Deserialize)]
struct StockPhotoUrls {
    regular: String,
}

/// Client for generated and stock article images.
pub struct ImageClient {
    http: Client,
    config: ImagesConfig,
}

impl ImageClient {
    /// Create a new image client.
    pub fn new(config: ImagesConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(ImagesConfig::from_env())
    }

    /// Produce one asset per description, in input order.
    ///
    /// Descriptions resolve concurrently and independently; every failure
    /// cascades toward a placeholder, so the batch itself never fails.
    pub async fn provision(
        &self,
        descriptions: &[String],
        strategy: ImageStrategy,
    ) -> Vec<ImageAsset> {
        let tasks = descriptions
            .iter()
            .enumerate()
            .map(|(index, description)| self.resolve_one(description, index, strategy));

        join_all(tasks).await
    }

    async fn resolve_one(
        &self,
        description: &str,
        index: usize,
        strategy: ImageStrategy,
    ) -> ImageAsset {
        if strategy == ImageStrategy::Generative {
            match self.generate_image(description).await {
                Ok(url) => return ImageAsset::new(url, description),
                Err(e) => {
                    warn!(index, error = %e, "Image generation failed, trying stock photo");
                }
            }
        }

        match self.stock_photo(description).await {
            Ok(url) => ImageAsset::new(url, description),
            Err(e) => {
                warn!(index, error = %e, "Stock photo lookup failed, using placeholder");
                placeholder_asset(description, index)
            }
        }
    }

    async fn generate_image(&self, description: &str) -> Result<String, FetchError> {
        let url = format!("{}/images/generations", self.config.openai_base);

        debug!(model = %self.config.image_model, "Requesting generated image");

        let request = GenerationRequest {
            model: &self.config.image_model,
            prompt: description,
            n: 1,
            size: &self.config.image_size,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.openai_api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::RequestFailed { status, body });
        }

        let generated: GenerationResponse = response.json().await?;
        generated
            .data
            .into_iter()
            .next()
            .and_then(|img| img.url)
            .ok_or(FetchError::MissingUrl)
    }

    async fn stock_photo(&self, description: &str) -> Result<String, FetchError> {
        let url = format!("{}/photos/random", self.config.unsplash_base);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("query", description),
                ("client_id", self.config.unsplash_access_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::RequestFailed { status, body });
        }

        let photo: StockPhotoResponse = response.json().await?;
        Ok(photo.urls.regular)
    }
}

/// Local placeholder reference carrying the description and a 1-based
/// position marker.
fn placeholder_asset(description: &str, index: usize) -> ImageAsset {
    ImageAsset::new(
        format!(
            "/placeholder.svg?height=400&width=600&text={}&index={}",
            urlencoding::encode(description),
            index + 1
        ),
        description,
    )
}
