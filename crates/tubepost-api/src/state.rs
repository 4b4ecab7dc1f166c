//! Application state.

use std::sync::Arc;

use tubepost_ai::AiClient;
use tubepost_images::ImageClient;
use tubepost_seo::SeoClient;
use tubepost_youtube::YoutubeClient;

use crate::config::ApiConfig;

/// Shared application state.
///
/// Every provider client is constructed once at startup and shared by
/// reference; handlers never build clients of their own.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub youtube: Arc<YoutubeClient>,
    pub ai: Arc<AiClient>,
    pub seo: Arc<SeoClient>,
    pub images: Arc<ImageClient>,
}

impl AppState {
    /// Create application state from explicit clients.
    pub fn new(
        config: ApiConfig,
        youtube: YoutubeClient,
        ai: AiClient,
        seo: SeoClient,
        images: ImageClient,
    ) -> Self {
        Self {
            config,
            youtube: Arc::new(youtube),
            ai: Arc::new(ai),
            seo: Arc::new(seo),
            images: Arc::new(images),
        }
    }

    /// Create application state with every client configured from the
    /// environment.
    pub fn from_env(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::new(
            config,
            YoutubeClient::from_env()?,
            AiClient::from_env()?,
            SeoClient::from_env()?,
            ImageClient::from_env()?,
        ))
    }
}
