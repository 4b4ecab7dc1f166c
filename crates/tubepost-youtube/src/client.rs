//! YouTube HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use tubepost_models::{extract_video_id, VideoMetadata};

use crate::error::{YoutubeError, YoutubeResult};
use crate::transcript::flatten_transcript;

/// Configuration for the YouTube client.
#[derive(Debug, Clone)]
pub struct YoutubeConfig {
    /// Base URL of the Data API
    pub api_base: String,
    /// Data API key
    pub api_key: String,
    /// Base URL of the timedtext caption endpoint
    pub captions_base: String,
    /// Caption language requested when none is given
    pub default_lang: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_base: "https://www.googleapis.com/youtube/v3".to_string(),
            api_key: String::new(),
            captions_base: "https://video.google.com/timedtext".to_string(),
            default_lang: "en".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl YoutubeConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base: std::env::var("YOUTUBE_API_BASE").unwrap_or(defaults.api_base),
            api_key: std::env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            captions_base: std::env::var("YOUTUBE_CAPTIONS_BASE").unwrap_or(defaults.captions_base),
            default_lang: std::env::var("YOUTUBE_CAPTIONS_LANG").unwrap_or(defaults.default_lang),
            timeout: Duration::from_secs(
                std::env::var("YOUTUBE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Data API snippet response, reduced to the fields consumed downstream.
#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: VideoSnippet,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

/// Client for video metadata and captions.
pub struct YoutubeClient {
    http: Client,
    config: YoutubeConfig,
}

impl YoutubeClient {
    /// Create a new YouTube client.
    pub fn new(config: YoutubeConfig) -> YoutubeResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(YoutubeError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> YoutubeResult<Self> {
        Self::new(YoutubeConfig::from_env())
    }

    /// Resolve a raw URL into metadata plus transcript.
    ///
    /// The snippet and caption fetches run concurrently; both must succeed.
    pub async fn resolve(&self, url: &str) -> YoutubeResult<VideoMetadata> {
        let video_id = extract_video_id(url)?;

        let (snippet, transcript) = tokio::try_join!(
            self.fetch_snippet(&video_id),
            self.fetch_transcript(&video_id, None)
        )?;

        Ok(VideoMetadata {
            id: video_id,
            title: snippet.title,
            description: snippet.description,
            transcript,
        })
    }

    /// Fetch title and description for a video id.
    async fn fetch_snippet(&self, video_id: &str) -> YoutubeResult<VideoSnippet> {
        let url = format!("{}/videos", self.config.api_base);

        debug!(video_id, "Fetching video snippet");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("id", video_id),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(video_id, status, "Snippet request failed");
            return Err(YoutubeError::RequestFailed { status, body });
        }

        let list: VideoListResponse = response.json().await?;
        let item = list
            .items
            .into_iter()
            .next()
            .ok_or_else(|| YoutubeError::VideoNotFound(video_id.to_string()))?;

        Ok(item.snippet)
    }

    /// Fetch the caption transcript for a video id, flattened to one string.
    pub async fn fetch_transcript(
        &self,
        video_id: &str,
        lang: Option<&str>,
    ) -> YoutubeResult<String> {
        let lang = lang.unwrap_or(&self.config.default_lang);

        debug!(video_id, lang, "Fetching captions");

        let response = self
            .http
            .get(&self.config.captions_base)
            .query(&[("lang", lang), ("v", video_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(video_id, status, "Caption request failed");
            return Err(YoutubeError::RequestFailed { status, body });
        }

        let xml = response.text().await?;
        let transcript = flatten_transcript(&xml)?;

        if transcript.is_empty() {
            // The timedtext endpoint answers 200 with an empty body when the
            // video has no captions in the requested language.
            return Err(YoutubeError::CaptionsUnavailable(video_id.to_string()));
        }

        Ok(transcript)
    }
}
